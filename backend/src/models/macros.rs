/// Defines a range-checked newtype wrapper around an unsigned scalar holding a
/// 1-based position within a calendar cycle, and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)
/// - `Display`
/// - `From<$name> for $inner` (the reverse conversion is fallible, see `new`)
/// - `new` (returns `None` outside `1..=$max`), `value`, `MIN`, `MAX`
/// - `from_cycle_offset`, wrapping any signed offset onto the cycle
/// - `Deserialize`, rejecting out-of-range values
///
/// Usage:
///   define_cycle_position!(u8, Tone, 13);
#[macro_export]
macro_rules! define_cycle_position {
    ($inner:ty, $name:ident, $max:expr) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<$name> for $inner {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <$inner as serde::Deserialize>::deserialize(deserializer)?;
                $name::new(raw).ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(::std::format!(
                        "{} must be within 1..={}, got {}",
                        ::std::stringify!($name),
                        $max,
                        raw
                    ))
                })
            }
        }

        impl $name {
            pub const MIN: $name = $name(1);
            pub const MAX: $name = $name($max);

            pub fn new(value: $inner) -> Option<Self> {
                if (1..=$max).contains(&value) {
                    Some($name(value))
                } else {
                    None
                }
            }

            pub fn value(&self) -> $inner {
                self.0
            }

            /// Position reached after `offset` steps from the first one.
            ///
            /// Uses Euclidean remainder so negative offsets wrap backwards.
            pub fn from_cycle_offset(offset: i64) -> Self {
                let wrapped = offset.rem_euclid($max as i64);
                $name((wrapped + 1) as $inner)
            }

            /// Every position of the cycle in ascending order.
            pub fn all() -> impl Iterator<Item = $name> {
                (1..=$max).map($name)
            }
        }
    };
}
