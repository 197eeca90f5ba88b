//! The twenty day-signs (nahuales) of the Tzolk'in.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of day-signs in one Tzolk'in round.
pub const DAY_SIGN_COUNT: usize = 20;

/// A Tzolk'in day-sign.
///
/// Discriminants follow the canonical day order (Imix = 0 .. Ahau = 19); the
/// calendar arithmetic indexes into this order, so it must not be re-sorted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DaySign {
    Imix = 0,
    Ik,
    Akbal,
    Kan,
    Chicchan,
    Cimi,
    Manik,
    Lamat,
    Muluk,
    Oc,
    Chuen,
    Eb,
    Ben,
    Ix,
    Men,
    Cib,
    Caban,
    Etznab,
    Cauac,
    Ahau,
}

impl DaySign {
    /// All day-signs in canonical order.
    pub const ALL: [DaySign; DAY_SIGN_COUNT] = [
        DaySign::Imix,
        DaySign::Ik,
        DaySign::Akbal,
        DaySign::Kan,
        DaySign::Chicchan,
        DaySign::Cimi,
        DaySign::Manik,
        DaySign::Lamat,
        DaySign::Muluk,
        DaySign::Oc,
        DaySign::Chuen,
        DaySign::Eb,
        DaySign::Ben,
        DaySign::Ix,
        DaySign::Men,
        DaySign::Cib,
        DaySign::Caban,
        DaySign::Etznab,
        DaySign::Cauac,
        DaySign::Ahau,
    ];

    /// Zero-based position in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Day-sign reached after `offset` days from Imix, wrapping in both directions.
    pub fn from_cycle_offset(offset: i64) -> Self {
        Self::ALL[offset.rem_euclid(DAY_SIGN_COUNT as i64) as usize]
    }

    /// Canonical name, also used as the key in the descriptions resource.
    pub fn name(self) -> &'static str {
        match self {
            DaySign::Imix => "Imix",
            DaySign::Ik => "Ik",
            DaySign::Akbal => "Akbal",
            DaySign::Kan => "Kan",
            DaySign::Chicchan => "Chicchan",
            DaySign::Cimi => "Cimi",
            DaySign::Manik => "Manik",
            DaySign::Lamat => "Lamat",
            DaySign::Muluk => "Muluk",
            DaySign::Oc => "Oc",
            DaySign::Chuen => "Chuen",
            DaySign::Eb => "Eb",
            DaySign::Ben => "Ben",
            DaySign::Ix => "Ix",
            DaySign::Men => "Men",
            DaySign::Cib => "Cib",
            DaySign::Caban => "Caban",
            DaySign::Etznab => "Etznab",
            DaySign::Cauac => "Cauac",
            DaySign::Ahau => "Ahau",
        }
    }
}

impl fmt::Display for DaySign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DaySign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown day-sign: '{}'", s))
    }
}

impl Serialize for DaySign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DaySign {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(DaySign::ALL.len(), DAY_SIGN_COUNT);
        assert_eq!(DaySign::ALL[0], DaySign::Imix);
        assert_eq!(DaySign::ALL[19], DaySign::Ahau);
        for (i, sign) in DaySign::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(DaySign::from_index(i), Some(*sign));
        }
        assert_eq!(DaySign::from_index(20), None);
    }

    #[test]
    fn test_from_cycle_offset_wraps_negative_offsets() {
        assert_eq!(DaySign::from_cycle_offset(0), DaySign::Imix);
        assert_eq!(DaySign::from_cycle_offset(19), DaySign::Ahau);
        assert_eq!(DaySign::from_cycle_offset(20), DaySign::Imix);
        assert_eq!(DaySign::from_cycle_offset(-1), DaySign::Ahau);
        assert_eq!(DaySign::from_cycle_offset(-21), DaySign::Ahau);
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for sign in DaySign::ALL {
            assert_eq!(sign.name().parse::<DaySign>().unwrap(), sign);
        }
        assert_eq!("chicchan".parse::<DaySign>().unwrap(), DaySign::Chicchan);
        assert!("Kawak".parse::<DaySign>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&DaySign::Etznab).unwrap();
        assert_eq!(json, "\"Etznab\"");
        let back: DaySign = serde_json::from_str("\"Ahau\"").unwrap();
        assert_eq!(back, DaySign::Ahau);
        assert!(serde_json::from_str::<DaySign>("\"Nope\"").is_err());
    }
}
