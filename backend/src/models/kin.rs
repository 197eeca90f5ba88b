//! Tzolk'in positions: tones, kin numbers and the reference epoch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_sign::DaySign;
use crate::define_cycle_position;

/// Number of galactic tones.
pub const TONE_COUNT: u8 = 13;

/// Length of one Tzolk'in round in days (13 tones x 20 day-signs).
pub const TZOLKIN_LENGTH: u16 = 260;

define_cycle_position!(u8, Tone, 13);
define_cycle_position!(u16, KinNumber, 260);

/// A day whose Tzolk'in position is known, used as the zero point for the
/// modular arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEpoch {
    /// Gregorian date expressed as days from the common era (0001-01-01 is day 1).
    pub days_from_ce: i32,
    pub tone: i64,
    pub sign_index: i64,
    pub kin_number: i64,
}

/// 2000-01-01, counted as 11 Ahau closing the round at kin 260.
pub const REFERENCE_EPOCH: ReferenceEpoch = ReferenceEpoch {
    days_from_ce: 730_120,
    tone: 11,
    sign_index: 19,
    kin_number: 260,
};

impl ReferenceEpoch {
    /// Calendar date of the epoch.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.days_from_ce)
    }
}

/// Position of a Gregorian date within the Tzolk'in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinResult {
    pub kin_number: KinNumber,
    pub day_sign: DaySign,
    pub tone: Tone,
    pub gregorian_date: NaiveDate,
}
