//! Gregorian date to Tzolk'in position.
//!
//! Every projection is taken from the same signed day count relative to
//! [`REFERENCE_EPOCH`], so tone, day-sign and kin number always agree.

use chrono::{Datelike, NaiveDate};

use crate::models::{DaySign, KinNumber, KinResult, Tone, REFERENCE_EPOCH};

/// Signed number of days from the reference epoch to `date`.
pub fn days_from_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(REFERENCE_EPOCH.days_from_ce)
}

pub fn tone_for_delta(delta_days: i64) -> Tone {
    Tone::from_cycle_offset(delta_days + REFERENCE_EPOCH.tone - 1)
}

pub fn day_sign_for_delta(delta_days: i64) -> DaySign {
    DaySign::from_cycle_offset(delta_days + REFERENCE_EPOCH.sign_index)
}

pub fn kin_for_delta(delta_days: i64) -> KinNumber {
    KinNumber::from_cycle_offset(delta_days + REFERENCE_EPOCH.kin_number - 1)
}

/// Compute the Tzolk'in position of a birth date.
///
/// Accepts any date chrono can represent; dates before the epoch wrap
/// backwards through the cycle.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tzolkin_rust::models::DaySign;
/// use tzolkin_rust::services::kin_calculator::compute;
///
/// let result = compute(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
/// assert_eq!(result.kin_number.value(), 260);
/// assert_eq!(result.tone.value(), 11);
/// assert_eq!(result.day_sign, DaySign::Ahau);
/// ```
pub fn compute(birth_date: NaiveDate) -> KinResult {
    let delta_days = days_from_epoch(birth_date);

    KinResult {
        kin_number: kin_for_delta(delta_days),
        day_sign: day_sign_for_delta(delta_days),
        tone: tone_for_delta(delta_days),
        gregorian_date: birth_date,
    }
}

/// Tone and day-sign implied by a kin number alone.
///
/// The 260-day round is the product of the 13 tones and 20 day-signs, so the
/// kin number determines both.
pub fn signature_of_kin(kin: KinNumber) -> (Tone, DaySign) {
    let delta_days = i64::from(kin.value()) - REFERENCE_EPOCH.kin_number;
    (tone_for_delta(delta_days), day_sign_for_delta(delta_days))
}
