//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DaySign, KinNumber, Tone};
use crate::services::KinReading;

/// Birth date supplied as a query parameter (`?birth_date=YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthDateQuery {
    /// ISO 8601 calendar date
    pub birth_date: NaiveDate,
}

/// Birth date supplied as a JSON request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthDateRequest {
    /// ISO 8601 calendar date
    pub birth_date: NaiveDate,
}

/// Kin reading response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinResponse {
    /// Position within the 260-day Tzolk'in (1-260)
    pub kin_number: KinNumber,
    /// Day-sign (nahual)
    pub day_sign: DaySign,
    /// Galactic tone (1-13)
    pub tone: Tone,
    pub day_sign_description: String,
    pub tone_description: String,
    /// Personalized interpretation (generated or fallback)
    pub ai_interpretation: String,
    /// Echo of the requested date
    pub gregorian_date: NaiveDate,
}

impl From<KinReading> for KinResponse {
    fn from(reading: KinReading) -> Self {
        Self {
            kin_number: reading.kin.kin_number,
            day_sign: reading.kin.day_sign,
            tone: reading.kin.tone,
            day_sign_description: reading.day_sign_description,
            tone_description: reading.tone_description,
            ai_interpretation: reading.interpretation.text,
            gregorian_date: reading.kin.gregorian_date,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Interpretation generator status ("enabled" or "disabled")
    pub generator: String,
}

/// Root endpoint greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}
