//! # Tzolk'in Rust Backend
//!
//! Maya Tzolk'in reading service.
//!
//! This crate maps a Gregorian birth date onto the 260-day Tzolk'in cycle
//! (kin number, day-sign and galactic tone), attaches descriptions of the
//! day-sign and tone, and produces a personalized interpretation. The
//! interpretation is requested from an external text-generation backend and
//! composed locally from fixed tables whenever that backend is unavailable.
//!
//! ## Architecture
//!
//! - [`models`]: day-signs, tones, kin numbers and the reference epoch
//! - [`services`]: kin calculator, descriptions, interpretation composer
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tzolkin_rust::services::kin_calculator::compute;
//!
//! let kin = compute(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
//! assert_eq!(kin.kin_number.value(), 259);
//! ```

pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
