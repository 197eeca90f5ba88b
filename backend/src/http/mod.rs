//! HTTP server module for the Tzolk'in backend.
//!
//! This module provides an axum-based HTTP server that exposes kin readings
//! as a REST API. It reuses the service layer and models from the core
//! library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Birth date parsing and validation                      │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, panic and error handling            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Kin calculator                                         │
//! │  - Interpretation composer (generator + fallback)         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  External collaborators                                   │
//! │  - Descriptions JSON resource                             │
//! │  - Generative-text backend                                │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
