//! Service layer: calendar arithmetic and interpretation composition.
//!
//! This module contains the business logic that sits between the HTTP layer
//! and the static data. Nothing here keeps mutable state between requests.

pub mod descriptions;
pub mod fallback;
pub mod generator;
pub mod interpretation;
pub mod kin_calculator;
pub mod prompt;
pub mod reading;


pub use descriptions::{DescriptionTable, DESCRIPTION_NOT_FOUND};
pub use generator::{build_generator, GeneratorError, InterpretationGenerator};
pub use interpretation::{Interpretation, InterpretationComposer, InterpretationSource};
pub use kin_calculator::compute;
pub use reading::{KinReading, ReadingService};
