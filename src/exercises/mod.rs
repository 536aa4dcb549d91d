//! Exercise records and the built-in catalog.

pub mod catalog;
pub mod types;

pub use types::{Difficulty, Exercise, MuscleGroup};
