//! Pitch analysis layer
//!
//! Pitch extraction sits behind the [`PitchTracker`] trait so the pipeline
//! can be driven by the spectral [`PitchExtractor`] or by a fixed tracker in
//! tests.

mod config;
mod extractor;
mod spectrum;
mod traits;

pub use config::PitchConfig;
pub use extractor::PitchExtractor;
pub use traits::PitchTracker;
