//! Pitch tracker trait

use crate::audio::Waveform;
use crate::error::Result;
use crate::model::PitchEstimate;

/// Pitch tracker trait - lets the pipeline run with any estimator
pub trait PitchTracker {
    /// Estimate the dominant fundamental frequency of a whole clip
    fn extract(&self, waveform: &Waveform) -> Result<PitchEstimate>;
}
