//! Pitch tracking configuration

use crate::error::{AnalysisError, Result};

/// Parameters of the pitch-tracking spectrogram
#[derive(Debug, Clone)]
pub struct PitchConfig {
    /// Samples per analysis frame (FFT size)
    pub frame_length: usize,

    /// Samples between the starts of consecutive frames
    pub hop_length: usize,

    /// Lowest candidate frequency in Hz (inclusive)
    pub fmin: f32,

    /// Highest candidate frequency in Hz (exclusive)
    pub fmax: f32,

    /// Peaks below `threshold * frame maximum` are ignored
    pub threshold: f32,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            frame_length: 2048,
            hop_length: 512,
            fmin: 50.0,
            fmax: 4000.0,
            threshold: 0.1,
        }
    }
}

impl PitchConfig {
    /// Set frame and hop lengths
    pub fn with_frames(mut self, frame_length: usize, hop_length: usize) -> Self {
        self.frame_length = frame_length;
        self.hop_length = hop_length;
        self
    }

    /// Set the candidate frequency band
    pub fn with_frequency_range(mut self, fmin: f32, fmax: f32) -> Self {
        self.fmin = fmin;
        self.fmax = fmax;
        self
    }

    /// Set the relative peak threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_length < 4 || self.frame_length % 2 != 0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "frame length must be even and at least 4, got {}",
                self.frame_length
            )));
        }
        if self.hop_length == 0 {
            return Err(AnalysisError::InvalidConfig(
                "hop length must be positive".to_string(),
            ));
        }
        if !(self.fmin >= 0.0 && self.fmin < self.fmax) {
            return Err(AnalysisError::InvalidConfig(format!(
                "frequency range {}-{} Hz is empty",
                self.fmin, self.fmax
            )));
        }
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(AnalysisError::InvalidConfig(format!(
                "threshold must be in [0, 1), got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
