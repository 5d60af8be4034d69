//! Clip-level pitch extraction
//!
//! Picks the strongest candidate of every frame and averages the voiced
//! frames. There is no outlier rejection, smoothing or octave correction, so
//! noisy recordings and octave jumps pull the mean.

use super::config::PitchConfig;
use super::spectrum::for_each_frame;
use super::traits::PitchTracker;
use crate::audio::Waveform;
use crate::error::{AnalysisError, Result};
use crate::model::PitchEstimate;

/// Spectral pitch extractor
pub struct PitchExtractor {
    config: PitchConfig,
}

impl PitchExtractor {
    pub fn new() -> Self {
        Self {
            config: PitchConfig::default(),
        }
    }

    /// Create an extractor with custom spectrogram parameters
    pub fn with_config(config: PitchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PitchConfig {
        &self.config
    }
}

impl Default for PitchExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchTracker for PitchExtractor {
    fn extract(&self, waveform: &Waveform) -> Result<PitchEstimate> {
        self.config.validate()?;
        if waveform.is_empty() {
            return Err(AnalysisError::EmptyAudio);
        }

        log::debug!(
            "Tracking pitch over {} samples ({:.2}s) at {}Hz",
            waveform.len(),
            waveform.duration_secs(),
            waveform.sample_rate()
        );

        let mut sum = 0.0f64;
        let mut voiced = 0usize;

        let frames = for_each_frame(
            waveform.samples(),
            waveform.sample_rate(),
            &self.config,
            |frame| {
                let candidate = frame.dominant_frequency();
                if candidate > 0.0 {
                    sum += candidate as f64;
                    voiced += 1;
                }
            },
        )?;

        if voiced == 0 {
            log::info!("No pitch detected in {} frames", frames);
            return Ok(PitchEstimate::Undefined);
        }

        let estimate = PitchEstimate::from_hz(sum / voiced as f64);
        log::debug!(
            "Voiced frames: {}/{}, mean pitch {:?}",
            voiced,
            frames,
            estimate.hz()
        );

        Ok(estimate)
    }
}
