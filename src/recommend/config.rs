//! Analysis configuration

use crate::audio::DecodeOptions;

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Limits applied when decoding uploaded audio
    pub decode: DecodeOptions,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only analyse the first `secs` seconds of each clip
    pub fn with_max_duration(mut self, secs: u32) -> Self {
        self.decode = self.decode.with_max_duration(secs);
        self
    }
}
