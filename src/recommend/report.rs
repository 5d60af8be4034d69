//! Serializable analysis results

use crate::error::{AnalysisError, ErrorKind};
use crate::model::{PitchEstimate, Song, VocalRange};
use serde::Serialize;

/// Result of analysing one clip
///
/// Serializes as `{"vocal_range": ..., "avg_pitch": ..., "songs": [...]}`.
/// `avg_pitch` is rounded to 2 decimals and is `0.0` when no pitch was found.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub vocal_range: VocalRange,
    pub avg_pitch: PitchEstimate,
    pub songs: Vec<Song>,
}

impl AnalysisReport {
    /// JSON body for this report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Failure body, `{"error": message}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    /// Build the user-facing error for a failed analysis
    ///
    /// Decode failures carry their reason. Internal failures are logged in
    /// full and reported with a generic message.
    pub fn from_error(err: &AnalysisError) -> Self {
        let error = match err.kind() {
            ErrorKind::Decode => err.to_string(),
            ErrorKind::Internal => {
                log::error!("Internal analysis failure: {:?}", err);
                "Internal error while analysing audio".to_string()
            }
        };
        Self { error }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
