//! Error types shared by every analysis stage

use thiserror::Error;

/// Errors that can occur while turning audio into a vocal range report
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to decode audio: {0}")]
    Decode(String),

    #[error("Audio contains no samples")]
    EmptyAudio,

    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spectral analysis failed: {0}")]
    Spectral(String),

    #[error("Invalid pitch configuration: {0}")]
    InvalidConfig(String),

    #[error("Song catalog error: {0}")]
    Catalog(#[from] csv::Error),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Coarse error class, used by callers to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be turned into a waveform
    Decode,
    /// Anything else; details stay server-side
    Internal,
}

impl ErrorKind {
    /// HTTP-style status code for this class
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Decode => 400,
            ErrorKind::Internal => 500,
        }
    }
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Decode(_)
            | AnalysisError::EmptyAudio
            | AnalysisError::InvalidSampleRate(_)
            | AnalysisError::Io(_) => ErrorKind::Decode,
            AnalysisError::Spectral(_)
            | AnalysisError::InvalidConfig(_)
            | AnalysisError::Catalog(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AnalysisError::EmptyAudio.kind(), ErrorKind::Decode);
        assert_eq!(
            AnalysisError::Decode("bad header".to_string()).kind(),
            ErrorKind::Decode
        );
        assert_eq!(
            AnalysisError::Spectral("nan".to_string()).kind(),
            ErrorKind::Internal
        );
        assert_eq!(ErrorKind::Decode.status_code(), 400);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
    }
}
