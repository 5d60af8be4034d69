//! Vocal Range - estimate a singer's range from a short clip
//!
//! This library decodes a recorded clip, tracks its dominant pitch,
//! classifies the average into a coarse vocal range and suggests songs from
//! a catalog that suit that range.

pub mod analysis;
pub mod audio;
pub mod catalog;
pub mod error;
pub mod model;
pub mod recommend;

pub use error::{AnalysisError, ErrorKind, Result};
pub use recommend::config::AnalysisConfig;
pub use recommend::pipeline::AnalysisPipeline;
