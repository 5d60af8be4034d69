//! Analysis orchestration: decode, track pitch, classify, suggest songs

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::AnalysisConfig;
pub use pipeline::AnalysisPipeline;
pub use report::{AnalysisReport, ErrorReport};
