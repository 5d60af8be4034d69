//! Main analysis pipeline orchestration

use super::config::AnalysisConfig;
use super::report::AnalysisReport;
use crate::analysis::PitchTracker;
use crate::audio::{self, Waveform};
use crate::error::Result;
use crate::model::{SongCatalog, VocalRange};
use std::path::Path;
use std::sync::Arc;

/// Turns a recorded clip into a vocal range and matching songs
///
/// Holds no mutable state; one pipeline can serve many clips, from several
/// threads when the tracker is `Sync`.
pub struct AnalysisPipeline<T: PitchTracker> {
    config: AnalysisConfig,
    tracker: T,
    catalog: Arc<SongCatalog>,
}

impl<T: PitchTracker> AnalysisPipeline<T> {
    /// Create a new analysis pipeline
    pub fn new(config: AnalysisConfig, tracker: T, catalog: Arc<SongCatalog>) -> Self {
        Self {
            config,
            tracker,
            catalog,
        }
    }

    pub fn catalog(&self) -> &SongCatalog {
        &self.catalog
    }

    /// Analyse an audio file on disk
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisReport> {
        log::info!("Analysing: {:?}", path);
        let waveform = audio::decode_file(path, &self.config.decode)?;
        self.analyze_waveform(&waveform)
    }

    /// Analyse uploaded audio bytes
    ///
    /// `extension` is the format hint from the upload's file name, if any.
    pub fn analyze_bytes(&self, bytes: Vec<u8>, extension: Option<&str>) -> Result<AnalysisReport> {
        let waveform = audio::decode_bytes(bytes, extension, &self.config.decode)?;
        self.analyze_waveform(&waveform)
    }

    /// Analyse an already decoded waveform
    pub fn analyze_waveform(&self, waveform: &Waveform) -> Result<AnalysisReport> {
        let avg_pitch = self.tracker.extract(waveform)?;
        let vocal_range = VocalRange::classify(avg_pitch);
        let songs = self.catalog.songs_for(vocal_range);

        log::info!(
            "Vocal range: {} (avg pitch {:.2} Hz), {} suggested songs",
            vocal_range,
            avg_pitch.display_hz(),
            songs.len()
        );

        Ok(AnalysisReport {
            vocal_range,
            avg_pitch,
            songs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::model::{PitchEstimate, Song};

    /// Tracker that reports the same estimate for every clip
    struct FixedTracker(PitchEstimate);

    impl PitchTracker for FixedTracker {
        fn extract(&self, _waveform: &Waveform) -> Result<PitchEstimate> {
            Ok(self.0)
        }
    }

    struct FailingTracker;

    impl PitchTracker for FailingTracker {
        fn extract(&self, _waveform: &Waveform) -> Result<PitchEstimate> {
            Err(AnalysisError::Spectral("fft exploded".to_string()))
        }
    }

    fn catalog() -> Arc<SongCatalog> {
        Arc::new(SongCatalog::new(vec![
            Song::new("Sixteen Tons", "Tennessee Ernie Ford", VocalRange::Bass),
            Song::new("Someone Like You", "Adele", VocalRange::Alto),
        ]))
    }

    fn waveform() -> Waveform {
        Waveform::new(vec![0.0; 1600], 16000).unwrap()
    }

    #[test]
    fn test_report_uses_catalog() {
        let pipeline = AnalysisPipeline::new(
            AnalysisConfig::new(),
            FixedTracker(PitchEstimate::from_hz(612.0)),
            catalog(),
        );

        let report = pipeline.analyze_waveform(&waveform()).unwrap();
        assert_eq!(report.vocal_range, VocalRange::Alto);
        assert_eq!(report.songs.len(), 1);
        assert_eq!(report.songs[0].artist, "Adele");
    }

    #[test]
    fn test_undefined_pitch_has_no_songs() {
        let pipeline = AnalysisPipeline::new(
            AnalysisConfig::new(),
            FixedTracker(PitchEstimate::Undefined),
            catalog(),
        );

        let report = pipeline.analyze_waveform(&waveform()).unwrap();
        assert_eq!(report.vocal_range, VocalRange::Unknown);
        assert!(report.songs.is_empty());
    }

    #[test]
    fn test_tracker_errors_propagate() {
        let pipeline = AnalysisPipeline::new(AnalysisConfig::new(), FailingTracker, catalog());

        let result = pipeline.analyze_waveform(&waveform());
        assert!(matches!(result, Err(AnalysisError::Spectral(_))));
    }

    #[test]
    fn test_undecodable_bytes_fail_before_tracking() {
        let pipeline = AnalysisPipeline::new(AnalysisConfig::new(), FailingTracker, catalog());

        let result = pipeline.analyze_bytes(b"not audio at all".to_vec(), Some("mp3"));
        assert!(matches!(result, Err(AnalysisError::Decode(_))));
    }
}
