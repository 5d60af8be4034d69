use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vocal_range::analysis::{PitchConfig, PitchExtractor};
use vocal_range::recommend::{AnalysisReport, ErrorReport};
use vocal_range::{AnalysisConfig, AnalysisPipeline};

#[derive(Parser, Debug)]
#[command(name = "vocal-range")]
#[command(about = "Estimate vocal range from recorded clips and suggest songs", long_about = None)]
struct Args {
    /// Audio clips to analyse (wav, mp3, flac, ogg, aac)
    #[arg(required = true)]
    audio: Vec<PathBuf>,

    /// Path to the song catalog CSV (title,artist,range)
    #[arg(short = 'c', long, default_value = "songs.csv")]
    catalog: String,

    /// Print JSON reports instead of a summary
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Samples per analysis frame
    #[arg(long, default_value = "2048")]
    frame_length: usize,

    /// Samples between frames
    #[arg(long, default_value = "512")]
    hop_length: usize,

    /// Lowest pitch candidate in Hz
    #[arg(long, default_value = "50")]
    fmin: f32,

    /// Highest pitch candidate in Hz
    #[arg(long, default_value = "4000")]
    fmax: f32,

    /// Relative peak threshold (0-1)
    #[arg(long, default_value = "0.1")]
    threshold: f32,

    /// Only analyse the first N seconds of each clip
    #[arg(long, default_value = "120")]
    max_duration: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let pitch_config = PitchConfig::default()
        .with_frames(args.frame_length, args.hop_length)
        .with_frequency_range(args.fmin, args.fmax)
        .with_threshold(args.threshold);
    pitch_config
        .validate()
        .context("Invalid pitch tracking options")?;

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);
    let catalog = vocal_range::catalog::load_catalog(Path::new(&*catalog_path))
        .with_context(|| format!("Failed to load song catalog: {}", args.catalog))?;

    let config = AnalysisConfig::new().with_max_duration(args.max_duration);
    let pipeline = AnalysisPipeline::new(
        config,
        PitchExtractor::with_config(pitch_config),
        Arc::new(catalog),
    );

    log::info!("Analysing {} clip(s)", args.audio.len());

    // Each clip gets its own waveform; results come back in argument order
    let results: Vec<_> = args
        .audio
        .par_iter()
        .map(|path| (path, pipeline.analyze_file(path)))
        .collect();

    let mut failures = 0;
    for (path, result) in &results {
        match result {
            Ok(report) => print_report(path, report, args.json)?,
            Err(e) => {
                failures += 1;
                log::warn!("Analysis failed for {:?}: {}", path, e);
                let body = ErrorReport::from_error(e);
                if args.json {
                    println!("{}", body.to_json()?);
                } else {
                    println!("{}: error: {}", path.display(), body.error);
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} clip(s) could not be analysed", failures, results.len());
    }

    Ok(())
}

fn print_report(path: &Path, report: &AnalysisReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "{}: {} (average pitch {:.2} Hz)",
        path.display(),
        report.vocal_range,
        report.avg_pitch.display_hz()
    );
    if report.songs.is_empty() {
        println!("  no song suggestions");
    }
    for song in &report.songs {
        println!("  - {} by {}", song.title, song.artist);
    }
    Ok(())
}
