//! Decoding of compressed/container audio into a mono waveform
//!
//! Any format symphonia's default registry understands is accepted. Channels
//! are averaged to mono and the native sample rate is kept.

use super::Waveform;
use crate::error::{AnalysisError, Result};
use std::io::Cursor;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoding limits
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Stop decoding after this many seconds of audio
    pub max_duration_secs: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_duration_secs: 120,
        }
    }
}

impl DecodeOptions {
    pub fn with_max_duration(mut self, secs: u32) -> Self {
        self.max_duration_secs = secs;
        self
    }
}

/// Decode an audio file to a mono waveform
pub fn decode_file(path: &Path, options: &DecodeOptions) -> Result<Waveform> {
    log::debug!("Decoding audio file: {:?}", path);

    let file = std::fs::File::open(path)?;

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    decode_source(Box::new(file), hint, options)
}

/// Decode in-memory audio bytes to a mono waveform
///
/// `extension` is an optional format hint such as `"wav"` or `"mp3"`, usually
/// taken from the uploaded file name.
pub fn decode_bytes(
    bytes: Vec<u8>,
    extension: Option<&str>,
    options: &DecodeOptions,
) -> Result<Waveform> {
    if bytes.is_empty() {
        return Err(AnalysisError::EmptyAudio);
    }
    log::debug!("Decoding {} bytes of uploaded audio", bytes.len());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    decode_source(Box::new(Cursor::new(bytes)), hint, options)
}

fn decode_source(
    source: Box<dyn MediaSource>,
    hint: Hint,
    options: &DecodeOptions,
) -> Result<Waveform> {
    let mss = MediaSourceStream::new(source, Default::default());

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| AnalysisError::Decode(format!("unrecognized audio format: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::Decode("no audio track found".to_string()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::Decode("no sample rate in audio track".to_string()))?;

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|e| AnalysisError::Decode(format!("unsupported codec: {}", e)))?;

    let mut all_samples: Vec<f32> = Vec::new();
    let max_samples = sample_rate as usize * options.max_duration_secs as usize;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                log::warn!("Error reading packet: {:?}", e);
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Error decoding packet: {:?}", e);
                continue;
            }
        };

        let spec = *decoded.spec();
        let duration = decoded.capacity() as u64;

        let mut sample_buf = SampleBuffer::<f32>::new(duration, spec);
        sample_buf.copy_interleaved_ref(decoded);

        let samples = sample_buf.samples();

        // Average channels down to mono
        let channels = spec.channels.count();
        if channels > 1 {
            for chunk in samples.chunks(channels) {
                let mono: f32 = chunk.iter().sum::<f32>() / channels as f32;
                all_samples.push(mono);
            }
        } else {
            all_samples.extend_from_slice(samples);
        }

        if all_samples.len() >= max_samples {
            all_samples.truncate(max_samples);
            log::debug!(
                "Reached decode limit of {}s, ignoring the rest",
                options.max_duration_secs
            );
            break;
        }
    }

    if all_samples.is_empty() {
        return Err(AnalysisError::EmptyAudio);
    }

    log::debug!(
        "Decoded {} samples ({:.1}s) at {}Hz",
        all_samples.len(),
        all_samples.len() as f32 / sample_rate as f32,
        sample_rate
    );

    Waveform::new(all_samples, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use hound::{SampleFormat, WavSpec, WavWriter};

    fn stereo_wav_bytes(frames: usize, sample_rate: u32) -> Vec<u8> {
        let spec = WavSpec {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for _ in 0..frames {
                // Opposite channels cancel out when averaged
                writer.write_sample(8000i16).unwrap();
                writer.write_sample(-8000i16).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_decode_requires_file() {
        let result = decode_file(
            Path::new("/nonexistent/clip.wav"),
            &DecodeOptions::default(),
        );
        assert!(matches!(result, Err(AnalysisError::Io(_))));
    }

    #[test]
    fn test_decode_wav_bytes_downmixes_to_mono() {
        let bytes = stereo_wav_bytes(4000, 8000);
        let waveform = decode_bytes(bytes, Some("wav"), &DecodeOptions::default()).unwrap();

        assert_eq!(waveform.sample_rate(), 8000);
        assert_eq!(waveform.len(), 4000);
        assert!(waveform.samples().iter().all(|s| s.abs() < 1e-6));
    }

    #[test]
    fn test_decode_respects_max_duration() {
        let bytes = stereo_wav_bytes(8000 * 3, 8000);
        let options = DecodeOptions::default().with_max_duration(1);
        let waveform = decode_bytes(bytes, Some("wav"), &options).unwrap();

        assert_eq!(waveform.len(), 8000);
    }

    #[test]
    fn test_garbage_bytes_are_decode_errors() {
        let result = decode_bytes(
            b"definitely not audio".to_vec(),
            None,
            &DecodeOptions::default(),
        );
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_empty_bytes_rejected() {
        let result = decode_bytes(Vec::new(), Some("wav"), &DecodeOptions::default());
        assert!(matches!(result, Err(AnalysisError::EmptyAudio)));
    }
}
