//! Pitch-tracking spectrogram
//!
//! Each frame is Hann-windowed and transformed with a real FFT. Local maxima
//! of the magnitude spectrum inside the configured band become pitch
//! candidates, refined by parabolic interpolation between neighbouring bins.
//! Frames are centred on multiples of the hop length, with zero padding of
//! half a frame on both ends of the clip.

use super::config::PitchConfig;
use crate::error::{AnalysisError, Result};
use realfft::RealFftPlanner;

/// Candidate frequencies and magnitudes of one frame, indexed by FFT bin
///
/// Bins that are not candidates hold zero in both arrays.
#[derive(Debug, Clone)]
pub(crate) struct FrameSpectrum {
    pub frequencies: Vec<f32>,
    pub magnitudes: Vec<f32>,
}

impl FrameSpectrum {
    fn new(bins: usize) -> Self {
        Self {
            frequencies: vec![0.0; bins],
            magnitudes: vec![0.0; bins],
        }
    }

    /// Frequency of the candidate with the largest magnitude
    ///
    /// Ties go to the lowest bin. Returns 0.0 when the frame has no
    /// candidate at all.
    pub fn dominant_frequency(&self) -> f32 {
        let mut best = 0;
        for (k, &magnitude) in self.magnitudes.iter().enumerate() {
            if magnitude > self.magnitudes[best] {
                best = k;
            }
        }
        self.frequencies[best]
    }

    /// Refill from a magnitude spectrum
    fn track_peaks(&mut self, spectrum: &[f32], bin_hz: f32, config: &PitchConfig) {
        self.frequencies.fill(0.0);
        self.magnitudes.fill(0.0);

        let frame_peak = spectrum.iter().copied().fold(0.0f32, f32::max);
        let floor = config.threshold * frame_peak;

        for k in 1..spectrum.len().saturating_sub(1) {
            let freq = k as f32 * bin_hz;
            if freq < config.fmin || freq >= config.fmax {
                continue;
            }

            let (left, centre, right) = (spectrum[k - 1], spectrum[k], spectrum[k + 1]);
            if !(centre > left && centre >= right && centre > floor) {
                continue;
            }

            // Strictly positive for a local maximum
            let curvature = 2.0 * centre - left - right;
            let slope = 0.5 * (right - left);
            let shift = slope / curvature;

            self.frequencies[k] = (k as f32 + shift) * bin_hz;
            self.magnitudes[k] = centre + 0.5 * slope * shift;
        }
    }
}

/// Periodic Hann window
fn hann_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| 0.5 - 0.5 * (2.0 * std::f32::consts::PI * i as f32 / size as f32).cos())
        .collect()
}

/// Number of centred frames for a clip of `num_samples`
pub(crate) fn frame_count(num_samples: usize, hop_length: usize) -> usize {
    1 + num_samples / hop_length
}

/// Run the pitch-tracking spectrogram over `samples`, calling `on_frame`
/// with each frame's spectrum in time order
///
/// Scratch buffers are allocated once per call and reused for every frame.
/// Returns the number of frames analysed.
pub(crate) fn for_each_frame<F>(
    samples: &[f32],
    sample_rate: u32,
    config: &PitchConfig,
    mut on_frame: F,
) -> Result<usize>
where
    F: FnMut(&FrameSpectrum),
{
    let n = config.frame_length;
    let half = n / 2;
    let bins = half + 1;
    let bin_hz = sample_rate as f32 / n as f32;
    let num_frames = frame_count(samples.len(), config.hop_length);

    let mut planner = RealFftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n);
    let window = hann_window(n);

    let mut input = fft.make_input_vec();
    let mut output = fft.make_output_vec();
    let mut magnitudes = vec![0.0f32; bins];
    let mut frame = FrameSpectrum::new(bins);

    for t in 0..num_frames {
        let start = t * config.hop_length;

        for (i, (slot, &w)) in input.iter_mut().zip(window.iter()).enumerate() {
            let sample = (start + i)
                .checked_sub(half)
                .and_then(|idx| samples.get(idx))
                .copied()
                .unwrap_or(0.0);
            *slot = sample * w;
        }

        fft.process(&mut input, &mut output)
            .map_err(|e| AnalysisError::Spectral(e.to_string()))?;

        for (magnitude, c) in magnitudes.iter_mut().zip(output.iter()) {
            *magnitude = c.norm();
        }

        if magnitudes.iter().any(|m| !m.is_finite()) {
            return Err(AnalysisError::Spectral(format!(
                "non-finite magnitude in frame {} (starting at sample {})",
                t,
                start.saturating_sub(half)
            )));
        }

        frame.track_peaks(&magnitudes, bin_hz, config);
        on_frame(&frame);
    }

    Ok(num_frames)
}
