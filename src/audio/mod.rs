//! Audio input layer
//!
//! Turns uploaded bytes or files into a mono waveform using symphonia.

mod decode;
mod waveform;

pub use decode::{decode_bytes, decode_file, DecodeOptions};
pub use waveform::Waveform;
