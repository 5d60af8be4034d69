//! Data model for pitch estimates, vocal ranges and the song catalog
//!
//! These types are independent of how audio is decoded and how reports are
//! rendered.

mod catalog;
mod pitch;
mod range;
mod song;

pub use catalog::SongCatalog;
pub use pitch::PitchEstimate;
pub use range::{classify, VocalRange, ALTO_MAX_HZ, BASS_MAX_HZ, TENOR_MAX_HZ};
pub use song::Song;
