use super::VocalRange;
use serde::{Deserialize, Serialize};

/// A song that can be recommended for a vocal range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Range the song suits
    pub range: VocalRange,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, range: VocalRange) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            range,
        }
    }
}
