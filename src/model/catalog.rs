use super::{Song, VocalRange};

/// Read-only collection of songs, looked up by vocal range
///
/// Built once and shared; nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct SongCatalog {
    songs: Vec<Song>,
}

impl SongCatalog {
    /// Create a catalog from an ordered list of songs
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// All songs suited to `range`, in catalog order
    pub fn songs_for(&self, range: VocalRange) -> Vec<Song> {
        self.songs
            .iter()
            .filter(|song| song.range == range)
            .cloned()
            .collect()
    }

    /// Get all songs
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Total number of songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> SongCatalog {
        SongCatalog::new(vec![
            Song::new("Ol' Man River", "Paul Robeson", VocalRange::Bass),
            Song::new("Nessun Dorma", "Luciano Pavarotti", VocalRange::Tenor),
            Song::new("Sixteen Tons", "Tennessee Ernie Ford", VocalRange::Bass),
            Song::new("Ave Maria", "Maria Callas", VocalRange::Soprano),
        ])
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = SongCatalog::empty();
        assert_eq!(catalog.song_count(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_songs_for_keeps_order() {
        let catalog = test_catalog();
        let bass = catalog.songs_for(VocalRange::Bass);

        assert_eq!(bass.len(), 2);
        assert_eq!(bass[0].title, "Ol' Man River");
        assert_eq!(bass[1].title, "Sixteen Tons");
    }

    #[test]
    fn test_unmatched_range_is_empty() {
        let catalog = test_catalog();
        assert!(catalog.songs_for(VocalRange::Alto).is_empty());
        assert!(catalog.songs_for(VocalRange::Unknown).is_empty());
    }
}
