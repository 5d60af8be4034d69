//! Song catalog loading
//!
//! Reads the `title,artist,range` CSV file that backs song suggestions and
//! turns it into an immutable [`SongCatalog`].

mod model;
mod reader;

pub use reader::parse_catalog;

use crate::error::Result;
use crate::model::SongCatalog;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a song catalog from a CSV file
///
/// # Arguments
/// * `path` - Path to the catalog, with a `title,artist,range` header row
pub fn load_catalog(path: &Path) -> Result<SongCatalog> {
    log::info!("Loading song catalog from {:?}", path);
    let file = File::open(path)?;
    let catalog = parse_catalog(BufReader::new(file))?;

    log::info!("Loaded catalog: {} songs", catalog.song_count());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::model::VocalRange;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("songs.csv");
        fs::write(&path, "title,artist,range\nHello,Adele,Alto\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.song_count(), 1);
        assert_eq!(catalog.songs_for(VocalRange::Alto)[0].artist, "Adele");
    }

    #[test]
    fn test_missing_catalog_file() {
        let result = load_catalog(Path::new("/nonexistent/songs.csv"));
        assert!(matches!(result, Err(AnalysisError::Io(_))));
    }
}
