//! CSV catalog parser

use super::model::CatalogRow;
use crate::error::Result;
use crate::model::{Song, SongCatalog, VocalRange};
use csv::{ReaderBuilder, Trim};
use std::io::Read;

/// Parse catalog CSV data into a [`SongCatalog`]
///
/// Ranges are matched case-insensitively. Rows whose range is not one of
/// Bass, Tenor, Alto or Soprano are skipped, so `Unknown` never has songs.
pub fn parse_catalog<R: Read>(reader: R) -> Result<SongCatalog> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut songs = Vec::new();

    for (i, result) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = result?;
        // Header is line 1
        let line = i + 2;

        let range = match row.range.parse::<VocalRange>() {
            Ok(VocalRange::Unknown) | Err(_) => {
                log::warn!(
                    "Skipping catalog line {} ({} - {}): unusable range {:?}",
                    line,
                    row.artist,
                    row.title,
                    row.range
                );
                continue;
            }
            Ok(range) => range,
        };

        songs.push(Song {
            title: row.title,
            artist: row.artist,
            range,
        });
    }

    Ok(SongCatalog::new(songs))
}
