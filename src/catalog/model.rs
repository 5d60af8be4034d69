//! Raw catalog row as it appears in the CSV file

use serde::Deserialize;

/// One CSV record; extra columns are ignored
#[derive(Debug, Deserialize)]
pub(super) struct CatalogRow {
    pub title: String,
    pub artist: String,
    pub range: String,
}
