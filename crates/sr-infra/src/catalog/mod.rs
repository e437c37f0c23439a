mod embedded;
mod json_file;

pub use embedded::EmbeddedCatalogSource;
pub use json_file::JsonFileCatalogSource;

use sr_core::ports::CatalogSourceError;
use sr_core::Book;

/// Parses a JSON array of book records.
pub(crate) fn parse_books(json: &str) -> Result<Vec<Book>, CatalogSourceError> {
    serde_json::from_str(json).map_err(|e| CatalogSourceError::Malformed(e.to_string()))
}
