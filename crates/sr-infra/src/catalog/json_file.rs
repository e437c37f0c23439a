use std::path::{Path, PathBuf};

use sr_core::ports::{CatalogSourceError, CatalogSourcePort};
use sr_core::Book;
use tracing::debug;

use super::parse_books;

/// Loads book records from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl CatalogSourcePort for JsonFileCatalogSource {
    async fn load_books(&self) -> Result<Vec<Book>, CatalogSourceError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogSourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let books = parse_books(&content)?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog file");
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_BOOKS: &str = r#"[
        {"id": 1, "title": "A", "author": "X", "year": 2001, "publisher": "P",
         "image_url": "", "rating": 3.5, "genre": "Fiction", "description": ""},
        {"id": 2, "title": "B", "author": "Y", "year": -50, "publisher": "Q",
         "image_url": "", "rating": 4.5, "genre": "Drama", "description": ""}
    ]"#;

    #[tokio::test]
    async fn reads_books_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TWO_BOOKS.as_bytes()).unwrap();

        let books = JsonFileCatalogSource::new(file.path())
            .load_books()
            .await
            .unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[1].year, -50);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileCatalogSource::new(dir.path().join("absent.json"))
            .load_books()
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogSourceError::Unavailable(_)));
        assert!(err.to_string().contains("absent.json"));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = JsonFileCatalogSource::new(file.path())
            .load_books()
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogSourceError::Malformed(_)));
    }
}
