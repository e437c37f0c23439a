use thiserror::Error;

use crate::book::BookId;

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("dataset unavailable: {0}")]
    Unavailable(String),

    #[error("dataset malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("reference book {0} is not among the candidates")]
    ReferenceMissing(BookId),

    #[error("selection failed: {0}")]
    Failed(String),
}
