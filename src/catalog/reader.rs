use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::record::Audiobook;

/// Errors raised while loading a catalog, before any organizing happens
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record whose author or title is empty cannot be placed anywhere
    #[error("Catalog record {index} has an empty {field}")]
    MissingField { index: usize, field: &'static str },
}

/// Read and parse a `books.json` export
pub fn load_catalog(path: &Path) -> Result<Vec<Audiobook>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let books: Vec<Audiobook> =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    check_required_fields(&books)?;

    debug!(path = %path.display(), records = books.len(), "loaded catalog");
    Ok(books)
}

/// Author and title become directory names, so both must be non-empty
fn check_required_fields(books: &[Audiobook]) -> Result<(), CatalogError> {
    for (index, book) in books.iter().enumerate() {
        if book.author.is_empty() {
            return Err(CatalogError::MissingField {
                index,
                field: "author",
            });
        }
        if book.title.is_empty() {
            return Err(CatalogError::MissingField {
                index,
                field: "title",
            });
        }
    }
    Ok(())
}
