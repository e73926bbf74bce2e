// Catalog construction errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate snippet id: {0}")]
    DuplicateId(String),

    #[error("snippet id must not be empty")]
    EmptyId,

    #[error("snippet id contains control characters: {0:?}")]
    ControlCharacters(String),
}
