use thiserror::Error;

use crate::provider::revocation::error::RevocationError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: `{0}`")]
    ValidationError(String),

    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error("Revocation error: `{0}`")]
    Revocation(#[from] RevocationError),

    #[error("Data layer error: `{0}`")]
    Repository(#[from] DataLayerError),

    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
