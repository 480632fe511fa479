use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Record not found")]
    RecordNotFound,

    #[error("Response could not be mapped")]
    MappingError,

    #[error("Storage error: {0}")]
    Storage(String),
}
