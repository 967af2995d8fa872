use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

/// Client caused failures while validating an ingested event.
/// None of these ever reach the session store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("Invalid JSON: {0}")]
    MalformedPayload(String),

    #[error("window_id and event_title are required")]
    MissingField,

    #[error("window_id must be a numeric value")]
    InvalidIdentifier,
}
