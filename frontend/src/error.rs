use thiserror::Error;

use crate::state::SectionId;

/// Failures inside the view-state layer. None of them are fatal: every caller
/// recovers with a default and logs the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("invalid value {value:?} stored under {key:?}")]
    InvalidPersistedValue { key: &'static str, value: String },

    #[error("could not observe section {0}: element not found")]
    ObserverAttachFailure(SectionId),
}

pub type Result<T> = std::result::Result<T, ViewError>;
