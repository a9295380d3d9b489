use thiserror::Error;

use crate::types::FailureKind;

/// Errors raised while talking to the catalog or preparing input for it.
///
/// None of these abort a run on their own. The workflow turns each of them
/// into a [`crate::types::Failure`] entry and carries on with the next batch
/// or item.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// A search returned nothing usable, or the user skipped the selection.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A page or detail lookup could not be read.
    #[error("remote read failed: {0}")]
    RemoteRead(String),

    /// A playlist insertion was refused by the remote.
    #[error("remote write failed: {0}")]
    RemoteWrite(String),

    /// The remote asked us to wait longer than we are willing to.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlaylistError {
    /// How this error shows up in a [`crate::types::BatchResult`].
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            PlaylistError::NotFound(_) => FailureKind::NotFound,
            PlaylistError::InvalidInput(_) | PlaylistError::Io(_) => FailureKind::InvalidInput,
            PlaylistError::RemoteWrite(_) => FailureKind::WriteFailed,
            PlaylistError::RemoteRead(_)
            | PlaylistError::RateLimited(_)
            | PlaylistError::Http(_) => FailureKind::ReadFailed,
        }
    }
}
