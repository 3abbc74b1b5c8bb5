use thiserror::Error;

/// Errors surfaced at the chat boundary.
///
/// Backend failures of any flavor (network, auth, quota, malformed
/// response) are collapsed into `BackendFailure` with a human-readable
/// message; the caller only has to display it. `MissingCredential` is
/// a startup condition and is never recovered at runtime.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("backend failure: {0}")]
    BackendFailure(String),

    #[error("missing credential: {0}")]
    MissingCredential(String),

    #[error("empty input")]
    EmptyInput,
}

impl ChatError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::BackendFailure(err.to_string())
    }
}
