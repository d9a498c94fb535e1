use crate::gameplay::Illegal;

/// Why a request against the lobby did not produce a new state.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    #[error(transparent)]
    Illegal(#[from] Illegal),
    #[error("session not found")]
    Missing,
    #[error("invalid input: {0}")]
    Invalid(String),
    /// Wrapped as-is so the detail names the underlying cause.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
    #[error("corrupt session state: {0}")]
    Corrupt(String),
}

impl Failure {
    /// Stable machine-readable name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Illegal(illegal) => illegal.kind(),
            Self::Missing => "not_found",
            Self::Invalid(_) => "invalid_input",
            Self::Storage(_) => "storage",
            Self::Corrupt(_) => "corrupt",
        }
    }
}
