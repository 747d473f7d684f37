use std::time::Duration;

use thiserror::Error;

/// Control-plane failure that is not the normal "stack does not
/// exist" negative. Always propagated, never swallowed.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Teardown workflow errors.
#[derive(Debug, Error)]
pub enum TeardownError {
    #[error("stack {0} does not exist")]
    StackNotFound(String),

    #[error("stack {0} entered DELETE_FAILED")]
    DeleteFailed(String),

    #[error("timed out after {waited:?} waiting for stack {name} to delete")]
    DeleteTimeout { name: String, waited: Duration },

    #[error("CloudFormation error: {0}")]
    Provider(#[from] ProviderError),
}
