// Control-plane abstraction
//
// The trait surface is the two calls the teardown workflow needs.
// "Stack does not exist" is modeled as Ok(None) so callers never have
// to re-discriminate provider error messages.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::error::ProviderError;

/// Lifecycle status of a stack as reported by the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackStatus {
    DeleteInProgress,
    DeleteComplete,
    DeleteFailed,
    Other(String),
}

impl StackStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "DELETE_IN_PROGRESS" => Self::DeleteInProgress,
            "DELETE_COMPLETE" => Self::DeleteComplete,
            "DELETE_FAILED" => Self::DeleteFailed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::Other(status) => status,
        }
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time description of a stack. Read fresh on every query;
/// the control plane owns this state and it can change between calls.
#[derive(Debug, Clone)]
pub struct StackDescription {
    pub name: String,
    pub status: StackStatus,
    /// Output key/value pairs. Empty when the stack publishes none,
    /// which is a valid state rather than an error.
    pub outputs: HashMap<String, String>,
}

#[async_trait]
pub trait StackProvider: Send + Sync {
    /// Describe a stack by name. Ok(None) is the normal negative: the
    /// stack does not exist. Any other control-plane failure is an
    /// error and must propagate.
    async fn describe_stack(&self, name: &str)
        -> Result<Option<StackDescription>, ProviderError>;

    /// Request asynchronous deletion. Provider semantics pass through
    /// unchanged; there is no idempotence guard here.
    async fn delete_stack(&self, name: &str) -> Result<(), ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_statuses_parse_to_variants() {
        assert_eq!(
            StackStatus::parse("DELETE_IN_PROGRESS"),
            StackStatus::DeleteInProgress
        );
        assert_eq!(
            StackStatus::parse("DELETE_COMPLETE"),
            StackStatus::DeleteComplete
        );
        assert_eq!(StackStatus::parse("DELETE_FAILED"), StackStatus::DeleteFailed);
    }

    #[test]
    fn unknown_statuses_round_trip() {
        let status = StackStatus::parse("UPDATE_ROLLBACK_COMPLETE");
        assert_eq!(
            status,
            StackStatus::Other("UPDATE_ROLLBACK_COMPLETE".to_string())
        );
        assert_eq!(status.to_string(), "UPDATE_ROLLBACK_COMPLETE");
    }
}
