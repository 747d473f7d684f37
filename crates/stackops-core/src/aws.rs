// CloudFormation-backed StackProvider
//
// Maps the SDK's "stack does not exist" ValidationError into the
// Option-shaped negative the trait exposes; everything else surfaces
// as a ProviderError carrying the full rendered error context.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::Client;

use crate::error::ProviderError;
use crate::provider::{StackDescription, StackProvider, StackStatus};

pub struct CfnStackProvider {
    client: Client,
}

impl CfnStackProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a provider from the ambient AWS configuration (IAM role,
    /// environment variables, or credentials file).
    pub async fn from_env() -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl StackProvider for CfnStackProvider {
    async fn describe_stack(
        &self,
        name: &str,
    ) -> Result<Option<StackDescription>, ProviderError> {
        let resp = match self.client.describe_stacks().stack_name(name).send().await {
            Ok(resp) => resp,
            Err(err) if is_stack_missing(&err) => return Ok(None),
            Err(err) => return Err(ProviderError::new(DisplayErrorContext(&err).to_string())),
        };

        let stack = resp.stacks().first().ok_or_else(|| {
            ProviderError::new(format!("empty describe_stacks response for {}", name))
        })?;

        let status = stack
            .stack_status()
            .map(|s| StackStatus::parse(s.as_str()))
            .unwrap_or_else(|| StackStatus::Other("UNKNOWN".to_string()));

        let mut outputs = HashMap::new();
        for output in stack.outputs() {
            if let (Some(key), Some(value)) = (output.output_key(), output.output_value()) {
                outputs.insert(key.to_string(), value.to_string());
            }
        }

        Ok(Some(StackDescription {
            name: name.to_string(),
            status,
            outputs,
        }))
    }

    async fn delete_stack(&self, name: &str) -> Result<(), ProviderError> {
        self.client
            .delete_stack()
            .stack_name(name)
            .send()
            .await
            .map_err(|err| ProviderError::new(DisplayErrorContext(&err).to_string()))?;
        Ok(())
    }
}

/// CloudFormation reports "stack does not exist" as a ValidationError
/// with a message substring; there is no dedicated error shape for it.
/// The structured code narrows the match, the substring does the rest.
fn is_stack_missing(err: &impl ProvideErrorMetadata) -> bool {
    err.code() == Some("ValidationError")
        && err.message().is_some_and(|m| m.contains("does not exist"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cloudformation::error::ErrorMetadata;

    #[test]
    fn missing_stack_validation_error_is_recognized() {
        let err = ErrorMetadata::builder()
            .code("ValidationError")
            .message("Stack with id a4tp-ci does not exist")
            .build();
        assert!(is_stack_missing(&err));
    }

    #[test]
    fn other_validation_errors_are_not_missing() {
        let err = ErrorMetadata::builder()
            .code("ValidationError")
            .message("Template format error: unsupported structure")
            .build();
        assert!(!is_stack_missing(&err));
    }

    #[test]
    fn throttling_is_not_missing() {
        let err = ErrorMetadata::builder()
            .code("Throttling")
            .message("Rate exceeded")
            .build();
        assert!(!is_stack_missing(&err));
    }

    #[test]
    fn metadata_without_code_is_not_missing() {
        let err = ErrorMetadata::builder()
            .message("something does not exist")
            .build();
        assert!(!is_stack_missing(&err));
    }
}
