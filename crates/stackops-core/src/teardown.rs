// Teardown orchestration
//
// The web stack (if any) is deleted before the CI stack: creation
// order reversed, since the CI stack's infrastructure can be a
// precondition for the web stack's teardown mechanics.

use std::collections::HashMap;
use std::time::Instant;

use tracing::info;

use crate::config::{TeardownConfig, WaitConfig};
use crate::error::TeardownError;
use crate::provider::{StackProvider, StackStatus};

/// CI stack output key naming the dependent web stack.
pub const WEB_STACK_OUTPUT: &str = "WebStackName";

/// What a teardown run actually did, in deletion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeardownOutcome {
    /// The CI stack was not there. Nothing to do is a success, not an
    /// error.
    CiStackMissing { ci_stack_name: String },
    Deleted { stacks: Vec<String> },
}

pub async fn stack_exists(
    provider: &dyn StackProvider,
    name: &str,
) -> Result<bool, TeardownError> {
    Ok(provider.describe_stack(name).await?.is_some())
}

/// Output key/value pairs of a stack known to exist. A stack that
/// publishes no outputs yields an empty map.
pub async fn stack_outputs(
    provider: &dyn StackProvider,
    name: &str,
) -> Result<HashMap<String, String>, TeardownError> {
    match provider.describe_stack(name).await? {
        Some(desc) => Ok(desc.outputs),
        None => Err(TeardownError::StackNotFound(name.to_string())),
    }
}

/// Issue the delete, then poll until the control plane reaches a
/// terminal state or `wait.max_wait` elapses.
pub async fn terminate_stack(
    provider: &dyn StackProvider,
    name: &str,
    wait: &WaitConfig,
) -> Result<(), TeardownError> {
    provider.delete_stack(name).await?;

    let started = Instant::now();
    loop {
        match provider.describe_stack(name).await? {
            // Describe-by-name fails once deletion finishes, so a
            // missing stack is the success signal here.
            None => return Ok(()),
            Some(desc) => match desc.status {
                StackStatus::DeleteComplete => return Ok(()),
                StackStatus::DeleteFailed => {
                    return Err(TeardownError::DeleteFailed(name.to_string()))
                }
                StackStatus::DeleteInProgress | StackStatus::Other(_) => {}
            },
        }

        if started.elapsed() >= wait.max_wait {
            return Err(TeardownError::DeleteTimeout {
                name: name.to_string(),
                waited: wait.max_wait,
            });
        }
        tokio::time::sleep(wait.poll_interval).await;
    }
}

/// Tear down the CI stack and, first, the web stack its outputs point
/// at. A missing WebStackName output is tolerated: the web stack is
/// optional.
pub async fn run_teardown(
    provider: &dyn StackProvider,
    config: &TeardownConfig,
) -> Result<TeardownOutcome, TeardownError> {
    let ci_stack = &config.ci_stack_name;

    if !stack_exists(provider, ci_stack).await? {
        info!("CI stack {ci_stack} not found, nothing to terminate");
        return Ok(TeardownOutcome::CiStackMissing {
            ci_stack_name: ci_stack.clone(),
        });
    }

    let outputs = stack_outputs(provider, ci_stack).await?;
    let mut deleted = Vec::new();

    if let Some(web_stack) = outputs.get(WEB_STACK_OUTPUT) {
        if stack_exists(provider, web_stack).await? {
            info!("Terminating stack {web_stack}");
            terminate_stack(provider, web_stack, &config.wait).await?;
            deleted.push(web_stack.clone());
        } else {
            info!("Web stack {web_stack} not found");
        }
    } else {
        info!("No web stack recorded in CI stack outputs");
    }

    info!("Terminating stack {ci_stack}");
    terminate_stack(provider, ci_stack, &config.wait).await?;
    deleted.push(ci_stack.clone());

    Ok(TeardownOutcome::Deleted { stacks: deleted })
}
