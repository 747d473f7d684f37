// stackops-core - CloudFormation teardown domain logic
//
// Resolves the CI stack and its dependent web stack, issues deletes in
// dependency order and waits for the control plane to reach a terminal
// state. The control plane sits behind the StackProvider trait so the
// orchestration can be exercised without AWS.

pub mod aws;
pub mod config;
pub mod error;
pub mod provider;
pub mod teardown;

pub use config::{TeardownConfig, WaitConfig};
pub use error::{ProviderError, TeardownError};
pub use provider::{StackDescription, StackProvider, StackStatus};
pub use teardown::{
    run_teardown, stack_exists, stack_outputs, terminate_stack, TeardownOutcome, WEB_STACK_OUTPUT,
};
