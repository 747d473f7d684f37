// CodePipeline placeholder stage for AWS Lambda
//
// Decodes the CodePipeline job event, validates user parameters and
// reports exactly one success/failure result back to the pipeline.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};

mod event;
mod handler;
mod params;
mod report;

pub use event::CodePipelineEvent;
pub use handler::handle_job;
pub use params::{parse_user_params, ParamsError, REQUIRED_KEYS};
pub use report::{CodePipelineReporter, JobReporter};

/// Lambda runtime entry point
pub async fn run() -> Result<(), Error> {
    init_tracing();

    // CodePipeline reporter over the ambient AWS configuration
    // (IAM role in Lambda, environment variables locally)
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let reporter = Arc::new(CodePipelineReporter::new(aws_sdk_codepipeline::Client::new(
        &config,
    )));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<CodePipelineEvent>| {
        let reporter = reporter.clone();
        async move {
            let (payload, _context) = event.into_parts();
            handler::handle_job(payload, reporter.as_ref())
                .await
                .map_err(Error::from)
        }
    }))
    .await
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Lambda prepends its own timestamps to log lines
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().without_time())
        .init();
}
