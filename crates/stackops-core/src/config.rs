// Teardown configuration
//
// Resolved once at process start and passed into the orchestration as
// a value, so tests can inject names without touching the environment.

use std::env;
use std::time::Duration;

/// Application name used when APP_NAME is not set.
pub const DEFAULT_APP_NAME: &str = "a4tp";

/// Polling behavior for the deletion wait.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_wait: Duration::from_secs(1800),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeardownConfig {
    pub app_name: String,
    pub ci_stack_name: String,
    pub wait: WaitConfig,
}

impl TeardownConfig {
    /// Resolve names from explicit values, falling back to the
    /// defaults: app "a4tp", CI stack "<app>-ci".
    pub fn resolve(
        app_name: Option<String>,
        ci_stack_name: Option<String>,
        wait: WaitConfig,
    ) -> Self {
        let app_name = app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let ci_stack_name = ci_stack_name.unwrap_or_else(|| format!("{}-ci", app_name));
        Self {
            app_name,
            ci_stack_name,
            wait,
        }
    }

    /// Read APP_NAME / CI_STACK_NAME and the wait tuning knobs from
    /// the environment. Unparseable durations fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = WaitConfig::default();
        let wait = WaitConfig {
            poll_interval: secs_from_env("STACKOPS_POLL_INTERVAL_SECS", defaults.poll_interval),
            max_wait: secs_from_env("STACKOPS_DELETE_TIMEOUT_SECS", defaults.max_wait),
        };
        Self::resolve(env::var("APP_NAME").ok(), env::var("CI_STACK_NAME").ok(), wait)
    }
}

fn secs_from_env(name: &str, default: Duration) -> Duration {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = TeardownConfig::resolve(None, None, WaitConfig::default());
        assert_eq!(config.app_name, "a4tp");
        assert_eq!(config.ci_stack_name, "a4tp-ci");
    }

    #[test]
    fn ci_stack_name_derives_from_app_name() {
        let config = TeardownConfig::resolve(Some("myapp".to_string()), None, WaitConfig::default());
        assert_eq!(config.ci_stack_name, "myapp-ci");
    }

    #[test]
    fn explicit_ci_stack_name_wins() {
        let config = TeardownConfig::resolve(
            Some("myapp".to_string()),
            Some("pipeline-stack".to_string()),
            WaitConfig::default(),
        );
        assert_eq!(config.app_name, "myapp");
        assert_eq!(config.ci_stack_name, "pipeline-stack");
    }
}
