//! Configuration handling for the TUI

use crate::state::{Toast, Variant};
use crate::submission::{RetryPolicy, SimulatedBackend};
use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the variant
pub const VARIANT_ENV: &str = "APPLY_TUI_VARIANT";

/// Terminals narrower than this default to the mobile variant
pub const MOBILE_WIDTH_THRESHOLD: u16 = 80;

/// Command-line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "apply-tui", version, about = "Multi-step job application wizard")]
pub struct CliArgs {
    /// Wizard variant, overrides the environment and config file
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Path to a config file instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start without the hero animation
    #[arg(long)]
    pub skip_intro: bool,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Wizard variant
    pub variant: Option<Variant>,
    /// Simulated submission latency
    pub submit_delay_ms: Option<u64>,
    /// Total submission attempts
    pub max_submit_attempts: Option<u32>,
    /// First retry delay
    pub retry_initial_delay_ms: Option<u64>,
    /// Retry delay cap
    pub retry_max_delay_ms: Option<u64>,
    /// Upper bound for a single submission attempt
    pub attempt_timeout_ms: Option<u64>,
    /// How long toasts stay on screen
    pub toast_duration_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "apply-tui", "apply-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }
}

/// Parse a variant name as used by the environment variable
fn parse_variant(value: &str) -> Option<Variant> {
    match value.trim().to_ascii_lowercase().as_str() {
        "desktop" => Some(Variant::Desktop),
        "mobile" => Some(Variant::Mobile),
        _ => None,
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub variant: Variant,
    pub submit_delay: Duration,
    pub retry_policy: RetryPolicy,
    pub toast_ttl: Duration,
    pub skip_intro: bool,
}

impl Settings {
    /// Resolve settings. Variant precedence: CLI, environment, config file,
    /// then terminal width.
    pub fn resolve(
        cli: &CliArgs,
        env_variant: Option<&str>,
        config: &TuiConfig,
        terminal_width: u16,
    ) -> Self {
        let env_variant = env_variant.and_then(|value| {
            let parsed = parse_variant(value);
            if parsed.is_none() {
                tracing::warn!(value, "ignoring unknown {VARIANT_ENV}");
            }
            parsed
        });

        let variant = cli
            .variant
            .or(env_variant)
            .or(config.variant)
            .unwrap_or(if terminal_width < MOBILE_WIDTH_THRESHOLD {
                Variant::Mobile
            } else {
                Variant::Desktop
            });

        let submit_delay = config
            .submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedBackend::DEFAULT_DELAY);

        // An attempt must outlast the simulated latency or it can never succeed
        let mut attempt_timeout = config
            .attempt_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(RetryPolicy::DEFAULT_ATTEMPT_TIMEOUT);
        if attempt_timeout <= submit_delay {
            let raised = submit_delay + RetryPolicy::DEFAULT_ATTEMPT_TIMEOUT;
            tracing::warn!(
                timeout_ms = attempt_timeout.as_millis() as u64,
                raised_ms = raised.as_millis() as u64,
                "attempt timeout shorter than submit delay, raising it"
            );
            attempt_timeout = raised;
        }

        let retry_policy = RetryPolicy::exponential(
            config
                .max_submit_attempts
                .unwrap_or(RetryPolicy::DEFAULT_MAX_ATTEMPTS),
            config
                .retry_initial_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(RetryPolicy::DEFAULT_INITIAL_DELAY),
            config
                .retry_max_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(RetryPolicy::DEFAULT_MAX_DELAY),
        )
        .with_attempt_timeout(Some(attempt_timeout));

        Self {
            variant,
            submit_delay,
            retry_policy,
            toast_ttl: config
                .toast_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(Toast::DEFAULT_TTL),
            skip_intro: cli.skip_intro,
        }
    }
}
