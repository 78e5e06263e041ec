//! Shared logging utilities for consistent tracing across all agents

use crate::types::AgentId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Crates whose events pass the filter at the configured level
const TRACED_CRATES: &[&str] = &["orchestrator", "synthesis", "shared", "recycle"];

/// Build the `EnvFilter` directive string for the given base level
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    TRACED_CRATES
        .iter()
        .map(|krate| format!("{krate}={base_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the stderr tracing subscriber with an explicit log level
///
/// `RUST_LOG`, when set, replaces the per-crate directives entirely.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(log_level)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for agent-aware info logging
#[macro_export]
macro_rules! agent_info {
    ($agent:expr, $($arg:tt)*) => {
        tracing::info!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for agent-aware warning logging
#[macro_export]
macro_rules! agent_warn {
    ($agent:expr, $($arg:tt)*) => {
        tracing::warn!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for agent-aware error logging
#[macro_export]
macro_rules! agent_error {
    ($agent:expr, $($arg:tt)*) => {
        tracing::error!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for agent-aware debug logging
#[macro_export]
macro_rules! agent_debug {
    ($agent:expr, $($arg:tt)*) => {
        tracing::debug!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(agent: AgentId, details: &str) {
    info!(
        agent = %agent,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(agent: AgentId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        agent = %agent,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(agent: AgentId, message: &str) {
    info!(
        agent = %agent,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
