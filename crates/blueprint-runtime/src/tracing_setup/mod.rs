//! Tracing setup: `BLUEPRINT_LOG` driven `EnvFilter` over a fmt layer.

pub mod spans;

use std::sync::Once;

use blueprint_core::config::ObservabilityConfig;
use blueprint_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize human-readable logging at `blueprint=info`.
///
/// Reads `BLUEPRINT_LOG` for per-crate levels, e.g.
/// `BLUEPRINT_LOG=blueprint_retrieval=debug,blueprint_embeddings=warn`.
/// Idempotent; only the first call in a process installs a subscriber.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Same as [`init_tracing`] with JSON output.
pub fn init_tracing_json() {
    init_tracing_from_config(&ObservabilityConfig {
        json_logs: true,
        ..Default::default()
    });
}

/// Initialize from the `observability` config section. `BLUEPRINT_LOG` wins
/// over `log_level` when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

        let registry = tracing_subscriber::registry().with(filter);
        // Another subscriber may already be installed by the host; keep it.
        let _ = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
    });
}

/// `blueprint=<level>` so only this workspace's crates log by default.
pub fn default_directive(level: &str) -> String {
    format!("blueprint={}", level.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_scopes_to_workspace() {
        assert_eq!(default_directive("info"), "blueprint=info");
        assert_eq!(default_directive(" debug "), "blueprint=debug");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        init_tracing_json();
    }
}
