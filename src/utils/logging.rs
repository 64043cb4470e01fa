// ============================================================================
// Tracing Setup
// One-time fmt subscriber installation for applications and tests
// ============================================================================
//
// The library only emits `tracing` events. Nothing is printed unless the
// embedding application installs a subscriber; this helper does that with an
// env filter, defaulting to warnings so clamp and sign events are visible.
//
// # Usage
//
// ```ignore
// thai_baht_text::utils::init_tracing();
// let text = thai_baht_text::to_baht_text("100.995")?;
// ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `RUST_LOG` (default `thai_baht_text=warn`).
///
/// Safe to call repeatedly; only the first call installs anything, and an
/// already-installed global subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("thai_baht_text=warn"));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::warn!("logging initialized");
    }
}
