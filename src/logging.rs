//! Logging setup. Use `log::debug!` instead of `println!` everywhere.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize env_logger, honoring `RUST_LOG` and defaulting to
/// `debug` for this crate. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("panzoom=debug"),
        )
        .init();
    });
}
