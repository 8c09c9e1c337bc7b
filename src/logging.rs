//! Logger setup. Call once at the top of `main`.

use env_logger::Env;

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install the stderr logger. `RUST_LOG` overrides `DEFAULT_FILTER`.
/// Returns false if a logger was already installed (e.g. a second call).
pub fn init_logging() -> bool {
    let installed = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init()
        .is_ok();
    if installed {
        log::debug!("logging initialized");
    }
    installed
}
