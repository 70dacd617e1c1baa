//! Logger setup shared by the binaries and tests

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time logger installation
static INIT: Once = Once::new();

/// Builder with the crate's defaults, before `RUST_LOG` is applied
fn default_builder() -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info).format_timestamp_millis();
    builder
}

/// Installs an `env_logger` at `Info`, overridable through `RUST_LOG`.
///
/// Safe to call any number of times; only the first call has an effect.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = default_builder();
        builder.parse_default_env();

        // Another logger may already be installed by the host process.
        let _ = builder.try_init();
    });
}
