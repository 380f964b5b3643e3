//! Process-wide `env_logger` setup shared by the binaries and tests

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time logger installation
static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend.
///
/// Defaults to `warn` for everything and `info` for this crate. `RUST_LOG` overrides both, so
/// `RUST_LOG=probing_map=debug` shows every slot-array growth and `trace` shows every rebuild.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("probing_map", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another backend may already be installed by an embedding program
        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}
