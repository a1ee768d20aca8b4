use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the process-wide logger once. `RUST_LOG` overrides the defaults.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("keyed_buckets", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests and embedding binaries may have installed a logger already.
        let _ = builder.try_init();
    });
}
