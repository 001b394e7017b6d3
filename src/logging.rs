use env_logger::Builder;
use log::LevelFilter;

/// Install `env_logger` as the `log` backend.
///
/// The base level is `info`, or `debug` with `verbose`.  `RUST_LOG` is
/// parsed on top, so `RUST_LOG=combat_zone::sim=trace` still narrows in on
/// one module.  Calling this again is a no-op.
pub fn init(verbose: bool) {
    let base = match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    let installed = Builder::new()
        .filter_level(base)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
    if installed.is_err() {
        log::trace!("logger already installed");
    }
}
