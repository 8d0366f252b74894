use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise the level
/// follows the `-v` count (warn, info, debug).
pub fn init(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
