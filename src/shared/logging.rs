use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber writing compact lines to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "bom_stockcheck=debug,warn"
    } else {
        "bom_stockcheck=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when running inside tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
