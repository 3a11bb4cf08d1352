use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEBUG_TOGGLE_ENV: &str = "DEBUG";

pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = std::env::var("ULTA_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(default_level(verbose, debug_toggle_enabled())),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    // Logs go to stderr so stdout carries only the report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn debug_toggle_enabled() -> bool {
    std::env::var_os(DEBUG_TOGGLE_ENV).is_some_and(|value| !value.is_empty())
}

const fn default_level(verbose: bool, debug_toggle: bool) -> &'static str {
    if verbose || debug_toggle {
        "debug"
    } else {
        "info"
    }
}
