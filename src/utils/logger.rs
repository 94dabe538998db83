use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// --verbose beats the config file's level.
fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "hello_cicd=debug,info".to_string(),
        (false, Some(level)) => format!("hello_cicd={}", level),
        (false, None) => "hello_cicd=info".to_string(),
    }
}

// RUST_LOG beats both flags and file.
fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)))
}

/// Human-readable logs on stderr. stdout is reserved for greetings.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one object per line for pipeline log collectors
        )
        .init();
}
