//! Tracing subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Install the console (and optional rolling file) subscriber
///
/// `RUST_LOG` takes precedence over `logging.level`. Returns `false` when a
/// global subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,chef_menu={}", config.level)));

    let console_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let file = config.dir.as_deref().and_then(file_layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file)
        .try_init()
        .is_ok()
}

fn file_layer<S>(log_dir: &str) -> Option<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    // `rolling::daily` panics if it cannot create the first file, so check writability up front
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("Warning: could not create log directory {log_dir} ({e}), file logging disabled");
        return None;
    }
    let probe = std::path::Path::new(log_dir).join(".chef_menu_write_test");
    if let Err(e) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&probe)
    {
        eprintln!("Warning: could not write to log directory {log_dir} ({e}), file logging disabled");
        return None;
    }
    let _ = std::fs::remove_file(&probe);

    let file_appender = tracing_appender::rolling::daily(log_dir, "chef-menu.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The process keeps logging until exit, so the guard lives forever
    Box::leak(Box::new(guard));

    Some(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed(),
    )
}

/// Minimal warn-level logging
pub fn init_logging_simple() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .try_init();
}
