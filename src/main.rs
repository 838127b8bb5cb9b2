use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ztest::config::{LogFormat, LoggingSettings, Settings};
use ztest::Application;

fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings.logging);

    info!("Starting ztest");

    let app = Application::new(settings);
    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())?;

    Ok(())
}

/// `RUST_LOG` wins over the configured level; logs go to stderr
fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
