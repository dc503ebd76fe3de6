use fanout::presentation::cli::CliApp;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = CliApp::new();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if app.verbose() { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the CLI application
    app.run().await
}
