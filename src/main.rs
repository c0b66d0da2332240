use heimdall::presentation::cli::CliApp;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is installed by the CLI once the log directory is known
    let app = CliApp::new();
    app.run().await
}
