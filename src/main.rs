use houndgen::presentation::cli::{init_tracing, CliApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = CliApp::new();

    // Initialize logging
    init_tracing(app.verbose());

    // Run the CLI application
    app.run().await
}
