use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    globeterm::cli::run_cli().await
}
