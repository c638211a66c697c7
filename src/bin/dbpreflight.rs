use dbpreflight::cli::start;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start().await
}
