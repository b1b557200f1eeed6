#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hifz_backend::run().await
}
