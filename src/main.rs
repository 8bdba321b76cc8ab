#[tokio::main]
async fn main() -> lyricbot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("lyricbot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting lyricbot Discord bot");

    match lyricbot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
