use brandforge::{
    brand_catalog, logger, Config, Downloader, ImageClient, Orchestrator, PacingPolicy,
    TelegramNotifier,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(_) => eprintln!("No .env file found, using system environment variables"),
    }

    logger::init_with_config(logger::LoggerConfig::development())?;

    let config = Config::from_env();
    // Missing credentials are the only way this process exits non-zero;
    // per-asset failures are reported and swallowed by the orchestrator.
    config.validate()?;

    let catalog = brand_catalog();
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), catalog.len());
    log::info!("Output directory: {}", config.output_dir.display());

    let orchestrator = Orchestrator::new(
        catalog,
        config.output_dir.clone(),
        PacingPolicy::fixed(config.pace_interval),
        ImageClient::new(config.fal.clone()),
        Downloader::new(),
        TelegramNotifier::new(config.telegram.clone()),
    );

    let summary = orchestrator.run().await?;

    log::info!(
        "Run finished: {} images across {} assets",
        summary.image_count(),
        summary.asset_count()
    );

    Ok(())
}
