use anyhow::Result;
use std::path::PathBuf;
use tvnav::config::Config;
use tvnav::logger::Logger;
use tvnav::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // `tvnav --generate-config [path]` writes a default configuration and exits
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--generate-config") {
        let path = match args.get(1) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;

    log::info!("Starting tvnav");
    ui::run_app(config, logger).await?;

    Ok(())
}
