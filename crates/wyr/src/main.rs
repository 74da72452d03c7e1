use std::sync::Arc;

use wyr_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), wyr_core::Error> {
    wyr_core::logging::init("wyr");

    let cfg = Arc::new(Config::load()?);

    wyr_discord::router::run_gateway(cfg)
        .await
        .map_err(|e| wyr_core::Error::External(format!("discord bot failed: {e}")))?;

    Ok(())
}
