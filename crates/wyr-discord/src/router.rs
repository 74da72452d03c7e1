use std::sync::Arc;

use serenity::all::{ApplicationId, Client, GatewayIntents};

use wyr_core::{collector::ActiveWindows, config::Config, questions::Catalog};

use crate::handlers::Handler;

/// Process-scoped state shared by the event handlers: immutable
/// configuration plus the open-window registry.
pub struct AppState {
    pub cfg: Arc<Config>,
    pub catalog: Catalog,
    pub windows: Arc<ActiveWindows>,
}

/// Connect to the gateway and serve events until the client stops.
pub async fn run_gateway(cfg: Arc<Config>) -> anyhow::Result<()> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let state = Arc::new(AppState {
        cfg: cfg.clone(),
        catalog: Catalog::builtin(),
        windows: Arc::new(ActiveWindows::default()),
    });

    let mut client = Client::builder(&cfg.discord_token, intents)
        .application_id(ApplicationId::new(cfg.application_id))
        .event_handler(Handler::new(state))
        .await?;

    client.start().await?;
    Ok(())
}
