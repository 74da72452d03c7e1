use std::sync::Arc;

use serenity::all::{Context, CreateMessage, Message, ReactionType};

use tracing::{error, warn};

use wyr_core::{
    dispatch::{self, Action},
    help,
    vote::VoteSide,
};

use crate::{embeds, router::AppState};

pub async fn handle_message(ctx: Context, msg: Message, state: Arc<AppState>) {
    if msg.author.bot {
        return;
    }

    match dispatch::route_legacy(&msg.content) {
        // The legacy surface gets the reactions but never a vote window.
        Some(Action::PostQuestion { .. }) => post_question(&ctx, &msg, &state).await,
        Some(Action::PostHelp) => post_help(&ctx, &msg).await,
        None => {}
    }
}

async fn post_question(ctx: &Context, msg: &Message, state: &Arc<AppState>) {
    let question = state.catalog.pick();
    let builder = CreateMessage::new()
        .embed(embeds::question(&question))
        .reference_message(msg);

    let posted = match msg.channel_id.send_message(&ctx.http, builder).await {
        Ok(m) => m,
        Err(e) => {
            error!("failed to post question: {e}");
            return;
        }
    };

    for side in [VoteSide::A, VoteSide::B] {
        if let Err(e) = posted
            .react(&ctx.http, ReactionType::Unicode(side.glyph().to_string()))
            .await
        {
            warn!("failed to attach {} reaction: {e}", side.glyph());
        }
    }
}

async fn post_help(ctx: &Context, msg: &Message) {
    let builder = CreateMessage::new()
        .embed(embeds::help(&help::legacy_help_fields()))
        .reference_message(msg);
    if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
        error!("failed to post help: {e}");
    }
}
