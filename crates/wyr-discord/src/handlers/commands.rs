use std::sync::Arc;

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    ReactionType,
};

use tracing::{error, warn};

use wyr_core::{
    collector::VOTE_WINDOW,
    dispatch::{self, Action},
    domain::MessageId,
    help,
    vote::VoteSide,
};

use crate::{embeds, router::AppState, FollowUpSink};

pub async fn handle_command(ctx: Context, command: CommandInteraction, state: Arc<AppState>) {
    match dispatch::route_slash(&command.data.name) {
        Some(Action::PostQuestion { collect_votes }) => {
            post_question(&ctx, &command, &state, collect_votes).await;
        }
        Some(Action::PostHelp) => post_help(&ctx, &command).await,
        None => {}
    }
}

/// Post a question, attach the two vote reactions, and (on the slash
/// surface) open the 5-minute collection window for the posted message.
async fn post_question(
    ctx: &Context,
    command: &CommandInteraction,
    state: &Arc<AppState>,
    collect_votes: bool,
) {
    let question = state.catalog.pick();

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(embeds::question(&question)),
    );
    if let Err(e) = command.create_response(&ctx.http, response).await {
        error!("failed to post question: {e}");
        return;
    }

    // The window is keyed to the posted message, so fetch it back.
    let message = match command.get_response(&ctx.http).await {
        Ok(m) => m,
        Err(e) => {
            error!("failed to fetch posted question message: {e}");
            return;
        }
    };

    for side in [VoteSide::A, VoteSide::B] {
        if let Err(e) = message
            .react(&ctx.http, ReactionType::Unicode(side.glyph().to_string()))
            .await
        {
            warn!("failed to attach {} reaction: {e}", side.glyph());
        }
    }

    if !collect_votes {
        return;
    }

    let sink = Arc::new(FollowUpSink::new(ctx.http.clone(), command.clone()));
    state
        .windows
        .open(MessageId(message.id.get()), question, VOTE_WINDOW, sink)
        .await;
}

async fn post_help(ctx: &Context, command: &CommandInteraction) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(embeds::help(&help::slash_help_fields())),
    );
    if let Err(e) = command.create_response(&ctx.http, response).await {
        error!("failed to post help: {e}");
    }
}
