use std::sync::Arc;

use serenity::all::{Context, Reaction, ReactionType};

use wyr_core::{
    domain::{MessageId, UserId},
    vote::VoteSide,
};

use crate::router::AppState;

/// Route a reaction-add event into the open-window registry.
///
/// The bot's own seeded reactions and any glyph other than the two vote
/// glyphs are dropped here; reactions on messages without an open window
/// are dropped by the registry.
pub async fn handle_reaction_add(ctx: Context, reaction: Reaction, state: Arc<AppState>) {
    let Some(user_id) = reaction.user_id else {
        return;
    };
    if user_id == ctx.cache.current_user().id {
        return;
    }

    let ReactionType::Unicode(ref glyph) = reaction.emoji else {
        return;
    };
    let Some(side) = VoteSide::from_glyph(glyph) else {
        return;
    };

    state
        .windows
        .ingest(
            MessageId(reaction.message_id.get()),
            UserId(user_id.get()),
            side,
        )
        .await;
}
