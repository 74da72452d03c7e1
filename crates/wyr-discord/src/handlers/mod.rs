//! Gateway event handlers.
//!
//! The `Handler` fans events out to one submodule per surface: slash
//! commands, legacy text triggers, and the reaction stream that feeds open
//! vote windows.

use std::sync::Arc;

use serenity::{
    all::{Command, Context, CreateCommand, EventHandler, Interaction, Message, Reaction, Ready},
    async_trait,
};

use tracing::{error, info};

use wyr_core::dispatch;

use crate::router::AppState;

mod commands;
mod reactions;
mod text;

pub struct Handler {
    state: Arc<AppState>,
}

impl Handler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is now online", ready.user.name);

        let commands: Vec<CreateCommand> = dispatch::command_descriptors()
            .iter()
            .map(|c| CreateCommand::new(c.name).description(c.description))
            .collect();

        match Command::set_global_commands(&ctx.http, commands).await {
            Ok(registered) => info!("registered {} application commands", registered.len()),
            // Non-fatal: the legacy text triggers keep working.
            Err(e) => error!("failed to register application commands: {e}"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        commands::handle_command(ctx, command, self.state.clone()).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        text::handle_message(ctx, msg, self.state.clone()).await;
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reactions::handle_reaction_add(ctx, reaction, self.state.clone()).await;
    }
}
