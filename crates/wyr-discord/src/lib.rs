//! Discord adapter (serenity).
//!
//! This crate implements the `wyr-core` ports over the Discord gateway and
//! HTTP API: event handlers for both command surfaces, embed builders, and
//! the follow-up sink that posts vote results.

use std::sync::Arc;

use async_trait::async_trait;

use serenity::{
    all::CommandInteraction, builder::CreateInteractionResponseFollowup, http::Http,
};

use wyr_core::{errors::Error, ports::ReportSink, vote::VoteReport, Result};

pub mod embeds;
pub mod handlers;
pub mod router;

pub(crate) fn map_err(e: serenity::Error) -> Error {
    Error::External(format!("discord error: {e}"))
}

/// Publishes a closed window's results as a follow-up message to the
/// interaction that posted the question.
///
/// Interaction tokens stay valid well past the 5-minute vote window, so the
/// follow-up needs no channel bookkeeping of its own.
pub struct FollowUpSink {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl FollowUpSink {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl ReportSink for FollowUpSink {
    async fn publish(&self, report: VoteReport) -> Result<()> {
        let followup = CreateInteractionResponseFollowup::new().embed(embeds::results(&report));
        self.interaction
            .create_followup(&self.http, followup)
            .await
            .map_err(map_err)?;
        Ok(())
    }
}
