//! Embed builders for everything the bot posts.

use serenity::{
    builder::{CreateEmbed, CreateEmbedFooter},
    model::Timestamp,
};

use wyr_core::{
    help::HelpField,
    questions::Question,
    vote::{VoteReport, GLYPH_A, GLYPH_B},
};

const QUESTION_COLOR: u32 = 0xFF6B6B;
const RESULTS_COLOR: u32 = 0x4ECDC4;
const HELP_COLOR: u32 = 0x9B59B6;

pub fn question(q: &Question) -> CreateEmbed {
    CreateEmbed::new()
        .colour(QUESTION_COLOR)
        .title("🤔 Would You Rather?")
        .description(format!(
            "**Option A:** {}\n\n**Option B:** {}",
            q.option_a, q.option_b
        ))
        .footer(CreateEmbedFooter::new(format!(
            "React with {GLYPH_A} for Option A or {GLYPH_B} for Option B!"
        )))
        .timestamp(Timestamp::now())
}

pub fn results(report: &VoteReport) -> CreateEmbed {
    CreateEmbed::new()
        .colour(RESULTS_COLOR)
        .title("📊 Voting Results!")
        .description(format!(
            "**Option A:** {}\n{} votes ({}%)\n\n**Option B:** {}\n{} votes ({}%)",
            report.question.option_a,
            report.count_a,
            report.percent_a,
            report.question.option_b,
            report.count_b,
            report.percent_b,
        ))
        .footer(CreateEmbedFooter::new(format!(
            "Total votes: {}",
            report.total
        )))
        .timestamp(Timestamp::now())
}

pub fn help(fields: &[HelpField]) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .colour(HELP_COLOR)
        .title("🤖 Would You Rather Machine - Help")
        .description("Welcome to the Would You Rather Machine!")
        .footer(CreateEmbedFooter::new("Have fun with your choices!"))
        .timestamp(Timestamp::now());

    for field in fields {
        embed = embed.field(field.name, field.value, false);
    }
    embed
}
