//! Command routing for both surfaces.
//!
//! The slash surface and the legacy text surface are functionally
//! equivalent except that legacy question posts never collect votes. That
//! asymmetry is deliberate and load-bearing; see the tests.

/// Slash command: post a question and collect votes.
pub const SLASH_QUESTION: &str = "wyr";
/// Slash command: show help.
pub const SLASH_HELP: &str = "wyrhelp";

/// Legacy text triggers for posting a question (no vote collection).
pub const LEGACY_QUESTION_TRIGGERS: [&str; 2] = ["!wyr", "!wouldyourather"];
/// Legacy text trigger for help.
pub const LEGACY_HELP_TRIGGER: &str = "!wyrhelp";

/// What a routed command asks the handlers to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PostQuestion { collect_votes: bool },
    PostHelp,
}

/// A command descriptor for startup registration (name + description, no
/// parameters).
#[derive(Clone, Copy, Debug)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn command_descriptors() -> [CommandDescriptor; 2] {
    [
        CommandDescriptor {
            name: SLASH_QUESTION,
            description: "Get a Would You Rather question!",
        },
        CommandDescriptor {
            name: SLASH_HELP,
            description: "Show help for Would You Rather Machine",
        },
    ]
}

/// Route a slash command by name. Unknown names route nowhere.
pub fn route_slash(name: &str) -> Option<Action> {
    match name {
        SLASH_QUESTION => Some(Action::PostQuestion {
            collect_votes: true,
        }),
        SLASH_HELP => Some(Action::PostHelp),
        _ => None,
    }
}

/// Route a legacy text message. Triggers match the whole message
/// case-insensitively, with no trimming. The legacy question path never
/// collects votes.
pub fn route_legacy(content: &str) -> Option<Action> {
    let content = content.to_lowercase();
    if LEGACY_QUESTION_TRIGGERS.contains(&content.as_str()) {
        return Some(Action::PostQuestion {
            collect_votes: false,
        });
    }
    if content == LEGACY_HELP_TRIGGER {
        return Some(Action::PostHelp);
    }
    None
}
