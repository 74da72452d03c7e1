//! Static help content, one field list per command surface.

/// A single name/value field of a help message.
#[derive(Clone, Copy, Debug)]
pub struct HelpField {
    pub name: &'static str,
    pub value: &'static str,
}

/// Help shown on the slash surface.
pub fn slash_help_fields() -> [HelpField; 4] {
    [
        HelpField {
            name: "/wyr",
            value: "Get a random Would You Rather question with voting!",
        },
        HelpField {
            name: "/wyrhelp",
            value: "Show this help message",
        },
        HelpField {
            name: "🎮 How to Play",
            value: "Use /wyr to get a question, then react with 🅰️ or 🅱️ to vote!",
        },
        HelpField {
            name: "⏰ Voting Time",
            value: "Voting lasts for 5 minutes, then results are shown!",
        },
    ]
}

/// Help shown on the legacy text surface.
pub fn legacy_help_fields() -> [HelpField; 3] {
    [
        HelpField {
            name: "!wyr or !wouldyourather",
            value: "Get a random Would You Rather question!",
        },
        HelpField {
            name: "/wyr",
            value: "Get a question with voting (slash command)",
        },
        HelpField {
            name: "!wyrhelp",
            value: "Show this help message",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{
        LEGACY_HELP_TRIGGER, LEGACY_QUESTION_TRIGGERS, SLASH_HELP, SLASH_QUESTION,
    };

    fn field_names(fields: &[HelpField]) -> String {
        fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn slash_help_enumerates_all_slash_triggers() {
        let names = field_names(&slash_help_fields());
        assert!(names.contains(&format!("/{SLASH_QUESTION}")));
        assert!(names.contains(&format!("/{SLASH_HELP}")));
    }

    #[test]
    fn legacy_help_enumerates_all_legacy_triggers() {
        let names = field_names(&legacy_help_fields());
        for trigger in LEGACY_QUESTION_TRIGGERS {
            assert!(names.contains(trigger), "missing trigger {trigger}");
        }
        assert!(names.contains(LEGACY_HELP_TRIGGER));
    }
}
