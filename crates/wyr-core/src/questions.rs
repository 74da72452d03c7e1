use rand::seq::SliceRandom;

/// An immutable binary-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub option_a: &'static str,
    pub option_b: &'static str,
}

/// The fixed in-memory question catalog. Lifetime is the process; there is
/// no persistence and no mutation.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<Question>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let entries = [
            ("Have the ability to fly", "Have the ability to become invisible"),
            ("Always be 10 minutes late", "Always be 20 minutes early"),
            ("Have super strength", "Have super speed"),
            ("Live without music", "Live without movies"),
            ("Be able to speak all languages", "Be able to talk to animals"),
            ("Have $1 million now", "Have $50,000 every year for life"),
            ("Never use the internet again", "Never watch TV again"),
            ("Be famous but poor", "Be rich but unknown"),
            ("Time travel to the past", "Time travel to the future"),
            ("Have perfect memory", "Have perfect intuition"),
        ]
        .into_iter()
        .map(|(option_a, option_b)| Question { option_a, option_b })
        .collect();

        Self { entries }
    }

    /// One entry chosen uniformly at random. The catalog is never empty.
    pub fn pick(&self) -> Question {
        *self
            .entries
            .choose(&mut rand::thread_rng())
            .unwrap_or(&self.entries[0])
    }

    pub fn entries(&self) -> &[Question] {
        &self.entries
    }
}
