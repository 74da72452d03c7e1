use std::collections::HashSet;

use crate::{domain::UserId, questions::Question};

/// Reaction glyph for option A.
pub const GLYPH_A: &str = "\u{1F170}\u{FE0F}"; // 🅰️
/// Reaction glyph for option B.
pub const GLYPH_B: &str = "\u{1F171}\u{FE0F}"; // 🅱️

/// The two sides of a question. Anything that is not one of the two known
/// glyphs maps to nothing and never reaches a tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteSide {
    A,
    B,
}

impl VoteSide {
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            GLYPH_A => Some(Self::A),
            GLYPH_B => Some(Self::B),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::A => GLYPH_A,
            Self::B => GLYPH_B,
        }
    }
}

/// Per-window vote state. First vote wins: a voter already present on
/// either side is ignored, never moved.
#[derive(Debug, Default)]
pub struct VoteTally {
    a: HashSet<UserId>,
    b: HashSet<UserId>,
}

impl VoteTally {
    /// Record a vote. Returns whether the vote was counted.
    pub fn ingest(&mut self, voter: UserId, side: VoteSide) -> bool {
        if self.a.contains(&voter) || self.b.contains(&voter) {
            return false;
        }
        match side {
            VoteSide::A => self.a.insert(voter),
            VoteSide::B => self.b.insert(voter),
        }
    }

    pub fn count_a(&self) -> usize {
        self.a.len()
    }

    pub fn count_b(&self) -> usize {
        self.b.len()
    }

    /// Final report for this tally, or `None` when nobody voted.
    pub fn report(&self, question: Question) -> Option<VoteReport> {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return None;
        }
        Some(VoteReport {
            question,
            count_a: self.a.len(),
            count_b: self.b.len(),
            percent_a: percent_of(self.a.len(), total),
            percent_b: percent_of(self.b.len(), total),
            total,
        })
    }
}

/// Share of `total`, rounded independently per side. Two such shares are
/// not guaranteed to sum to 100.
fn percent_of(count: usize, total: usize) -> u32 {
    (count as f64 * 100.0 / total as f64).round() as u32
}

/// The summary published when a vote window closes with at least one vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteReport {
    pub question: Question,
    pub count_a: usize,
    pub count_b: usize,
    pub percent_a: u32,
    pub percent_b: u32,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            option_a: "tea",
            option_b: "coffee",
        }
    }

    #[test]
    fn glyph_mapping_is_closed() {
        assert_eq!(VoteSide::from_glyph(GLYPH_A), Some(VoteSide::A));
        assert_eq!(VoteSide::from_glyph(GLYPH_B), Some(VoteSide::B));
        assert_eq!(VoteSide::from_glyph("👍"), None);
        assert_eq!(VoteSide::from_glyph("🅾️"), None);
        assert_eq!(VoteSide::from_glyph(""), None);
    }

    #[test]
    fn first_vote_wins() {
        let mut tally = VoteTally::default();
        assert!(tally.ingest(UserId(1), VoteSide::A));
        // Same side again: not counted twice.
        assert!(!tally.ingest(UserId(1), VoteSide::A));
        // Opposite side: ignored, not switched.
        assert!(!tally.ingest(UserId(1), VoteSide::B));

        assert_eq!(tally.count_a(), 1);
        assert_eq!(tally.count_b(), 0);
    }

    #[test]
    fn voters_land_on_the_side_of_their_first_event() {
        let mut tally = VoteTally::default();
        let events = [
            (UserId(1), VoteSide::A),
            (UserId(2), VoteSide::B),
            (UserId(1), VoteSide::B),
            (UserId(3), VoteSide::B),
            (UserId(2), VoteSide::A),
            (UserId(3), VoteSide::B),
            (UserId(4), VoteSide::A),
        ];
        for (voter, side) in events {
            tally.ingest(voter, side);
        }

        assert_eq!(tally.count_a(), 2); // 1, 4
        assert_eq!(tally.count_b(), 2); // 2, 3
    }

    #[test]
    fn report_three_to_one() {
        let mut tally = VoteTally::default();
        for id in 1..=3 {
            tally.ingest(UserId(id), VoteSide::A);
        }
        tally.ingest(UserId(4), VoteSide::B);

        let report = tally.report(question()).unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.count_a, 3);
        assert_eq!(report.count_b, 1);
        assert_eq!(report.percent_a, 75);
        assert_eq!(report.percent_b, 25);
    }

    #[test]
    fn percentages_round_independently() {
        let mut tally = VoteTally::default();
        tally.ingest(UserId(1), VoteSide::A);
        tally.ingest(UserId(2), VoteSide::B);
        tally.ingest(UserId(3), VoteSide::B);

        let report = tally.report(question()).unwrap();
        assert_eq!(report.percent_a, 33);
        assert_eq!(report.percent_b, 67);
        // Not normalized to sum to 100; each side rounds on its own.
        assert_eq!(percent_of(1, 6), 17);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(3, 8), 38);
    }

    #[test]
    fn empty_tally_yields_no_report() {
        let tally = VoteTally::default();
        assert_eq!(tally.report(question()), None);
    }
}
