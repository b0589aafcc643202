//! # Status classifier
//! Pure, testable logic mapping one free-text action description to a
//! `StatusLabel`. No I/O; phrase sets are passed in (or defaulted).
//!
//! Policy: ordered milestone rules, first match wins, highest milestone
//! first. Text naming several events ("Passed House and Senate, became
//! Public Law") must resolve to the highest one, so enacted is checked
//! before passage, passage before committee, and so on.

use crate::phrases::{normalize, PhraseSet};
use crate::status::StatusLabel;

/// Phrase-matching strictness. Both modes share the milestone rules; `Loose`
/// additionally reads weak topical cues out of long unmatched text, which is
/// what search-result and list-card contexts want for noisy feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Milestone rules only; unmatched text yields `Unclassified`.
    Strict,
    /// Milestone rules, then weak cues (committee/floor/motion/debate) on
    /// inputs longer than 30 chars.
    #[default]
    Loose,
}

/// Cue length gate: short unmatched strings carry too little context for the
/// weak-cue scan to be meaningful.
const WEAK_CUE_MIN_LEN: usize = 30;

/// Classify with the built-in phrase set in `Loose` mode.
pub fn classify(text: &str) -> StatusLabel {
    classify_with(text, PhraseSet::builtin(), Mode::Loose)
}

/// Classify `text` against `phrases`. Never fails: empty or blank input is
/// `Introduced` (no recorded action means the bill has only been introduced),
/// and text matching nothing is `Unclassified`.
pub fn classify_with(text: &str, phrases: &PhraseSet, mode: Mode) -> StatusLabel {
    let t = normalize(text);
    if t.is_empty() {
        return StatusLabel::Introduced;
    }

    let hit = |list: &[String]| PhraseSet::any_match(&t, list);

    if hit(&phrases.enacted) {
        return StatusLabel::Enacted;
    }
    if hit(&phrases.to_president) {
        return StatusLabel::SentToPresident;
    }
    if hit(&phrases.vetoed) {
        return StatusLabel::Vetoed;
    }
    if hit(&phrases.passed_congress) {
        return StatusLabel::PassedCongress;
    }

    // Chamber passage, with the companion check: one string reporting both
    // chambers ("Passed House; passed Senate") means the bill cleared
    // Congress, not just the chamber mentioned first.
    let house = hit(&phrases.passed_house);
    let senate = hit(&phrases.passed_senate);
    match (house, senate) {
        (true, true) => return StatusLabel::PassedCongress,
        (true, false) => return StatusLabel::PassedHouse,
        (false, true) => return StatusLabel::PassedSenate,
        (false, false) => {}
    }

    if hit(&phrases.reported) {
        return StatusLabel::ReportedByCommittee;
    }
    if hit(&phrases.referred) {
        return StatusLabel::InCommittee;
    }
    // Bare "agreed to" only counts with a chamber qualifier somewhere in the
    // text; chamber-specific agreement forms were consumed by the passage
    // rules above.
    if hit(&phrases.agreed_to) && (t.contains("house") || t.contains("senate")) {
        return StatusLabel::AgreedTo;
    }
    if hit(&phrases.introduced) {
        return StatusLabel::Introduced;
    }

    if mode == Mode::Loose && t.chars().count() > WEAK_CUE_MIN_LEN {
        if let Some(label) = weak_cue(&t) {
            return label;
        }
    }

    StatusLabel::Unclassified
}

/// Weak topical cues for long action text that matched no milestone rule.
fn weak_cue(t: &str) -> Option<StatusLabel> {
    if t.contains("under consideration") || t.contains("considered") || t.contains("debated") {
        return Some(StatusLabel::UnderConsideration);
    }
    if t.contains("committee") {
        return Some(StatusLabel::InProgress);
    }
    if ["floor", "amendment", "motion", "debate"]
        .iter()
        .any(|c| t.contains(c))
    {
        return Some(StatusLabel::InProgress);
    }
    None
}
