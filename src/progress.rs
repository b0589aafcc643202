//! # Progress tracker
//! Pure logic mapping `(descriptor, action history)` → position on the
//! bill-type-specific stage track. No I/O, recomputed fresh on every call.
//!
//! Policy: scan the FULL history in date order and keep the maximum stage
//! any action reaches. Progress never regresses: a late housekeeping action
//! worded like a referral must not pull an already-passed bill back to the
//! Committee stage.

use crate::bill_type::BillTypeDescriptor;
use crate::classify::{classify_with, Mode};
use crate::phrases::{normalize, PhraseSet};
use crate::stages::{find_stage, stage_sequence, Stage};
use crate::status::StatusLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One recorded legislative action. Immutable once normalized from the feed;
/// identity is exactly `(date, text)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub date: DateTime<Utc>,
    pub text: String,
}

impl ActionRecord {
    pub fn new(date: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }
}

/// Where a bill sits on its track. Ephemeral: derived from the full history
/// on each call, never cached or incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressResult {
    pub stages: &'static [Stage],
    pub current_stage_index: usize,
    pub percent_complete: f32,
}

/// Compute a bill's progress with the built-in phrase set.
pub fn compute_progress(
    descriptor: &BillTypeDescriptor,
    actions: &[ActionRecord],
    fallback_status_text: Option<&str>,
) -> ProgressResult {
    compute_progress_with(descriptor, actions, fallback_status_text, PhraseSet::builtin())
}

/// Compute a bill's progress against `phrases`. Never fails: an empty
/// history with no usable fallback text sits at stage 0.
pub fn compute_progress_with(
    descriptor: &BillTypeDescriptor,
    actions: &[ActionRecord],
    fallback_status_text: Option<&str>,
    phrases: &PhraseSet,
) -> ProgressResult {
    let stages = stage_sequence(descriptor);

    let current_stage_index = if actions.is_empty() {
        let label = classify_with(fallback_status_text.unwrap_or(""), phrases, Mode::Loose);
        let idx = stage_for_label(label, stages);
        debug!(?label, idx, "no actions; stage from fallback status text");
        idx
    } else {
        scan_actions(actions, stages, phrases)
    };

    // stages.len() >= 2 for every track, so the divisor is never zero.
    let percent_complete =
        (current_stage_index as f32 / (stages.len() - 1) as f32 * 100.0).clamp(0.0, 100.0);

    ProgressResult {
        stages,
        current_stage_index,
        percent_complete,
    }
}

/// Full-history scan: candidate stage per action, maximum wins.
fn scan_actions(actions: &[ActionRecord], stages: &[Stage], phrases: &PhraseSet) -> usize {
    let mut sorted: Vec<&ActionRecord> = actions.iter().collect();
    sorted.sort_by_key(|a| a.date);

    let texts: Vec<String> = sorted.iter().map(|a| normalize(&a.text)).collect();

    // Cross-chamber passage anywhere in the history. Used to promote a
    // concurrent resolution past the second chamber once both have acted.
    let house_passed_any = texts
        .iter()
        .any(|t| PhraseSet::any_match(t, &phrases.passed_house));
    let senate_passed_any = texts
        .iter()
        .any(|t| PhraseSet::any_match(t, &phrases.passed_senate));

    let mut current = 0usize;
    for (action, text) in sorted.iter().zip(texts.iter()) {
        if let Some(candidate) =
            candidate_stage(text, stages, phrases, house_passed_any, senate_passed_any)
        {
            if candidate > current {
                debug!(
                    date = %action.date.date_naive(),
                    candidate,
                    stage = %stages[candidate],
                    "milestone advanced progress"
                );
            }
            current = current.max(candidate);
        }
    }
    debug!(current, of = stages.len() - 1, "final stage after scan");
    current
}

/// Candidate stage index for one normalized action text. First family to
/// match wins; families run highest milestone first so mixed wording
/// ("passed House; referred to conference committee") lands high.
fn candidate_stage(
    text: &str,
    stages: &[Stage],
    phrases: &PhraseSet,
    house_passed_any: bool,
    senate_passed_any: bool,
) -> Option<usize> {
    let hit = |list: &[String]| PhraseSet::any_match(text, list);
    let last = stages.len() - 1;
    let has_president = find_stage(stages, |s| *s == Stage::President).is_some();

    if hit(&phrases.enacted) {
        return Some(last);
    }
    if hit(&phrases.to_president) {
        return find_stage(stages, |s| *s == Stage::President);
    }
    if hit(&phrases.passed_congress) {
        return Some(congress_cleared_index(stages));
    }
    if hit(&phrases.passed_house) {
        // On a track without a President stage, passage by the second
        // chamber means the measure is through: jump to the final stage.
        if !has_president && senate_passed_any && stages.contains(&Stage::Senate) {
            return Some(last);
        }
        return find_stage(stages, Stage::is_house_stage);
    }
    if hit(&phrases.passed_senate) {
        if !has_president && house_passed_any && stages.contains(&Stage::House) {
            return Some(last);
        }
        return find_stage(stages, Stage::is_senate_stage);
    }
    if hit(&phrases.reported) || hit(&phrases.referred) {
        return find_stage(stages, |s| *s == Stage::Committee);
    }
    if hit(&phrases.introduced) {
        return Some(0);
    }
    None
}

/// Index meaning "both chambers done": the stage just before the President
/// on bill tracks, the final stage on tracks that end at adoption.
fn congress_cleared_index(stages: &[Stage]) -> usize {
    match find_stage(stages, |s| *s == Stage::President) {
        Some(p) if p > 0 => p - 1,
        _ => stages.len() - 1,
    }
}

/// Fallback mapping used when the caller has a status string but no action
/// history. Labels with no named stage on the track degrade to stage 0.
fn stage_for_label(label: StatusLabel, stages: &[Stage]) -> usize {
    let last = stages.len() - 1;
    match label {
        StatusLabel::Enacted => last,
        StatusLabel::SentToPresident | StatusLabel::Vetoed => {
            find_stage(stages, |s| *s == Stage::President).unwrap_or(0)
        }
        StatusLabel::PassedCongress => congress_cleared_index(stages),
        StatusLabel::PassedHouse => find_stage(stages, Stage::is_house_stage).unwrap_or(0),
        StatusLabel::PassedSenate => find_stage(stages, Stage::is_senate_stage).unwrap_or(0),
        StatusLabel::AgreedTo => {
            if stages.last() == Some(&Stage::Adopted) {
                last
            } else {
                0
            }
        }
        StatusLabel::ReportedByCommittee | StatusLabel::InCommittee => {
            find_stage(stages, |s| *s == Stage::Committee).unwrap_or(0)
        }
        StatusLabel::Introduced
        | StatusLabel::UnderConsideration
        | StatusLabel::InProgress
        | StatusLabel::Unclassified => 0,
    }
}
