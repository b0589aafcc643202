//! Normalized status taxonomy for legislative actions.
//!
//! One closed enum shared by every call site (detail view, search, list
//! cards). Callers map labels to presentation text/colors themselves; the
//! engine only guarantees the label set is closed and stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized status of a bill or resolution, derived from action text.
///
/// `Unclassified` replaces the legacy behavior of echoing raw action text
/// back to the caller when no rule matched; consumers should render it as a
/// neutral "in progress" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    Introduced,
    InCommittee,
    ReportedByCommittee,
    PassedHouse,
    PassedSenate,
    PassedCongress,
    SentToPresident,
    Enacted,
    Vetoed,
    UnderConsideration,
    AgreedTo,
    InProgress,
    Unclassified,
}

impl StatusLabel {
    /// Human-readable badge text.
    pub fn as_display(&self) -> &'static str {
        match self {
            StatusLabel::Introduced => "Introduced",
            StatusLabel::InCommittee => "In Committee",
            StatusLabel::ReportedByCommittee => "Reported by Committee",
            StatusLabel::PassedHouse => "Passed House",
            StatusLabel::PassedSenate => "Passed Senate",
            StatusLabel::PassedCongress => "Passed Congress",
            StatusLabel::SentToPresident => "Sent to President",
            StatusLabel::Enacted => "Enacted",
            StatusLabel::Vetoed => "Vetoed",
            StatusLabel::UnderConsideration => "Under Consideration",
            StatusLabel::AgreedTo => "Agreed To",
            StatusLabel::InProgress => "In Progress",
            StatusLabel::Unclassified => "Unclassified",
        }
    }

    /// True for statuses past which a bill no longer moves (enacted/vetoed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, StatusLabel::Enacted | StatusLabel::Vetoed)
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}
