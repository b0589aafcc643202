//! Stage sequences: the fixed, per-bill-type track a progress bar renders.
//!
//! The mapping from descriptor to track is total and compile-time constant.
//! Tracks always start at `Introduced` and are at least two stages long, so
//! percent math never divides by zero.

use crate::bill_type::{BillTypeDescriptor, Chamber, ResolutionKind};
use serde::Serialize;
use std::fmt;

/// One named step on a legislative progress track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Introduced,
    Committee,
    House,
    Senate,
    HouseVote,
    SenateVote,
    President,
    Law,
    Adopted,
}

impl Stage {
    pub fn as_display(&self) -> &'static str {
        match self {
            Stage::Introduced => "Introduced",
            Stage::Committee => "Committee",
            Stage::House => "House",
            Stage::Senate => "Senate",
            Stage::HouseVote => "House Vote",
            Stage::SenateVote => "Senate Vote",
            Stage::President => "President",
            Stage::Law => "Law",
            Stage::Adopted => "Adopted",
        }
    }

    /// True for the stage a House-passage milestone lands on.
    pub(crate) fn is_house_stage(&self) -> bool {
        matches!(self, Stage::House | Stage::HouseVote)
    }

    /// True for the stage a Senate-passage milestone lands on.
    pub(crate) fn is_senate_stage(&self) -> bool {
        matches!(self, Stage::Senate | Stage::SenateVote)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}

use Stage::*;

const HOUSE_SIMPLE: &[Stage] = &[Introduced, Committee, HouseVote, Adopted];
const SENATE_SIMPLE: &[Stage] = &[Introduced, Committee, SenateVote, Adopted];
const HOUSE_CONCURRENT: &[Stage] = &[Introduced, Committee, House, Senate, Adopted];
const SENATE_CONCURRENT: &[Stage] = &[Introduced, Committee, Senate, House, Adopted];
const HOUSE_BILL: &[Stage] = &[Introduced, Committee, House, Senate, President, Law];
const SENATE_BILL: &[Stage] = &[Introduced, Committee, Senate, House, President, Law];

/// The track for a descriptor. Unknown chamber takes the House-bill default
/// (a detail view must always have something to render).
pub fn stage_sequence(descriptor: &BillTypeDescriptor) -> &'static [Stage] {
    let senate_origin = descriptor.chamber_of_origin == Chamber::Senate;
    match descriptor.resolution_kind {
        ResolutionKind::SimpleResolution => {
            if senate_origin {
                SENATE_SIMPLE
            } else {
                HOUSE_SIMPLE
            }
        }
        ResolutionKind::ConcurrentResolution => {
            if senate_origin {
                SENATE_CONCURRENT
            } else {
                HOUSE_CONCURRENT
            }
        }
        ResolutionKind::JointResolution | ResolutionKind::Bill => {
            if senate_origin {
                SENATE_BILL
            } else {
                HOUSE_BILL
            }
        }
    }
}

/// Position of the first stage satisfying `pred`.
pub(crate) fn find_stage(stages: &[Stage], pred: impl Fn(&Stage) -> bool) -> Option<usize> {
    stages.iter().position(pred)
}
