// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod adapter;
pub mod bill_type;
pub mod classify;
pub mod phrases;
pub mod progress;
pub mod stages;
pub mod status;

// ---- Re-exports for stable public API ----
pub use crate::adapter::{normalize_actions, RawAction, RawBill};
pub use crate::bill_type::{BillTypeDescriptor, Chamber, ResolutionKind};
pub use crate::classify::{classify, classify_with, Mode};
pub use crate::phrases::{load_phrases_file, HotReloadPhrases, PhraseSet};
pub use crate::progress::{compute_progress, compute_progress_with, ActionRecord, ProgressResult};
pub use crate::stages::{stage_sequence, Stage};
pub use crate::status::StatusLabel;
