//! Boundary normalization: heterogeneous caller payloads into the strict
//! core shapes. Source feeds disagree on field names (`action` vs `text`,
//! `date` vs `actionDate`) and on date formats; everything is pinned down
//! here so the classifier and tracker see one fixed contract.

use crate::bill_type::BillTypeDescriptor;
use crate::phrases::normalize;
use crate::progress::ActionRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::warn;

/// One action as it arrives from a source feed. All fields optional; the
/// aliases cover the property-name variants seen across feed endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAction {
    #[serde(alias = "action", default)]
    pub text: Option<String>,
    #[serde(alias = "actionDate", alias = "action_date", default)]
    pub date: Option<String>,
}

impl RawAction {
    /// Convert to a strict record. Missing text becomes an empty string (the
    /// caller filters those out via `normalize_actions`); missing or
    /// malformed dates pin to the Unix epoch so sorting never fails.
    pub fn into_record(self) -> ActionRecord {
        let date = match self.date.as_deref() {
            Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
                warn!(raw, "unparsable action date; pinning to epoch");
                DateTime::<Utc>::UNIX_EPOCH
            }),
            None => DateTime::<Utc>::UNIX_EPOCH,
        };
        ActionRecord {
            date,
            text: self.text.unwrap_or_default(),
        }
    }
}

/// Bill metadata as it arrives from a source feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBill {
    #[serde(alias = "billNumber", alias = "bill_number", default)]
    pub number: Option<String>,
    #[serde(default)]
    pub chamber: Option<String>,
}

impl RawBill {
    pub fn descriptor(&self) -> BillTypeDescriptor {
        BillTypeDescriptor::from_designator(
            self.number.as_deref().unwrap_or(""),
            self.chamber.as_deref(),
        )
    }
}

/// Accepts RFC 3339 ("2025-01-03T12:00:00Z"), a bare datetime, or a bare
/// date (midnight UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Normalize a feed batch: drop blank-text records, deduplicate on
/// `(date, normalized text)` (two records with the same normalized text and
/// date are the same event), and sort ascending by date.
pub fn normalize_actions(raw: Vec<RawAction>) -> Vec<ActionRecord> {
    let mut records: Vec<ActionRecord> = raw
        .into_iter()
        .map(RawAction::into_record)
        .filter(|r| !r.text.trim().is_empty())
        .collect();

    records.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| normalize(&a.text).cmp(&normalize(&b.text)))
    });
    records.dedup_by(|a, b| a.date == b.date && normalize(&a.text) == normalize(&b.text));
    records
}
