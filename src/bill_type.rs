//! Bill designator parsing: "H.R. 1", "S.RES. 14", "H.J.RES. 7" (dotted or
//! undotted) into a chamber of origin and resolution kind. Parsing is total;
//! anything unrecognized degrades to `{Unknown, Bill}` so stage derivation
//! always has a default track.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Chamber in which a bill or resolution was first introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chamber {
    House,
    Senate,
    Unknown,
}

/// Constitutional category of a legislative item. Each kind has a distinct
/// progress track (resolutions never reach the President, concurrent
/// resolutions need both chambers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    Bill,
    SimpleResolution,
    ConcurrentResolution,
    JointResolution,
}

/// Chamber of origin + resolution kind; together they fully determine the
/// stage sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillTypeDescriptor {
    pub chamber_of_origin: Chamber,
    pub resolution_kind: ResolutionKind,
}

/// Bare Senate bill numbers: "S. 1", "S 1", "S.1". Anchored so "S.RES." and
/// ordinary words starting with "s" don't match.
static SENATE_BILL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^s\.?\s*\d").expect("senate bill regex"));

impl BillTypeDescriptor {
    /// Default track when nothing about the bill is known.
    pub fn unknown() -> Self {
        Self {
            chamber_of_origin: Chamber::Unknown,
            resolution_kind: ResolutionKind::Bill,
        }
    }

    /// Parse a designator string ("H.R. 1", "SCONRES 5"), falling back to the
    /// chamber string when the designator carries no chamber prefix.
    pub fn from_designator(number: &str, chamber: Option<&str>) -> Self {
        let n = number
            .trim()
            .to_ascii_uppercase()
            .replace(['.', ' '], "");

        // Resolution prefixes first: "HR" is a prefix of nothing else, but
        // "HRES"/"HJRES"/"HCONRES" all start with "H", so longest-first.
        let kind_from_prefix = [
            ("HCONRES", Chamber::House, ResolutionKind::ConcurrentResolution),
            ("SCONRES", Chamber::Senate, ResolutionKind::ConcurrentResolution),
            ("HJRES", Chamber::House, ResolutionKind::JointResolution),
            ("SJRES", Chamber::Senate, ResolutionKind::JointResolution),
            ("HRES", Chamber::House, ResolutionKind::SimpleResolution),
            ("SRES", Chamber::Senate, ResolutionKind::SimpleResolution),
            ("HR", Chamber::House, ResolutionKind::Bill),
        ]
        .iter()
        .find(|(prefix, _, _)| n.starts_with(prefix))
        .map(|(_, c, k)| (*c, *k));

        if let Some((chamber_of_origin, resolution_kind)) = kind_from_prefix {
            return Self {
                chamber_of_origin,
                resolution_kind,
            };
        }

        if SENATE_BILL_RE.is_match(number.trim()) {
            return Self {
                chamber_of_origin: Chamber::Senate,
                resolution_kind: ResolutionKind::Bill,
            };
        }

        // No usable prefix: fall back to the chamber string.
        Self {
            chamber_of_origin: parse_chamber(chamber),
            resolution_kind: ResolutionKind::Bill,
        }
    }
}

fn parse_chamber(chamber: Option<&str>) -> Chamber {
    match chamber {
        Some(c) => {
            let lc = c.to_ascii_lowercase();
            if lc.contains("house") {
                Chamber::House
            } else if lc.contains("senate") {
                Chamber::Senate
            } else {
                Chamber::Unknown
            }
        }
        None => Chamber::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_and_undotted_forms_parse_alike() {
        for n in ["H.R. 1", "HR 1", "H.R.1"] {
            let d = BillTypeDescriptor::from_designator(n, None);
            assert_eq!(d.chamber_of_origin, Chamber::House);
            assert_eq!(d.resolution_kind, ResolutionKind::Bill);
        }
        for n in ["S.CON.RES. 5", "SCONRES 5"] {
            let d = BillTypeDescriptor::from_designator(n, None);
            assert_eq!(d.chamber_of_origin, Chamber::Senate);
            assert_eq!(d.resolution_kind, ResolutionKind::ConcurrentResolution);
        }
    }

    #[test]
    fn senate_bills_need_the_anchored_pattern() {
        let d = BillTypeDescriptor::from_designator("S. 1234", None);
        assert_eq!(d.chamber_of_origin, Chamber::Senate);
        assert_eq!(d.resolution_kind, ResolutionKind::Bill);
        // "S.RES." must not fall through to the bare-Senate pattern
        let r = BillTypeDescriptor::from_designator("S.RES. 14", None);
        assert_eq!(r.resolution_kind, ResolutionKind::SimpleResolution);
    }

    #[test]
    fn resolution_prefixes_resolve_longest_first() {
        let d = BillTypeDescriptor::from_designator("H.J.RES. 7", None);
        assert_eq!(d.resolution_kind, ResolutionKind::JointResolution);
        let d = BillTypeDescriptor::from_designator("H.RES. 7", None);
        assert_eq!(d.resolution_kind, ResolutionKind::SimpleResolution);
    }

    #[test]
    fn chamber_string_is_the_fallback() {
        let d = BillTypeDescriptor::from_designator("1234", Some("House of Representatives"));
        assert_eq!(d.chamber_of_origin, Chamber::House);
        assert_eq!(d.resolution_kind, ResolutionKind::Bill);

        let d = BillTypeDescriptor::from_designator("", Some("senate"));
        assert_eq!(d.chamber_of_origin, Chamber::Senate);
    }

    #[test]
    fn unrecognized_input_degrades_to_unknown_bill() {
        let d = BillTypeDescriptor::from_designator("???", None);
        assert_eq!(d, BillTypeDescriptor::unknown());
    }
}
