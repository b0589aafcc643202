//! Milestone phrase sets (defaults embedded from `config/phrases.toml`,
//! optionally overridden from disk with mtime-based hot reload).
//!
//! Phrases are matched case-insensitively as substrings of the normalized
//! action text. The sets control WHAT triggers each milestone family; the
//! precedence BETWEEN families is fixed in `classify` and `progress`.

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::SystemTime,
};

/// Compiled-in defaults. Kept in a data file so the lists stay reviewable
/// next to any on-disk override.
static DEFAULT_PHRASES: Lazy<PhraseSet> = Lazy::new(|| {
    // Deserialized through a mirror struct with every field required: the
    // container-level `#[serde(default)]` on `PhraseSet` calls
    // `PhraseSet::default()`, which reads this `Lazy` — going through it
    // while initializing would deadlock.
    #[derive(Deserialize)]
    struct Embedded {
        enacted: Vec<String>,
        to_president: Vec<String>,
        vetoed: Vec<String>,
        passed_congress: Vec<String>,
        passed_house: Vec<String>,
        passed_senate: Vec<String>,
        reported: Vec<String>,
        referred: Vec<String>,
        agreed_to: Vec<String>,
        introduced: Vec<String>,
    }

    let raw = include_str!("../config/phrases.toml");
    let e = toml::from_str::<Embedded>(raw).expect("valid embedded phrase config");
    PhraseSet {
        enacted: e.enacted,
        to_president: e.to_president,
        vetoed: e.vetoed,
        passed_congress: e.passed_congress,
        passed_house: e.passed_house,
        passed_senate: e.passed_senate,
        reported: e.reported,
        referred: e.referred,
        agreed_to: e.agreed_to,
        introduced: e.introduced,
    }
});

/// One phrase list per milestone family. Every field serde-defaults to the
/// compiled-in list, so a partial override file is valid.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhraseSet {
    pub enacted: Vec<String>,
    pub to_president: Vec<String>,
    pub vetoed: Vec<String>,
    pub passed_congress: Vec<String>,
    pub passed_house: Vec<String>,
    pub passed_senate: Vec<String>,
    pub reported: Vec<String>,
    pub referred: Vec<String>,
    pub agreed_to: Vec<String>,
    pub introduced: Vec<String>,
}

impl Default for PhraseSet {
    fn default() -> Self {
        DEFAULT_PHRASES.clone()
    }
}

impl PhraseSet {
    /// Built-in phrase lists.
    pub fn builtin() -> &'static PhraseSet {
        &DEFAULT_PHRASES
    }

    /// True if any phrase in `list` occurs in the already-normalized `text`.
    pub(crate) fn any_match(text: &str, list: &[String]) -> bool {
        list.iter()
            .any(|p| !p.is_empty() && text.contains(normalize(p).as_str()))
    }
}

/// Load a phrase set from an explicit path. Supports TOML or JSON.
pub fn load_phrases_file(path: &Path) -> Result<PhraseSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading phrase config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_phrases(&content, ext.as_str())
}

fn parse_phrases(s: &str, hint_ext: &str) -> Result<PhraseSet> {
    if hint_ext == "json" {
        return serde_json::from_str(s).context("parsing JSON phrase config");
    }
    if let Ok(v) = toml::from_str::<PhraseSet>(s) {
        return Ok(v);
    }
    if let Ok(v) = serde_json::from_str::<PhraseSet>(s) {
        return Ok(v);
    }
    Err(anyhow!("unsupported phrase config format"))
}

/// Hot-reload wrapper for an on-disk phrase override. The file is re-read on
/// mtime change at each `current()` call; a missing or unparsable file keeps
/// the last good set (initially the built-in defaults).
#[derive(Debug)]
pub struct HotReloadPhrases {
    path: PathBuf,
    inner: RwLock<State>,
}

#[derive(Debug)]
struct State {
    phrases: PhraseSet,
    last_modified: Option<SystemTime>,
}

impl HotReloadPhrases {
    pub fn new(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config/phrases.toml"));
        Self {
            path,
            inner: RwLock::new(State {
                phrases: PhraseSet::default(),
                last_modified: None,
            }),
        }
    }

    pub fn current(&self) -> PhraseSet {
        let needs_reload = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(mtime) => {
                let guard = self.inner.read().unwrap();
                guard.last_modified != Some(mtime)
            }
            Err(_) => false,
        };

        if !needs_reload {
            return self.inner.read().unwrap().phrases.clone();
        }

        let mut guard = self.inner.write().unwrap();
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Ok(mtime) = meta.modified() {
                if guard.last_modified != Some(mtime) {
                    if let Ok(phrases) = load_phrases_file(&self.path) {
                        guard.phrases = phrases;
                        guard.last_modified = Some(mtime);
                    }
                }
            }
        }
        guard.phrases.clone()
    }
}

/// Lowercase and condense whitespace so substring matching is insensitive to
/// casing and spacing quirks in the source feed.
pub(crate) fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        let lc = ch.to_ascii_lowercase();
        if lc.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(lc);
            last_space = false;
        }
    }
    out.trim().to_string()
}
