//! Compiled instructions and the stitch-vocabulary tagger.

use serde::{Deserialize, Serialize};

/// The fixed crochet stitch vocabulary recognized by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StitchType {
    Sc,
    Inc,
    Dec,
    Hdc,
    Dc,
    Tr,
    SlSt,
    Ch,
}

/// Scan order matters: `hdc` must claim its match before `dc` would.
pub const STITCH_VOCABULARY: [StitchType; 8] = [
    StitchType::Sc,
    StitchType::Inc,
    StitchType::Dec,
    StitchType::Hdc,
    StitchType::Dc,
    StitchType::Tr,
    StitchType::SlSt,
    StitchType::Ch,
];

impl StitchType {
    pub fn token(self) -> &'static str {
        match self {
            StitchType::Sc => "sc",
            StitchType::Inc => "inc",
            StitchType::Dec => "dec",
            StitchType::Hdc => "hdc",
            StitchType::Dc => "dc",
            StitchType::Tr => "tr",
            StitchType::SlSt => "slst",
            StitchType::Ch => "ch",
        }
    }

    /// Expansion shown on the abbreviations page.
    pub fn expansion(self) -> &'static str {
        match self {
            StitchType::Sc => "single crochet",
            StitchType::Inc => "increase (2 sc in the same stitch)",
            StitchType::Dec => "decrease (single crochet 2 together)",
            StitchType::Hdc => "half double crochet",
            StitchType::Dc => "double crochet",
            StitchType::Tr => "treble crochet",
            StitchType::SlSt => "slip stitch",
            StitchType::Ch => "chain",
        }
    }
}

/// True when `token` occurs in `text` as its own word: the surrounding
/// characters must not be alphanumeric, so `dc` does not match inside
/// `hdc` and `inc` does not match inside `increase`.
fn contains_token(text: &str, token: &str) -> bool {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(pos) = text[start..].find(token) {
        let begin = start + pos;
        let end = begin + token.len();
        let before_ok = begin == 0 || !bytes[begin - 1].is_ascii_alphanumeric();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
        start = begin + 1;
    }
    false
}

/// Tag the stitches an instruction uses. A heuristic vocabulary scan over
/// arbitrary prose, not a grammar parser; defaults to `[sc]` when nothing
/// matches.
pub fn extract_stitches(text: &str) -> Vec<StitchType> {
    let lower = text.to_lowercase();
    let found: Vec<StitchType> = STITCH_VOCABULARY
        .iter()
        .copied()
        .filter(|s| contains_token(&lower, s.token()))
        .collect();
    if found.is_empty() {
        vec![StitchType::Sc]
    } else {
        found
    }
}

/// One fully resolved construction row, ready for rendering. Derived data:
/// recomputed on every compile, never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledInstruction {
    /// None for synthetic rows (stuffing reminders) inserted between
    /// numbered rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_number: Option<u32>,
    pub text: String,
    pub color_key: String,
    pub stitches: Vec<StitchType>,
}

impl CompiledInstruction {
    pub fn synthetic(text: impl Into<String>, color_key: impl Into<String>) -> Self {
        Self {
            row_number: None,
            text: text.into(),
            color_key: color_key.into(),
            stitches: Vec::new(),
        }
    }
}
