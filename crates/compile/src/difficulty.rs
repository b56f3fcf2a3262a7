//! Difficulty-level transforms.
//!
//! All three transforms are applied at exactly one point, inside the
//! interpreter. The customizer only stores the level and recompiles, so
//! a transform can never be applied twice to the same instruction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Simplified,
    #[default]
    Standard,
    Detailed,
}

/// Collapse repeat notation for the simplified level. A parenthesized
/// group reads as repeat notation; the group and everything after it is
/// replaced, since the trailing text is the repeat count.
pub fn simplify_text(text: &str) -> String {
    let Some(open) = text.find('(') else {
        return text.to_string();
    };
    let rest = &text[open..];
    if !rest.contains(')') {
        return text.to_string();
    }
    let replacement = if rest.contains("inc") || rest.contains("dec") {
        "work increases/decreases evenly around"
    } else {
        "repeat pattern around"
    };
    format!("{}{}", &text[..open], replacement)
}

/// Technique clarifications appended for the detailed level. Substring
/// match, case-sensitive to the source vocabulary; each marker fires at
/// most once per instruction.
pub fn detail_annotations(text: &str) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if text.contains("Magic ring") {
        notes.push("(magic ring: wrap yarn twice around two fingers and work the stitches into the loop, then pull tight)");
    }
    if text.contains("inc") {
        notes.push("(inc: work 2 sc into the same stitch)");
    }
    if text.contains("dec") {
        notes.push("(dec: use an invisible decrease, inserting the hook under the front loops of the next 2 stitches)");
    }
    notes
}

pub fn apply_detail(text: &str) -> String {
    let notes = detail_annotations(text);
    if notes.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", text, notes.join(" "))
    }
}
