//! The closed body-part vocabulary.
//!
//! Customization maps and presets are keyed by this enum rather than by
//! free-form strings, so "what part does this refer to" is type-checked
//! at the compiler's boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyPart {
    Head,
    Body,
    FrontLeg,
    BackLeg,
    Ear,
    Tail,
    Snout,
    Nose,
    EyePatch,
}

/// Document section order. Stable across recompiles so that two compiles
/// of the same inputs diff cleanly.
pub const CANONICAL_ORDER: [BodyPart; 9] = [
    BodyPart::Head,
    BodyPart::Body,
    BodyPart::FrontLeg,
    BodyPart::BackLeg,
    BodyPart::Ear,
    BodyPart::Tail,
    BodyPart::Snout,
    BodyPart::Nose,
    BodyPart::EyePatch,
];

impl BodyPart {
    /// camelCase key used in serialized maps and `bp-<part>` color keys.
    pub fn key(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Body => "body",
            BodyPart::FrontLeg => "frontLeg",
            BodyPart::BackLeg => "backLeg",
            BodyPart::Ear => "ear",
            BodyPart::Tail => "tail",
            BodyPart::Snout => "snout",
            BodyPart::Nose => "nose",
            BodyPart::EyePatch => "eyePatch",
        }
    }

    /// Human-readable section title.
    pub fn display_name(self) -> &'static str {
        match self {
            BodyPart::Head => "Head",
            BodyPart::Body => "Body",
            BodyPart::FrontLeg => "Front Leg",
            BodyPart::BackLeg => "Back Leg",
            BodyPart::Ear => "Ear",
            BodyPart::Tail => "Tail",
            BodyPart::Snout => "Snout",
            BodyPart::Nose => "Nose",
            BodyPart::EyePatch => "Eye Patch",
        }
    }

    /// How firmly the finished piece is stuffed. Flat pieces return None.
    pub fn stuffing_firmness(self) -> Option<&'static str> {
        match self {
            BodyPart::Head => Some("Stuff firmly before closing"),
            BodyPart::Body => Some("Stuff firmly, shaping as you close"),
            BodyPart::FrontLeg | BodyPart::BackLeg => Some("Stuff lightly so the legs stay posable"),
            BodyPart::Tail => Some("Stuff lightly, or leave unstuffed for a floppy tail"),
            BodyPart::Snout => Some("Stuff moderately to hold the muzzle shape"),
            BodyPart::Ear | BodyPart::Nose | BodyPart::EyePatch => None,
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
