//! The input record from the external vision-analysis collaborator.
//!
//! The engine never calls the collaborator; it receives one of these,
//! already populated, and treats it as read-only. When the collaborator
//! omits per-body-part analyses, [`DogAnalysis::effective_part_analyses`]
//! synthesizes a deterministic default from the top-level palette. That
//! is a normal path, not an error path.

use crate::part::BodyPart;
use houndstitch_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarShape {
    Floppy,
    Pointed,
    Rounded,
    Folded,
}

impl EarShape {
    pub fn attachment_hint(self) -> &'static str {
        match self {
            EarShape::Floppy => "fold the ears forward and sew along the top edge so they hang down",
            EarShape::Pointed => "sew the ears upright, pinching the base slightly so they stand",
            EarShape::Rounded => "sew the ears flat against the head with the curve facing out",
            EarShape::Folded => "sew the base upright, then tack the tip down for the fold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailType {
    Long,
    Short,
    Curled,
    Bushy,
    Docked,
}

impl TailType {
    pub fn attachment_hint(self) -> &'static str {
        match self {
            TailType::Long => "attach at the back seam, angled slightly upward",
            TailType::Short => "attach centered on the back seam",
            TailType::Curled => "attach and tack the tip to the body so the curl holds",
            TailType::Bushy => "attach at the back seam and brush the yarn out for volume",
            TailType::Docked => "attach the short stub centered on the back seam",
        }
    }
}

/// Body-proportion ratios in documented ranges; the compiler treats them
/// as descriptive only (templates carry their own per-part proportions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProportions {
    /// Head width relative to body width, roughly 0.5..1.2.
    pub head_to_body: f32,
    /// Leg length relative to body height, roughly 0.3..1.0.
    pub leg_length: f32,
    /// Snout length relative to head depth, roughly 0.2..0.8.
    pub snout_length: f32,
}

impl Default for BodyProportions {
    fn default() -> Self {
        Self {
            head_to_body: 0.8,
            leg_length: 0.6,
            snout_length: 0.5,
        }
    }
}

/// Per-body-part detection detail, when the collaborator provides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPartAnalysis {
    pub part: BodyPart,
    pub primary_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crochet_guidance: Option<String>,
}

/// The full analysis record for one photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogAnalysis {
    pub breed_id: String,
    pub confidence: f32,
    pub primary_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Color>,
    pub ear_shape: EarShape,
    pub tail_type: TailType,
    #[serde(default)]
    pub proportions: BodyProportions,
    #[serde(default)]
    pub markings: Vec<String>,
    #[serde(default)]
    pub part_analyses: Vec<BodyPartAnalysis>,
}

impl DogAnalysis {
    pub fn part_analysis(&self, part: BodyPart) -> Option<&BodyPartAnalysis> {
        self.part_analyses.iter().find(|a| a.part == part)
    }

    /// The provided per-part analyses, or a synthesized default when the
    /// collaborator omitted them. Pure and deterministic.
    pub fn effective_part_analyses(&self) -> Vec<BodyPartAnalysis> {
        if !self.part_analyses.is_empty() {
            return self.part_analyses.clone();
        }
        self.synthesized_part_analyses()
    }

    /// Default per-part coloring from the top-level palette: ears and tail
    /// take the secondary color, the snout takes the tertiary, the nose
    /// works down the nose preference chain, everything else is primary.
    pub fn synthesized_part_analyses(&self) -> Vec<BodyPartAnalysis> {
        let secondary = self.secondary_color.unwrap_or(self.primary_color);
        let tertiary = self.tertiary_color.unwrap_or(self.primary_color);
        let nose = self.accent_color.unwrap_or(Color::BLACK);

        crate::part::CANONICAL_ORDER
            .iter()
            .map(|&part| {
                let primary_color = match part {
                    BodyPart::Ear | BodyPart::Tail => secondary,
                    BodyPart::Snout => tertiary,
                    BodyPart::Nose => nose,
                    _ => self.primary_color,
                };
                BodyPartAnalysis {
                    part,
                    primary_color,
                    shape_notes: Some(synthesized_shape_note(part, &self.proportions)),
                    crochet_guidance: None,
                }
            })
            .collect()
    }
}

fn synthesized_shape_note(part: BodyPart, proportions: &BodyProportions) -> String {
    match part {
        BodyPart::Head => {
            if proportions.head_to_body > 0.9 {
                "Broad head, wide relative to the body".to_string()
            } else {
                "Head proportionate to the body".to_string()
            }
        }
        BodyPart::FrontLeg | BodyPart::BackLeg => {
            if proportions.leg_length > 0.7 {
                "Long legs relative to the body".to_string()
            } else {
                "Short, sturdy legs".to_string()
            }
        }
        BodyPart::Snout => {
            if proportions.snout_length > 0.6 {
                "Long snout".to_string()
            } else {
                "Short snout".to_string()
            }
        }
        _ => format!("{} worked in the standard shape", part.display_name()),
    }
}
