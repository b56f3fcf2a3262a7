//! Breed preset templates, the input boundary from the preset collaborator.
//!
//! A preset is immutable once loaded. `BreedPreset::validate` enforces the
//! one-zone-per-row invariant at load time; violating it is undefined
//! behavior downstream, so presets that fail validation must be rejected.

use crate::part::BodyPart;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("body part '{part}' has overlapping color zones at row {row}")]
    OverlappingZones { part: String, row: u32 },
    #[error("body part '{part}' has quantity 0")]
    ZeroQuantity { part: String },
}

/// One instruction line of a body part, with its expected stitch count.
/// `stitch_count == 0` or fasten-off vocabulary in the text marks the
/// terminal row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowTemplate {
    pub row_number: u32,
    pub instruction: String,
    pub stitch_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_key: Option<String>,
}

impl RowTemplate {
    pub fn new(row_number: u32, instruction: impl Into<String>, stitch_count: u32) -> Self {
        Self {
            row_number,
            instruction: instruction.into(),
            stitch_count,
            color_key: None,
        }
    }

    pub fn with_color(mut self, color_key: impl Into<String>) -> Self {
        self.color_key = Some(color_key.into());
        self
    }

    /// Fasten-off vocabulary scan used for terminal-row detection.
    pub fn is_terminal(&self) -> bool {
        if self.stitch_count == 0 {
            return true;
        }
        let lower = self.instruction.to_lowercase();
        lower.contains("fasten off") || lower.contains("finish off")
    }
}

/// A contiguous row range assigned a single color key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorZone {
    pub start_row: u32,
    pub end_row: u32,
    pub color_key: String,
    #[serde(default)]
    pub description: String,
}

impl ColorZone {
    pub fn covers(&self, row_number: u32) -> bool {
        (self.start_row..=self.end_row).contains(&row_number)
    }

    pub fn row_span(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row) + 1
    }
}

/// The construction template for one body part. Owned by a breed preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPartTemplate {
    pub part: BodyPart,
    pub quantity: u32,
    pub rows: Vec<RowTemplate>,
    #[serde(default)]
    pub color_zones: Vec<ColorZone>,
    #[serde(default = "default_proportion")]
    pub proportions: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_note: Option<String>,
}

fn default_proportion() -> f32 {
    1.0
}

impl BodyPartTemplate {
    pub fn new(part: BodyPart, quantity: u32, rows: Vec<RowTemplate>) -> Self {
        Self {
            part,
            quantity,
            rows,
            color_zones: Vec::new(),
            proportions: 1.0,
            assembly_note: None,
        }
    }

    /// The zone covering a row, if any. Validation guarantees at most one.
    pub fn zone_for_row(&self, row_number: u32) -> Option<&ColorZone> {
        self.color_zones.iter().find(|z| z.covers(row_number))
    }

    /// Rows that produce fabric; terminal rows are excluded from yardage
    /// denominators since they contribute none.
    pub fn non_terminal_row_count(&self) -> u32 {
        self.rows.iter().filter(|r| !r.is_terminal()).count() as u32
    }
}

/// Size-specific overrides for a preset. `parts`, when present, replaces
/// the preset's entire body-part set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariant {
    pub hook_size: String,
    pub yarn_weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<BodyPartTemplate>>,
}

/// Derived from the size multiplier via fixed breakpoints; keys the
/// yardage, stuffing, and safety-eye lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKey {
    Small,
    Medium,
    Large,
}

impl SizeKey {
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier <= 0.85 {
            SizeKey::Small
        } else if multiplier >= 1.3 {
            SizeKey::Large
        } else {
            SizeKey::Medium
        }
    }
}

/// One breed's complete construction template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedPreset {
    pub breed_id: String,
    pub display_name: String,
    pub parts: Vec<BodyPartTemplate>,
    #[serde(default)]
    pub assembly_steps: Vec<String>,
    #[serde(default)]
    pub size_variants: Vec<(SizeKey, SizeVariant)>,
}

impl BreedPreset {
    pub fn part(&self, part: BodyPart) -> Option<&BodyPartTemplate> {
        self.parts.iter().find(|t| t.part == part)
    }

    pub fn size_variant(&self, key: SizeKey) -> Option<&SizeVariant> {
        self.size_variants
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// The body-part set for a given size: the variant's override when it
    /// carries one, else the preset's base parts.
    pub fn parts_for_size(&self, key: SizeKey) -> &[BodyPartTemplate] {
        self.size_variant(key)
            .and_then(|v| v.parts.as_deref())
            .unwrap_or(&self.parts)
    }

    /// Load-time invariant check: no row may be covered by two zones, and
    /// every part makes at least one piece.
    pub fn validate(&self) -> Result<(), TemplateError> {
        for template in &self.parts {
            if template.quantity == 0 {
                return Err(TemplateError::ZeroQuantity {
                    part: template.part.key().to_string(),
                });
            }
            for row in &template.rows {
                let covering = template
                    .color_zones
                    .iter()
                    .filter(|z| z.covers(row.row_number))
                    .count();
                if covering > 1 {
                    return Err(TemplateError::OverlappingZones {
                        part: template.part.key().to_string(),
                        row: row.row_number,
                    });
                }
            }
        }
        Ok(())
    }
}
