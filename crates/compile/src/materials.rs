//! The materials calculator: yardage, stuffing, and notions bill.
//!
//! All lookup tables are process-wide constant data, loaded once and
//! never mutated, so they are safe to share across threads.

use crate::customize::Customizations;
use crate::palette::ColorAssignment;
use houndstitch_template::{BodyPart, BodyPartTemplate, BreedPreset, SizeKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Waste buffer applied to every color's raw yardage.
const WASTE_BUFFER: f32 = 0.15;
/// Flat per-color allowance for joins and color changes, in yards.
const JOINING_ALLOWANCE: f32 = 3.0;
/// No skein estimate goes below this, in yards.
const MINIMUM_YARDS: u32 = 3;

/// Default yardage for palette colors no part's zones account for; small
/// detail colors are not zone-tracked.
const UNTRACKED_DEFAULT_YARDS: f32 = 5.0;
const UNTRACKED_NOSE_YARDS: f32 = 3.0;

/// Base yardage per finished piece, keyed by size and body part.
pub fn base_yardage(size: SizeKey, part: BodyPart) -> u32 {
    match (size, part) {
        (SizeKey::Small, BodyPart::Head) => 18,
        (SizeKey::Medium, BodyPart::Head) => 24,
        (SizeKey::Large, BodyPart::Head) => 32,
        (SizeKey::Small, BodyPart::Body) => 25,
        (SizeKey::Medium, BodyPart::Body) => 34,
        (SizeKey::Large, BodyPart::Body) => 45,
        (SizeKey::Small, BodyPart::FrontLeg) => 6,
        (SizeKey::Medium, BodyPart::FrontLeg) => 8,
        (SizeKey::Large, BodyPart::FrontLeg) => 11,
        (SizeKey::Small, BodyPart::BackLeg) => 7,
        (SizeKey::Medium, BodyPart::BackLeg) => 9,
        (SizeKey::Large, BodyPart::BackLeg) => 12,
        (SizeKey::Small, BodyPart::Ear) => 4,
        (SizeKey::Medium, BodyPart::Ear) => 5,
        (SizeKey::Large, BodyPart::Ear) => 7,
        (SizeKey::Small, BodyPart::Tail) => 4,
        (SizeKey::Medium, BodyPart::Tail) => 5,
        (SizeKey::Large, BodyPart::Tail) => 7,
        (SizeKey::Small, BodyPart::Snout) => 5,
        (SizeKey::Medium, BodyPart::Snout) => 7,
        (SizeKey::Large, BodyPart::Snout) => 9,
        (SizeKey::Small, BodyPart::Nose) => 2,
        (SizeKey::Medium, BodyPart::Nose) => 3,
        (SizeKey::Large, BodyPart::Nose) => 4,
        (SizeKey::Small, BodyPart::EyePatch) => 2,
        (SizeKey::Medium, BodyPart::EyePatch) => 3,
        (SizeKey::Large, BodyPart::EyePatch) => 4,
    }
}

pub fn stuffing_ounces(size: SizeKey) -> f32 {
    match size {
        SizeKey::Small => 1.5,
        SizeKey::Medium => 2.5,
        SizeKey::Large => 4.0,
    }
}

pub fn safety_eye_size(size: SizeKey) -> &'static str {
    match size {
        SizeKey::Small => "6-8mm",
        SizeKey::Medium => "9-10mm",
        SizeKey::Large => "12mm",
    }
}

pub fn finished_height(size: SizeKey) -> &'static str {
    match size {
        SizeKey::Small => "6-7 inches (15-18 cm)",
        SizeKey::Medium => "8-10 inches (20-25 cm)",
        SizeKey::Large => "11-13 inches (28-33 cm)",
    }
}

const DEFAULT_HOOK_SIZE: &str = "4.0 mm (G/6)";
const DEFAULT_YARN_WEIGHT: &str = "Worsted weight (4)";

/// The complete materials bill for one compiled pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMaterials {
    pub size_key: SizeKey,
    /// The palette with per-color yardage resolved.
    pub yarn: Vec<ColorAssignment>,
    pub total_yardage: u32,
    pub stuffing_ounces: f32,
    pub safety_eye_size: String,
    pub finished_height: String,
    pub hook_size: String,
    pub yarn_weight: String,
    pub notions: Vec<String>,
}

/// Aggregate yardage per color across all enabled body parts and resolve
/// the full bill for the derived size key.
pub fn compute_materials(
    preset: &BreedPreset,
    customizations: &Customizations,
    palette: &[ColorAssignment],
) -> PatternMaterials {
    let size_key = SizeKey::from_multiplier(customizations.size_multiplier);
    let mut per_color: HashMap<String, f32> = HashMap::new();

    for template in preset.parts_for_size(size_key) {
        if !customizations.is_enabled(template.part) {
            continue;
        }
        let base = (base_yardage(size_key, template.part) * template.quantity) as f32;
        distribute_part_yardage(template, base, &mut per_color);
    }

    let mut yarn: Vec<ColorAssignment> = palette.to_vec();
    for assignment in &mut yarn {
        let raw = per_color
            .get(&assignment.color_key)
            .copied()
            .unwrap_or(if assignment.color_key == "nose" {
                UNTRACKED_NOSE_YARDS
            } else {
                UNTRACKED_DEFAULT_YARDS
            });
        let buffered = raw * (1.0 + WASTE_BUFFER) + JOINING_ALLOWANCE;
        assignment.yardage = Some((buffered.ceil() as u32).max(MINIMUM_YARDS));
    }
    let total_yardage = yarn.iter().filter_map(|a| a.yardage).sum();

    let variant = preset.size_variant(size_key);
    let eye_size = safety_eye_size(size_key).to_string();

    PatternMaterials {
        size_key,
        yarn,
        total_yardage,
        stuffing_ounces: stuffing_ounces(size_key),
        safety_eye_size: eye_size.clone(),
        finished_height: finished_height(size_key).to_string(),
        hook_size: variant
            .map(|v| v.hook_size.clone())
            .unwrap_or_else(|| DEFAULT_HOOK_SIZE.to_string()),
        yarn_weight: variant
            .map(|v| v.yarn_weight.clone())
            .unwrap_or_else(|| DEFAULT_YARN_WEIGHT.to_string()),
        notions: vec![
            format!("Safety eyes, {} (1 pair)", eye_size),
            format!(
                "Polyester fiberfill stuffing, about {} oz",
                stuffing_ounces(size_key)
            ),
            "Yarn needle for assembly".to_string(),
            "Stitch markers".to_string(),
            "Black embroidery floss for details".to_string(),
        ],
    }
}

/// Split one part's yardage across its zone colors proportionally to
/// zone row span over non-terminal rows; whatever the zones leave
/// uncovered attributes to `primary`, matching the interpreter's default
/// color resolution. Parts without zones attribute everything to `primary`.
fn distribute_part_yardage(
    template: &BodyPartTemplate,
    base: f32,
    per_color: &mut HashMap<String, f32>,
) {
    let fabric_rows = template.non_terminal_row_count();
    if template.color_zones.is_empty() || fabric_rows == 0 {
        *per_color.entry("primary".to_string()).or_default() += base;
        return;
    }

    let mut covered_fraction = 0.0;
    for zone in &template.color_zones {
        // Count only fabric-producing rows inside the zone span.
        let covered_rows = template
            .rows
            .iter()
            .filter(|r| !r.is_terminal() && zone.covers(r.row_number))
            .count() as f32;
        let fraction = covered_rows / fabric_rows as f32;
        if fraction > 0.0 {
            *per_color.entry(zone.color_key.clone()).or_default() += base * fraction;
            covered_fraction += fraction;
        }
    }
    let remainder = (1.0 - covered_fraction).max(0.0);
    if remainder > f32::EPSILON {
        *per_color.entry("primary".to_string()).or_default() += base * remainder;
    }
}
