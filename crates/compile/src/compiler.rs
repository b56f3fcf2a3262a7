//! The pattern compiler: orchestrates interpretation, materials, and
//! assembly into a complete in-memory pattern document.
//!
//! `compile` is a pure function of its inputs. It clones what it needs
//! and retains no references after returning; every call produces a
//! fresh `Pattern`, so a failed compile leaves any previous pattern in
//! the caller's hands untouched.

use crate::customize::Customizations;
use crate::error::CompileError;
use crate::instruction::CompiledInstruction;
use crate::interpreter::{InterpretOptions, interpret};
use crate::materials::{PatternMaterials, compute_materials};
use crate::palette::{ColorAssignment, seed_palette, yarn_label};
use chrono::{DateTime, Utc};
use houndstitch_template::{
    BodyPart, BodyPartTemplate, BreedPreset, CANONICAL_ORDER, DogAnalysis, SizeKey,
};
use houndstitch_types::{PatternId, classify};
use serde::{Deserialize, Serialize};

/// Minutes of work per row, before scaling.
const MINUTES_PER_ROW: f32 = 2.0;

const CLOSING_TIPS: [&str; 3] = [
    "Weave in all yarn ends twice in different directions so they never work loose.",
    "Pin every piece in place and check the pose from all angles before sewing.",
    "Use the long fasten-off tails for sewing; they match the piece's color exactly.",
];

/// One body part's compiled section of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledSection {
    pub part: BodyPart,
    /// Section title; carries a "(make N)" suffix for quantity > 1.
    pub display_name: String,
    pub instructions: Vec<CompiledInstruction>,
    pub estimated_time_hours: f32,
    pub notes: Vec<String>,
}

/// The aggregate root: one complete compiled pattern document. Owned by
/// the caller and replaced wholesale by every subsequent compile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub id: PatternId,
    pub breed_id: String,
    pub display_name: String,
    pub analysis: DogAnalysis,
    pub customizations: Customizations,
    pub sections: Vec<CompiledSection>,
    pub materials: PatternMaterials,
    pub assembly: Vec<String>,
    pub total_time_hours: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pattern {
    pub fn size_key(&self) -> SizeKey {
        self.materials.size_key
    }
}

/// Compile a full pattern from an analysis, a breed preset, and the
/// caller's customizations.
pub fn compile(
    analysis: &DogAnalysis,
    preset: &BreedPreset,
    customizations: &Customizations,
) -> Result<Pattern, CompileError> {
    preset.validate()?;

    let mut effective = customizations.clone();
    if effective.color_assignments.is_empty() {
        effective.color_assignments = seed_palette(analysis);
    }
    let palette = effective.color_assignments.clone();

    let size_key = SizeKey::from_multiplier(effective.size_multiplier);
    let parts = preset.parts_for_size(size_key);

    let mut sections = Vec::new();
    let mut total_time = 0.0f32;

    // Fixed canonical order: it defines document section order and must
    // be stable across recompiles for diff-friendly output.
    for part in CANONICAL_ORDER {
        if !effective.is_enabled(part) {
            log::debug!("skipping disabled part {}", part.key());
            continue;
        }
        let Some(template) = parts.iter().find(|t| t.part == part) else {
            continue;
        };

        let multiplier = effective.combined_multiplier(part) * template.proportions;
        let instructions = interpret(
            template,
            &InterpretOptions {
                palette: &palette,
                multiplier,
                difficulty: effective.difficulty,
            },
        );

        let estimated_time_hours = template.rows.len() as f32 * MINUTES_PER_ROW / 60.0
            * multiplier
            * template.quantity as f32;
        total_time += estimated_time_hours;

        sections.push(CompiledSection {
            part,
            display_name: section_title(template),
            notes: section_notes(analysis, template, &palette),
            instructions,
            estimated_time_hours,
        });
    }

    let materials = compute_materials(preset, &effective, &palette);
    let assembly = assembly_instructions(analysis, preset);
    let now = Utc::now();

    Ok(Pattern {
        id: PatternId::generate(),
        breed_id: preset.breed_id.clone(),
        display_name: preset.display_name.clone(),
        analysis: analysis.clone(),
        customizations: effective,
        sections,
        materials,
        assembly,
        total_time_hours: (total_time * 10.0).round() / 10.0,
        created_at: now,
        updated_at: now,
    })
}

fn section_title(template: &BodyPartTemplate) -> String {
    if template.quantity > 1 {
        format!("{} (make {})", template.part.display_name(), template.quantity)
    } else {
        template.part.display_name().to_string()
    }
}

/// Notes for one section: starting yarn (preferring the detected per-part
/// color over the generic palette), any analysis guidance, the stuffing
/// firmness phrase, and the preset's assembly note.
fn section_notes(
    analysis: &DogAnalysis,
    template: &BodyPartTemplate,
    palette: &[ColorAssignment],
) -> Vec<String> {
    let mut notes = Vec::new();

    let starting_yarn = analysis
        .part_analysis(template.part)
        .map(|a| classify(a.primary_color).to_string())
        .unwrap_or_else(|| {
            let first_key = template
                .rows
                .first()
                .and_then(|r| r.color_key.clone())
                .or_else(|| {
                    template
                        .rows
                        .first()
                        .and_then(|r| template.zone_for_row(r.row_number))
                        .map(|z| z.color_key.clone())
                })
                .unwrap_or_else(|| "primary".to_string());
            yarn_label(palette, &first_key)
        });
    notes.push(format!("Starting yarn: {}", starting_yarn));

    if let Some(guidance) = analysis
        .part_analysis(template.part)
        .and_then(|a| a.crochet_guidance.clone())
    {
        notes.push(guidance);
    }
    if let Some(firmness) = template.part.stuffing_firmness() {
        notes.push(firmness.to_string());
    }
    if let Some(assembly_note) = &template.assembly_note {
        notes.push(assembly_note.clone());
    }

    notes
}

/// Preset-provided assembly steps win, closed out with three
/// best-practice tips; otherwise steps are synthesized from the detected
/// ear and tail shape.
fn assembly_instructions(analysis: &DogAnalysis, preset: &BreedPreset) -> Vec<String> {
    let mut steps = if preset.assembly_steps.is_empty() {
        vec![
            "Sew the head to the body, centering it over the neck opening.".to_string(),
            format!("Attach the ears: {}.", analysis.ear_shape.attachment_hint()),
            "Sew the snout to the lower front of the head and attach the nose.".to_string(),
            "Sew the legs to the body, checking that the piece sits level.".to_string(),
            format!("Attach the tail: {}.", analysis.tail_type.attachment_hint()),
        ]
    } else {
        preset.assembly_steps.clone()
    };
    steps.extend(CLOSING_TIPS.iter().map(|tip| tip.to_string()));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use houndstitch_template::{
        BodyProportions, EarShape, RowTemplate, TailType,
    };
    use houndstitch_types::Color;

    fn analysis() -> DogAnalysis {
        DogAnalysis {
            breed_id: "labrador".into(),
            confidence: 0.9,
            primary_color: Color::parse_hex("#c8a05a").unwrap(),
            secondary_color: Some(Color::parse_hex("#e8d5b0").unwrap()),
            tertiary_color: None,
            accent_color: Some(Color::parse_hex("#2b2b2b").unwrap()),
            ear_shape: EarShape::Floppy,
            tail_type: TailType::Long,
            proportions: BodyProportions::default(),
            markings: vec![],
            part_analyses: vec![],
        }
    }

    fn part(p: BodyPart, quantity: u32, rows: u32) -> BodyPartTemplate {
        let mut templates: Vec<RowTemplate> = (1..=rows)
            .map(|i| RowTemplate::new(i, "sc around", 12))
            .collect();
        templates.push(RowTemplate::new(rows + 1, "Fasten off", 0));
        BodyPartTemplate::new(p, quantity, templates)
    }

    fn preset() -> BreedPreset {
        BreedPreset {
            breed_id: "labrador".into(),
            display_name: "Labrador Retriever".into(),
            parts: vec![
                part(BodyPart::Head, 1, 5),
                part(BodyPart::Body, 1, 6),
                part(BodyPart::Ear, 2, 3),
                part(BodyPart::Tail, 1, 3),
            ],
            assembly_steps: vec![],
            size_variants: vec![],
        }
    }

    #[test]
    fn sections_follow_canonical_order() {
        let pattern = compile(&analysis(), &preset(), &Customizations::default()).unwrap();
        let order: Vec<BodyPart> = pattern.sections.iter().map(|s| s.part).collect();
        assert_eq!(
            order,
            vec![BodyPart::Head, BodyPart::Body, BodyPart::Ear, BodyPart::Tail]
        );
    }

    #[test]
    fn toggling_a_part_off_and_on_restores_canonical_position() {
        let a = analysis();
        let p = preset();
        let mut customizations = Customizations::default();
        customizations.toggled_features.insert(BodyPart::Ear, false);
        let without_ear = compile(&a, &p, &customizations).unwrap();
        assert!(without_ear.sections.iter().all(|s| s.part != BodyPart::Ear));

        customizations.toggled_features.insert(BodyPart::Ear, true);
        let restored = compile(&a, &p, &customizations).unwrap();
        let baseline = compile(&a, &p, &Customizations::default()).unwrap();
        let order = |pat: &Pattern| pat.sections.iter().map(|s| s.part).collect::<Vec<_>>();
        assert_eq!(order(&restored), order(&baseline));
    }

    #[test]
    fn compile_is_idempotent_on_content() {
        let a = analysis();
        let p = preset();
        let c = Customizations::default();
        let first = compile(&a, &p, &c).unwrap();
        let second = compile(&a, &p, &c).unwrap();
        assert_eq!(first.sections, second.sections);
        assert_eq!(first.materials, second.materials);
        assert_eq!(first.assembly, second.assembly);
    }

    #[test]
    fn compile_does_not_mutate_inputs() {
        let a = analysis();
        let p = preset();
        let c = Customizations::default();
        let a2 = a.clone();
        let c2 = c.clone();
        let _ = compile(&a, &p, &c).unwrap();
        assert_eq!(a, a2);
        assert_eq!(c, c2);
    }

    #[test]
    fn quantity_shows_in_title_and_time() {
        let pattern = compile(&analysis(), &preset(), &Customizations::default()).unwrap();
        let ear = pattern
            .sections
            .iter()
            .find(|s| s.part == BodyPart::Ear)
            .unwrap();
        assert_eq!(ear.display_name, "Ear (make 2)");
        // 4 template rows * 2 min / 60 * 1.0 * 2 pieces
        assert!((ear.estimated_time_hours - 4.0 * 2.0 / 60.0 * 2.0).abs() < 1e-6);
    }

    #[test]
    fn empty_palette_is_seeded_from_analysis() {
        let pattern = compile(&analysis(), &preset(), &Customizations::default()).unwrap();
        assert!(
            pattern
                .customizations
                .color_assignments
                .iter()
                .any(|a| a.color_key == "primary")
        );
        assert!(
            pattern
                .customizations
                .color_assignments
                .iter()
                .any(|a| a.color_key == "nose")
        );
    }

    #[test]
    fn synthesized_assembly_mentions_detected_shapes() {
        let pattern = compile(&analysis(), &preset(), &Customizations::default()).unwrap();
        let joined = pattern.assembly.join(" ");
        assert!(joined.contains("hang down")); // floppy ears
        assert!(joined.contains("angled slightly upward")); // long tail
        // the three closing tips are always appended
        assert!(pattern.assembly.len() >= 8);
    }

    #[test]
    fn preset_assembly_steps_win_and_still_get_tips() {
        let mut p = preset();
        p.assembly_steps = vec!["Step one.".to_string(), "Step two.".to_string()];
        let pattern = compile(&analysis(), &p, &Customizations::default()).unwrap();
        assert_eq!(pattern.assembly.len(), 5);
        assert_eq!(pattern.assembly[0], "Step one.");
    }

    #[test]
    fn total_time_rounds_to_one_decimal() {
        let pattern = compile(&analysis(), &preset(), &Customizations::default()).unwrap();
        let rescaled = pattern.total_time_hours * 10.0;
        assert!((rescaled - rescaled.round()).abs() < 1e-4);
    }

    #[test]
    fn notes_include_starting_yarn_and_firmness() {
        let pattern = compile(&analysis(), &preset(), &Customizations::default()).unwrap();
        let head = &pattern.sections[0];
        assert!(head.notes.iter().any(|n| n.starts_with("Starting yarn:")));
        assert!(head.notes.iter().any(|n| n.contains("Stuff firmly")));
    }
}
