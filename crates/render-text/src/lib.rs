//! Flattened plain-text/markdown rendering of a compiled pattern.
//!
//! No pagination, section headers only. An alternate rendering of the
//! same compiled document the paginator consumes, which keeps the
//! compiler/paginator separation honest.

use houndstitch_compile::Pattern;
use itertools::Itertools;

/// Render a compiled pattern as markdown.
pub fn to_markdown(pattern: &Pattern) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {} Crochet Pattern\n\n", pattern.display_name));
    doc.push_str(&format!(
        "Finished size: {}. Estimated time: about {} hours.\n\n",
        pattern.materials.finished_height, pattern.total_time_hours
    ));

    doc.push_str("## Materials\n\n");
    for assignment in &pattern.materials.yarn {
        doc.push_str(&format!(
            "- {} ({}): about {} yards\n",
            assignment.label(),
            assignment.hex,
            assignment.yardage.unwrap_or(0)
        ));
    }
    doc.push_str(&format!(
        "- Hook: {}\n- Yarn weight: {}\n",
        pattern.materials.hook_size, pattern.materials.yarn_weight
    ));
    for notion in &pattern.materials.notions {
        doc.push_str(&format!("- {}\n", notion));
    }
    doc.push('\n');

    for section in &pattern.sections {
        doc.push_str(&format!("## {}\n\n", section.display_name));
        for note in &section.notes {
            doc.push_str(&format!("> {}\n", note));
        }
        if !section.notes.is_empty() {
            doc.push('\n');
        }
        for instruction in &section.instructions {
            doc.push_str(&format!("{}\n", instruction.text));
        }
        doc.push('\n');
    }

    doc.push_str("## Assembly\n\n");
    let steps = pattern
        .assembly
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .join("\n");
    doc.push_str(&steps);
    doc.push('\n');

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use houndstitch_compile::{Customizations, compile};
    use houndstitch_template::{
        BodyPart, BodyPartTemplate, BodyProportions, BreedPreset, DogAnalysis, EarShape,
        RowTemplate, TailType,
    };
    use houndstitch_types::Color;

    fn pattern() -> Pattern {
        let analysis = DogAnalysis {
            breed_id: "labrador".into(),
            confidence: 0.9,
            primary_color: Color::parse_hex("#c8a05a").unwrap(),
            secondary_color: None,
            tertiary_color: None,
            accent_color: None,
            ear_shape: EarShape::Floppy,
            tail_type: TailType::Long,
            proportions: BodyProportions::default(),
            markings: vec![],
            part_analyses: vec![],
        };
        let preset = BreedPreset {
            breed_id: "labrador".into(),
            display_name: "Labrador Retriever".into(),
            parts: vec![BodyPartTemplate::new(
                BodyPart::Head,
                1,
                vec![
                    RowTemplate::new(1, "Magic ring, 6 sc", 6),
                    RowTemplate::new(2, "Fasten off", 0),
                ],
            )],
            assembly_steps: vec![],
            size_variants: vec![],
        };
        compile(&analysis, &preset, &Customizations::default()).unwrap()
    }

    #[test]
    fn markdown_carries_every_section_header() {
        let md = to_markdown(&pattern());
        assert!(md.starts_with("# Labrador Retriever Crochet Pattern"));
        assert!(md.contains("## Materials"));
        assert!(md.contains("## Head"));
        assert!(md.contains("## Assembly"));
    }

    #[test]
    fn assembly_steps_are_numbered() {
        let md = to_markdown(&pattern());
        assert!(md.contains("1. "));
    }
}
