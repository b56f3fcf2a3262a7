//! The pattern's color palette and its seeding from an analysis record.

use houndstitch_template::{BodyPart, DogAnalysis};
use houndstitch_types::{Color, classify};
use serde::{Deserialize, Serialize};

/// One palette slot: a symbolic color key resolved to a hex color, with
/// an optional yarn name and the yardage the materials pass fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAssignment {
    pub color_key: String,
    pub hex: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yarn_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yardage: Option<u32>,
}

impl ColorAssignment {
    pub fn new(color_key: impl Into<String>, hex: Color) -> Self {
        let hex_color = hex;
        Self {
            color_key: color_key.into(),
            hex: hex_color,
            yarn_name: Some(classify(hex_color).to_string()),
            yardage: None,
        }
    }

    /// The name shown in instructions: the yarn name when present, else
    /// the raw color key.
    pub fn label(&self) -> &str {
        self.yarn_name.as_deref().unwrap_or(&self.color_key)
    }
}

/// Look up the display label for a color key; falls back to the raw key
/// when the palette has no matching entry.
pub fn yarn_label(palette: &[ColorAssignment], color_key: &str) -> String {
    palette
        .iter()
        .find(|a| a.color_key == color_key)
        .map(|a| a.label().to_string())
        .unwrap_or_else(|| color_key.to_string())
}

/// Derive a palette from the analysis when the caller supplies none.
///
/// Primary/secondary/tertiary/accent come straight from the top-level
/// palette; each distinct body-part color not already present by exact
/// hex equality gets a `bp-<part>` entry, disambiguated by appending the
/// part name when two parts share a color *name* but not a hex. A
/// dedicated `nose` entry prefers the analysis's nose-part color, then
/// the accent color, then black.
pub fn seed_palette(analysis: &DogAnalysis) -> Vec<ColorAssignment> {
    let mut palette = vec![ColorAssignment::new("primary", analysis.primary_color)];
    if let Some(secondary) = analysis.secondary_color {
        palette.push(ColorAssignment::new("secondary", secondary));
    }
    if let Some(tertiary) = analysis.tertiary_color {
        palette.push(ColorAssignment::new("tertiary", tertiary));
    }
    if let Some(accent) = analysis.accent_color {
        palette.push(ColorAssignment::new("accent", accent));
    }

    for part_analysis in analysis.effective_part_analyses() {
        if part_analysis.part == BodyPart::Nose {
            continue; // handled by the dedicated nose entry below
        }
        let hex = part_analysis.primary_color;
        if palette.iter().any(|a| a.hex == hex) {
            continue;
        }
        let name = classify(hex).to_string();
        let clashes = palette
            .iter()
            .any(|a| a.yarn_name.as_deref() == Some(&name) && a.hex != hex);
        let yarn_name = if clashes {
            format!("{} ({})", name, part_analysis.part.display_name())
        } else {
            name
        };
        palette.push(ColorAssignment {
            color_key: format!("bp-{}", part_analysis.part.key()),
            hex,
            yarn_name: Some(yarn_name),
            yardage: None,
        });
    }

    let nose_color = analysis
        .part_analysis(BodyPart::Nose)
        .map(|a| a.primary_color)
        .or(analysis.accent_color)
        .unwrap_or(Color::BLACK);
    palette.push(ColorAssignment::new("nose", nose_color));

    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use houndstitch_template::{BodyPartAnalysis, BodyProportions, EarShape, TailType};

    fn base_analysis() -> DogAnalysis {
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

    #[test]
    fn seeds_reserved_entries_and_nose() {
        let palette = seed_palette(&base_analysis());
        assert!(palette.iter().any(|a| a.color_key == "primary"));
        assert!(palette.iter().any(|a| a.color_key == "secondary"));
        assert!(palette.iter().any(|a| a.color_key == "accent"));
        assert!(palette.iter().any(|a| a.color_key == "nose"));
        // no tertiary detected, none seeded
        assert!(!palette.iter().any(|a| a.color_key == "tertiary"));
    }

    #[test]
    fn deduplicates_by_exact_hex() {
        let mut analysis = base_analysis();
        analysis.part_analyses = vec![BodyPartAnalysis {
            part: BodyPart::Head,
            primary_color: analysis.primary_color,
            shape_notes: None,
            crochet_guidance: None,
        }];
        let palette = seed_palette(&analysis);
        assert!(!palette.iter().any(|a| a.color_key == "bp-head"));
    }

    #[test]
    fn disambiguates_same_name_different_hex() {
        let mut analysis = base_analysis();
        // Both classify as Brown but differ in hex from primary (Tan-ish)
        analysis.primary_color = Color::parse_hex("#8b5a2b").unwrap();
        analysis.part_analyses = vec![BodyPartAnalysis {
            part: BodyPart::Ear,
            primary_color: Color::parse_hex("#96602e").unwrap(),
            shape_notes: None,
            crochet_guidance: None,
        }];
        let palette = seed_palette(&analysis);
        let ear = palette.iter().find(|a| a.color_key == "bp-ear").unwrap();
        assert_eq!(ear.yarn_name.as_deref(), Some("Brown (Ear)"));
    }

    #[test]
    fn nose_falls_back_to_accent_then_black() {
        let palette = seed_palette(&base_analysis());
        let nose = palette.iter().find(|a| a.color_key == "nose").unwrap();
        assert_eq!(nose.hex, Color::parse_hex("#2b2b2b").unwrap());

        let mut bare = base_analysis();
        bare.accent_color = None;
        let palette = seed_palette(&bare);
        let nose = palette.iter().find(|a| a.color_key == "nose").unwrap();
        assert_eq!(nose.hex, Color::BLACK);
    }

    #[test]
    fn label_falls_back_to_raw_key() {
        assert_eq!(yarn_label(&[], "bp-tail"), "bp-tail");
    }
}
