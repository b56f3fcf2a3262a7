//! Shared fixtures: a complete labrador preset and a matching analysis.

use houndstitch::{
    BodyPart, BodyPartTemplate, BodyProportions, BreedPreset, Color, ColorZone, DogAnalysis,
    EarShape, RowTemplate, TailType,
};

fn row(n: u32, text: &str, count: u32) -> RowTemplate {
    RowTemplate::new(n, text, count)
}

fn spiral_part(part: BodyPart, quantity: u32, body_rows: &[(&str, u32)]) -> BodyPartTemplate {
    let mut rows = Vec::with_capacity(body_rows.len() + 1);
    for (i, (text, count)) in body_rows.iter().enumerate() {
        rows.push(row(i as u32 + 1, text, *count));
    }
    rows.push(row(body_rows.len() as u32 + 1, "Fasten off", 0));
    BodyPartTemplate::new(part, quantity, rows)
}

pub fn labrador_preset() -> BreedPreset {
    let mut ear = spiral_part(
        BodyPart::Ear,
        2,
        &[
            ("Magic ring, 6 sc", 6),
            ("inc around", 12),
            ("sc around", 12),
            ("sc around", 12),
            ("(sc 2, dec) x 3", 9),
        ],
    );
    ear.color_zones = vec![ColorZone {
        start_row: 1,
        end_row: 5,
        color_key: "secondary".into(),
        description: "ears in the lighter coat color".into(),
    }];
    ear.assembly_note = Some("Leave the ears unstuffed so they hang naturally.".into());

    let mut head = spiral_part(
        BodyPart::Head,
        1,
        &[
            ("Magic ring, 6 sc", 6),
            ("inc around", 12),
            ("(sc 1, inc) x 6", 18),
            ("(sc 2, inc) x 6", 24),
            ("sc around", 24),
            ("sc around", 24),
            ("sc around", 24),
            ("(sc 2, dec) x 6", 18),
            ("(sc 1, dec) x 6", 12),
            ("dec around", 6),
        ],
    );
    head.assembly_note = Some("Position the safety eyes between rounds 5 and 6.".into());

    let body = spiral_part(
        BodyPart::Body,
        1,
        &[
            ("Magic ring, 6 sc", 6),
            ("inc around", 12),
            ("(sc 1, inc) x 6", 18),
            ("(sc 2, inc) x 6", 24),
            ("sc around", 24),
            ("sc around", 24),
            ("sc around", 24),
            ("sc around", 24),
            ("(sc 2, dec) x 6", 18),
            ("(sc 1, dec) x 6", 12),
        ],
    );

    let front_leg = spiral_part(
        BodyPart::FrontLeg,
        2,
        &[
            ("Magic ring, 6 sc", 6),
            ("inc around", 12),
            ("sc around", 12),
            ("sc around", 12),
            ("(sc 2, dec) x 3", 9),
        ],
    );

    let back_leg = spiral_part(
        BodyPart::BackLeg,
        2,
        &[
            ("Magic ring, 6 sc", 6),
            ("inc around", 12),
            ("(sc 1, inc) x 6", 18),
            ("sc around", 18),
            ("(sc 1, dec) x 6", 12),
        ],
    );

    let tail = spiral_part(
        BodyPart::Tail,
        1,
        &[
            ("Magic ring, 5 sc", 5),
            ("sc around", 5),
            ("sc around", 5),
            ("inc, sc 4", 6),
            ("sc around", 6),
        ],
    );

    let snout = spiral_part(
        BodyPart::Snout,
        1,
        &[
            ("Magic ring, 6 sc", 6),
            ("inc around", 12),
            ("(sc 2, inc) x 4", 16),
            ("sc around", 16),
        ],
    );

    let mut nose = spiral_part(
        BodyPart::Nose,
        1,
        &[("Magic ring, 6 sc", 6), ("inc around", 12)],
    );
    nose.rows
        .iter_mut()
        .for_each(|r| r.color_key = Some("nose".into()));

    BreedPreset {
        breed_id: "labrador".into(),
        display_name: "Labrador Retriever".into(),
        parts: vec![head, body, front_leg, back_leg, ear, tail, snout, nose],
        assembly_steps: vec![],
        size_variants: vec![],
    }
}

pub fn labrador_analysis() -> DogAnalysis {
    DogAnalysis {
        breed_id: "labrador".into(),
        confidence: 0.93,
        primary_color: Color::parse_hex("#c8a05a").unwrap(),
        secondary_color: Some(Color::parse_hex("#e8d5b0").unwrap()),
        tertiary_color: None,
        accent_color: Some(Color::parse_hex("#2b2b2b").unwrap()),
        ear_shape: EarShape::Floppy,
        tail_type: TailType::Long,
        proportions: BodyProportions {
            head_to_body: 0.85,
            leg_length: 0.6,
            snout_length: 0.55,
        },
        markings: vec![],
        part_analyses: vec![],
    }
}
