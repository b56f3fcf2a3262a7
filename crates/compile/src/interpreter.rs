//! The row-template interpreter: turns a body part's row templates into
//! fully resolved instructions.
//!
//! Rows are processed in the order given. Row-number monotonicity is the
//! caller's responsibility; the interpreter trusts its input (a documented
//! assumption, not a validated invariant).

use crate::difficulty::{Difficulty, apply_detail, simplify_text};
use crate::instruction::{CompiledInstruction, StitchType, extract_stitches};
use crate::palette::{ColorAssignment, yarn_label};
use houndstitch_template::{BodyPartTemplate, RowTemplate};

pub const FASTEN_OFF_TEXT: &str = "Fasten off, leaving a long tail for sewing.";

const STUFFING_REMINDER: &str =
    "Before working the decreases: stuff the piece firmly and place the safety eyes now, \
     while the opening is still wide enough.";

pub struct InterpretOptions<'a> {
    pub palette: &'a [ColorAssignment],
    pub multiplier: f32,
    pub difficulty: Difficulty,
}

#[derive(PartialEq)]
enum RowKind {
    Normal,
    Terminal,
    Reminder,
}

/// A row after color/scale/text resolution but before the round-number
/// wrapper. The simplified run-length merge works on these, so identical
/// rows can still compare byte-identical.
struct PendingRow {
    row_number: u32,
    body: String,
    stitch_count: u32,
    color_key: String,
    stitches: Vec<StitchType>,
    kind: RowKind,
}

/// Interpret one body part's templates into compiled instructions.
///
/// A part with zero rows produces zero instructions. A multiplier of
/// exactly 1.0 with no color zones passes row text and counts through
/// verbatim, modulo the first-row yarn prefix.
pub fn interpret(template: &BodyPartTemplate, opts: &InterpretOptions) -> Vec<CompiledInstruction> {
    let mut pending: Vec<PendingRow> = Vec::with_capacity(template.rows.len() + 1);
    let mut previous_color: Option<String> = None;
    let mut reminder_inserted = false;

    for (index, row) in template.rows.iter().enumerate() {
        let color_key = resolve_color(template, row);
        let label = yarn_label(opts.palette, &color_key);

        // The reminder goes in before the first decrease row, unless that
        // row opens the template (nothing to stuff yet).
        if !reminder_inserted && index > 0 && row.instruction.contains("dec") {
            pending.push(PendingRow {
                row_number: row.row_number,
                body: STUFFING_REMINDER.to_string(),
                stitch_count: 0,
                color_key: color_key.clone(),
                stitches: Vec::new(),
                kind: RowKind::Reminder,
            });
            reminder_inserted = true;
        }

        if row.is_terminal() {
            let mut body = FASTEN_OFF_TEXT.to_string();
            if color_key != "primary" {
                body.push_str(&format!(" (finish in {})", label));
            }
            pending.push(PendingRow {
                row_number: row.row_number,
                body,
                stitch_count: 0,
                color_key,
                stitches: extract_stitches(&row.instruction),
                kind: RowKind::Terminal,
            });
            continue;
        }

        let scaled = scale_stitch_count(row.stitch_count, index, opts);

        let mut body = match opts.difficulty {
            Difficulty::Simplified => simplify_text(&row.instruction),
            Difficulty::Standard => row.instruction.clone(),
            Difficulty::Detailed => apply_detail(&row.instruction),
        };

        // The starting yarn is always stated; afterwards, only changes are.
        if index == 0 {
            body = format!("Using {}: {}", label, body);
        } else if previous_color.as_deref() != Some(&color_key) {
            body = format!("Change to {}. {}", label, body);
        }

        pending.push(PendingRow {
            row_number: row.row_number,
            body,
            stitch_count: scaled,
            color_key: color_key.clone(),
            stitches: extract_stitches(&row.instruction),
            kind: RowKind::Normal,
        });
        previous_color = Some(color_key);
    }

    render_rows(pending, opts.difficulty, template)
}

/// Wrap pending rows in the round-number rendering. For the simplified
/// level, consecutive byte-identical normal rows collapse first into one
/// entry spanning their round range, annotated with the run length
/// (stable, single traversal).
fn render_rows(
    pending: Vec<PendingRow>,
    difficulty: Difficulty,
    template: &BodyPartTemplate,
) -> Vec<CompiledInstruction> {
    let merge = difficulty == Difficulty::Simplified;
    let mut out: Vec<CompiledInstruction> = Vec::with_capacity(pending.len());
    let mut iter = pending.into_iter().peekable();

    while let Some(row) = iter.next() {
        match row.kind {
            RowKind::Reminder => {
                out.push(CompiledInstruction::synthetic(row.body, row.color_key));
            }
            RowKind::Terminal => {
                out.push(CompiledInstruction {
                    row_number: Some(row.row_number),
                    text: row.body,
                    color_key: row.color_key,
                    stitches: row.stitches,
                });
            }
            RowKind::Normal => {
                let mut run = 1usize;
                let mut last_number = row.row_number;
                if merge {
                    while iter.peek().is_some_and(|next| {
                        next.kind == RowKind::Normal
                            && next.body == row.body
                            && next.stitch_count == row.stitch_count
                            && next.color_key == row.color_key
                    }) {
                        let next = iter.next().expect("peeked");
                        last_number = next.row_number;
                        run += 1;
                    }
                }
                out.push(render_normal(row, run, last_number));
            }
        }
    }

    if merge && out.len() < template.rows.len() {
        log::debug!(
            "simplified {}: {} template rows rendered as {} instructions",
            template.part.key(),
            template.rows.len(),
            out.len()
        );
    }
    out
}

fn render_normal(row: PendingRow, run: usize, last_number: u32) -> CompiledInstruction {
    let rounds = if run > 1 {
        format!("Rnd {}-{}", row.row_number, last_number)
    } else {
        format!("Rnd {}", row.row_number)
    };
    let mut text = if row.stitch_count > 0 {
        format!("{}: {} [{} sts]", rounds, row.body, row.stitch_count)
    } else {
        format!("{}: {}", rounds, row.body)
    };
    if run > 1 {
        text.push_str(&format!(" [repeat for {} rows]", run));
    }
    CompiledInstruction {
        row_number: Some(row.row_number),
        text,
        color_key: row.color_key,
        stitches: row.stitches,
    }
}

fn resolve_color(template: &BodyPartTemplate, row: &RowTemplate) -> String {
    row.color_key
        .clone()
        .or_else(|| {
            template
                .zone_for_row(row.row_number)
                .map(|zone| zone.color_key.clone())
        })
        .unwrap_or_else(|| "primary".to_string())
}

fn scale_stitch_count(count: u32, index: usize, opts: &InterpretOptions) -> u32 {
    let scaled = (count as f32 * opts.multiplier).round() as u32;
    if opts.difficulty == Difficulty::Simplified && index > 2 {
        // Lossy density reduction, not a faithful scale-down.
        scaled.saturating_sub(2).max(1)
    } else {
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use houndstitch_template::{BodyPart, ColorZone};
    use houndstitch_types::Color;

    fn palette() -> Vec<ColorAssignment> {
        vec![
            ColorAssignment {
                color_key: "primary".into(),
                hex: Color::parse_hex("#c8a05a").unwrap(),
                yarn_name: Some("Golden Brown".into()),
                yardage: None,
            },
            ColorAssignment {
                color_key: "secondary".into(),
                hex: Color::parse_hex("#e8d5b0").unwrap(),
                yarn_name: Some("Cream".into()),
                yardage: None,
            },
        ]
    }

    fn head_template() -> BodyPartTemplate {
        BodyPartTemplate::new(
            BodyPart::Head,
            1,
            vec![
                RowTemplate::new(1, "Magic ring, 6 sc", 6),
                RowTemplate::new(2, "inc around", 12),
                RowTemplate::new(3, "(sc 1, inc) x 6", 18),
                RowTemplate::new(4, "sc around", 18),
                RowTemplate::new(5, "(sc 1, dec) x 6", 12),
                RowTemplate::new(6, "Fasten off", 0),
            ],
        )
    }

    fn opts(
        palette: &[ColorAssignment],
        multiplier: f32,
        difficulty: Difficulty,
    ) -> InterpretOptions<'_> {
        InterpretOptions {
            palette,
            multiplier,
            difficulty,
        }
    }

    #[test]
    fn identity_multiplier_passes_text_through() {
        let palette = palette();
        let rows = interpret(&head_template(), &opts(&palette, 1.0, Difficulty::Standard));
        // first row always states the starting yarn
        assert_eq!(
            rows[0].text,
            "Rnd 1: Using Golden Brown: Magic ring, 6 sc [6 sts]"
        );
        assert_eq!(rows[1].text, "Rnd 2: inc around [12 sts]");
        assert_eq!(rows[3].text, "Rnd 4: sc around [18 sts]");
    }

    #[test]
    fn zero_rows_produce_zero_instructions() {
        let empty = BodyPartTemplate::new(BodyPart::Tail, 1, vec![]);
        let palette = palette();
        assert!(interpret(&empty, &opts(&palette, 1.0, Difficulty::Standard)).is_empty());
    }

    #[test]
    fn stitch_counts_scale_and_round() {
        let palette = palette();
        let rows = interpret(&head_template(), &opts(&palette, 0.75, Difficulty::Standard));
        // 6 * 0.75 = 4.5 rounds to 5; 18 * 0.75 = 13.5 rounds to 14
        assert!(rows[0].text.ends_with("[5 sts]"));
        assert!(rows[2].text.ends_with("[14 sts]"));
    }

    #[test]
    fn reminder_inserted_before_first_decrease_row() {
        let palette = palette();
        let rows = interpret(&head_template(), &opts(&palette, 1.0, Difficulty::Standard));
        let reminder_pos = rows
            .iter()
            .position(|r| r.row_number.is_none())
            .expect("reminder row present");
        assert!(rows[reminder_pos].text.contains("safety eyes"));
        assert!(rows[reminder_pos + 1].text.contains("dec"));
        // exactly one reminder
        assert_eq!(rows.iter().filter(|r| r.row_number.is_none()).count(), 1);
    }

    #[test]
    fn no_reminder_when_decrease_opens_the_template() {
        let template = BodyPartTemplate::new(
            BodyPart::Nose,
            1,
            vec![
                RowTemplate::new(1, "dec around", 6),
                RowTemplate::new(2, "Fasten off", 0),
            ],
        );
        let palette = palette();
        let rows = interpret(&template, &opts(&palette, 1.0, Difficulty::Standard));
        assert!(rows.iter().all(|r| r.row_number.is_some()));
    }

    #[test]
    fn terminal_row_gets_canonical_text_and_color_note() {
        let mut template = head_template();
        template.rows.last_mut().unwrap().color_key = Some("secondary".into());
        let palette = palette();
        let rows = interpret(&template, &opts(&palette, 1.0, Difficulty::Standard));
        let last = rows.last().unwrap();
        assert_eq!(last.text, format!("{} (finish in Cream)", FASTEN_OFF_TEXT));
    }

    #[test]
    fn color_change_prefix_emitted_only_on_change() {
        let mut template = head_template();
        template.color_zones = vec![ColorZone {
            start_row: 3,
            end_row: 4,
            color_key: "secondary".into(),
            description: "muzzle shading".into(),
        }];
        let palette = palette();
        let rows = interpret(&template, &opts(&palette, 1.0, Difficulty::Standard));
        assert!(rows[0].text.contains("Using Golden Brown"));
        assert!(!rows[1].text.contains("Change to"));
        assert!(rows[2].text.contains("Change to Cream."));
        assert!(!rows[3].text.contains("Change to"));
        // back to primary after the zone ends
        let after_zone = rows.iter().find(|r| r.text.starts_with("Rnd 5")).unwrap();
        assert!(after_zone.text.contains("Change to Golden Brown."));
    }

    #[test]
    fn unknown_color_key_falls_back_to_raw_key() {
        let mut template = head_template();
        template.rows[0].color_key = Some("bp-head".into());
        let palette = palette();
        let rows = interpret(&template, &opts(&palette, 1.0, Difficulty::Standard));
        assert!(rows[0].text.contains("Using bp-head"));
    }

    #[test]
    fn simplified_reduces_density_after_row_three() {
        let palette = palette();
        let rows = interpret(&head_template(), &opts(&palette, 1.0, Difficulty::Simplified));
        // row index 3 (Rnd 4): 18 - 2 = 16
        let rnd4 = rows.iter().find(|r| r.text.starts_with("Rnd 4")).unwrap();
        assert!(rnd4.text.ends_with("[16 sts]"));
        // row index 2 (Rnd 3) keeps its scaled count
        let rnd3 = rows.iter().find(|r| r.text.starts_with("Rnd 3")).unwrap();
        assert!(rnd3.text.ends_with("[18 sts]"));
    }

    #[test]
    fn simplified_merges_identical_run_into_one_entry() {
        // A, A, A, B in pre-render form: three identical plain rounds,
        // then a different one. Expect exactly one merged entry with the
        // run length, then B.
        let template = BodyPartTemplate::new(
            BodyPart::Body,
            1,
            vec![
                RowTemplate::new(1, "Magic ring, 6 sc", 6),
                RowTemplate::new(2, "inc around", 12),
                RowTemplate::new(3, "(sc 1, inc) x 6", 18),
                RowTemplate::new(4, "sc around", 18),
                RowTemplate::new(5, "sc around", 18),
                RowTemplate::new(6, "sc around", 18),
                RowTemplate::new(7, "hdc around", 18),
            ],
        );
        let palette = palette();
        let rows = interpret(&template, &opts(&palette, 1.0, Difficulty::Simplified));
        let merged: Vec<&CompiledInstruction> = rows
            .iter()
            .filter(|r| r.text.contains("[repeat for"))
            .collect();
        assert_eq!(merged.len(), 1);
        // indices 3..=5 all take the density reduction, so the run stays
        // byte-identical and collapses to a single spanning entry
        assert_eq!(merged[0].text, "Rnd 4-6: sc around [16 sts] [repeat for 3 rows]");
        assert_eq!(rows.last().unwrap().text, "Rnd 7: hdc around [16 sts]");
    }

    #[test]
    fn standard_difficulty_never_merges() {
        let template = BodyPartTemplate::new(
            BodyPart::Body,
            1,
            vec![
                RowTemplate::new(1, "sc around", 12),
                RowTemplate::new(2, "sc around", 12),
                RowTemplate::new(3, "sc around", 12),
            ],
        );
        let palette = palette();
        let rows = interpret(&template, &opts(&palette, 1.0, Difficulty::Standard));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn detailed_appends_technique_clarifications() {
        let palette = palette();
        let rows = interpret(&head_template(), &opts(&palette, 1.0, Difficulty::Detailed));
        let dec_row = rows.iter().find(|r| r.text.contains("dec) x 6")).unwrap();
        assert_eq!(dec_row.text.matches("invisible decrease").count(), 1);
        assert!(rows[0].text.contains("magic ring: wrap yarn"));
    }
}
