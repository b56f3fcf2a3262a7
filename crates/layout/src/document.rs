//! Builds the paginated pattern document from a compiled `Pattern`.
//!
//! Layout policy, reproduced exactly for compatibility: the cover page,
//! the materials page, the abbreviations page, and every body-part
//! section start on a fresh page unconditionally, not merely on overflow.

use crate::block::Block;
use crate::config::{PageGeometry, Theme};
use crate::paginator::{LayoutError, Page, Paginator};
use houndstitch_compile::{Pattern, STITCH_VOCABULARY};
use houndstitch_template::{BodyPartAnalysis, DogAnalysis};

/// Paginate a compiled pattern with no preview image.
pub fn paginate(pattern: &Pattern, geometry: PageGeometry) -> Result<Vec<Page>, LayoutError> {
    paginate_with_preview(pattern, geometry, None)
}

/// Paginate a compiled pattern, optionally appending a preview image
/// page. An unavailable preview degrades to a placeholder line.
pub fn paginate_with_preview(
    pattern: &Pattern,
    geometry: PageGeometry,
    preview_src: Option<&str>,
) -> Result<Vec<Page>, LayoutError> {
    let theme = Theme::default();
    let title = format!("{} Crochet Pattern", pattern.display_name);
    let mut paginator = Paginator::new(geometry, theme, title)?;

    for block in document_blocks(pattern, preview_src) {
        paginator.push(&block);
    }

    let pages = paginator.finish();
    log::debug!(
        "paginated pattern '{}' into {} pages",
        pattern.id,
        pages.len()
    );
    Ok(pages)
}

/// The full block stream for one pattern, in document order.
fn document_blocks(pattern: &Pattern, preview_src: Option<&str>) -> Vec<Block> {
    let mut blocks = Vec::new();
    cover_blocks(pattern, &mut blocks);

    blocks.push(Block::SectionBreak);
    materials_blocks(pattern, &mut blocks);

    blocks.push(Block::SectionBreak);
    abbreviations_blocks(&mut blocks);

    for section in &pattern.sections {
        blocks.push(Block::SectionBreak);
        section_blocks(pattern, section, &mut blocks);
    }

    blocks.push(Block::SectionBreak);
    assembly_blocks(pattern, &mut blocks);

    if let Some(src) = preview_src {
        blocks.push(Block::Image { src: src.to_string() });
    }

    blocks
}

fn cover_blocks(pattern: &Pattern, blocks: &mut Vec<Block>) {
    blocks.push(Block::Title {
        text: format!("{} Crochet Pattern", pattern.display_name),
    });
    blocks.push(Block::Spacer { height: 12.0 });
    blocks.push(Block::paragraph(format!(
        "Finished size: {}",
        pattern.materials.finished_height
    )));
    blocks.push(Block::paragraph(format!(
        "Hook: {}  |  Yarn: {}",
        pattern.materials.hook_size, pattern.materials.yarn_weight
    )));
    blocks.push(Block::paragraph(format!(
        "Estimated time: about {} hours",
        pattern.total_time_hours
    )));
    blocks.push(Block::paragraph(format!(
        "Difficulty: {:?}",
        pattern.customizations.difficulty
    )));
    blocks.push(Block::note(format!(
        "Generated {}",
        pattern.created_at.format("%Y-%m-%d")
    )));
}

fn materials_blocks(pattern: &Pattern, blocks: &mut Vec<Block>) {
    blocks.push(Block::heading("Materials"));
    for assignment in &pattern.materials.yarn {
        let yards = assignment.yardage.unwrap_or(0);
        blocks.push(Block::SwatchRow {
            color: assignment.hex,
            text: format!(
                "{} ({}): about {} yards",
                assignment.label(),
                assignment.hex,
                yards
            ),
        });
    }
    blocks.push(Block::paragraph(format!(
        "Total yardage: about {} yards",
        pattern.materials.total_yardage
    )));
    blocks.push(Block::Spacer { height: 8.0 });
    blocks.push(Block::Heading {
        level: 2,
        text: "Notions".into(),
    });
    for notion in &pattern.materials.notions {
        blocks.push(Block::paragraph(format!("- {}", notion)));
    }
}

fn abbreviations_blocks(blocks: &mut Vec<Block>) {
    blocks.push(Block::heading("Abbreviations"));
    for stitch in STITCH_VOCABULARY {
        blocks.push(Block::paragraph(format!(
            "{}: {}",
            stitch.token(),
            stitch.expansion()
        )));
    }
    blocks.push(Block::paragraph("st(s): stitch(es)".to_string()));
    blocks.push(Block::paragraph("Rnd: round, worked in a spiral".to_string()));
    blocks.push(Block::paragraph(
        "MR / Magic ring: adjustable starting loop".to_string(),
    ));
}

fn section_blocks(
    pattern: &Pattern,
    section: &houndstitch_compile::CompiledSection,
    blocks: &mut Vec<Block>,
) {
    blocks.push(Block::heading(section.display_name.clone()));

    // Color reference for the section's starting yarn.
    if let Some(first) = section.instructions.first() {
        if let Some(assignment) = pattern
            .materials
            .yarn
            .iter()
            .find(|a| a.color_key == first.color_key)
        {
            blocks.push(Block::SwatchRow {
                color: assignment.hex,
                text: format!("Worked in {}", assignment.label()),
            });
        }
    }

    for note in &section.notes {
        blocks.push(Block::note(note.clone()));
    }

    // Supplementary detection notes, matched fuzzily by section name.
    // A name that matches nothing simply gets no notes box.
    if let Some(analysis_notes) = find_part_notes(&pattern.analysis, &section.display_name) {
        if let Some(shape) = &analysis_notes.shape_notes {
            blocks.push(Block::note(format!("From the photo: {}", shape)));
        }
    }

    blocks.push(Block::Spacer { height: 6.0 });
    for instruction in &section.instructions {
        blocks.push(Block::paragraph(instruction.text.clone()));
    }
    blocks.push(Block::note(format!(
        "Estimated time for this piece: {:.1} hours",
        section.estimated_time_hours
    )));
}

fn assembly_blocks(pattern: &Pattern, blocks: &mut Vec<Block>) {
    blocks.push(Block::heading("Assembly"));
    for (index, step) in pattern.assembly.iter().enumerate() {
        blocks.push(Block::NumberedItem {
            number: (index + 1) as u32,
            text: step.clone(),
        });
    }
}

/// Fuzzy lookup of a section's analysis notes by display name: exact
/// part-name match first, then with any parenthetical suffix stripped,
/// then by first word. Never fails; `None` means no supplementary notes.
pub fn find_part_notes<'a>(
    analysis: &'a DogAnalysis,
    section_name: &str,
) -> Option<&'a BodyPartAnalysis> {
    let by_name = |name: &str| {
        analysis
            .part_analyses
            .iter()
            .find(|a| a.part.display_name().eq_ignore_ascii_case(name))
    };

    if let Some(found) = by_name(section_name) {
        return Some(found);
    }
    let stripped = section_name
        .split(" (")
        .next()
        .unwrap_or(section_name)
        .trim();
    if let Some(found) = by_name(stripped) {
        return Some(found);
    }
    let first_word = stripped.split_whitespace().next().unwrap_or(stripped);
    by_name(first_word)
}
