//! Greedy word wrapping over fixed metrics.
//!
//! Break opportunities are spaces only; a word wider than the line gets
//! a line of its own rather than being split mid-word. Blocks never wrap
//! across pages, only across lines, so line count times line height is
//! the whole height story.

/// Wrap `text` to `max_width` points at `font_size`, with `char_width`
/// the fixed average glyph advance for that size.
pub fn wrap_text(text: &str, char_width: f32, max_width: f32) -> Vec<String> {
    let max_chars = (max_width / char_width).floor().max(1.0) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Number of wrapped lines; feeds block height computation.
pub fn line_count(text: &str, char_width: f32, max_width: f32) -> usize {
    wrap_text(text, char_width, max_width).len()
}
