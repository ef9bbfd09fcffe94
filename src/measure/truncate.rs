//! Grapheme-safe, ANSI-preserving text truncation.
//!
//! Cuts a string down to a visible-width budget without ever splitting
//! a grapheme cluster, a wide character, or an escape sequence. Escape
//! sequences inside the kept prefix pass through verbatim; if styling
//! is still open at the cut point, a reset is appended so the cut
//! cannot bleed styling into later terminal output.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{Segment, segments, style_open_after};
use super::width::{grapheme_width, string_width};

/// Truncate text to at most `max_width` terminal cells.
///
/// Returns the longest prefix whose visible width is ≤ `max_width`.
/// A wide character that would straddle the cut is excluded entirely,
/// so the result can come up one cell short. Escape sequences in the
/// prefix are preserved; a reset (`\x1b[0m`) is appended when the cut
/// lands inside a styled span. No ellipsis is inserted.
///
/// Returns the text unchanged (owned) when it already fits.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if string_width(text) <= max_width {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut current_width: usize = 0;
    let mut open = false;

    'cut: for segment in segments(text) {
        match segment {
            Segment::Escape(seq) => {
                result.push_str(seq);
                open = style_open_after(seq, open);
            }
            Segment::Text(run) => {
                for grapheme in run.graphemes(true) {
                    let gw = grapheme_width(grapheme);
                    if current_width + gw > max_width {
                        break 'cut;
                    }
                    result.push_str(grapheme);
                    current_width += gw;
                }
            }
        }
    }

    if open {
        result.push_str("\x1b[0m");
    }

    result
}
