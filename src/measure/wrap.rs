//! Line splitting and word-boundary wrapping.
//!
//! Wrapping uses Unicode word boundaries (UAX #29) with grapheme-level
//! force-breaking for words wider than the limit. ANSI escape sequences
//! are carried through as zero-width atoms attached to the text they
//! precede, so wrapping never splits or miscounts a sequence.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{Segment, segments};
use super::width::grapheme_width;

/// Split text on `\n`, preserving trailing empty lines.
///
/// `"a\n"` yields `["a", ""]`; vertical composition needs the exact
/// line count, which `str::lines` would hide.
#[inline]
pub fn split_lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

/// Wrap text at word boundaries so no line exceeds `max_width` cells.
///
/// Explicit `\n` is a hard break; trailing empty lines are preserved.
/// Words wider than `max_width` are force-broken at grapheme
/// boundaries, leading whitespace after a wrap break is dropped, and a
/// line's trailing whitespace is trimmed at the break. Escape
/// sequences count as zero width and are never split.
///
/// `max_width == 0` disables wrapping and returns the hard-split lines.
/// Empty input yields one empty line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines: Vec<String> = Vec::new();

    for raw_line in text.split('\n') {
        wrap_line(raw_line, max_width, &mut lines);
    }

    lines
}

/// Wrap a single line (no `\n`) by word boundaries.
fn wrap_line(line: &str, max_width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width: usize = 0;

    for segment in segments(line) {
        let run = match segment {
            Segment::Escape(seq) => {
                current.push_str(seq);
                continue;
            }
            Segment::Text(run) => run,
        };

        for word in run.split_word_bounds() {
            let word_width: usize = word.graphemes(true).map(grapheme_width).sum();

            if current_width + word_width > max_width {
                if current_width > 0 {
                    lines.push(current.trim_end().to_string());
                    current.clear();
                    current_width = 0;
                }

                // Word wider than max: force-break by grapheme.
                if word_width > max_width {
                    force_break_graphemes(word, max_width, lines, &mut current, &mut current_width);
                    continue;
                }

                // Skip leading whitespace on a new wrapped line.
                if is_whitespace(word) {
                    continue;
                }
            }

            current.push_str(word);
            current_width += word_width;
        }
    }

    lines.push(current);
}

/// Force-break a word that is wider than `max_width` by grapheme boundaries.
fn force_break_graphemes(
    word: &str,
    max_width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for grapheme in word.graphemes(true) {
        let gw = grapheme_width(grapheme);

        if *current_width + gw > max_width && !current.is_empty() {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }

        current.push_str(grapheme);
        *current_width += gw;
    }
}

/// Check if a word segment is entirely whitespace.
fn is_whitespace(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace())
}
