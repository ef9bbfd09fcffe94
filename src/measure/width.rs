//! Visible width and height of terminal text.
//!
//! The single source of truth for "how many terminal columns does this
//! string occupy." Uses Unicode East Asian Width for per-codepoint
//! widths and grapheme cluster analysis for emoji sequences; ANSI
//! escape sequences count as zero columns.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;

/// Display width of a single Unicode codepoint in terminal cells.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for normal-width characters (ASCII, Latin, Cyrillic, etc.)
/// - `2` for wide characters (CJK ideographs, fullwidth forms)
#[inline]
pub fn char_width(c: char) -> usize {
    // Force known emoji ranges to width 2 (terminal renderers usually treat them as wide)
    match c as u32 {
        // Sparkles ✨, Zap ⚡, etc
        0x2600..=0x27BF => 2,
        // Misc Symbols and Pictographs (typical emojis)
        0x1F300..=0x1F5FF => 2,
        // Emoticons (😀)
        0x1F600..=0x1F64F => 2,
        // Transport and Map Symbols (🚀)
        0x1F680..=0x1F6FF => 2,
        // Supplemental Symbols and Pictographs
        0x1F900..=0x1F9FF => 2,
        // Symbols and Pictographs Extended-A
        0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster in terminal cells.
///
/// A grapheme cluster is a user-perceived character that may span multiple
/// Unicode codepoints:
/// - `é` (e + combining acute) → width 1
/// - `👨‍👩‍👧‍👦` (family ZWJ sequence) → width 2
/// - `🇺🇸` (flag: regional indicator pair) → width 2
/// - `👍🏽` (thumbs up + skin tone) → width 2
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return 0,
    };

    // Single codepoint: use char_width for proper emoji handling.
    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Multi-codepoint grapheme cluster.

    // Regional indicator pair (flag emoji: 🇺🇸)
    let first_cp = first as u32;
    if (0x1F1E6..=0x1F1FF).contains(&first_cp) {
        return 2;
    }

    // Scan trailing codepoints for emoji sequence modifiers.
    for c in grapheme.chars().skip(1) {
        match c as u32 {
            0x200D => return 2,            // Zero-Width Joiner → ZWJ sequence
            0xFE0F => return 2,            // VS16 → emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // Fitzpatrick skin tone modifier
            0x20E3 => return 2,            // Combining enclosing keycap
            _ => {}
        }
    }

    // Base character + combining marks → base width only.
    first.width().unwrap_or(0)
}

/// Visible width of a string in terminal cells.
///
/// ANSI escape sequences are stripped (zero columns), wide characters
/// count as 2 cells, emoji sequences as single 2-cell clusters, and
/// combining marks as zero. A string consisting solely of escape
/// sequences measures 0.
///
/// # Performance
///
/// - Fast path for pure ASCII strings (no allocation, byte counting)
/// - ANSI stripping uses `Cow` to avoid allocation when no escapes present
/// - Grapheme iteration only when non-ASCII content detected
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Fast path: pure ASCII with no escape sequences.
    // Count printable bytes directly; control bytes and DEL are zero-width.
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|b| (0x20..0x7F).contains(b)).count();
    }

    let stripped = strip_ansi(s);
    stripped.graphemes(true).map(grapheme_width).sum()
}

/// Number of terminal rows a rendered block occupies.
///
/// Counts newline-separated lines, so a trailing newline counts as an
/// extra (empty) row and the empty string still occupies one row.
#[inline]
pub fn string_height(s: &str) -> usize {
    s.split('\n').count()
}
