//! ANSI escape sequence handling for measurement.
//!
//! Lexes and strips ANSI escape sequences so they never count toward
//! text width. Handles:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char
//!
//! Malformed or unterminated sequences are consumed to end of input
//! rather than raising an error; arbitrary caller bytes must never
//! crash measurement.

use std::borrow::Cow;

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present (zero allocation).
/// Returns `Cow::Owned` with sequences removed otherwise.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&0x1B) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for segment in segments(s) {
        if let Segment::Text(text) = segment {
            result.push_str(text);
        }
    }

    Cow::Owned(result)
}

/// One lexed piece of a string: a plain text run or a complete escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// Iterator splitting a string into text runs and escape sequences.
///
/// Text runs never contain an ESC byte, so they can be measured and
/// sliced freely; escape segments are always complete sequences (or a
/// malformed tail consumed to end of input).
pub(crate) struct Segments<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.s.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        if bytes[self.pos] == 0x1B {
            let end = skip_escape_sequence(bytes, self.pos);
            let seg = Segment::Escape(&self.s[self.pos..end]);
            self.pos = end;
            return Some(seg);
        }

        // Safe to slice at ESC positions: ESC (0x1B) is a single-byte ASCII
        // character, so it never lands inside a UTF-8 sequence.
        let start = self.pos;
        let mut i = self.pos;
        while i < bytes.len() && bytes[i] != 0x1B {
            i += 1;
        }
        self.pos = i;
        Some(Segment::Text(&self.s[start..i]))
    }
}

/// Lex a string into [`Segment`]s.
pub(crate) fn segments(s: &str) -> Segments<'_> {
    Segments { s, pos: 0 }
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
pub(crate) fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' => skip_string_terminated(bytes, next + 1),
        b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        _ => next + 1, // Two-character sequence
    }
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
///
/// CSI format: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1; // Final byte — sequence complete
        }
        if b < 0x20 || b > 0x7E {
            return i; // Invalid byte — abort sequence
        }
        i += 1;
    }

    len // Unterminated — consume all
}

/// Skip a string-terminated sequence (OSC, DCS, PM, APC).
/// `pos` is the byte after the type indicator.
///
/// Terminates with BEL (0x07) or ST (ESC \).
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        match bytes[i] {
            0x07 => return i + 1,
            0x1B if i + 1 < len && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }

    len // Unterminated — consume all
}

/// Whether terminal styling remains open after one escape sequence.
///
/// Only SGR sequences (CSI with final byte `m`) change the answer: a reset
/// parameter (`0` or empty) closes styling, any other parameter opens it.
/// Parameters apply left to right, so `\x1b[0;31m` leaves styling open
/// while `\x1b[31;0m` leaves it closed. Non-SGR sequences pass `open`
/// through unchanged.
pub(crate) fn style_open_after(seq: &str, open: bool) -> bool {
    let Some(params) = seq
        .strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
    else {
        return open;
    };

    // SGR parameters are digits separated by `;` (or `:` for subparams).
    // Anything else is some other control function that happens to end
    // in `m`; leave the state alone.
    if !params
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b';' || b == b':')
    {
        return open;
    }

    let mut open = open;
    for param in params.split(';') {
        if param.is_empty() || param.bytes().all(|b| b == b'0') {
            open = false;
        } else {
            open = true;
        }
    }
    open
}
