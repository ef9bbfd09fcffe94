//! Unicode- and ANSI-aware text measurement for terminal layout.
//!
//! Every width, wrap, and cut in the crate goes through this module;
//! nothing else slices strings by byte offset.
//!
//! # Capabilities
//!
//! - **Width calculation**: Correct terminal cell width for any Unicode text
//! - **ANSI stripping**: Properly skips CSI, OSC, and ESC escape sequences
//! - **Grapheme awareness**: Never breaks in the middle of a grapheme cluster
//! - **Emoji sequences**: ZWJ families, skin tones, flags measured as width 2
//! - **Word wrapping**: UAX #29 word boundaries with grapheme force-break
//! - **Truncation**: Escape-preserving cuts that repair open styling
//!
//! # Implementation
//!
//! Uses `unicode-width` (East Asian Width tables) and
//! `unicode-segmentation` (UAX #29 grapheme and word boundaries) as the
//! foundation, with custom handling for ANSI escapes and emoji sequences.

mod ansi;
mod truncate;
mod width;
mod wrap;

pub use ansi::strip_ansi;
pub use truncate::truncate_text;
pub use width::{char_width, grapheme_width, string_height, string_width};
pub use wrap::{split_lines, wrap_text};
