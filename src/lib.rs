//! # spark-gloss
//!
//! Terminal string styling and layout for Rust.
//!
//! A [`Style`] is an immutable description of one box of text: colors,
//! decorations, dimensions, alignment, padding, border and margin.
//! Rendering is a pure function from a style plus a string to a styled
//! string; the layout functions compose rendered blocks into rows,
//! columns and canvases. The crate never touches the terminal.
//!
//! ```
//! use spark_gloss::{Border, Color, Style, VAlign, join_horizontal};
//!
//! let card = Style::new()
//!     .foreground(Color::Ansi(13))
//!     .border(Border::ROUNDED)
//!     .padding((0, 1));
//!
//! let left = card.render("status");
//! let right = card.render("ok");
//! let row = join_horizontal(VAlign::Top, &[left.as_str(), right.as_str()]);
//! ```
//!
//! ## Modules
//!
//! - [`style`] - The [`Style`] descriptor, its builder and the box renderer
//! - [`layout`] - Joins and placement over rendered blocks
//! - [`measure`] - ANSI-aware width, wrap and truncation primitives
//! - [`border`] - Border glyph presets
//! - [`color`] - Resolved terminal colors and SGR attributes
//! - [`types`] - Alignment, spacing and color-mode value types

pub mod border;
pub mod color;
pub mod layout;
pub mod measure;
pub mod style;
pub mod types;

// Re-export the working surface at the crate root
pub use border::Border;
pub use color::{Attr, Color, RESET};
pub use layout::{Block, join_horizontal, join_vertical, place, place_horizontal, place_vertical};
pub use measure::{split_lines, string_height, string_width, strip_ansi, truncate_text, wrap_text};
pub use style::Style;
pub use types::{ColorMode, Edges, HAlign, VAlign};
