//! Border glyph catalog.
//!
//! A [`Border`] is an immutable set of edge and corner glyphs. Which
//! edges actually draw is decided per [`Style`](crate::Style), so one
//! glyph set can be reused with different edges enabled.

/// Glyphs for the four edges and four corners of a box.
///
/// All fields are public; a custom border is a plain struct literal.
/// Glyphs are expected to be one terminal cell wide. The renderer
/// repeats edge glyphs to fill and will trim a wider fill glyph at the
/// corner, but frame arithmetic assumes single-cell edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl Border {
    /// A border drawing the same glyph everywhere.
    pub const fn uniform(glyph: &'static str) -> Self {
        Self {
            top: glyph,
            bottom: glyph,
            left: glyph,
            right: glyph,
            top_left: glyph,
            top_right: glyph,
            bottom_left: glyph,
            bottom_right: glyph,
        }
    }

    /// ─ │ ┌ ┐ └ ┘
    pub const NORMAL: Self = Self {
        top: "─",
        bottom: "─",
        left: "│",
        right: "│",
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
    };

    /// ─ │ ╭ ╮ ╰ ╯
    pub const ROUNDED: Self = Self {
        top: "─",
        bottom: "─",
        left: "│",
        right: "│",
        top_left: "╭",
        top_right: "╮",
        bottom_left: "╰",
        bottom_right: "╯",
    };

    /// ━ ┃ ┏ ┓ ┗ ┛
    pub const THICK: Self = Self {
        top: "━",
        bottom: "━",
        left: "┃",
        right: "┃",
        top_left: "┏",
        top_right: "┓",
        bottom_left: "┗",
        bottom_right: "┛",
    };

    /// ═ ║ ╔ ╗ ╚ ╝
    pub const DOUBLE: Self = Self {
        top: "═",
        bottom: "═",
        left: "║",
        right: "║",
        top_left: "╔",
        top_right: "╗",
        bottom_left: "╚",
        bottom_right: "╝",
    };

    /// █ on every edge and corner.
    pub const BLOCK: Self = Self::uniform("█");

    /// - | + + + +
    pub const ASCII: Self = Self {
        top: "-",
        bottom: "-",
        left: "|",
        right: "|",
        top_left: "+",
        top_right: "+",
        bottom_left: "+",
        bottom_right: "+",
    };

    /// Spaces everywhere: occupies frame cells without drawing,
    /// keeping geometry stable when a border is toggled off visually.
    pub const HIDDEN: Self = Self::uniform(" ");
}
