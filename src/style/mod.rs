//! Style - Immutable box styling descriptor.
//!
//! A `Style` is a value: every mutator consumes the receiver and returns
//! a new style with exactly the named property changed. The type is
//! `Copy`, so the original stays usable after a mutator call.
//!
//! Every property is tri-state: unset, or set to a value (including
//! "explicitly off"). Unset properties contribute nothing at render
//! time; the renderer treats an unset width as auto-size, while
//! `width(0)` is a literal zero-width box.
//!
//! Properties:
//! - Text decorations (bold, italic, underline, ...)
//! - Foreground/background colors, border and margin colors
//! - Box geometry: width/height bounds, alignment, padding, margin
//! - Border glyphs with per-edge visibility
//!
//! ```
//! use spark_gloss::{Border, Color, Style};
//!
//! let style = Style::new()
//!     .bold(true)
//!     .foreground(Color::Ansi(5))
//!     .padding((1, 2))
//!     .border(Border::ROUNDED)
//!     .width(22);
//!
//! let card = style.render("Spark");
//! ```

mod render;

use crate::border::Border;
use crate::color::Color;
use crate::measure::string_width;
use crate::types::{ColorMode, Edges, HAlign, VAlign, clamped};

/// Tab stops used when `tab_width` is unset.
pub(crate) const DEFAULT_TAB_WIDTH: usize = 4;

// =============================================================================
// Style
// =============================================================================

/// A set of explicitly-set rendering properties for one box of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    // Decorations
    bold: Option<bool>,
    faint: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    blink: Option<bool>,
    reverse: Option<bool>,
    strikethrough: Option<bool>,

    // Colors
    fg: Option<Color>,
    bg: Option<Color>,
    border_fg: Option<Color>,
    border_bg: Option<Color>,
    margin_bg: Option<Color>,

    // Geometry
    width: Option<usize>,
    height: Option<usize>,
    max_width: Option<usize>,
    max_height: Option<usize>,
    align_h: Option<HAlign>,
    align_v: Option<VAlign>,
    padding: Option<Edges>,
    margin: Option<Edges>,

    // Border glyphs plus per-edge visibility. An unset edge flag means
    // enabled whenever `border` is set.
    border: Option<Border>,
    border_top: Option<bool>,
    border_right: Option<bool>,
    border_bottom: Option<bool>,
    border_left: Option<bool>,

    // Behavior
    inline: Option<bool>,
    tab_width: Option<usize>,
    color_mode: ColorMode,
}

impl Style {
    /// A style with every property unset.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Decorations
    // =========================================================================

    /// Bold text.
    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    /// Faint (dim) text.
    pub fn faint(mut self, on: bool) -> Self {
        self.faint = Some(on);
        self
    }

    /// Italic text.
    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    /// Underlined text.
    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    /// Blinking text.
    pub fn blink(mut self, on: bool) -> Self {
        self.blink = Some(on);
        self
    }

    /// Swapped foreground/background.
    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = Some(on);
        self
    }

    /// Struck-through text.
    pub fn strikethrough(mut self, on: bool) -> Self {
        self.strikethrough = Some(on);
        self
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// Text foreground color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Text background color. Covers content, alignment slack and
    /// padding cells.
    pub fn background(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Border foreground color.
    pub fn border_foreground(mut self, color: Color) -> Self {
        self.border_fg = Some(color);
        self
    }

    /// Border background color.
    pub fn border_background(mut self, color: Color) -> Self {
        self.border_bg = Some(color);
        self
    }

    /// Background color for margin cells. Margins are uncolored by
    /// default.
    pub fn margin_background(mut self, color: Color) -> Self {
        self.margin_bg = Some(color);
        self
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    /// Fixed content width in cells. Long lines word-wrap to fit;
    /// short lines pad out per the horizontal alignment. Negative
    /// clamps to zero.
    pub fn width(mut self, cells: i32) -> Self {
        self.width = Some(clamped(cells));
        self
    }

    /// Fixed content height in lines. Missing lines are blank-filled
    /// per the vertical alignment; extra lines are dropped. Negative
    /// clamps to zero.
    pub fn height(mut self, lines: i32) -> Self {
        self.height = Some(clamped(lines));
        self
    }

    /// Hard ceiling on content width. Overflowing lines are truncated,
    /// never wrapped.
    pub fn max_width(mut self, cells: i32) -> Self {
        self.max_width = Some(clamped(cells));
        self
    }

    /// Hard ceiling on content height; extra lines are dropped.
    pub fn max_height(mut self, lines: i32) -> Self {
        self.max_height = Some(clamped(lines));
        self
    }

    // =========================================================================
    // Alignment
    // =========================================================================

    /// Horizontal alignment of content within the box width.
    pub fn align(mut self, align: HAlign) -> Self {
        self.align_h = Some(align);
        self
    }

    /// Vertical alignment of content within the box height.
    pub fn align_vertical(mut self, align: VAlign) -> Self {
        self.align_v = Some(align);
        self
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Padding between content and border, CSS shorthand:
    /// one value for all edges, `(vertical, horizontal)`, or
    /// `(top, right, bottom, left)`. The `&[i32]` form panics on any
    /// other length.
    pub fn padding(mut self, edges: impl Into<Edges>) -> Self {
        self.padding = Some(edges.into());
        self
    }

    /// Margin outside the border, same shorthand as [`Style::padding`].
    pub fn margin(mut self, edges: impl Into<Edges>) -> Self {
        self.margin = Some(edges.into());
        self
    }

    /// Top padding only; other edges keep their current value.
    pub fn padding_top(mut self, cells: i32) -> Self {
        let mut edges = self.padding.unwrap_or_default();
        edges.top = clamped(cells);
        self.padding = Some(edges);
        self
    }

    /// Right padding only.
    pub fn padding_right(mut self, cells: i32) -> Self {
        let mut edges = self.padding.unwrap_or_default();
        edges.right = clamped(cells);
        self.padding = Some(edges);
        self
    }

    /// Bottom padding only.
    pub fn padding_bottom(mut self, cells: i32) -> Self {
        let mut edges = self.padding.unwrap_or_default();
        edges.bottom = clamped(cells);
        self.padding = Some(edges);
        self
    }

    /// Left padding only.
    pub fn padding_left(mut self, cells: i32) -> Self {
        let mut edges = self.padding.unwrap_or_default();
        edges.left = clamped(cells);
        self.padding = Some(edges);
        self
    }

    /// Top margin only; other edges keep their current value.
    pub fn margin_top(mut self, cells: i32) -> Self {
        let mut edges = self.margin.unwrap_or_default();
        edges.top = clamped(cells);
        self.margin = Some(edges);
        self
    }

    /// Right margin only.
    pub fn margin_right(mut self, cells: i32) -> Self {
        let mut edges = self.margin.unwrap_or_default();
        edges.right = clamped(cells);
        self.margin = Some(edges);
        self
    }

    /// Bottom margin only.
    pub fn margin_bottom(mut self, cells: i32) -> Self {
        let mut edges = self.margin.unwrap_or_default();
        edges.bottom = clamped(cells);
        self.margin = Some(edges);
        self
    }

    /// Left margin only.
    pub fn margin_left(mut self, cells: i32) -> Self {
        let mut edges = self.margin.unwrap_or_default();
        edges.left = clamped(cells);
        self.margin = Some(edges);
        self
    }

    // =========================================================================
    // Border
    // =========================================================================

    /// Border glyph set. All four edges draw unless individually
    /// disabled with the per-edge toggles.
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Per-edge border visibility shorthand: one flag for all edges or
    /// four flags clockwise `[top, right, bottom, left]`.
    ///
    /// Panics on any other length, including two. A boolean pair has no
    /// evident vertical/horizontal reading, so it is rejected rather
    /// than guessed at.
    pub fn border_edges(mut self, edges: &[bool]) -> Self {
        match *edges {
            [all] => {
                self.border_top = Some(all);
                self.border_right = Some(all);
                self.border_bottom = Some(all);
                self.border_left = Some(all);
            }
            [top, right, bottom, left] => {
                self.border_top = Some(top);
                self.border_right = Some(right);
                self.border_bottom = Some(bottom);
                self.border_left = Some(left);
            }
            _ => panic!(
                "border edge shorthand expects 1 or 4 values, got {}",
                edges.len()
            ),
        }
        self
    }

    /// Top border edge visibility.
    pub fn border_top(mut self, on: bool) -> Self {
        self.border_top = Some(on);
        self
    }

    /// Right border edge visibility.
    pub fn border_right(mut self, on: bool) -> Self {
        self.border_right = Some(on);
        self
    }

    /// Bottom border edge visibility.
    pub fn border_bottom(mut self, on: bool) -> Self {
        self.border_bottom = Some(on);
        self
    }

    /// Left border edge visibility.
    pub fn border_left(mut self, on: bool) -> Self {
        self.border_left = Some(on);
        self
    }

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Force single-line output: newlines are removed and padding,
    /// border and margin are skipped. Width bounds and colors still
    /// apply.
    pub fn inline(mut self, on: bool) -> Self {
        self.inline = Some(on);
        self
    }

    /// Spaces substituted per tab before measuring. Zero removes tabs;
    /// unset expands to 4. Negative clamps to zero.
    pub fn tab_width(mut self, cells: i32) -> Self {
        self.tab_width = Some(clamped(cells));
        self
    }

    /// Output mode. [`ColorMode::Plain`] renders the same geometry with
    /// no escape sequences.
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    // =========================================================================
    // Removers: restore a property to the unset state
    // =========================================================================

    pub fn unset_bold(mut self) -> Self {
        self.bold = None;
        self
    }

    pub fn unset_faint(mut self) -> Self {
        self.faint = None;
        self
    }

    pub fn unset_italic(mut self) -> Self {
        self.italic = None;
        self
    }

    pub fn unset_underline(mut self) -> Self {
        self.underline = None;
        self
    }

    pub fn unset_blink(mut self) -> Self {
        self.blink = None;
        self
    }

    pub fn unset_reverse(mut self) -> Self {
        self.reverse = None;
        self
    }

    pub fn unset_strikethrough(mut self) -> Self {
        self.strikethrough = None;
        self
    }

    pub fn unset_foreground(mut self) -> Self {
        self.fg = None;
        self
    }

    pub fn unset_background(mut self) -> Self {
        self.bg = None;
        self
    }

    pub fn unset_border_foreground(mut self) -> Self {
        self.border_fg = None;
        self
    }

    pub fn unset_border_background(mut self) -> Self {
        self.border_bg = None;
        self
    }

    pub fn unset_margin_background(mut self) -> Self {
        self.margin_bg = None;
        self
    }

    pub fn unset_width(mut self) -> Self {
        self.width = None;
        self
    }

    pub fn unset_height(mut self) -> Self {
        self.height = None;
        self
    }

    pub fn unset_max_width(mut self) -> Self {
        self.max_width = None;
        self
    }

    pub fn unset_max_height(mut self) -> Self {
        self.max_height = None;
        self
    }

    pub fn unset_align(mut self) -> Self {
        self.align_h = None;
        self
    }

    pub fn unset_align_vertical(mut self) -> Self {
        self.align_v = None;
        self
    }

    pub fn unset_padding(mut self) -> Self {
        self.padding = None;
        self
    }

    pub fn unset_margin(mut self) -> Self {
        self.margin = None;
        self
    }

    /// Clears the border glyphs and all four edge flags.
    pub fn unset_border(mut self) -> Self {
        self.border = None;
        self.border_top = None;
        self.border_right = None;
        self.border_bottom = None;
        self.border_left = None;
        self
    }

    pub fn unset_border_top(mut self) -> Self {
        self.border_top = None;
        self
    }

    pub fn unset_border_right(mut self) -> Self {
        self.border_right = None;
        self
    }

    pub fn unset_border_bottom(mut self) -> Self {
        self.border_bottom = None;
        self
    }

    pub fn unset_border_left(mut self) -> Self {
        self.border_left = None;
        self
    }

    pub fn unset_inline(mut self) -> Self {
        self.inline = None;
        self
    }

    pub fn unset_tab_width(mut self) -> Self {
        self.tab_width = None;
        self
    }

    // =========================================================================
    // Inheritance
    // =========================================================================

    /// Fills this style's unset properties from `other`'s set ones.
    /// Padding and margin are never inherited; box spacing is
    /// positional, not thematic. Set properties always win.
    pub fn inherit(mut self, other: &Style) -> Self {
        macro_rules! fill_unset {
            ($($field:ident),+ $(,)?) => {
                $(
                    if self.$field.is_none() {
                        self.$field = other.$field;
                    }
                )+
            };
        }
        fill_unset!(
            bold,
            faint,
            italic,
            underline,
            blink,
            reverse,
            strikethrough,
            fg,
            bg,
            border_fg,
            border_bg,
            margin_bg,
            width,
            height,
            max_width,
            max_height,
            align_h,
            align_v,
            border,
            border_top,
            border_right,
            border_bottom,
            border_left,
            inline,
            tab_width,
        );
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The explicit content width, if one was set.
    #[inline]
    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    /// The explicit content height, if one was set.
    #[inline]
    pub fn get_height(&self) -> Option<usize> {
        self.height
    }

    /// Cells the frame adds horizontally: left/right padding, enabled
    /// left/right border glyphs, left/right margin.
    pub fn horizontal_frame_size(&self) -> usize {
        let padding = self.padding.unwrap_or_default();
        let margin = self.margin.unwrap_or_default();
        let mut frame = padding.horizontal() + margin.horizontal();
        if let Some(border) = self.border {
            if self.border_left.unwrap_or(true) {
                frame += string_width(border.left);
            }
            if self.border_right.unwrap_or(true) {
                frame += string_width(border.right);
            }
        }
        frame
    }

    /// Lines the frame adds vertically: top/bottom padding, enabled
    /// top/bottom border rows, top/bottom margin.
    pub fn vertical_frame_size(&self) -> usize {
        let padding = self.padding.unwrap_or_default();
        let margin = self.margin.unwrap_or_default();
        let mut frame = padding.vertical() + margin.vertical();
        if self.border.is_some() {
            if self.border_top.unwrap_or(true) {
                frame += 1;
            }
            if self.border_bottom.unwrap_or(true) {
                frame += 1;
            }
        }
        frame
    }

    #[inline]
    pub(crate) fn has_border_top(&self) -> bool {
        self.border.is_some() && self.border_top.unwrap_or(true)
    }

    #[inline]
    pub(crate) fn has_border_right(&self) -> bool {
        self.border.is_some() && self.border_right.unwrap_or(true)
    }

    #[inline]
    pub(crate) fn has_border_bottom(&self) -> bool {
        self.border.is_some() && self.border_bottom.unwrap_or(true)
    }

    #[inline]
    pub(crate) fn has_border_left(&self) -> bool {
        self.border.is_some() && self.border_left.unwrap_or(true)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── immutability ──

    #[test]
    fn mutators_leave_receiver_untouched() {
        let base = Style::new().bold(true).width(10);
        let _ = base.italic(true).width(40).padding(3);
        assert_eq!(base, Style::new().bold(true).width(10));
    }

    #[test]
    fn explicit_false_differs_from_unset() {
        assert_ne!(Style::new().bold(false), Style::new());
        assert_eq!(Style::new().bold(false).unset_bold(), Style::new());
    }

    // ── dimensions ──

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        assert_eq!(Style::new().width(-3).get_width(), Some(0));
        assert_eq!(Style::new().height(-1).get_height(), Some(0));
        assert_eq!(Style::new().width(-3), Style::new().width(0));
    }

    #[test]
    fn zero_width_is_distinct_from_unset() {
        assert_eq!(Style::new().get_width(), None);
        assert_eq!(Style::new().width(0).get_width(), Some(0));
    }

    // ── spacing shorthand ──

    #[test]
    fn padding_shorthand_forms_agree() {
        let uniform = Style::new().padding(2);
        assert_eq!(uniform, Style::new().padding((2, 2)));
        assert_eq!(uniform, Style::new().padding((2, 2, 2, 2)));
        assert_eq!(uniform, Style::new().padding(&[2][..]));
    }

    #[test]
    fn padding_edge_setter_preserves_others() {
        let style = Style::new().padding(2).padding_left(5);
        assert_eq!(style, Style::new().padding((2, 2, 2, 5)));
    }

    #[test]
    fn margin_edge_setter_materializes_zeros() {
        let style = Style::new().margin_bottom(3);
        assert_eq!(style, Style::new().margin((0, 0, 3, 0)));
    }

    #[test]
    #[should_panic(expected = "got 3")]
    fn spacing_slice_of_three_panics() {
        let _ = Style::new().padding(&[1, 2, 3][..]);
    }

    // ── border edges ──

    #[test]
    fn border_edges_single_flag_covers_all() {
        let style = Style::new().border(Border::NORMAL).border_edges(&[false]);
        assert!(!style.has_border_top());
        assert!(!style.has_border_right());
        assert!(!style.has_border_bottom());
        assert!(!style.has_border_left());
    }

    #[test]
    fn border_edges_four_flags_clockwise() {
        let style = Style::new()
            .border(Border::NORMAL)
            .border_edges(&[true, false, true, false]);
        assert!(style.has_border_top());
        assert!(!style.has_border_right());
        assert!(style.has_border_bottom());
        assert!(!style.has_border_left());
    }

    #[test]
    fn border_edges_default_enabled() {
        let style = Style::new().border(Border::NORMAL);
        assert!(style.has_border_top());
        assert!(style.has_border_left());
    }

    #[test]
    fn edge_flags_without_border_draw_nothing() {
        let style = Style::new().border_top(true);
        assert!(!style.has_border_top());
    }

    #[test]
    #[should_panic(expected = "got 2")]
    fn border_edges_pair_panics() {
        let _ = Style::new().border_edges(&[true, false]);
    }

    #[test]
    #[should_panic(expected = "got 0")]
    fn border_edges_empty_panics() {
        let _ = Style::new().border_edges(&[]);
    }

    // ── inheritance ──

    #[test]
    fn inherit_fills_only_unset_fields() {
        let parent = Style::new()
            .bold(true)
            .foreground(Color::Ansi(1))
            .padding(2)
            .margin(1);
        let child = Style::new().foreground(Color::Ansi(4)).inherit(&parent);
        assert_eq!(child, Style::new().foreground(Color::Ansi(4)).bold(true));
    }

    #[test]
    fn inherit_skips_padding_and_margin() {
        let parent = Style::new().padding(3).margin(2);
        assert_eq!(Style::new().inherit(&parent), Style::new());
    }

    // ── frame sizes ──

    #[test]
    fn frame_sizes_sum_padding_border_margin() {
        let style = Style::new().padding(1).margin(2).border(Border::NORMAL);
        assert_eq!(style.horizontal_frame_size(), 2 + 4 + 2);
        assert_eq!(style.vertical_frame_size(), 2 + 4 + 2);
    }

    #[test]
    fn frame_size_skips_disabled_edges() {
        let style = Style::new().border(Border::NORMAL).border_left(false);
        assert_eq!(style.horizontal_frame_size(), 1);
        assert_eq!(style.vertical_frame_size(), 2);
    }

    #[test]
    fn frame_size_empty_style_is_zero() {
        assert_eq!(Style::new().horizontal_frame_size(), 0);
        assert_eq!(Style::new().vertical_frame_size(), 0);
    }

    // ── removers ──

    #[test]
    fn unset_roundtrips_to_new() {
        let style = Style::new()
            .bold(true)
            .foreground(Color::Rgb(1, 2, 3))
            .width(8)
            .padding(1)
            .border(Border::DOUBLE)
            .border_left(false)
            .inline(true)
            .tab_width(2);
        let cleared = style
            .unset_bold()
            .unset_foreground()
            .unset_width()
            .unset_padding()
            .unset_border()
            .unset_inline()
            .unset_tab_width();
        assert_eq!(cleared, Style::new());
    }

    #[test]
    fn unset_edge_flag_restores_default_visibility() {
        let style = Style::new().border(Border::NORMAL).border_left(false);
        assert!(!style.has_border_left());
        assert!(style.unset_border_left().has_border_left());
    }

    #[test]
    fn tab_width_clamps_negative() {
        assert_eq!(Style::new().tab_width(-4), Style::new().tab_width(0));
    }
}
