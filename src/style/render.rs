//! Box rendering: styled, framed string output.
//!
//! `Style::render` runs the box model over the input text:
//!
//! 1. Normalize newlines and tabs (inline mode drops newlines)
//! 2. Word-wrap to the content width, or truncate when a max width
//!    undercuts it
//! 3. Square every line up to the content width per the horizontal
//!    alignment
//! 4. Reconcile the line count with the height bounds
//! 5. Wrap padding, then colors and decorations, around each line
//! 6. Draw enabled border edges, then margins
//!
//! Rendering never fails and is deterministic. `ColorMode::Plain`
//! produces identical geometry with zero escape bytes.

use tracing::trace;

use crate::color::{Attr, RESET};
use crate::layout::Block;
use crate::measure::{split_lines, string_width, truncate_text, wrap_text};
use crate::types::ColorMode;

use super::{DEFAULT_TAB_WIDTH, Style};

impl Style {
    /// Renders `text` inside this style's box.
    ///
    /// The output block is rectangular: every line measures the content
    /// width plus the frame. Escape sequences already present in `text`
    /// pass through untouched.
    pub fn render(&self, text: &str) -> String {
        // Unstyled fast path: the output is the input.
        if self.is_unstyled() && !text.contains(['\t', '\r']) {
            return text.to_string();
        }

        let ansi = self.color_mode == ColorMode::Ansi;
        let inline = self.inline.unwrap_or(false);

        // Normalize: CRLF to LF, tabs to spaces, inline drops newlines.
        let mut text = if text.contains('\r') {
            text.replace("\r\n", "\n")
        } else {
            text.to_string()
        };
        if text.contains('\t') {
            text = match self.tab_width.unwrap_or(DEFAULT_TAB_WIDTH) {
                0 => text.replace('\t', ""),
                n => text.replace('\t', &" ".repeat(n)),
            };
        }
        if inline {
            text = text.replace('\n', "");
        }

        // Wrap or hard-split into working lines. A max width at or
        // below the target width means truncation decides instead of
        // wrapping.
        let wrap_width = match (self.width, self.max_width) {
            (Some(width), Some(max)) if max <= width => None,
            (Some(width), _) if width > 0 => Some(width),
            _ => None,
        };
        let mut lines: Vec<String> = match wrap_width {
            Some(width) if !inline => wrap_text(&text, width),
            _ => split_lines(&text).into_iter().map(str::to_string).collect(),
        };

        // Content width: explicit, else the widest line, capped by the
        // max width.
        let widest = lines
            .iter()
            .map(|line| string_width(line))
            .max()
            .unwrap_or(0);
        let mut content_width = self.width.unwrap_or(widest);
        if let Some(max) = self.max_width {
            content_width = content_width.min(max);
        }

        // Square every line to exactly the content width: truncate
        // overflow (a force-broken wide grapheme can still exceed the
        // wrap width), then pad slack per the alignment.
        let align_h = self.align_h.unwrap_or_default();
        for line in &mut lines {
            let mut width = string_width(line);
            if width > content_width {
                *line = truncate_text(line, content_width);
                width = string_width(line);
            }
            if width < content_width {
                let (left, right) = align_h.split_slack(content_width - width);
                if left > 0 {
                    line.insert_str(0, &" ".repeat(left));
                }
                if right > 0 {
                    line.push_str(&" ".repeat(right));
                }
            }
        }

        // Height: blank-fill per vertical alignment, drop trailing
        // overflow, then apply the hard ceiling.
        if !inline {
            if let Some(height) = self.height {
                if lines.len() > height {
                    lines.truncate(height);
                } else if lines.len() < height {
                    let blank = " ".repeat(content_width);
                    let (above, _) = self
                        .align_v
                        .unwrap_or_default()
                        .split_slack(height - lines.len());
                    let mut reshaped = Vec::with_capacity(height);
                    reshaped.resize(above, blank.clone());
                    reshaped.append(&mut lines);
                    reshaped.resize(height, blank);
                    lines = reshaped;
                }
            }
            if let Some(max) = self.max_height {
                if lines.len() > max {
                    lines.truncate(max);
                }
            }
        }

        trace!(width = content_width, height = lines.len(), "content box resolved");

        // Padding sits inside the colored region.
        let mut inner_width = content_width;
        if !inline {
            if let Some(padding) = self.padding {
                if padding.left > 0 || padding.right > 0 {
                    let left = " ".repeat(padding.left);
                    let right = " ".repeat(padding.right);
                    for line in &mut lines {
                        line.insert_str(0, &left);
                        line.push_str(&right);
                    }
                }
                inner_width += padding.horizontal();
                if padding.top > 0 || padding.bottom > 0 {
                    let blank = " ".repeat(inner_width);
                    let mut reshaped =
                        Vec::with_capacity(lines.len() + padding.vertical());
                    reshaped.resize(padding.top, blank.clone());
                    reshaped.append(&mut lines);
                    let target = reshaped.len() + padding.bottom;
                    reshaped.resize(target, blank);
                    lines = reshaped;
                }
            }
        }

        // Colors and decorations wrap each line, padding included, so
        // backgrounds form a solid rectangle.
        if ansi {
            let prefix = self.sgr_prefix();
            if !prefix.is_empty() {
                for line in &mut lines {
                    *line = format!("{prefix}{line}{RESET}");
                }
            }
        }

        // Border. Corners draw only where both adjacent edges are
        // enabled; a disabled edge reserves no cells.
        if !inline {
            if let Some(border) = self.border {
                let top_on = self.border_top.unwrap_or(true);
                let right_on = self.border_right.unwrap_or(true);
                let bottom_on = self.border_bottom.unwrap_or(true);
                let left_on = self.border_left.unwrap_or(true);

                let mut accent = String::new();
                if ansi {
                    if let Some(fg) = self.border_fg {
                        accent.push_str(&fg.fg_seq());
                    }
                    if let Some(bg) = self.border_bg {
                        accent.push_str(&bg.bg_seq());
                    }
                }
                let paint = |run: String| -> String {
                    if accent.is_empty() {
                        run
                    } else {
                        format!("{accent}{run}{RESET}")
                    }
                };

                if left_on || right_on {
                    let left = if left_on {
                        paint(border.left.to_string())
                    } else {
                        String::new()
                    };
                    let right = if right_on {
                        paint(border.right.to_string())
                    } else {
                        String::new()
                    };
                    for line in &mut lines {
                        line.insert_str(0, &left);
                        line.push_str(&right);
                    }
                }
                if top_on {
                    let mut row = String::new();
                    if left_on {
                        row.push_str(border.top_left);
                    }
                    row.push_str(&edge_fill(border.top, inner_width));
                    if right_on {
                        row.push_str(border.top_right);
                    }
                    lines.insert(0, paint(row));
                }
                if bottom_on {
                    let mut row = String::new();
                    if left_on {
                        row.push_str(border.bottom_left);
                    }
                    row.push_str(&edge_fill(border.bottom, inner_width));
                    if right_on {
                        row.push_str(border.bottom_right);
                    }
                    lines.push(paint(row));
                }
                if left_on {
                    inner_width += string_width(border.left);
                }
                if right_on {
                    inner_width += string_width(border.right);
                }
            }
        }

        // Margin sits outside the border, uncolored unless a margin
        // background is set.
        if !inline {
            if let Some(margin) = self.margin {
                let accent = match (ansi, self.margin_bg) {
                    (true, Some(bg)) => bg.bg_seq(),
                    _ => String::new(),
                };
                let paint = |run: String| -> String {
                    if accent.is_empty() {
                        run
                    } else {
                        format!("{accent}{run}{RESET}")
                    }
                };
                if margin.left > 0 || margin.right > 0 {
                    let left = if margin.left > 0 {
                        paint(" ".repeat(margin.left))
                    } else {
                        String::new()
                    };
                    let right = if margin.right > 0 {
                        paint(" ".repeat(margin.right))
                    } else {
                        String::new()
                    };
                    for line in &mut lines {
                        line.insert_str(0, &left);
                        line.push_str(&right);
                    }
                }
                inner_width += margin.horizontal();
                if margin.top > 0 || margin.bottom > 0 {
                    let row = if inner_width > 0 {
                        paint(" ".repeat(inner_width))
                    } else {
                        String::new()
                    };
                    let mut reshaped =
                        Vec::with_capacity(lines.len() + margin.vertical());
                    reshaped.resize(margin.top, row.clone());
                    reshaped.append(&mut lines);
                    let target = reshaped.len() + margin.bottom;
                    reshaped.resize(target, row);
                    lines = reshaped;
                }
            }
        }

        lines.join("\n")
    }

    /// Renders into a measured [`Block`] for composition.
    pub fn render_block(&self, text: &str) -> Block {
        Block::from_rendered(&self.render(text))
    }

    /// True when no property is set; rendering is then the identity.
    fn is_unstyled(&self) -> bool {
        *self
            == Style {
                color_mode: self.color_mode,
                ..Style::default()
            }
    }

    /// Combined SGR prefix for decorations plus foreground/background.
    /// Empty when none apply.
    fn sgr_prefix(&self) -> String {
        let mut attrs = Attr::NONE;
        if self.bold == Some(true) {
            attrs |= Attr::BOLD;
        }
        if self.faint == Some(true) {
            attrs |= Attr::FAINT;
        }
        if self.italic == Some(true) {
            attrs |= Attr::ITALIC;
        }
        if self.underline == Some(true) {
            attrs |= Attr::UNDERLINE;
        }
        if self.blink == Some(true) {
            attrs |= Attr::BLINK;
        }
        if self.reverse == Some(true) {
            attrs |= Attr::REVERSE;
        }
        if self.strikethrough == Some(true) {
            attrs |= Attr::STRIKETHROUGH;
        }
        let mut prefix = attrs.seq();
        if let Some(fg) = self.fg {
            prefix.push_str(&fg.fg_seq());
        }
        if let Some(bg) = self.bg {
            prefix.push_str(&bg.bg_seq());
        }
        prefix
    }
}

/// Repeat `glyph` to exactly `width` cells, trimming a final glyph
/// that would overshoot.
fn edge_fill(glyph: &str, width: usize) -> String {
    let glyph_width = string_width(glyph).max(1);
    let repeated = glyph.repeat(width.div_ceil(glyph_width));
    if string_width(&repeated) > width {
        truncate_text(&repeated, width)
    } else {
        repeated
    }
}

// =============================================================================
// Tests
// =============================================================================
