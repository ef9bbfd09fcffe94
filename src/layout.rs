//! Layout composition for rendered blocks.
//!
//! Joins and placement over already-rendered (possibly styled) string
//! blocks:
//! - [`join_horizontal`] - blocks side by side, aligned on a shared top,
//!   center or bottom edge
//! - [`join_vertical`] - blocks stacked, aligned left, center or right
//! - [`place`] / [`place_horizontal`] / [`place_vertical`] - a block
//!   anchored on a blank canvas
//!
//! All width arithmetic goes through the ANSI-aware measure functions;
//! composition never reflows or restyles block content.

use tracing::trace;

use crate::measure::{split_lines, string_width};
use crate::types::{HAlign, VAlign, clamped};

// =============================================================================
// Block
// =============================================================================

/// An immutable rendered block: display lines plus the cached visible
/// width of the widest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    /// Measures a rendered string into a block. An empty string is a
    /// single empty line.
    pub fn from_rendered(s: &str) -> Self {
        let lines: Vec<String> = split_lines(s).into_iter().map(str::to_string).collect();
        let width = lines.iter().map(|line| string_width(line)).max().unwrap_or(0);
        Self { lines, width }
    }

    /// Visible width of the widest line.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of display lines.
    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The display lines, top to bottom.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the lines back into a newline-separated string.
    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

// =============================================================================
// Joins
// =============================================================================

/// Joins blocks side by side.
///
/// Shorter blocks are blank-padded to the tallest height per `align`
/// (center: odd row below). Each block keeps its own width; its lines
/// are padded to that width so columns stay straight. Zero blocks
/// produce an empty string; a single block is returned as-is.
pub fn join_horizontal(align: VAlign, blocks: &[&str]) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    if blocks.len() == 1 {
        return blocks[0].to_string();
    }

    let blocks: Vec<Block> = blocks.iter().map(|b| Block::from_rendered(b)).collect();
    let tallest = blocks.iter().map(Block::height).max().unwrap_or(0);

    trace!(count = blocks.len(), rows = tallest, "join horizontal");

    let mut rows = vec![String::new(); tallest];
    for block in &blocks {
        let (above, _) = align.split_slack(tallest - block.height());
        for (i, row) in rows.iter_mut().enumerate() {
            match i.checked_sub(above).and_then(|j| block.lines().get(j)) {
                Some(line) => {
                    row.push_str(line);
                    let slack = block.width() - string_width(line);
                    if slack > 0 {
                        row.push_str(&" ".repeat(slack));
                    }
                }
                None => row.push_str(&" ".repeat(block.width())),
            }
        }
    }
    rows.join("\n")
}

/// Stacks blocks top to bottom.
///
/// Every line is padded out to the widest block's width per `align`
/// (center: odd column on the right). Zero blocks produce an empty
/// string; a single block is returned as-is.
pub fn join_vertical(align: HAlign, blocks: &[&str]) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    if blocks.len() == 1 {
        return blocks[0].to_string();
    }

    let blocks: Vec<Block> = blocks.iter().map(|b| Block::from_rendered(b)).collect();
    let widest = blocks.iter().map(Block::width).max().unwrap_or(0);

    trace!(count = blocks.len(), width = widest, "join vertical");

    let mut out: Vec<String> = Vec::with_capacity(blocks.iter().map(Block::height).sum());
    for block in &blocks {
        for line in block.lines() {
            let slack = widest - string_width(line);
            if slack == 0 {
                out.push(line.clone());
                continue;
            }
            let (left, right) = align.split_slack(slack);
            let mut row = String::with_capacity(line.len() + slack);
            row.push_str(&" ".repeat(left));
            row.push_str(line);
            row.push_str(&" ".repeat(right));
            out.push(row);
        }
    }
    out.join("\n")
}

// =============================================================================
// Placement
// =============================================================================

/// Anchors `content` on a `width` x `height` canvas of spaces.
///
/// A block larger than the canvas expands it; nothing is ever clipped.
/// Negative dimensions clamp to zero.
pub fn place(width: i32, height: i32, h: HAlign, v: VAlign, content: &str) -> String {
    place_vertical(height, v, &place_horizontal(width, h, content))
}

/// Anchors `content` in a strip `width` cells wide.
pub fn place_horizontal(width: i32, align: HAlign, content: &str) -> String {
    let block = Block::from_rendered(content);
    let target = clamped(width).max(block.width());
    let mut out: Vec<String> = Vec::with_capacity(block.height());
    for line in block.lines() {
        let slack = target - string_width(line);
        if slack == 0 {
            out.push(line.clone());
            continue;
        }
        let (left, right) = align.split_slack(slack);
        let mut row = String::with_capacity(line.len() + slack);
        row.push_str(&" ".repeat(left));
        row.push_str(line);
        row.push_str(&" ".repeat(right));
        out.push(row);
    }
    out.join("\n")
}

/// Anchors `content` in a strip `height` lines tall. Lines are padded
/// to the block width so the canvas stays rectangular.
pub fn place_vertical(height: i32, align: VAlign, content: &str) -> String {
    let block = Block::from_rendered(content);
    let target = clamped(height).max(block.height());
    let blank = " ".repeat(block.width());
    let (above, below) = align.split_slack(target - block.height());

    let mut out: Vec<String> = Vec::with_capacity(target);
    out.resize(above, blank.clone());
    for line in block.lines() {
        let slack = block.width() - string_width(line);
        if slack > 0 {
            let mut row = String::with_capacity(line.len() + slack);
            row.push_str(line);
            row.push_str(&" ".repeat(slack));
            out.push(row);
        } else {
            out.push(line.clone());
        }
    }
    let filled = out.len() + below;
    out.resize(filled, blank);
    out.join("\n")
}

// =============================================================================
// Tests
// =============================================================================
