//! Core value types for spark-gloss.
//!
//! Alignment anchors, the four-edge spacing record with its CSS-style
//! shorthand, and the terminal color capability signal. Everything here
//! is plain copyable data; the interesting behavior lives in the
//! conversions.

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal alignment within a box or canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HAlign {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Vertical alignment within a box or canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum VAlign {
    #[default]
    Top = 0,
    Center = 1,
    Bottom = 2,
}

impl HAlign {
    /// Splits `slack` cells into (leading, trailing). Center gives the
    /// odd cell to the trailing side.
    #[inline]
    pub(crate) const fn split_slack(self, slack: usize) -> (usize, usize) {
        match self {
            Self::Left => (0, slack),
            Self::Center => (slack / 2, slack - slack / 2),
            Self::Right => (slack, 0),
        }
    }
}

impl VAlign {
    /// Splits `slack` lines into (above, below). Center gives the odd
    /// line to the bottom.
    #[inline]
    pub(crate) const fn split_slack(self, slack: usize) -> (usize, usize) {
        match self {
            Self::Top => (0, slack),
            Self::Center => (slack / 2, slack - slack / 2),
            Self::Bottom => (slack, 0),
        }
    }
}

// =============================================================================
// Edges - four-sided spacing
// =============================================================================

/// Resolved spacing for the four edges of a box, in terminal cells.
///
/// Built from the CSS shorthand conversions:
///
/// ```
/// use spark_gloss::types::Edges;
///
/// assert_eq!(Edges::from(2), Edges::new(2, 2, 2, 2));
/// assert_eq!(Edges::from((1, 2)), Edges::new(1, 2, 1, 2));
/// assert_eq!(Edges::from((1, 2, 3, 4)), Edges::new(1, 2, 3, 4));
/// ```
///
/// Negative inputs clamp to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

/// Clamp a possibly-negative cell count to zero.
#[inline]
pub(crate) const fn clamped(v: i32) -> usize {
    if v < 0 { 0 } else { v as usize }
}

impl Edges {
    /// Spacing with explicit values per edge (clockwise from top).
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same spacing on all four edges.
    pub const fn uniform(n: usize) -> Self {
        Self::new(n, n, n, n)
    }

    /// Vertical (top/bottom) and horizontal (left/right) spacing.
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal spacing (left + right).
    #[inline]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Total vertical spacing (top + bottom).
    #[inline]
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

impl From<i32> for Edges {
    /// One value → all four edges.
    fn from(all: i32) -> Self {
        Self::uniform(clamped(all))
    }
}

impl From<(i32, i32)> for Edges {
    /// Two values → (top & bottom, left & right).
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        Self::symmetric(clamped(vertical), clamped(horizontal))
    }
}

impl From<(i32, i32, i32, i32)> for Edges {
    /// Four values → top, right, bottom, left (clockwise).
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self::new(
            clamped(top),
            clamped(right),
            clamped(bottom),
            clamped(left),
        )
    }
}

impl From<&[i32]> for Edges {
    /// Variadic shorthand: 1, 2, or 4 values with the CSS meanings above.
    ///
    /// # Panics
    ///
    /// Any other count is a contract violation and panics naming the
    /// received count. Guessing an interpretation for 3 or 5 values
    /// would produce silent layout bugs.
    fn from(values: &[i32]) -> Self {
        match values {
            [all] => Self::from(*all),
            [vertical, horizontal] => Self::from((*vertical, *horizontal)),
            [top, right, bottom, left] => Self::from((*top, *right, *bottom, *left)),
            _ => panic!(
                "spacing shorthand expects 1, 2, or 4 values, got {}",
                values.len()
            ),
        }
    }
}

// =============================================================================
// Color mode
// =============================================================================

/// Pre-resolved terminal color capability.
///
/// The crate never inspects the environment; callers resolve support
/// (e.g. a `NO_COLOR` opt-out) once and pass the result in. `Plain`
/// renders identical geometry with zero escape bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ColorMode {
    #[default]
    Ansi = 0,
    Plain = 1,
}

// =============================================================================
// Tests
// =============================================================================
