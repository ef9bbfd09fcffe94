//! ANSI color and text-attribute sequences.
//!
//! Colors arrive in this crate already resolved to an ANSI palette
//! index or an RGB triple, and expose exactly one capability:
//! producing their foreground/background escape sequence. Hex/name
//! parsing and terminal-background adaptation happen before a value
//! gets here.

/// Reset all attributes and colors.
pub const RESET: &str = "\x1b[0m";

// =============================================================================
// Color
// =============================================================================

/// A resolved terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// The terminal's configured default foreground/background.
    #[default]
    Default,
    /// ANSI palette index: 0-7 standard, 8-15 bright, 16-255 extended.
    Ansi(u8),
    /// 24-bit TrueColor.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Escape sequence selecting this color as the foreground.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_gloss::Color;
    ///
    /// assert_eq!(Color::Ansi(1).fg_seq(), "\x1b[31m");
    /// assert_eq!(Color::Rgb(255, 128, 64).fg_seq(), "\x1b[38;2;255;128;64m");
    /// ```
    pub fn fg_seq(&self) -> String {
        match *self {
            // Reset to terminal default foreground
            Self::Default => "\x1b[39m".to_string(),
            // Standard colors: 30-37
            Self::Ansi(index) if index < 8 => format!("\x1b[{}m", 30 + index),
            // Bright colors: 90-97
            Self::Ansi(index) if index < 16 => format!("\x1b[{}m", 90 + index - 8),
            // Extended palette: 38;5;n
            Self::Ansi(index) => format!("\x1b[38;5;{}m", index),
            // TrueColor: 38;2;r;g;b
            Self::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        }
    }

    /// Escape sequence selecting this color as the background.
    pub fn bg_seq(&self) -> String {
        match *self {
            // Reset to terminal default background
            Self::Default => "\x1b[49m".to_string(),
            // Standard colors: 40-47
            Self::Ansi(index) if index < 8 => format!("\x1b[{}m", 40 + index),
            // Bright colors: 100-107
            Self::Ansi(index) if index < 16 => format!("\x1b[{}m", 100 + index - 8),
            // Extended palette: 48;5;n
            Self::Ansi(index) => format!("\x1b[48;5;{}m", index),
            // TrueColor: 48;2;r;g;b
            Self::Rgb(r, g, b) => format!("\x1b[48;2;{};{};{}m", r, g, b),
        }
    }
}

// =============================================================================
// Text attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text decoration attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

impl Attr {
    /// Combined SGR sequence for the set flags, e.g. `\x1b[1;3m` for
    /// bold + italic. Empty string when no flags are set.
    #[allow(unused_assignments)]
    pub fn seq(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(16);
        out.push_str("\x1b[");
        let mut first = true;

        macro_rules! emit {
            ($flag:expr, $code:literal) => {
                if self.contains($flag) {
                    if !first {
                        out.push(';');
                    }
                    out.push_str($code);
                    first = false;
                }
            };
        }

        emit!(Attr::BOLD, "1");
        emit!(Attr::FAINT, "2");
        emit!(Attr::ITALIC, "3");
        emit!(Attr::UNDERLINE, "4");
        emit!(Attr::BLINK, "5");
        emit!(Attr::REVERSE, "7");
        emit!(Attr::STRIKETHROUGH, "9");

        out.push('m');
        out
    }
}

// =============================================================================
// Tests
// =============================================================================
