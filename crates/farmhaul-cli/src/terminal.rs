//! Terminal styling and capability detection.
//!
//! Colors and non-ASCII glyphs (the rupee sign, box drawing) are only used
//! when the environment says the terminal can show them.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headline figures.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for labels and the estimate note.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for the total cost.
    pub const GREEN: &str = "\x1b[1;32m";
    /// Cyan for travel time and trip count.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow for the estimate disclaimer.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub cyan: &'static str,
    pub yellow: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            cyan: colors::CYAN,
            yellow: colors::YELLOW,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            green: "",
            cyan: "",
            yellow: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// True unless `NO_COLOR` is set (https://no-color.org/) or `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && !std::env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"))
}

/// True when `LC_ALL` or `LANG` names a UTF-8 locale.
///
/// The rupee sign and Hindi vehicle names are only printed in that case.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LC_ALL", "LANG"].iter().any(|key| {
        std::env::var(key).is_ok_and(|locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        })
    })
}

/// Currency prefix for amounts: `₹` on Unicode terminals, `Rs ` otherwise.
#[must_use]
pub fn currency_symbol(unicode: bool) -> &'static str {
    if unicode {
        "₹"
    } else {
        "Rs "
    }
}

/// Format an integer amount with thousand separators, e.g. `-24,000`.
///
/// # Examples
///
/// ```
/// # use farmhaul_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(24000), "24,000");
/// assert_eq!(format_with_separators(-1234567), "-1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}
