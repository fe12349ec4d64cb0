//! Color themes and ANSI escape sequence generation.
//!
//! Two Catppuccin variants are built in; anything else is loaded from a TOML
//! file with the same layout:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#1e1e2e"        # optional
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{ArtscopeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in theme names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 2] = ["catppuccin-mocha", "catppuccin-latte"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, status line, and secondary columns.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Detail labels, focused form fields, and confirmations.
    pub accent_fg: String,
    /// Validation messages.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme, or `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ArtscopeError::Theme`] if the file cannot be read or does not parse
    /// into a complete color set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ArtscopeError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| ArtscopeError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts `"#rrggbb"` to RGB. Malformed input renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert!(Theme::from_name("catppuccin-latte").unwrap().colors.header_bg.is_some());
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "gallery-night".to_string();
        custom.colors.accent_fg = "#112233".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, "gallery-night");
        assert_eq!(loaded.colors.accent_fg, "#112233");
    }

    #[test]
    fn incomplete_theme_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ArtscopeError::Theme(_)));
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(ArtscopeError::Theme(_))
        ));
    }
}
