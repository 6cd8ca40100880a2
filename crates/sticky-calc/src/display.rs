//! Display rendering and screen fitting
//!
//! The engine keeps `.` as its decimal point so parsing never depends on the
//! locale. The separator is substituted only when rendering. Font fitting is
//! the presentation step of a pixel host: shrink the font one pixel at a time
//! until the text fits the screen width.

use serde::{Deserialize, Serialize};

/// Font fitting settings of the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFit {
    /// Starting font size in pixels
    pub base_px: u32,
    /// Smallest font size the fit may reach
    pub min_px: u32,
    /// Width of the display area in pixels
    pub max_width_px: u32,
}

impl Default for FontFit {
    fn default() -> Self {
        Self {
            base_px: 46,
            min_px: 1,
            max_width_px: 208,
        }
    }
}

/// Display settings
///
/// The separator defaults to `.`; the original web keypad rendered `,`, which
/// is one `with_separator(',')` away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Character shown in place of the internal `.`
    pub decimal_separator: char,
    /// Text shown for an empty buffer
    pub zero_glyph: String,
    /// Font fitting settings
    pub font: FontFit,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            zero_glyph: "0".to_string(),
            font: FontFit::default(),
        }
    }
}

impl DisplayConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with the given decimal separator
    #[must_use]
    pub fn with_separator(separator: char) -> Self {
        Self::default().separator(separator)
    }

    /// Sets the decimal separator
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Sets the zero glyph
    #[must_use]
    pub fn zero_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.zero_glyph = glyph.into();
        self
    }

    /// Sets the font fitting settings
    #[must_use]
    pub const fn font(mut self, font: FontFit) -> Self {
        self.font = font;
        self
    }
}

/// Renders a buffer for display
///
/// Only the first `.` is replaced; the buffer never holds more than one.
#[must_use]
pub fn render_display(buffer: &str, config: &DisplayConfig) -> String {
    if buffer.is_empty() {
        return config.zero_glyph.clone();
    }
    let mut separator = [0u8; 4];
    buffer.replacen('.', config.decimal_separator.encode_utf8(&mut separator), 1)
}

/// Measures rendered text width
///
/// Implemented by pixel hosts with their real font metrics; the CLI reports
/// sizes computed with [`MonospaceMeasure`].
pub trait TextMeasure {
    /// Returns the width of `text` in pixels at the given font size
    fn width(&self, text: &str, font_px: u32) -> f64;
}

/// Fixed-advance measure: every character is `advance_ratio * font_px` wide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Character advance as a fraction of the font size
    pub advance_ratio: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn width(&self, text: &str, font_px: u32) -> f64 {
        text.chars().count() as f64 * self.advance_ratio * f64::from(font_px)
    }
}

/// Returns the largest font size, at most `base_px`, at which `text` fits
///
/// Steps down one pixel at a time and stops at `min_px` even if the text
/// still overflows.
#[must_use]
pub fn fit_font_size(text: &str, measure: &dyn TextMeasure, fit: &FontFit) -> u32 {
    let max_width = f64::from(fit.max_width_px);
    let mut font_px = fit.base_px;
    while font_px > fit.min_px && measure.width(text, font_px) > max_width {
        font_px -= 1;
    }
    font_px
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== render_display =====

    #[test]
    fn test_empty_buffer_renders_zero_glyph() {
        assert_eq!(render_display("", &DisplayConfig::default()), "0");
        let config = DisplayConfig::default().zero_glyph("٠");
        assert_eq!(render_display("", &config), "٠");
    }

    #[test]
    fn test_default_separator_keeps_point() {
        assert_eq!(render_display("3.14", &DisplayConfig::default()), "3.14");
    }

    #[test]
    fn test_separator_substitution() {
        let config = DisplayConfig::with_separator(',');
        assert_eq!(render_display("0.5", &config), "0,5");
        assert_eq!(render_display("12", &config), "12");
    }

    #[test]
    fn test_separator_replaces_first_point_only() {
        let config = DisplayConfig::with_separator(',');
        assert_eq!(render_display("1.2.3", &config), "1,2.3");
    }

    #[test]
    fn test_multibyte_separator() {
        let config = DisplayConfig::with_separator('٫');
        assert_eq!(render_display("2.5", &config), "2٫5");
    }

    // ===== DisplayConfig =====

    #[test]
    fn test_display_config_defaults() {
        let config = DisplayConfig::new();
        assert_eq!(config.decimal_separator, '.');
        assert_eq!(config.zero_glyph, "0");
        assert_eq!(config.font, FontFit::default());
    }

    #[test]
    fn test_font_fit_defaults() {
        let fit = FontFit::default();
        assert_eq!(fit.base_px, 46);
        assert_eq!(fit.max_width_px, 208);
    }

    // ===== fit_font_size =====

    #[test]
    fn test_short_text_keeps_base_size() {
        let size = fit_font_size("12345", &MonospaceMeasure::default(), &FontFit::default());
        assert_eq!(size, 46);
    }

    #[test]
    fn test_long_text_shrinks_until_it_fits() {
        let text = "123456789012345";
        let measure = MonospaceMeasure::default();
        let fit = FontFit::default();
        let size = fit_font_size(text, &measure, &fit);
        assert_eq!(size, 23);
        assert!(measure.width(text, size) <= 208.0);
        assert!(measure.width(text, size + 1) > 208.0);
    }

    #[test]
    fn test_fit_stops_at_min_size() {
        let fit = FontFit {
            base_px: 46,
            min_px: 10,
            max_width_px: 20,
        };
        let size = fit_font_size("Infinity", &MonospaceMeasure::default(), &fit);
        assert_eq!(size, 10);
    }

    #[test]
    fn test_custom_measure() {
        struct Wide;
        impl TextMeasure for Wide {
            fn width(&self, text: &str, font_px: u32) -> f64 {
                (text.len() as u32 * font_px) as f64
            }
        }
        let size = fit_font_size("1234", &Wide, &FontFit::default());
        assert_eq!(size, 46);
        let size = fit_font_size("12345678", &Wide, &FontFit::default());
        assert_eq!(size, 26);
    }
}
