use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::task::Priority;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Theme {
    /// Dark palette (dark mode on)
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
        }
    }

    /// Light palette (dark mode off)
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF7, 0xF5, 0xFF),
            text: Color::Rgb(0x33, 0x2E, 0x5C),
            text_bright: Color::Rgb(0x0C, 0x00, 0x1B),
            highlight: Color::Rgb(0xC2, 0x18, 0x6B),
            dim: Color::Rgb(0x8A, 0x85, 0xB0),
            red: Color::Rgb(0xC6, 0x28, 0x28),
            yellow: Color::Rgb(0xB2, 0x6A, 0x00),
            green: Color::Rgb(0x2E, 0x7D, 0x32),
            selection_bg: Color::Rgb(0xE4, 0xDC, 0xFF),
        }
    }

    /// Pick the palette for `dark_mode` and apply overrides from config
    pub fn from_config(ui: &UiConfig, dark_mode: bool) -> Self {
        let (mut theme, overrides) = if dark_mode {
            (Theme::dark(), &ui.colors)
        } else {
            (Theme::light(), &ui.light_colors)
        };
        theme.apply_overrides(overrides);
        theme
    }

    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (key, value) in overrides {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid theme color");
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "highlight" => self.highlight = color,
                "dim" => self.dim = color,
                "red" => self.red = color,
                "yellow" => self.yellow = color,
                "green" => self.green = color,
                "selection_bg" => self.selection_bg = color,
                _ => {}
            }
        }
    }

    /// Badge color for a priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.green,
            Priority::Medium => self.yellow,
            Priority::High => self.red,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#ééé"), None); // multi-byte
    }

    #[test]
    fn dark_mode_selects_palette() {
        let ui = UiConfig::default();
        assert_eq!(Theme::from_config(&ui, true), Theme::dark());
        assert_eq!(Theme::from_config(&ui, false), Theme::light());
    }

    #[test]
    fn overrides_apply_to_matching_palette_only() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.light_colors.insert("highlight".into(), "#112233".into());

        let dark = Theme::from_config(&ui, true);
        assert_eq!(dark.background, Color::Rgb(0, 0, 0));
        assert_eq!(dark.highlight, Theme::dark().highlight);

        let light = Theme::from_config(&ui, false);
        assert_eq!(light.highlight, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(light.background, Theme::light().background);
    }

    #[test]
    fn invalid_override_is_ignored() {
        let mut ui = UiConfig::default();
        ui.colors.insert("text".into(), "purple".into());
        assert_eq!(Theme::from_config(&ui, true).text, Theme::dark().text);
    }

    #[test]
    fn test_priority_color() {
        let theme = Theme::dark();
        assert_eq!(theme.priority_color(Priority::Low), theme.green);
        assert_eq!(theme.priority_color(Priority::Medium), theme.yellow);
        assert_eq!(theme.priority_color(Priority::High), theme.red);
    }
}
