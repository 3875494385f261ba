//! Theme support for the world clock window
//!
//! Built-in themes (Light, Dark, Dracula) each carry a full palette for the
//! panels, the clock cards and the world map overlay.
//!
//! # Examples
//!
//! ```
//! use worldclock::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula map ocean: {:?}", dracula.colors.map_ocean);
//! ```

use egui::Color32;
use std::collections::HashMap;

pub const DEFAULT_THEME: &str = "Dark";

/// Complete color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Clock cards
    pub card_fill: Color32,
    pub card_accent: Color32,

    // World map
    pub map_ocean: Color32,
    pub map_grid: Color32,
    pub map_region: Color32,
    pub marker: Color32,
    pub highlight: Color32,

    pub error: Color32,
    pub warning: Color32,
}

/// A theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Returns the named theme's palette, falling back to the Dark palette
    pub fn colors_or_default(&self, name: &str) -> &ThemeColors {
        &self.get_theme(name).unwrap_or(&self.fallback).colors
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.card_accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.card_accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            card_fill: Color32::from_rgb(255, 255, 255),
            card_accent: Color32::from_rgb(40, 100, 200),

            map_ocean: Color32::from_rgb(200, 225, 245),
            map_grid: Color32::from_rgb(160, 190, 215),
            map_region: Color32::from_rgb(120, 160, 200),
            marker: Color32::from_rgb(200, 40, 40),
            highlight: Color32::from_rgb(230, 120, 20),

            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            card_fill: Color32::from_rgb(52, 52, 52),
            card_accent: Color32::from_rgb(52, 152, 219),

            map_ocean: Color32::from_rgb(22, 40, 58),
            map_grid: Color32::from_rgb(44, 70, 96),
            map_region: Color32::from_rgb(70, 110, 150),
            marker: Color32::from_rgb(231, 76, 60),
            highlight: Color32::from_rgb(241, 196, 15),

            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            card_fill: hex_to_color32("#343746"),
            card_accent: hex_to_color32("#bd93f9"),

            map_ocean: hex_to_color32("#21222c"),
            map_grid: hex_to_color32("#44475a"),
            map_region: hex_to_color32("#6272a4"),
            marker: hex_to_color32("#ff79c6"),
            highlight: hex_to_color32("#f1fa8c"),

            error: hex_to_color32("#ff5555"),
            warning: hex_to_color32("#ffb86c"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_listed_sorted() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let manager = ThemeManager::new();
        let fallback = manager.colors_or_default("Solarized");
        let dark = &manager.get_theme(DEFAULT_THEME).unwrap().colors;
        assert_eq!(fallback.map_ocean, dark.map_ocean);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }
}
