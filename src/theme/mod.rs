pub mod presets;

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::core::catalog::AccentTag;

/// Complete theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // App background (deepest)
    pub bg_sidebar: Color,  // Sidebar background
    pub bg_surface: Color,  // Cards, containers
    pub bg_elevated: Color, // Inputs, buttons
    pub bg_hover: Color,    // Hover states
    pub bg_active: Color,   // Active/selected states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Main text
    pub fg_secondary: Color, // Less important text
    pub fg_muted: Color,     // Disabled/placeholder text
    pub fg_on_accent: Color, // Text on accent colors

    // === Semantic Colors ===
    pub accent: Color,       // Brand/primary actions
    pub accent_hover: Color, // Hovered accent
    pub success: Color,      // Positive actions/states
    pub warning: Color,      // Warnings
    pub danger: Color,       // Destructive actions
    pub info: Color,         // Informational

    // === Tool Card Accents ===
    pub tag_blue: Color,
    pub tag_green: Color,
    pub tag_orange: Color,
    pub tag_purple: Color,
    pub tag_red: Color,
    pub tag_teal: Color,

    // === Borders & Dividers ===
    pub border: Color,        // Default borders
    pub border_strong: Color, // Emphasized borders
    pub divider: Color,       // Separators

    // === Shadows ===
    pub shadow_color: Color,  // Shadow color (transparent black usually)
    pub shadow_strong: Color, // Stronger shadow for modals
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_sidebar: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        bg_active: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        accent_hover: u32,
        success: u32,
        warning: u32,
        danger: u32,
        info: u32,
        tag_blue: u32,
        tag_green: u32,
        tag_orange: u32,
        tag_purple: u32,
        tag_red: u32,
        tag_teal: u32,
        border: u32,
        border_strong: u32,
        divider: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_sidebar: hex_to_color(bg_sidebar),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            bg_active: hex_to_color(bg_active),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            accent_hover: hex_to_color(accent_hover),
            success: hex_to_color(success),
            warning: hex_to_color(warning),
            danger: hex_to_color(danger),
            info: hex_to_color(info),
            tag_blue: hex_to_color(tag_blue),
            tag_green: hex_to_color(tag_green),
            tag_orange: hex_to_color(tag_orange),
            tag_purple: hex_to_color(tag_purple),
            tag_red: hex_to_color(tag_red),
            tag_teal: hex_to_color(tag_teal),
            border: hex_to_color(border),
            border_strong: hex_to_color(border_strong),
            divider: hex_to_color(divider),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, 0.8),
        }
    }

    /// Concrete color for a tool's semantic accent tag.
    pub fn accent_for(&self, tag: AccentTag) -> Color {
        match tag {
            AccentTag::Blue => self.tag_blue,
            AccentTag::Green => self.tag_green,
            AccentTag::Orange => self.tag_orange,
            AccentTag::Purple => self.tag_purple,
            AccentTag::Red => self.tag_red,
            AccentTag::Teal => self.tag_teal,
        }
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// All available built-in themes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, strum::EnumIter,
)]
pub enum ThemeChoice {
    #[default]
    Oxide,
    OxideLight,
    Nord,
    TokyoNight,
    Gruvbox,
}

impl ThemeChoice {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Oxide => "Oxide",
            Self::OxideLight => "Oxide Light",
            Self::Nord => "Nord",
            Self::TokyoNight => "Tokyo Night",
            Self::Gruvbox => "Gruvbox",
        }
    }

    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::Oxide => presets::oxide(),
            Self::OxideLight => presets::oxide_light(),
            Self::Nord => presets::nord(),
            Self::TokyoNight => presets::tokyo_night(),
            Self::Gruvbox => presets::gruvbox(),
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_choice_resolves_to_matching_name() {
        for choice in ThemeChoice::iter() {
            assert_eq!(choice.to_theme().name, choice.name());
        }
    }

    #[test]
    fn test_hex_to_color() {
        let c = hex_to_color(0x00FF_8000);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert!(c.b.abs() < 1e-6);
    }
}
