use clap::ValueEnum;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Letters that belong to a placed or found word
    pub highlight: Color,
    /// Menu options and prompts
    pub prompt: Color,
    /// Menu option numbers
    pub key: Color,
    /// Error and not-found messages
    pub error: Color,
    /// Confirmation messages
    pub success: Color,
    /// Secondary text
    pub info: Color,
}

/// Selectable themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            highlight: Color::Rgb { r: 90, g: 255, b: 130 },
            prompt: Color::Rgb { r: 80, g: 180, b: 255 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            highlight: Color::Rgb { r: 40, g: 160, b: 60 },
            prompt: Color::Rgb { r: 30, g: 100, b: 200 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            highlight: Color::Green,
            prompt: Color::Cyan,
            key: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name(ThemeName::Dark), Theme::dark());
        assert_eq!(Theme::from_name(ThemeName::Light), Theme::light());
        assert_eq!(Theme::from_name(ThemeName::HighContrast), Theme::high_contrast());
    }

    #[test]
    fn test_name_serde() {
        let json = serde_json::to_string(&ThemeName::HighContrast).unwrap();
        assert_eq!(json, "\"high-contrast\"");
    }
}
