use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub cursor: Color,
    pub muted: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub copied: Color,
    pub error: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            accent: Color::Cyan,
            cursor: Color::Cyan,
            muted: Color::Gray,
            button_fg: Color::Black,
            button_bg: Color::Gray,
            copied: Color::Green,
            error: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            accent: Color::Cyan,
            cursor: Color::Cyan,
            muted: Color::DarkGray,
            button_fg: Color::White,
            button_bg: Color::DarkGray,
            copied: Color::Green,
            error: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            accent: Color::Blue,
            cursor: Color::Blue,
            muted: Color::Gray,
            button_fg: Color::White,
            button_bg: Color::Blue,
            copied: Color::Green,
            error: Color::Red,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
