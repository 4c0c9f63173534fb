use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub header: Color,
    pub selected_bg: Color,
    pub drop_target_bg: Color,
    pub edit_bg: Color,
    pub edit_fg: Color,
    pub file_column: Color,
    pub toolbar_bg: Color,
    pub toolbar_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub companion_border: Color,
    pub companion_fg: Color,
    pub warning: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            header: Color::Cyan,
            selected_bg: Color::Rgb(50, 60, 80),
            drop_target_bg: Color::Rgb(90, 70, 20),
            edit_bg: Color::Rgb(230, 230, 230),
            edit_fg: Color::Black,
            file_column: Color::DarkGray,
            toolbar_bg: Color::Rgb(60, 60, 60),
            toolbar_fg: Color::White,
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
            companion_border: Color::Gray,
            companion_fg: Color::Gray,
            warning: Color::Rgb(255, 170, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            header: Color::Blue,
            selected_bg: Color::Rgb(200, 215, 240),
            drop_target_bg: Color::Rgb(250, 225, 160),
            edit_bg: Color::Rgb(255, 255, 220),
            edit_fg: Color::Black,
            file_column: Color::Gray,
            toolbar_bg: Color::Rgb(220, 220, 220),
            toolbar_fg: Color::Black,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            companion_border: Color::Black,
            companion_fg: Color::DarkGray,
            warning: Color::Rgb(180, 90, 0),
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
