//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

use super::model::LoadErrorKind;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Brand
    pub logo: Color,
    pub nav_background: Color,

    // Ratings
    pub star: Color,
    pub external_rating: Color,
    pub user_rating: Color,
    pub runtime: Color,

    // Errors
    pub error_not_found: Color,
    pub error_transport: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub selected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            logo: Color::Yellow,
            nav_background: Color::Rgb {
                r: 103,
                g: 65,
                b: 217,
            },

            star: Color::Yellow,
            external_rating: Color::Yellow,
            user_rating: Color::Magenta,
            runtime: Color::Cyan,

            error_not_found: Color::Yellow,
            error_transport: Color::Red,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            selected: Color::Green,
        }
    }
}

impl Theme {
    /// Get the color for a load error
    pub fn error_color(&self, kind: LoadErrorKind) -> Color {
        match kind {
            LoadErrorKind::NotFound => self.error_not_found,
            LoadErrorKind::Transport => self.error_transport,
        }
    }

    /// Border color for a pane given its focus
    pub fn pane_border(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
