// Theme system for the TUI
//
// Runtime-switchable color palettes. Each theme maps the UI's semantic
// roles (sentiment colors, hit-rate bands, log levels) onto a palette.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Solarized,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Solarized,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Resolve a configured theme name; unknown names fall back to Dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "nord" => ThemeKind::Nord,
            "solarized" => ThemeKind::Solarized,
            _ => ThemeKind::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Solarized => "Solarized",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Solarized => Theme::solarized(),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Sentiment
    pub positive: Color,
    pub negative: Color,

    // Result card accents
    pub cached_badge: Color,
    pub error: Color,
    pub accent: Color,

    // Hit-rate bands
    pub hit_good: Color,
    pub hit_warn: Color,
    pub hit_bad: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Gray,
            muted: Color::DarkGray,
            selected_bg: Color::Rgb(50, 55, 65),
            selected_fg: Color::White,
            positive: Color::Green,
            negative: Color::Red,
            cached_badge: Color::Yellow,
            error: Color::Red,
            accent: Color::Cyan,
            hit_good: Color::Green,
            hit_warn: Color::Yellow,
            hit_bad: Color::Red,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::Blue,
            log_trace: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::Gray,
            border_focused: Color::Blue,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            muted: Color::Gray,
            selected_bg: Color::Rgb(220, 225, 235),
            selected_fg: Color::Black,
            positive: Color::Rgb(0, 128, 0),
            negative: Color::Rgb(180, 0, 0),
            cached_badge: Color::Rgb(160, 120, 0),
            error: Color::Rgb(180, 0, 0),
            accent: Color::Blue,
            hit_good: Color::Rgb(0, 128, 0),
            hit_warn: Color::Rgb(160, 120, 0),
            hit_bad: Color::Rgb(180, 0, 0),
            log_error: Color::Rgb(180, 0, 0),
            log_warn: Color::Rgb(160, 120, 0),
            log_info: Color::Rgb(0, 128, 0),
            log_debug: Color::Blue,
            log_trace: Color::Gray,
        }
    }

    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),
            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(144, 153, 170),
            muted: Color::Rgb(76, 86, 106),
            selected_bg: Color::Rgb(67, 76, 94),
            selected_fg: Color::Rgb(236, 239, 244),
            positive: Color::Rgb(163, 190, 140),
            negative: Color::Rgb(191, 97, 106),
            cached_badge: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
            accent: Color::Rgb(136, 192, 208),
            hit_good: Color::Rgb(163, 190, 140),
            hit_warn: Color::Rgb(235, 203, 139),
            hit_bad: Color::Rgb(191, 97, 106),
            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(163, 190, 140),
            log_debug: Color::Rgb(129, 161, 193),
            log_trace: Color::Rgb(76, 86, 106),
        }
    }

    pub fn solarized() -> Self {
        Self {
            bg: Color::Rgb(0, 43, 54),
            fg: Color::Rgb(131, 148, 150),
            border: Color::Rgb(88, 110, 117),
            border_focused: Color::Rgb(38, 139, 210),
            title: Color::Rgb(38, 139, 210),
            status_bar: Color::Rgb(101, 123, 131),
            muted: Color::Rgb(88, 110, 117),
            selected_bg: Color::Rgb(7, 54, 66),
            selected_fg: Color::Rgb(238, 232, 213),
            positive: Color::Rgb(133, 153, 0),
            negative: Color::Rgb(220, 50, 47),
            cached_badge: Color::Rgb(181, 137, 0),
            error: Color::Rgb(220, 50, 47),
            accent: Color::Rgb(42, 161, 152),
            hit_good: Color::Rgb(133, 153, 0),
            hit_warn: Color::Rgb(181, 137, 0),
            hit_bad: Color::Rgb(220, 50, 47),
            log_error: Color::Rgb(220, 50, 47),
            log_warn: Color::Rgb(181, 137, 0),
            log_info: Color::Rgb(133, 153, 0),
            log_debug: Color::Rgb(38, 139, 210),
            log_trace: Color::Rgb(88, 110, 117),
        }
    }

    /// Color band for a cache hit rate percentage
    pub fn hit_rate_color(&self, rate: f64) -> Color {
        if rate >= 80.0 {
            self.hit_good
        } else if rate >= 50.0 {
            self.hit_warn
        } else {
            self.hit_bad
        }
    }

    /// Color for a sentiment label
    pub fn sentiment_color(&self, positive: bool) -> Color {
        if positive {
            self.positive
        } else {
            self.negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_wraps() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn unknown_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("neon"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("Nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("LIGHT"), ThemeKind::Light);
    }

    #[test]
    fn hit_rate_bands() {
        let theme = Theme::dark();
        assert_eq!(theme.hit_rate_color(92.0), theme.hit_good);
        assert_eq!(theme.hit_rate_color(80.0), theme.hit_good);
        assert_eq!(theme.hit_rate_color(65.0), theme.hit_warn);
        assert_eq!(theme.hit_rate_color(12.0), theme.hit_bad);
    }
}
