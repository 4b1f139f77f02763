use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    /// Brand red (#EF4444), used for accents and focused chrome.
    pub const BRAND_RED: Color = Color::Rgb(239, 68, 68);
    pub const ACCENT_GREEN: Color = Color::Rgb(22, 163, 74);
    pub const ACCENT_AMBER: Color = Color::Rgb(217, 119, 6);
    pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const BORDER_DIM: Color = Color::DarkGray;
    pub const BG_SELECTED: Color = Color::Rgb(60, 24, 24);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::BRAND_RED)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn value_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn error_text() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn badge_active() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn badge_inactive() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .bg(Self::BG_SELECTED)
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_toast() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }
}
