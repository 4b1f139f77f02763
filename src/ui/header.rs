use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

const MENU: [&str; 3] = ["Início", "Dashboard", "Clientes"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),  // Brand mark
            Constraint::Min(20),    // Menu
            Constraint::Length(38), // F-key hints
        ])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(
            " Farm",
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "UP",
            Style::default()
                .fg(Theme::BRAND_RED)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let titles: Vec<Line> = MENU.iter().map(|item| Line::from(*item)).collect();
    let tabs = Tabs::new(titles)
        .select(state.view.menu_index())
        .style(Style::default().fg(Theme::TEXT_SECONDARY))
        .highlight_style(
            Style::default()
                .fg(Theme::BRAND_RED)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, chunks[1]);

    let hints = Line::from(vec![
        Span::styled("F1", Theme::hint_key()),
        Span::styled(" Início  ", Theme::hint_text()),
        Span::styled("F2", Theme::hint_key()),
        Span::styled(" Dashboard  ", Theme::hint_text()),
        Span::styled("F3", Theme::hint_key()),
        Span::styled(" Clientes ", Theme::hint_text()),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Right),
        chunks[2],
    );
}
