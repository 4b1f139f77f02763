use crate::app::state::AppState;
use crate::clients::model::Client;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Result count
            Constraint::Min(4),    // Table
        ])
        .split(area);

    let heading = vec![
        Line::from(Span::styled(" Gerenciar Clientes", Theme::heading())),
        Line::from(Span::styled(
            " Visualize, edite e gerencie seus clientes cadastrados",
            Theme::subtitle(),
        )),
    ];
    frame.render_widget(Paragraph::new(heading), chunks[0]);

    render_search(frame, chunks[1], state);

    let filtered = state.filtered_clients();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", result_summary(filtered.len())),
            Theme::subtitle(),
        )),
        chunks[2],
    );

    render_table(frame, chunks[3], state, &filtered);
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Buscar ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let query = &state.search.query;
    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(Theme::BRAND_RED)),
            Span::styled("Buscar por nome, email ou cidade...", Theme::placeholder()),
        ])
    } else {
        Line::from(vec![
            Span::styled(query.as_str(), Theme::value_text()),
            Span::styled("█", Style::default().fg(Theme::BRAND_RED)),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn result_summary(count: usize) -> String {
    if count == 1 {
        "1 cliente encontrado".to_string()
    } else {
        format!("{} clientes encontrados", count)
    }
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState, filtered: &[&Client]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    if filtered.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nenhum cliente encontrado",
                Theme::placeholder(),
            ))
            .centered(),
            inner,
        );
        return;
    }

    let header = Row::new(["Nome", "Email", "Telefone", "Cidade", "Status"])
        .style(
            Style::default()
                .fg(Theme::BRAND_RED)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = filtered
        .iter()
        .map(|client| {
            let status = if client.status.is_active() {
                Span::styled(client.status.label(), Theme::badge_active())
            } else {
                Span::styled(client.status.label(), Theme::badge_inactive())
            };
            Row::new(vec![
                Cell::from(client.name.clone()).style(Theme::value_text()),
                Cell::from(client.email.clone()).style(Theme::subtitle()),
                Cell::from(client.phone.clone()).style(Theme::subtitle()),
                Cell::from(client.city.clone()).style(Theme::subtitle()),
                Cell::from(status),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(28),
        Constraint::Percentage(18),
        Constraint::Percentage(20),
        Constraint::Percentage(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Theme::selected_row())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.search.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}
