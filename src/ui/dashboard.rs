use crate::app::state::AppState;
use crate::dashboard::{
    ActionStatus, DashboardTab, Priority, Trend, CONVERSION_BY_WEEKDAY, DIAGNOSTICS, KPIS,
    SALES_BY_MONTH,
};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    BarChart, Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Sparkline, Tabs, Wrap,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(5), // KPI cards
            Constraint::Length(9), // Charts
            Constraint::Length(2), // Tabs
            Constraint::Min(6),    // Tab content
        ])
        .split(area);

    render_heading(frame, chunks[0]);
    render_kpis(frame, chunks[1]);
    render_charts(frame, chunks[2]);
    render_tabs(frame, chunks[3], state);

    match state.dashboard.tab {
        DashboardTab::Diagnostico => render_diagnostics(frame, chunks[4]),
        DashboardTab::PlanoDeAcao => render_action_plan(frame, chunks[4], state),
    }
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(" Dashboard", Theme::heading())),
        Line::from(Span::styled(
            " Visão geral da sua farmácia com insights acionáveis",
            Theme::subtitle(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_kpis(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (kpi, chunk) in KPIS.iter().zip(chunks.iter()) {
        let (arrow, color) = match kpi.trend {
            Trend::Up => ("↑", Theme::ACCENT_GREEN),
            Trend::Down => ("↓", Theme::BRAND_RED),
        };

        let block = Block::default()
            .title(format!(" {} ", kpi.title))
            .title_style(Theme::label())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border());
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let lines = vec![
            Line::from(Span::styled(
                kpi.value,
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{} {}%", arrow, kpi.change.abs()),
                    Style::default().fg(color),
                ),
                Span::styled(" vs mês anterior", Theme::placeholder()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn render_charts(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sales_block = Block::default()
        .title(" Evolução de Faturamento (R$ mil) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let chart = BarChart::default()
        .block(sales_block)
        .data(&SALES_BY_MONTH)
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(Theme::BRAND_RED))
        .value_style(
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BRAND_RED),
        )
        .label_style(Theme::label());
    frame.render_widget(chart, chunks[0]);

    let conversion_block = Block::default()
        .title(" Taxa de Conversão Semanal (%) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = conversion_block.inner(chunks[1]);
    frame.render_widget(conversion_block, chunks[1]);

    if inner.height < 2 {
        return;
    }
    let spark_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
    let label_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);

    let values: Vec<u64> = CONVERSION_BY_WEEKDAY.iter().map(|(_, v)| *v).collect();
    let sparkline = Sparkline::default()
        .data(&values)
        .style(Style::default().fg(Theme::BRAND_RED));
    frame.render_widget(sparkline, spark_area);

    let labels: Vec<&str> = CONVERSION_BY_WEEKDAY.iter().map(|(day, _)| *day).collect();
    frame.render_widget(
        Paragraph::new(Span::styled(labels.join(" "), Theme::placeholder())),
        label_area,
    );
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = DashboardTab::ALL
        .iter()
        .map(|tab| Line::from(tab.label()))
        .collect();
    let selected = DashboardTab::ALL
        .iter()
        .position(|tab| *tab == state.dashboard.tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Theme::TEXT_SECONDARY))
        .highlight_style(
            Style::default()
                .fg(Theme::BRAND_RED)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

fn render_diagnostics(frame: &mut Frame, area: Rect) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(vec![Constraint::Length(6); DIAGNOSTICS.len()]);
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let heading = vec![
        Line::from(Span::styled(" Diagnóstico Priorizado", Theme::heading())),
        Line::from(Span::styled(
            format!(
                " IA identificou {} oportunidades de melhoria para sua farmácia",
                DIAGNOSTICS.len()
            ),
            Theme::subtitle(),
        )),
    ];
    frame.render_widget(Paragraph::new(heading), chunks[0]);

    for (diagnostic, chunk) in DIAGNOSTICS.iter().zip(chunks.iter().skip(1)) {
        let priority_color = match diagnostic.priority {
            Priority::Alta => Theme::BRAND_RED,
            Priority::Media => Theme::ACCENT_AMBER,
            Priority::Baixa => Theme::ACCENT_BLUE,
        };

        let block = Block::default()
            .title(format!(" {} ", diagnostic.title))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Style::default().fg(priority_color));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let lines = vec![
            Line::from(Span::styled(
                format!("Prioridade {}", diagnostic.priority.label()),
                Style::default()
                    .fg(priority_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Impacto: ", Theme::heading()),
                Span::styled(diagnostic.impact, Theme::subtitle()),
            ]),
            Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Theme::ACCENT_GREEN)),
                Span::styled("Solução recomendada: ", Theme::heading()),
                Span::styled(diagnostic.solution, Theme::subtitle()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

fn render_action_plan(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Progress gauge
            Constraint::Min(4),    // Action list
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(" Plano de Ação", Theme::heading())),
        chunks[0],
    );

    let total = state.dashboard.actions.len();
    let done = state.dashboard.completed_count();
    let ratio = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64
    };
    let gauge = Gauge::default()
        .ratio(ratio)
        .label(format!("{} de {} ações concluídas", done, total))
        .gauge_style(Style::default().fg(Theme::BRAND_RED).bg(Color::DarkGray));
    frame.render_widget(gauge, chunks[1]);

    let items: Vec<ListItem> = state
        .dashboard
        .actions
        .iter()
        .map(|action| {
            let completed = action.status == ActionStatus::Concluida;
            let checkbox = if completed { "[x] " } else { "[ ] " };
            let title_style = if completed {
                Style::default()
                    .fg(Theme::TEXT_MUTED)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Theme::heading()
            };
            let status_color = match action.status {
                ActionStatus::Pendente => Theme::TEXT_MUTED,
                ActionStatus::EmAndamento => Theme::ACCENT_BLUE,
                ActionStatus::Concluida => Theme::ACCENT_GREEN,
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(checkbox, Style::default().fg(Theme::BRAND_RED)),
                    Span::styled(action.title, title_style),
                    Span::raw("  "),
                    Span::styled(
                        format!("({})", action.status.label()),
                        Style::default().fg(status_color),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {}", action.description),
                    Theme::subtitle(),
                )),
                Line::from(vec![
                    Span::styled("    Prazo: ", Theme::placeholder()),
                    Span::styled(action.deadline, Theme::subtitle()),
                    Span::styled("  Responsável: ", Theme::placeholder()),
                    Span::styled(action.responsible, Theme::subtitle()),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Theme::BG_SELECTED))
        .highlight_symbol("▶");
    let mut list_state = ListState::default().with_selected(Some(state.dashboard.selected_action));
    frame.render_stateful_widget(list, chunks[2], &mut list_state);
}
