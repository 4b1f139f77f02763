use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let popup_w = (area.width * 60 / 100)
        .max(50)
        .min(area.width.saturating_sub(4));
    let popup_h = 14u16.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirmar Exclusão ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::BRAND_RED));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 6 || inner.width < 30 {
        return;
    }

    let client = state.selected_client();
    let name = client.map(|c| c.name.as_str()).unwrap_or("este cliente");

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Tem certeza que deseja excluir o cliente ", Theme::subtitle()),
            Span::styled(name.to_string(), Theme::heading()),
            Span::styled("?", Theme::subtitle()),
        ])
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Esta ação não pode ser desfeita. Todos os dados do cliente",
            Theme::subtitle(),
        ))
        .centered(),
        Line::from(Span::styled(
            "serão permanentemente removidos do sistema.",
            Theme::subtitle(),
        ))
        .centered(),
        Line::from(""),
    ];

    if let Some(client) = client {
        lines.push(info_row("Nome:", &client.name));
        lines.push(info_row("Email:", &client.email));
        lines.push(info_row("Cidade:", &client.city));
        lines.push(Line::from(""));
    }

    lines.push(
        Line::from(vec![
            Span::styled("Enter", Theme::hint_key()),
            Span::styled(
                " Sim, Excluir Cliente",
                Style::default()
                    .fg(Theme::BRAND_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Esc", Theme::hint_key()),
            Span::styled(" Cancelar", Theme::hint_text()),
        ])
        .centered(),
    );
    lines.push(
        Line::from(Span::styled(
            "Pressione Esc para voltar sem excluir",
            Theme::placeholder(),
        ))
        .centered(),
    );

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn info_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", label), Theme::placeholder()),
        Span::styled(value.to_string(), Theme::value_text()),
    ])
}
