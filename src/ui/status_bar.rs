use crate::app::state::{AppState, View};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if let Some(message) = &state.status_message {
        parts.push(Span::styled(
            format!(" {} ", message.text),
            Theme::status_toast(),
        ));
    } else {
        for (key, description) in hints(state) {
            parts.push(Span::styled(
                format!(" {}", key),
                Theme::hint_key().bg(Color::DarkGray),
            ));
            parts.push(Span::styled(format!(" {} ", description), Theme::status_bar()));
        }
    }

    // Pad to fill remaining space, view tag on the right
    let tag = view_tag(state.view);
    let used: usize = parts.iter().map(|span| span.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + tag.width() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", tag),
        Style::default().fg(Theme::BRAND_RED).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&str, &str)> = match state.view {
        View::Landing => vec![("↑↓", "Rolar"), ("Enter", "Conheça nosso método")],
        View::Dashboard => vec![
            ("Tab", "Alternar aba"),
            ("↑↓", "Navegar"),
            ("Espaço", "Concluir ação"),
        ],
        View::Clients => vec![
            ("Digite", "Buscar"),
            ("↑↓", "Navegar"),
            ("Enter", "Detalhes"),
            ("Ctrl+N", "Novo"),
            ("Ctrl+E", "Editar"),
            ("Del", "Excluir"),
        ],
        View::NewClient | View::EditClient => vec![
            ("Tab", "Próximo campo"),
            ("Enter", "Salvar"),
            ("Esc", "Cancelar"),
        ],
        View::ClientDetails => vec![
            ("Enter", "Editar"),
            ("Del", "Excluir"),
            ("Esc", "Voltar"),
        ],
        View::DeleteClient => vec![("Enter", "Confirmar exclusão"), ("Esc", "Cancelar")],
    };

    let quits = matches!(state.view, View::Landing | View::Dashboard);
    if quits && state.config.behavior.quit_on_q {
        hints.push(("q", "Sair"));
    }
    hints
}

fn view_tag(view: View) -> &'static str {
    match view {
        View::Landing => "INÍCIO",
        View::Dashboard => "DASHBOARD",
        View::Clients => "CLIENTES",
        View::NewClient => "NOVO CLIENTE",
        View::EditClient => "EDITAR CLIENTE",
        View::ClientDetails => "DETALHES",
        View::DeleteClient => "EXCLUIR CLIENTE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_quit_hint_follows_config() {
        let mut state = AppState::new(AppConfig::default());
        assert!(hints(&state).contains(&("q", "Sair")));

        state.config.behavior.quit_on_q = false;
        assert!(!hints(&state).contains(&("q", "Sair")));

        state.config.behavior.quit_on_q = true;
        state.navigate(View::Clients, None);
        assert!(!hints(&state).contains(&("q", "Sair")));
    }
}
