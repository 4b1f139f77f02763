use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Upper bound for the landing scroll offset; the page content is
/// longer than this, so the footer always stays reachable.
pub const MAX_SCROLL: u16 = 48;

const LOGO: [&str; 5] = [
    r"  _____                    _   _ ____  ",
    r" |  ___|_ _ _ __ _ __ ___ | | | |  _ \ ",
    r" | |_ / _` | '__| '_ ` _ \| | | | |_) |",
    r" |  _| (_| | |  | | | | | | |_| |  __/ ",
    r" |_|  \__,_|_|  |_| |_| |_|\___/|_|    ",
];

const HERO_TITLE: [&str; 2] = [
    "Do diagnóstico à ação: inteligência que eleva,",
    "ações que transformam",
];

const HERO_SUBTITLE: [&str; 2] = [
    "Transformamos dados em metas claras, ações práticas",
    "e resultados reais para sua farmácia",
];

const BENEFITS: [&str; 4] = [
    "Reduza perdas com estoque em até 40%",
    "Aumente o faturamento com ações baseadas em dados",
    "Economize horas de trabalho manual toda semana",
    "Tome decisões estratégicas com confiança",
];

const PAIN_POINTS: [(&str, &str); 5] = [
    (
        "Perda de Receita",
        "Produtos vencidos e rupturas de estoque causam prejuízos mensais significativos",
    ),
    (
        "Gestão Complexa",
        "Dificuldade em priorizar ações e entender o que realmente impacta o resultado",
    ),
    (
        "Baixa Fidelização",
        "Clientes não retornam com frequência por falta de estratégias personalizadas",
    ),
    (
        "Estoque Desbalanceado",
        "Excesso de alguns produtos e falta de outros, prejudicando o capital de giro",
    ),
    (
        "Falta de Tempo",
        "Rotina operacional consome o tempo que deveria ser dedicado à estratégia",
    ),
];

const METHOD_STEPS: [(&str, &str); 4] = [
    (
        "Análise Inteligente",
        "IA varre seus dados de vendas, estoque e atendimento para identificar padrões e oportunidades ocultas",
    ),
    (
        "Diagnóstico Priorizado",
        "Receba um diagnóstico claro com as principais oportunidades ranqueadas por impacto e urgência",
    ),
    (
        "Plano de Ação Customizado",
        "IA gera diagnóstico com metas específicas e passos práticos adaptados à sua realidade",
    ),
    (
        "Execução Assistida",
        "Acompanhe o progresso em tempo real e receba sugestões de ajustes para maximizar resultados",
    ),
];

const FOOTER: &str = "© 2025 FarmaUPAI. Inteligência que transforma farmácias.";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(lines())
        .wrap(Wrap { trim: false })
        .scroll((state.landing_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in LOGO {
        lines.push(
            Line::from(Span::styled(
                row,
                Style::default()
                    .fg(Theme::BRAND_RED)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
    }
    lines.push(Line::from(""));

    for row in HERO_TITLE {
        lines.push(Line::from(Span::styled(row, Theme::heading())).centered());
    }
    lines.push(Line::from(""));
    for row in HERO_SUBTITLE {
        lines.push(Line::from(Span::styled(row, Theme::subtitle())).centered());
    }
    lines.push(Line::from(""));

    lines.push(cta_line("Conheça nosso método"));
    lines.push(Line::from(""));

    for benefit in BENEFITS {
        lines.push(
            Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Theme::ACCENT_GREEN)),
                Span::styled(benefit, Theme::value_text()),
            ])
            .centered(),
        );
    }

    push_section(
        &mut lines,
        "Desafios que toda farmácia enfrenta",
        "Identificamos os 5 principais obstáculos que impedem seu crescimento",
    );
    for (title, description) in PAIN_POINTS {
        lines.push(
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Theme::BRAND_RED)),
                Span::styled(title, Theme::heading()),
            ])
            .centered(),
        );
        lines.push(Line::from(Span::styled(description, Theme::subtitle())).centered());
        lines.push(Line::from(""));
    }

    push_section(
        &mut lines,
        "Nosso método em 4 passos",
        "Da análise à execução, um processo simples e eficiente",
    );
    for (step, (title, description)) in METHOD_STEPS.into_iter().enumerate() {
        lines.push(
            Line::from(vec![
                Span::styled(
                    format!("{}. ", step + 1),
                    Style::default()
                        .fg(Theme::BRAND_RED)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(title, Theme::heading()),
            ])
            .centered(),
        );
        lines.push(Line::from(Span::styled(description, Theme::subtitle())).centered());
        lines.push(Line::from(""));
    }

    push_section(
        &mut lines,
        "Pronto para transformar sua farmácia?",
        "Comece agora com uma análise gratuita dos seus dados",
    );
    lines.push(cta_line("Ver demonstração"));
    lines.push(Line::from(""));

    lines.push(separator());
    lines.push(Line::from(Span::styled(FOOTER, Theme::placeholder())).centered());

    lines
}

fn cta_line(label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("[ Enter ] ", Theme::hint_key()),
        Span::styled(
            label,
            Style::default()
                .fg(Theme::BRAND_RED)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .centered()
}

fn push_section(lines: &mut Vec<Line<'static>>, heading: &'static str, subtitle: &'static str) {
    lines.push(separator());
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(heading, Theme::heading())).centered());
    lines.push(Line::from(Span::styled(subtitle, Theme::subtitle())).centered());
    lines.push(Line::from(""));
}

fn separator() -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(60),
        Style::default().fg(Theme::BORDER_DIM),
    ))
    .centered()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_bound_stays_inside_content() {
        assert!(lines().len() > MAX_SCROLL as usize);
    }

    #[test]
    fn test_page_ends_with_footer() {
        let all = lines();
        let last = all.last().map(|l| l.to_string()).unwrap_or_default();
        assert_eq!(last, FOOTER);
    }
}
