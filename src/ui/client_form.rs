use crate::app::state::AppState;
use crate::clients::form::{ClientForm, Field, FormFocus, FormMode};
use crate::ui::theme::Theme;
use chrono::{Datelike, NaiveDate};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(form) = state.form.as_ref() else {
        return;
    };
    let editable = form.mode != FormMode::Details;

    let mut constraints = vec![
        Constraint::Length(1), // Back hint
        Constraint::Length(2), // Title + subtitle
    ];
    constraints.extend(vec![Constraint::Length(4); Field::ALL.len()]);
    if form.has_status_switch() {
        constraints.push(Constraint::Length(3));
    }
    if form.mode == FormMode::Details && form.created_at.is_some() {
        constraints.push(Constraint::Length(3));
    }
    if form.mode != FormMode::New {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut chunk = chunks.iter().copied();

    if let Some(hint_area) = chunk.next() {
        let back = Line::from(vec![
            Span::styled(" Esc", Theme::hint_key()),
            Span::styled(" Voltar para Clientes", Theme::hint_text()),
        ]);
        frame.render_widget(Paragraph::new(back), hint_area);
    }

    if let Some(title_area) = chunk.next() {
        let heading = vec![
            Line::from(Span::styled(format!(" {}", form.mode.title()), Theme::heading())),
            Line::from(Span::styled(
                format!(" {}", form.mode.subtitle()),
                Theme::subtitle(),
            )),
        ];
        frame.render_widget(Paragraph::new(heading), title_area);
    }

    for field in Field::ALL {
        if let Some(field_area) = chunk.next() {
            render_field(frame, field_area, form, field, editable);
        }
    }

    if form.has_status_switch() {
        if let Some(switch_area) = chunk.next() {
            render_status_switch(frame, switch_area, form, editable);
        }
    }

    if form.mode == FormMode::Details {
        if let Some(date) = form.created_at {
            if let Some(date_area) = chunk.next() {
                render_created_at(frame, date_area, date);
            }
        }
    }

    if form.mode != FormMode::New {
        if let Some(danger_area) = chunk.next() {
            render_danger_zone(frame, danger_area, form.mode);
        }
    }
}

fn render_field(frame: &mut Frame, area: Rect, form: &ClientForm, field: Field, editable: bool) {
    let focused = editable && form.focus == FormFocus::Field(field);
    let input = form.input(field);
    let error = form.error(field);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let border_type = if focused {
        Theme::border_type_focused()
    } else {
        Theme::border_type()
    };

    let box_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let title = if editable {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::label() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    if input.text.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(field.placeholder(), Theme::placeholder())),
            inner,
        );
    } else {
        let style = if editable {
            Theme::value_text()
        } else {
            Theme::subtitle()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(input.text.as_str(), style)),
            inner,
        );
    }

    if focused && inner.width > 0 {
        let prefix = input.text[..input.cursor].width() as u16;
        let cursor_x = inner.x + prefix.min(inner.width - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }

    if area.height >= 4 {
        if let Some(error) = error {
            let error_area = Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(1), 1);
            frame.render_widget(
                Paragraph::new(Span::styled(error.to_string(), Theme::error_text())),
                error_area,
            );
        }
    }
}

fn render_status_switch(frame: &mut Frame, area: Rect, form: &ClientForm, editable: bool) {
    let focused = editable && form.focus == FormFocus::Status;
    let block = Block::default()
        .title(" Status do Cliente ")
        .title_style(if focused { Theme::title() } else { Theme::label() })
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (marker, marker_style) = if form.status_active {
        ("[x] ", Theme::badge_active())
    } else {
        ("[ ] ", Theme::badge_inactive())
    };
    let description = if form.status_active {
        "Cliente ativo no sistema"
    } else {
        "Cliente inativo no sistema"
    };
    let line = Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(
            description,
            if editable {
                Theme::value_text()
            } else {
                Theme::subtitle()
            },
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_created_at(frame: &mut Frame, area: Rect, date: NaiveDate) {
    let block = Block::default()
        .title(" Data de Cadastro ")
        .title_style(Theme::label())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Span::styled(long_date(date), Theme::value_text())),
        inner,
    );
}

fn render_danger_zone(frame: &mut Frame, area: Rect, mode: FormMode) {
    let block = Block::default()
        .title(" Zona de Perigo ")
        .title_style(
            Style::default()
                .fg(Theme::BRAND_RED)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::BRAND_RED));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Del edits text while a field is focused, so the edit form uses Ctrl+D
    let key = if mode == FormMode::Edit { "Ctrl+D" } else { "Del" };
    let lines = vec![
        Line::from(Span::styled(
            "Esta ação não pode ser desfeita. O cliente será permanentemente excluído.",
            Theme::subtitle(),
        )),
        Line::from(vec![
            Span::styled(key, Theme::hint_key()),
            Span::styled(
                " Excluir Cliente",
                Style::default().fg(Theme::BRAND_RED),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn long_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}
