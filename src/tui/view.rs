// File: src/tui/view.rs
use crate::color_utils;
use crate::model::{Category, Item};
use crate::tui::form::{FieldBuffer, FormField};
use crate::tui::state::{AppState, InputMode};
use unicode_width::UnicodeWidthStr;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

// Columns before a field's value inside the form popup: 1 space + 12 label.
const FIELD_VALUE_OFFSET: u16 = 13;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q:Quit  Esc:Close"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Up/Down  PgUp/PgDn:Jump"),
        ]),
        Line::from(vec![
            Span::styled(
                " TASKS ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" a:Add Task  d:Delete Selected"),
        ]),
        Line::from(vec![
            Span::styled(
                " NEW TASK ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Tab:Next Field  Space/1-4:Category  Enter:Add  Esc:Keep Draft"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height])
        .split(f.area());

    // --- Board Rendering ---
    // An empty board renders an empty list: no cards, no placeholder row.
    let card_items: Vec<ListItem> = {
        let items = state.items();
        items.iter().map(|item| make_card(item, state)).collect()
    };

    let board = List::new(card_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Flow Board ({}) ", state.item_count())),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Green)
                .fg(Color::Black),
        );
    f.render_stateful_widget(board, v_chunks[0], &mut state.list_state);

    // --- Footer ---
    let footer_area = v_chunks[1];
    f.render_widget(Clear, footer_area);

    if state.show_full_help {
        let p = Paragraph::new(full_help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "))
            .wrap(Wrap { trim: false });
        f.render_widget(p, footer_area);
    } else {
        let status = Paragraph::new(state.message.clone())
            .style(Style::default().fg(Color::Cyan))
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                    .title(" Status "),
            );
        let help_str = match state.mode {
            InputMode::Normal => "?:Help q:Quit a:Add d:Delete j/k:Move",
            InputMode::Creating => "Enter:Add Tab:Next Space:Category Esc:Close",
        };
        let help = Paragraph::new(help_str).alignment(Alignment::Right).block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(footer_area);
        f.render_widget(status, chunks[0]);
        f.render_widget(help, chunks[1]);
    }

    // --- New Task Popup ---
    if state.mode == InputMode::Creating {
        draw_form_popup(f, state);
    }
}

/// One card: title, description and category as separate styled lines,
/// plus the per-item delete label. The label embeds the item id so no two
/// cards ever share a control.
fn make_card(item: &Item, state: &AppState) -> ListItem<'static> {
    let title_span = Span::styled(
        item.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    let category_span = Span::styled(
        format!("[{}]", item.category),
        Style::default().fg(category_color(item.category, state)),
    );
    let delete_span = Span::styled(
        format!("d:delete {}", item.id),
        Style::default().fg(Color::DarkGray),
    );

    let lines = if state.compact_cards {
        vec![
            Line::from(vec![
                title_span,
                Span::raw(" "),
                category_span,
                Span::raw("  "),
                delete_span,
            ]),
            Line::from(vec![Span::raw("  "), Span::raw(item.description.clone())]),
        ]
    } else {
        vec![
            Line::from(title_span),
            Line::from(vec![Span::raw("  "), Span::raw(item.description.clone())]),
            Line::from(vec![
                Span::raw("  "),
                category_span,
                Span::raw("  "),
                delete_span,
            ]),
        ]
    };
    ListItem::new(lines)
}

fn category_color(category: Category, state: &AppState) -> Color {
    // Config override first, fixed palette otherwise.
    if let Some(hex) = state.category_colors.get(category.as_str())
        && let Some((r, g, b)) = color_utils::parse_hex_to_u8(hex)
    {
        return Color::Rgb(r, g, b);
    }
    let (r, g, b) = color_utils::get_category_rgb(category, state.theme.is_dark());
    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn draw_form_popup(f: &mut Frame, state: &mut AppState) {
    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Task ")
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let focus = state.form.focus();
    render_text_field(f, rows[0], "Title:", &state.form.title, focus == FormField::Title);
    render_text_field(
        f,
        rows[1],
        "Description:",
        &state.form.description,
        focus == FormField::Description,
    );
    render_category_field(f, rows[2], state, focus == FormField::Category);

    let hint = Paragraph::new("Enter:Add  Tab:Next Field  Esc:Close (draft kept)")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[4]);

    // Cursor into the focused text field.
    let focused_field = match focus {
        FormField::Title => Some((&state.form.title, rows[0])),
        FormField::Description => Some((&state.form.description, rows[1])),
        FormField::Category => None,
    };
    if let Some((field, row)) = focused_field {
        let prefix: String = field.text().chars().take(field.cursor()).collect();
        let cursor_x = row.x + FIELD_VALUE_OFFSET + prefix.width() as u16;
        f.set_cursor_position((
            cursor_x.min(row.x + row.width.saturating_sub(1)),
            row.y,
        ));
    }
}

fn render_text_field(f: &mut Frame, area: Rect, label: &str, field: &FieldBuffer, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled(format!(" {:<12}", label), label_style),
        Span::raw(field.text().to_string()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_category_field(f: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_span = match state.form.category {
        Some(category) => Span::styled(
            category.as_str().to_string(),
            Style::default().fg(category_color(category, state)),
        ),
        None => Span::styled("(not set)", Style::default().fg(Color::DarkGray)),
    };

    let mut spans = vec![Span::styled(format!(" {:<12}", "Category:"), label_style)];
    if focused {
        spans.push(Span::raw("< "));
        spans.push(value_span);
        spans.push(Span::raw(" >"));
    } else {
        spans.push(value_span);
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
