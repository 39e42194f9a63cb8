// File: tests/view_rendering.rs
// Renders the real draw() into a TestBackend and asserts on the produced
// text, so the contract holds for whatever the terminal actually shows.
use flowboard::config::Config;
use flowboard::model::{Category, ItemDraft};
use flowboard::scope::BoardScope;
use flowboard::tui::action::Action;
use flowboard::tui::state::{AppState, InputMode};
use flowboard::tui::view::draw;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::{Terminal, backend::TestBackend};

fn make_state() -> (BoardScope, AppState) {
    let scope = BoardScope::mount();
    let state = AppState::new(scope.handle(), &Config::default()).expect("scope is mounted");
    (scope, state)
}

fn add(state: &mut AppState, title: &str, description: &str, category: Category) {
    state
        .apply(Action::Create(ItemDraft::new(title, description, category)))
        .expect("scope is mounted");
}

fn render(state: &mut AppState) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| draw(f, state)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

// Locates cell-by-cell so border glyphs (multi-byte, single-cell) cannot
// skew the x coordinate the way a byte index into the row string would.
fn find_in_buffer(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let matched = needle.chars().enumerate().all(|(i, ch)| {
                buffer
                    .cell((x + i as u16, y))
                    .is_some_and(|cell| cell.symbol() == ch.to_string())
            });
            if matched {
                return Some((x, y));
            }
        }
    }
    None
}

#[test]
fn test_board_heading_appears_exactly_once() {
    let (_scope, mut state) = make_state();
    add(&mut state, "One", "First", Category::Normal);
    add(&mut state, "Two", "Second", Category::Low);

    let text = render(&mut state);
    assert_eq!(text.matches("Flow Board").count(), 1);
}

#[test]
fn test_cards_show_title_description_and_category() {
    let (_scope, mut state) = make_state();
    add(&mut state, "Water plants", "Front garden", Category::Urgent);
    add(&mut state, "File taxes", "Before the deadline", Category::Important);

    let text = render(&mut state);
    assert!(text.contains("Water plants"));
    assert!(text.contains("Front garden"));
    assert!(text.contains("[urgent]"));
    assert!(text.contains("File taxes"));
    assert!(text.contains("Before the deadline"));
    assert!(text.contains("[important]"));
}

#[test]
fn test_cards_keep_board_order() {
    let (_scope, mut state) = make_state();
    add(&mut state, "Alpha", "first added", Category::Normal);
    add(&mut state, "Beta", "second added", Category::Normal);

    let text = render(&mut state);
    let alpha = text.find("Alpha").expect("Alpha rendered");
    let beta = text.find("Beta").expect("Beta rendered");
    assert!(alpha < beta);
}

#[test]
fn test_delete_labels_are_unique_per_item() {
    let (_scope, mut state) = make_state();
    add(&mut state, "One", "First", Category::Normal);
    add(&mut state, "Two", "Second", Category::Normal);
    add(&mut state, "Three", "Third", Category::Normal);

    let text = render(&mut state);
    assert_eq!(text.matches("d:delete item-1").count(), 1);
    assert_eq!(text.matches("d:delete item-2").count(), 1);
    assert_eq!(text.matches("d:delete item-3").count(), 1);
}

#[test]
fn test_empty_board_renders_heading_but_no_cards() {
    let (_scope, mut state) = make_state();

    let text = render(&mut state);
    assert_eq!(text.matches("Flow Board").count(), 1);
    assert!(!text.contains("d:delete"));
    // No placeholder row is painted either.
    assert!(!text.to_lowercase().contains("no tasks"));
    assert!(!text.to_lowercase().contains("empty"));
}

#[test]
fn test_compact_layout_still_shows_every_field() {
    let (_scope, mut state) = make_state();
    state.compact_cards = true;
    add(&mut state, "Water plants", "Front garden", Category::Low);

    let text = render(&mut state);
    assert!(text.contains("Water plants"));
    assert!(text.contains("Front garden"));
    assert!(text.contains("[low]"));
    assert!(text.contains("d:delete item-1"));
}

#[test]
fn test_form_popup_lists_all_three_fields() {
    let (_scope, mut state) = make_state();
    state.mode = InputMode::Creating;

    let text = render(&mut state);
    assert!(text.contains("New Task"));
    assert!(text.contains("Title:"));
    assert!(text.contains("Description:"));
    assert!(text.contains("Category:"));
    assert!(text.contains("(not set)"));
}

#[test]
fn test_status_line_reports_the_last_mutation() {
    let (_scope, mut state) = make_state();
    // Short title: the status pane is 23 columns wide at this terminal
    // size and the paragraph does not wrap, so the note must fit uncut.
    add(&mut state, "Water", "Front garden", Category::Normal);
    assert_eq!(state.message, "Added Water (item-1)");

    let text = render(&mut state);
    assert!(text.contains("Added Water (item-1)"));
}

#[test]
fn test_configured_category_color_reaches_the_card() {
    let scope = BoardScope::mount();
    let mut config = Config::default();
    config
        .category_colors
        .insert("urgent".to_string(), "#00ff7f".to_string());
    let mut state = AppState::new(scope.handle(), &config).expect("scope is mounted");
    add(&mut state, "Water plants", "Front garden", Category::Urgent);
    // Second card takes the selection; the highlight repaints the selected
    // row, which would mask the override on card one.
    add(&mut state, "File taxes", "Before the deadline", Category::Normal);

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| draw(f, &mut state)).expect("draw");

    let buffer = terminal.backend().buffer();
    let (x, y) = find_in_buffer(buffer, "[urgent]").expect("category text rendered");
    let cell = buffer.cell((x, y)).expect("cell in bounds");
    assert_eq!(cell.style().fg, Some(Color::Rgb(0, 255, 127)));
}
