// File: tests/end_to_end.rs
// Full user journey: open the form, type a task, submit, see the card,
// delete it again. Keystrokes go through the real handler and rendering
// goes through the real draw().
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flowboard::config::Config;
use flowboard::scope::BoardScope;
use flowboard::tui::action::Action;
use flowboard::tui::handlers::handle_key_event;
use flowboard::tui::state::{AppState, InputMode};
use flowboard::tui::view::draw;
use ratatui::{Terminal, backend::TestBackend};

fn make_state() -> (BoardScope, AppState) {
    let scope = BoardScope::mount();
    let state = AppState::new(scope.handle(), &Config::default()).expect("scope is mounted");
    (scope, state)
}

/// Presses a key and applies whatever request it produced, like the run
/// loop does.
fn press(state: &mut AppState, code: KeyCode) {
    if let Some(action) = handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state) {
        if action == Action::Quit {
            return;
        }
        state.apply(action).expect("scope is mounted");
    }
}

fn type_str(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
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

#[test]
fn test_submit_then_delete_round_trip() {
    let (_scope, mut state) = make_state();

    // Open the form and fill all three fields.
    press(&mut state, KeyCode::Char('a'));
    type_str(&mut state, "New Task");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "Task Description");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Char('1')); // urgent

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.mode, InputMode::Normal);
    assert_eq!(state.item_count(), 1);

    let text = render(&mut state);
    assert_eq!(text.matches("Flow Board").count(), 1);
    assert!(text.contains("New Task"));
    assert!(text.contains("Task Description"));
    assert!(text.contains("[urgent]"));
    assert!(text.contains("d:delete item-1"));

    // The new card is selected, so 'd' deletes exactly it.
    press(&mut state, KeyCode::Char('d'));
    assert_eq!(state.item_count(), 0);

    let text = render(&mut state);
    assert!(!text.contains("Task Description"));
    assert!(!text.contains("d:delete"));
}

#[test]
fn test_failed_submit_adds_nothing_and_keeps_typing() {
    let (_scope, mut state) = make_state();

    press(&mut state, KeyCode::Char('a'));
    type_str(&mut state, "New Task");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "Task Description");
    // Category left unset.

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.mode, InputMode::Creating);
    assert_eq!(state.item_count(), 0);

    // The popup still shows everything that was typed.
    let text = render(&mut state);
    assert!(text.contains("New Task"));
    assert!(text.contains("Task Description"));
    assert!(text.contains("(not set)"));
    assert!(!text.contains("d:delete"));
}

#[test]
fn test_delete_on_empty_board_is_harmless() {
    let (_scope, mut state) = make_state();

    press(&mut state, KeyCode::Char('d'));
    assert_eq!(state.item_count(), 0);
    assert_eq!(state.message, "Ready.");
}

#[test]
fn test_deleting_the_middle_card_leaves_the_rest_in_order() {
    let (_scope, mut state) = make_state();

    for (title, digit) in [("First", '1'), ("Second", '2'), ("Third", '3')] {
        press(&mut state, KeyCode::Char('a'));
        type_str(&mut state, title);
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "body");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Char(digit));
        press(&mut state, KeyCode::Enter);
    }
    assert_eq!(state.item_count(), 3);

    // Select the middle card and delete it.
    state.select_item("item-2");
    press(&mut state, KeyCode::Char('d'));

    let text = render(&mut state);
    assert!(text.contains("d:delete item-1"));
    assert!(!text.contains("d:delete item-2"));
    assert!(text.contains("d:delete item-3"));

    let first = text.find("First").expect("still rendered");
    let third = text.find("Third").expect("still rendered");
    assert!(first < third);
}

#[test]
fn test_quit_key_produces_a_quit_request() {
    let (_scope, mut state) = make_state();
    let action = handle_key_event(
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        &mut state,
    );
    assert_eq!(action, Some(Action::Quit));
}
