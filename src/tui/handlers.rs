// File: src/tui/handlers.rs
// Handles keyboard input for the TUI. Every arm either adjusts local UI
// state or returns one explicit request for the run loop to apply.
use crate::model::Category;
use crate::tui::action::Action;
use crate::tui::form::FormField;
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent};
use strum::IntoEnumIterator;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('?') => {
                state.show_full_help = !state.show_full_help;
            }
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('a') => {
                // The form keeps whatever draft was typed before a close;
                // only a successful submit clears it.
                state.mode = InputMode::Creating;
                state.message = "New Task...".to_string();
            }
            KeyCode::Char('d') => {
                if let Some(item) = state.get_selected_item() {
                    return Some(Action::Delete(item.id));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => state.next(),
            KeyCode::Up | KeyCode::Char('k') => state.previous(),
            KeyCode::PageDown => state.jump_forward(state.page_jump),
            KeyCode::PageUp => state.jump_backward(state.page_jump),
            KeyCode::Esc => {
                if state.show_full_help {
                    state.show_full_help = false;
                }
            }
            _ => {}
        },
        InputMode::Creating => match key.code {
            KeyCode::Enter => {
                if let Some(draft) = state.form.submit() {
                    state.mode = InputMode::Normal;
                    return Some(Action::Create(draft));
                }
                state.message = "Title, description and category are all required.".to_string();
            }
            KeyCode::Esc => {
                state.mode = InputMode::Normal;
                state.message = "Draft kept.".to_string();
            }
            KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => state.form.focus_previous(),
            KeyCode::Char(' ') if state.form.focus() == FormField::Category => {
                state.form.cycle_category_forward();
            }
            KeyCode::Char(c @ '1'..='4') if state.form.focus() == FormField::Category => {
                let idx = (c as usize) - ('1' as usize);
                if let Some(category) = Category::iter().nth(idx) {
                    state.form.set_category(category);
                }
            }
            KeyCode::Left => {
                if state.form.focus() == FormField::Category {
                    state.form.cycle_category_backward();
                } else if let Some(field) = state.form.active_field_mut() {
                    field.move_cursor_left();
                }
            }
            KeyCode::Right => {
                if state.form.focus() == FormField::Category {
                    state.form.cycle_category_forward();
                } else if let Some(field) = state.form.active_field_mut() {
                    field.move_cursor_right();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = state.form.active_field_mut() {
                    field.enter_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = state.form.active_field_mut() {
                    field.delete_char();
                }
            }
            _ => {}
        },
    }
    None
}
