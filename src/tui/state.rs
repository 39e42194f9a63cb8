// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::{AppTheme, Config};
use crate::model::Item;
use crate::scope::{BoardHandle, ScopeError};
use crate::tui::action::Action;
use crate::tui::form::TaskForm;
use ratatui::widgets::ListState;
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Creating,
}

pub struct AppState {
    // Data
    pub board: BoardHandle,
    snapshot: Rc<RefCell<Vec<Item>>>,

    // UI State
    pub list_state: ListState,
    pub mode: InputMode,
    pub message: String,
    pub form: TaskForm,
    pub show_full_help: bool,

    // Config-derived
    pub theme: AppTheme,
    pub compact_cards: bool,
    pub page_jump: usize,
    pub category_colors: HashMap<String, String>,
}

impl AppState {
    /// Single composition point: every view renders from the state built
    /// here, against the handle passed in. Fails up front with
    /// [`ScopeError`] when the handle's scope is not mounted, rather than
    /// letting views discover it mid-session.
    pub fn new(board: BoardHandle, config: &Config) -> Result<Self, ScopeError> {
        let snapshot = Rc::new(RefCell::new(board.items()?));
        let sink = Rc::clone(&snapshot);
        board.subscribe(Box::new(move |items| {
            *sink.borrow_mut() = items.to_vec();
        }))?;

        let mut list_state = ListState::default();
        if !snapshot.borrow().is_empty() {
            list_state.select(Some(0));
        }

        Ok(Self {
            board,
            snapshot,
            list_state,
            mode: InputMode::Normal,
            message: "Ready.".to_string(),
            form: TaskForm::new(),
            show_full_help: false,
            theme: config.theme,
            compact_cards: config.compact_cards,
            page_jump: config.page_jump,
            category_colors: config.category_colors.clone(),
        })
    }

    /// The observer-maintained copy of the board's item sequence. Keep the
    /// borrow short; the observer writes here during `apply`.
    pub fn items(&self) -> Ref<'_, Vec<Item>> {
        self.snapshot.borrow()
    }

    pub fn item_count(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub fn get_selected_item(&self) -> Option<Item> {
        let idx = self.list_state.selected()?;
        self.snapshot.borrow().get(idx).cloned()
    }

    pub fn select_item(&mut self, id: &str) {
        let idx = self.snapshot.borrow().iter().position(|i| i.id == id);
        if let Some(idx) = idx {
            self.list_state.select(Some(idx));
        }
    }

    /// Applies one request to the board. The board publishes to observers
    /// before returning, so the snapshot is already current when the
    /// selection gets clamped here.
    pub fn apply(&mut self, action: Action) -> Result<(), ScopeError> {
        match action {
            Action::Create(draft) => {
                let item = self.board.add(draft)?;
                self.sync_selection();
                self.select_item(&item.id);
                self.message = format!("Added {} ({})", item.title, item.id);
            }
            Action::Delete(id) => {
                if let Some(item) = self.board.remove(&id)? {
                    self.message = format!("Deleted {} ({})", item.title, item.id);
                }
                self.sync_selection();
            }
            Action::Quit => {}
        }
        Ok(())
    }

    pub fn sync_selection(&mut self) {
        let len = self.item_count();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            if current >= len {
                self.list_state.select(Some(len - 1)); // Clamp
            } else {
                self.list_state.select(Some(current));
            }
        }
    }

    // --- NAVIGATION ---
    pub fn next(&mut self) {
        let len = self.item_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.item_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        let len = self.item_count();
        if len > 0 {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some((current + step).min(len - 1)));
        }
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.item_count() > 0 {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.saturating_sub(step)));
        }
    }
}
