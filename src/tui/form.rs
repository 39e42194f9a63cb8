// File: ./src/tui/form.rs
// State machine for the New Task form: three required fields, a validation
// gate on submit, and a reset that only ever happens on success.
use crate::model::{Category, ItemDraft};
use strum::IntoEnumIterator;

/// One editable text field with its own cursor. The cursor is indexed in
/// chars, not bytes, so multi-byte input stays safe.
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    text: String,
    cursor: usize,
}

impl FieldBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor.saturating_sub(1);
        self.cursor = self.clamp_cursor(cursor_moved_left);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn enter_char(&mut self, new_char: char) {
        // Safe insertion for UTF-8 strings
        let byte_index = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len());

        self.text.insert(byte_index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor != 0 {
            let current_index = self.cursor;
            let before = self.text.chars().take(current_index - 1);
            let after = self.text.chars().skip(current_index);
            self.text = before.chain(after).collect();
            self.move_cursor_left();
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.text.chars().count())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Category,
}

/// Local draft state of the New Task form. Edits never leave this struct;
/// the only way anything reaches the board is the draft returned by
/// [`TaskForm::submit`].
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: FieldBuffer,
    pub description: FieldBuffer,
    pub category: Option<Category>,
    focus: FormField,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Category,
            FormField::Category => FormField::Title,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Category,
            FormField::Description => FormField::Title,
            FormField::Category => FormField::Description,
        };
    }

    /// The text buffer under focus, or `None` when the category choice is
    /// focused.
    pub fn active_field_mut(&mut self) -> Option<&mut FieldBuffer> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Category => None,
        }
    }

    pub fn cycle_category_forward(&mut self) {
        let all: Vec<Category> = Category::iter().collect();
        self.category = match self.category {
            None => all.first().copied(),
            Some(current) => {
                let idx = all.iter().position(|c| *c == current).unwrap_or(0);
                all.get(idx + 1).copied().or_else(|| all.first().copied())
            }
        };
    }

    pub fn cycle_category_backward(&mut self) {
        let all: Vec<Category> = Category::iter().collect();
        self.category = match self.category {
            None => all.last().copied(),
            Some(current) => {
                let idx = all.iter().position(|c| *c == current).unwrap_or(0);
                if idx == 0 {
                    all.last().copied()
                } else {
                    all.get(idx - 1).copied()
                }
            }
        };
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && self.category.is_some()
    }

    /// Validation gate. With any field empty or unset this returns `None`
    /// and leaves every field exactly as typed. With all three set it
    /// returns the draft and resets the form before handing it back, so
    /// the reset never waits on anything downstream.
    pub fn submit(&mut self) -> Option<ItemDraft> {
        if !self.is_complete() {
            return None;
        }
        let draft = ItemDraft::new(self.title.text(), self.description.text(), self.category?);
        self.reset();
        Some(draft)
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.category = None;
        self.focus = FormField::Title;
    }
}
