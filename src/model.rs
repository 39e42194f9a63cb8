// File: ./src/model.rs
use std::fmt;
use strum::EnumIter;

/// Urgency bucket of an item. There is intentionally no `Default` impl:
/// a fresh draft carries `None` and the user must pick one before submit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter)]
pub enum Category {
    Urgent,
    Important,
    Normal,
    Low,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Urgent => "urgent",
            Category::Important => "important",
            Category::Normal => "normal",
            Category::Low => "low",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One task on the board. The `id` is assigned by the board when the item
/// is added and is never reused, even after the item is deleted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// A fully specified task without an identity yet. Produced by the form
/// once all three fields are set; the board turns it into an `Item`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
}

impl ItemDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
        }
    }
}
