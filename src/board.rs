// File: ./src/board.rs
use crate::model::{Item, ItemDraft};
use std::fmt;

/// Callback invoked with the full item sequence after every applied mutation.
pub type Observer = Box<dyn FnMut(&[Item])>;

/// The in-memory item collection. Owns the ordered items, the id counter
/// and the observer registry; knows nothing about rendering.
pub struct Board {
    items: Vec<Item>,
    next_id: u64,
    observers: Vec<Observer>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("items", &self.items)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs the draft with a fresh id, appends it and notifies observers.
    /// The stored item is returned so callers learn the generated id.
    /// No validation happens here; the form is the validation boundary.
    pub fn add(&mut self, draft: ItemDraft) -> Item {
        let item = Item {
            id: self.mint_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
        };
        self.items.push(item.clone());
        log::debug!("Added item {} ({} on board)", item.id, self.items.len());
        self.publish();
        item
    }

    /// Removes the item with the given id, if any. Removing an unknown id
    /// is a silent no-op and observers are not notified for it.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        let item = self.items.remove(idx);
        log::debug!("Removed item {} ({} left)", id, self.items.len());
        self.publish();
        Some(item)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers an observer. Observers run synchronously after every
    /// applied mutation, in registration order, before the mutating call
    /// returns. They see the post-mutation sequence and must not call
    /// back into the board.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    fn mint_id(&mut self) -> String {
        // Monotonic counter, never reset: an id is never handed out twice
        // within one session, even after its item is deleted.
        let id = format!("item-{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn publish(&mut self) {
        // Swap the registry out so notifying can borrow the items immutably.
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer(&self.items);
        }
        self.observers = observers;
    }
}
