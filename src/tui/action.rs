// Defines the explicit requests produced by input handling.
// Every mutation of the board travels through one of these; views never
// touch the collection directly.
use crate::model::ItemDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A validated draft emitted by the form.
    Create(ItemDraft),
    /// Deletion request carrying the id of exactly one item.
    Delete(String),
    Quit,
}
