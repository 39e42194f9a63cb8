// File: ./src/scope.rs
use crate::board::{Board, Observer};
use crate::model::{Item, ItemDraft};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Returned when a handle is used outside a mounted scope, i.e. the handle
/// was never attached or the owning scope has already been dropped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("board accessed outside a mounted scope")]
pub struct ScopeError;

/// Owning half of the shared board state. Exactly one per session: the
/// root view mounts it on startup and drops it on teardown, taking the
/// board and every item with it.
#[derive(Debug)]
pub struct BoardScope {
    board: Rc<RefCell<Board>>,
}

impl BoardScope {
    /// Mounts a fresh, empty board.
    pub fn mount() -> Self {
        Self {
            board: Rc::new(RefCell::new(Board::new())),
        }
    }

    /// Hands out a handle tied to this scope's lifetime. Handles are cheap
    /// to clone and are passed to views when they are constructed.
    pub fn handle(&self) -> BoardHandle {
        BoardHandle {
            board: Rc::downgrade(&self.board),
        }
    }
}

/// Consumer half of the shared board state: a weak reference to the board
/// owned by a [`BoardScope`]. Every operation fails with [`ScopeError`]
/// once the scope is gone, instead of silently working on stale state.
#[derive(Debug, Clone)]
pub struct BoardHandle {
    board: Weak<RefCell<Board>>,
}

impl BoardHandle {
    /// A handle that was never attached to a scope. Everything it is asked
    /// to do fails with [`ScopeError`].
    pub fn detached() -> Self {
        Self { board: Weak::new() }
    }

    pub fn is_mounted(&self) -> bool {
        self.board.strong_count() > 0
    }

    pub fn add(&self, draft: ItemDraft) -> Result<Item, ScopeError> {
        let board = self.board()?;
        let item = board.borrow_mut().add(draft);
        Ok(item)
    }

    pub fn remove(&self, id: &str) -> Result<Option<Item>, ScopeError> {
        let board = self.board()?;
        let removed = board.borrow_mut().remove(id);
        Ok(removed)
    }

    /// Snapshot of the item sequence in board order.
    pub fn items(&self) -> Result<Vec<Item>, ScopeError> {
        let board = self.board()?;
        let items = board.borrow().items().to_vec();
        Ok(items)
    }

    /// Registers an observer on the underlying board. The observer runs
    /// inside the board's mutable borrow, so it must not use a handle to
    /// reach back in.
    pub fn subscribe(&self, observer: Observer) -> Result<(), ScopeError> {
        let board = self.board()?;
        board.borrow_mut().subscribe(observer);
        Ok(())
    }

    fn board(&self) -> Result<Rc<RefCell<Board>>, ScopeError> {
        self.board.upgrade().ok_or(ScopeError)
    }
}
