// Crate root library declaration and module exports.
pub mod board;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod model;
pub mod scope;

#[cfg(feature = "tui")]
pub mod tui;
