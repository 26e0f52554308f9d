//! Pagesmith Library
//!
//! Core of a landing-page theme builder: the page configuration model
//! (theme plus ordered sections), a bounded undo/redo history over deep
//! copies of it, the import/export document format, and the seams for
//! assistant collaborators that generate code or suggest themes.

// Module declarations
pub mod assistant;
pub mod cli;
pub mod config;
pub mod constants;
pub mod document;
pub mod editor;
pub mod history;
pub mod models;
pub mod script;
pub mod services;

pub use editor::Editor;
pub use history::{History, HISTORY_LIMIT};
