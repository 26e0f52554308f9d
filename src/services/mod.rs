//! Service layer for file I/O.
//!
//! Services coordinate between the on-disk formats and the in-memory
//! models, keeping file handling out of the editor.

pub mod projects;

pub use projects::ProjectService;
