//! Data models for page themes, sections and configuration snapshots.
//!
//! Models are plain owned values with no UI or I/O concerns; cloning any
//! of them yields a fully independent copy.

pub mod section;
pub mod snapshot;
pub mod theme;

// Re-export all model types
pub use section::{SectionId, SectionItem, SectionKind};
pub use snapshot::{Layout, Snapshot};
pub use theme::{
    is_hex_color, BorderRadius, StylePreset, ThemeConfig, ThemeUpdate, DEFAULT_FONT_FAMILY,
    DEFAULT_PRIMARY_COLOR,
};
