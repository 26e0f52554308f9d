//! CLI command handlers for Pagesmith.
//!
//! Headless, scriptable access to project creation, editing and validation
//! for automation and tests.

pub mod common;
pub mod config;
pub mod edit;
pub mod list;
pub mod new;
pub mod show;
pub mod suggest;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use edit::EditArgs;
pub use list::ListArgs;
pub use new::NewArgs;
pub use show::ShowArgs;
pub use suggest::SuggestArgs;
pub use validate::ValidateArgs;
