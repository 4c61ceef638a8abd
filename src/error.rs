//! Error types for menunav
//!
//! Uses `thiserror` for library errors. External-command failures are not
//! errors here; they travel as data inside `CommandOutcome`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Selection path index out of range for its branch
    #[error("path index {index} out of range at depth {depth} (branch has {len} items)")]
    PathOutOfRange {
        depth: usize,
        index: usize,
        len: usize,
    },

    /// Selection path descends through an item that has no submenu
    #[error("item '{label}' at depth {depth} has no submenu to descend into")]
    NotASubmenu { label: String, depth: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Menu definition is not valid JSON
    #[error("invalid menu definition in {file}: {message}")]
    InvalidDefinition { file: PathBuf, message: String },

    /// Configuration file is not valid TOML
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Menu file references form a cycle
    #[error("menu file cycle detected at {file}")]
    MenuFileCycle { file: PathBuf },

    /// Menu definition resolved to an empty root menu
    #[error("menu definition in {file} is empty")]
    EmptyMenu { file: PathBuf },
}
