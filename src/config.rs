//! Configuration for the navigation engine
//!
//! Options arrive either programmatically or from a TOML file embedded in an
//! application's configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

/// Recognized engine options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Maximum visible items before trimming applies; 0 means unbounded
    #[serde(default)]
    pub display_lines: usize,

    /// Label of the "more above" sentinel row
    #[serde(default = "default_more_label")]
    pub more_up_label: String,

    /// Label of the "more below" sentinel row
    #[serde(default = "default_more_label")]
    pub more_down_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            display_lines: 0,
            more_up_label: default_more_label(),
            more_down_label: default_more_label(),
        }
    }
}

fn default_more_label() -> String {
    "...".to_string()
}

impl MenuConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| MenuError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
