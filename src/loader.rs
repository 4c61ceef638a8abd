//! Menu definition loading
//!
//! Loads JSON menu definitions and resolves nested `menuFile` references
//! into a single in-memory tree before a navigator is constructed. Field
//! names follow the on-disk definition format (`selectScript`, `selectEmit`,
//! `menuFile`). Unknown keys are collected as non-fatal warnings.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MenuError, MenuResult};
use crate::model::{Action, EmitSpec, MenuItem};

/// Non-fatal warning collected while loading a menu definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Unrecognized key path within the definition
    pub key: String,
    /// File the key was found in
    pub file: PathBuf,
}

/// On-disk shape of a menu item before conversion to the tagged model
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMenuItem {
    label: String,
    #[serde(default)]
    menu: Option<Vec<RawMenuItem>>,
    #[serde(default)]
    menu_file: Option<PathBuf>,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    emit: Option<RawEmit>,
    #[serde(default)]
    options: Option<String>,
    #[serde(default)]
    select_script: Option<String>,
    #[serde(default)]
    select_emit: Option<String>,
}

/// `emit` accepts a plain event name or a structured form:
///
///   "emit": "refresh"
///   "emit": { "name": "run", "arguments": ["a", "b"] }
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEmit {
    Name(String),
    Structured {
        name: String,
        #[serde(default)]
        arguments: Vec<String>,
    },
}

impl RawEmit {
    fn into_name(self) -> String {
        match self {
            RawEmit::Name(name) => name,
            RawEmit::Structured { name, .. } => name,
        }
    }

    fn into_spec(self) -> EmitSpec {
        match self {
            RawEmit::Name(name) => EmitSpec::Name(name),
            RawEmit::Structured { name, arguments } => EmitSpec::Structured { name, arguments },
        }
    }
}

/// Load a resolved menu tree from a definition file
pub fn load_menu(path: &Path) -> MenuResult<Vec<MenuItem>> {
    load_menu_with_warnings(path).map(|(menu, _)| menu)
}

/// Load a menu tree and collect non-fatal warnings (e.g. unknown keys)
pub fn load_menu_with_warnings(path: &Path) -> MenuResult<(Vec<MenuItem>, Vec<LoadWarning>)> {
    let mut warnings = Vec::new();
    let mut loading = HashSet::new();
    let menu = load_file(path, &mut loading, &mut warnings)?;
    Ok((menu, warnings))
}

/// Parse one definition file; `loading` holds the reference chain being
/// resolved, for cycle detection.
fn load_file(
    path: &Path,
    loading: &mut HashSet<PathBuf>,
    warnings: &mut Vec<LoadWarning>,
) -> MenuResult<Vec<MenuItem>> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !loading.insert(canonical.clone()) {
        return Err(MenuError::MenuFileCycle {
            file: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let mut deserializer = serde_json::Deserializer::from_str(&content);
    let mut unknown: Vec<String> = Vec::new();
    let raw: Vec<RawMenuItem> = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidDefinition {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    warnings.extend(unknown.into_iter().map(|key| LoadWarning {
        key,
        file: path.to_path_buf(),
    }));

    if raw.is_empty() {
        return Err(MenuError::EmptyMenu {
            file: path.to_path_buf(),
        });
    }

    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let items = raw
        .into_iter()
        .map(|item| resolve_item(item, &dir, loading, warnings))
        .collect::<MenuResult<Vec<_>>>()?;

    loading.remove(&canonical);
    Ok(items)
}

/// Convert a raw item, recursing into inline submenus and referenced files.
///
/// Shape precedence matches activation precedence: menu (inline or file)
/// over command over emit over options; anything else is label-only.
fn resolve_item(
    raw: RawMenuItem,
    dir: &Path,
    loading: &mut HashSet<PathBuf>,
    warnings: &mut Vec<LoadWarning>,
) -> MenuResult<MenuItem> {
    let RawMenuItem {
        label,
        menu,
        menu_file,
        command,
        emit,
        options,
        select_script,
        select_emit,
    } = raw;

    let action = if let Some(children) = menu {
        let items = children
            .into_iter()
            .map(|child| resolve_item(child, dir, loading, warnings))
            .collect::<MenuResult<Vec<_>>>()?;
        Action::Submenu(items)
    } else if let Some(file) = menu_file {
        let target = if file.is_absolute() {
            file
        } else {
            dir.join(file)
        };
        Action::Submenu(load_file(&target, loading, warnings)?)
    } else if let Some(command) = command {
        Action::Command {
            command,
            emit: emit.map(RawEmit::into_name),
        }
    } else if let Some(emit) = emit {
        Action::Emit(emit.into_spec())
    } else if let Some(command) = options {
        Action::Options {
            command,
            select_script,
            select_emit,
        }
    } else {
        Action::None
    };

    Ok(MenuItem { label, action })
}
