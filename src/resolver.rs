//! Branch resolution
//!
//! Pure lookups from a tree plus a selection path to the active branch, the
//! highlighted item, and the parent of the active branch. The walk replays
//! the path as an explicit loop; nothing here mutates navigation state.

use crate::error::{MenuError, MenuResult};
use crate::model::{Action, MenuItem};
use crate::path::SelectionPath;

/// Follow `indices` as submenu descents from the root sequence.
fn walk<'a>(tree: &'a [MenuItem], indices: &[usize]) -> MenuResult<&'a [MenuItem]> {
    let mut branch = tree;
    for (depth, &index) in indices.iter().enumerate() {
        let item = branch.get(index).ok_or(MenuError::PathOutOfRange {
            depth,
            index,
            len: branch.len(),
        })?;
        branch = item.child_items().ok_or_else(|| MenuError::NotASubmenu {
            label: item.label.clone(),
            depth,
        })?;
    }
    Ok(branch)
}

/// The branch at the current navigation depth.
///
/// For a path of depth 1 this is the root sequence.
pub fn active_branch<'a>(
    tree: &'a [MenuItem],
    path: &SelectionPath,
) -> MenuResult<&'a [MenuItem]> {
    walk(tree, path.branch_indices())
}

/// Mutable access to the active branch, for splicing dynamic submenus.
pub fn active_branch_mut<'a>(
    tree: &'a mut Vec<MenuItem>,
    path: &SelectionPath,
) -> MenuResult<&'a mut Vec<MenuItem>> {
    let mut branch = tree;
    for (depth, &index) in path.branch_indices().iter().enumerate() {
        let len = branch.len();
        let item = branch
            .get_mut(index)
            .ok_or(MenuError::PathOutOfRange { depth, index, len })?;
        branch = match &mut item.action {
            Action::Submenu(items) | Action::DynamicSubmenu { items, .. } => items,
            _ => {
                return Err(MenuError::NotASubmenu {
                    label: item.label.clone(),
                    depth,
                })
            }
        };
    }
    Ok(branch)
}

/// The highlighted item within the active branch.
pub fn current_item<'a>(tree: &'a [MenuItem], path: &SelectionPath) -> MenuResult<&'a MenuItem> {
    let branch = active_branch(tree, path)?;
    branch.get(path.cursor()).ok_or(MenuError::PathOutOfRange {
        depth: path.depth() - 1,
        index: path.cursor(),
        len: branch.len(),
    })
}

/// The item whose submenu is the active branch, or `None` at the root.
///
/// This is the branch item one level up, not the sibling highlighted within
/// the parent branch.
pub fn parent_item<'a>(
    tree: &'a [MenuItem],
    path: &SelectionPath,
) -> MenuResult<Option<&'a MenuItem>> {
    let Some((&last, lead)) = path.branch_indices().split_last() else {
        return Ok(None);
    };
    let branch = walk(tree, lead)?;
    let item = branch.get(last).ok_or(MenuError::PathOutOfRange {
        depth: lead.len(),
        index: last,
        len: branch.len(),
    })?;
    Ok(Some(item))
}
