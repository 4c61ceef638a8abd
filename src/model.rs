//! Menu tree data model
//!
//! A menu is an ordered sequence of sibling `MenuItem`s; branch items carry
//! further sequences. Each item has exactly one activation behavior, encoded
//! as an `Action` variant. Submenus synthesized at runtime from an options
//! fetch are a distinct variant (`DynamicSubmenu`), so the navigator's
//! cleanup-on-back obligation is visible in the type.

/// A node in the menu tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Display text for this item
    pub label: String,
    /// What activating this item does
    pub action: Action,
}

/// Activation behavior of a menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Branch item with a submenu from the menu definition
    Submenu(Vec<MenuItem>),

    /// Branch synthesized at runtime from an options fetch.
    ///
    /// Never produced by the loader. The navigator splices it in when the
    /// fetch resolves and splices it out again on back-navigation.
    DynamicSubmenu {
        items: Vec<MenuItem>,
        /// Script run when one of the generated children is chosen
        select_script: Option<String>,
        /// Event raised with the selection command's outcome
        emit: Option<String>,
    },

    /// External command, with an optional event raised on completion
    Command {
        command: String,
        emit: Option<String>,
    },

    /// Application event
    Emit(EmitSpec),

    /// External command whose output lines become a dynamic submenu
    Options {
        command: String,
        select_script: Option<String>,
        select_emit: Option<String>,
    },

    /// Leaf generated by an options fetch; activation runs the parent's
    /// select script with this item's label appended
    OptionsLeaf,

    /// Label-only item; activation is a no-op
    None,
}

/// Application event raised by an `Emit` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitSpec {
    /// Event name with no extra arguments
    Name(String),
    /// Event name plus arguments
    Structured {
        name: String,
        arguments: Vec<String>,
    },
}

impl EmitSpec {
    /// The event name to raise
    pub fn name(&self) -> &str {
        match self {
            EmitSpec::Name(name) => name,
            EmitSpec::Structured { name, .. } => name,
        }
    }

    /// Arguments carried by the event (empty for the plain form)
    pub fn arguments(&self) -> &[String] {
        match self {
            EmitSpec::Name(_) => &[],
            EmitSpec::Structured { arguments, .. } => arguments,
        }
    }
}

impl MenuItem {
    /// Item with no activation behavior
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: Action::None,
        }
    }

    /// Branch item with a static submenu
    pub fn submenu(label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            action: Action::Submenu(items),
        }
    }

    /// Leaf that runs an external command
    pub fn command(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: Action::Command {
                command: command.into(),
                emit: None,
            },
        }
    }

    /// Leaf that raises an application event
    pub fn emit(label: impl Into<String>, spec: EmitSpec) -> Self {
        Self {
            label: label.into(),
            action: Action::Emit(spec),
        }
    }

    /// Leaf whose command output becomes a dynamic submenu
    pub fn options(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: Action::Options {
                command: command.into(),
                select_script: None,
                select_emit: None,
            },
        }
    }

    /// Child items if this is a branch, static or dynamic
    pub fn child_items(&self) -> Option<&[MenuItem]> {
        match &self.action {
            Action::Submenu(items) | Action::DynamicSubmenu { items, .. } => {
                Some(items.as_slice())
            }
            _ => None,
        }
    }

    /// Mutable child items if this is a branch
    pub fn child_items_mut(&mut self) -> Option<&mut Vec<MenuItem>> {
        match &mut self.action {
            Action::Submenu(items) | Action::DynamicSubmenu { items, .. } => Some(items),
            _ => None,
        }
    }

    /// True for submenus synthesized by an options fetch
    pub fn is_dynamic(&self) -> bool {
        matches!(self.action, Action::DynamicSubmenu { .. })
    }
}
