//! menunav - tree-menu navigation engine
//!
//! Maintains the current position within a hierarchical menu tree, exposes
//! cursor movement, submenu descent, back-navigation and item activation,
//! and produces a display-ready, size-bounded view of the active menu level.
//!
//! Rendering and input handling stay outside: a consumer maps its key events
//! to [`Navigator`] operations, reacts to the event stream, and re-queries
//! [`Navigator::active_menu`] to redraw. Menus whose entries come from a
//! script's output at activation time are spliced in as dynamic submenus and
//! torn down again on back-navigation.

pub mod config;
pub mod error;
pub mod events;
pub mod exec;
pub mod loader;
pub mod model;
pub mod navigator;
pub mod path;
pub mod resolver;
pub mod trim;

// Re-exports for convenience
pub use config::MenuConfig;
pub use error::{MenuError, MenuResult};
pub use events::{CommandOutcome, JsonEventSink, MenuEvent, MenuEventSink, NoopEventSink};
pub use exec::{CommandRunner, Completion, ShellRunner};
pub use loader::{load_menu, load_menu_with_warnings, LoadWarning};
pub use model::{Action, EmitSpec, MenuItem};
pub use navigator::Navigator;
pub use path::SelectionPath;
pub use trim::{trim, DisplayRow, RowMarker};
