//! Navigation state machine
//!
//! The navigator owns the menu tree and the selection path; every mutation
//! happens here, on the caller's thread. External command completions are
//! queued on an internal channel and applied by [`Navigator::pump`], so a
//! completion that resolves mid-navigation can never race the tree.
//!
//! Navigation boundary conditions (up at the top, down at the bottom, back
//! at the root) are silent no-ops reported through the `bool` return, not
//! errors.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::config::MenuConfig;
use crate::events::{CommandOutcome, MenuEvent, MenuEventSink};
use crate::exec::{CommandRunner, ShellRunner};
use crate::model::{Action, MenuItem};
use crate::path::SelectionPath;
use crate::resolver;
use crate::trim::{self, DisplayRow};

/// Completion of an external invocation, queued until `pump`
enum PendingCompletion {
    /// A command or option-selection invocation finished
    Command {
        emit: Option<String>,
        outcome: CommandOutcome,
    },
    /// An options fetch finished; `origin` is the path it was dispatched from
    Options {
        origin: SelectionPath,
        outcome: CommandOutcome,
    },
}

/// What activating the highlighted item should do, captured before mutating
enum Activation {
    Descend,
    Command {
        command: String,
        emit: Option<String>,
    },
    Emit {
        name: String,
        arguments: Vec<String>,
    },
    Options {
        command: String,
    },
    SelectOption {
        script: Option<String>,
        emit: Option<String>,
        label: String,
    },
}

/// Cursor-and-depth state machine over a resolved menu tree
pub struct Navigator {
    tree: Vec<MenuItem>,
    path: SelectionPath,
    config: MenuConfig,
    sink: Arc<dyn MenuEventSink>,
    runner: Arc<dyn CommandRunner>,
    pending_tx: Sender<PendingCompletion>,
    pending_rx: Receiver<PendingCompletion>,
}

impl Navigator {
    /// Create a navigator over a resolved menu tree
    pub fn new(
        tree: Vec<MenuItem>,
        config: MenuConfig,
        sink: Arc<dyn MenuEventSink>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let (pending_tx, pending_rx) = channel();
        Self {
            tree,
            path: SelectionPath::new(),
            config,
            sink,
            runner,
            pending_tx,
            pending_rx,
        }
    }

    /// Create a navigator that runs commands through the shell
    pub fn with_shell(tree: Vec<MenuItem>, config: MenuConfig, sink: Arc<dyn MenuEventSink>) -> Self {
        Self::new(tree, config, sink, Arc::new(ShellRunner))
    }

    /// Move the cursor up within the active branch.
    ///
    /// Returns false without raising anything when already at the top.
    pub fn move_up(&mut self) -> bool {
        let cursor = self.path.cursor();
        if cursor == 0 {
            return false;
        }
        self.path.set_cursor(cursor - 1);
        self.sink.on_event(MenuEvent::Changed);
        true
    }

    /// Move the cursor down within the active branch.
    ///
    /// Returns false without raising anything when already at the bottom.
    pub fn move_down(&mut self) -> bool {
        let len = self.active_branch().len();
        let cursor = self.path.cursor();
        if cursor + 1 >= len {
            return false;
        }
        self.path.set_cursor(cursor + 1);
        self.sink.on_event(MenuEvent::Changed);
        true
    }

    /// Return from the active submenu to its parent branch.
    ///
    /// Returns false at the root. Leaving a dynamic submenu removes it from
    /// the tree.
    pub fn back(&mut self) -> bool {
        if self.path.depth() <= 1 {
            return false;
        }
        self.leave_branch();
        self.sink.on_event(MenuEvent::Changed);
        true
    }

    /// Pop one level; splice out the submenu just left if it was dynamic.
    fn leave_branch(&mut self) {
        let dynamic = self.parent_item().map(MenuItem::is_dynamic).unwrap_or(false);
        self.path.ascend();
        if dynamic {
            let cursor = self.path.cursor();
            if let Ok(branch) = resolver::active_branch_mut(&mut self.tree, &self.path) {
                if cursor < branch.len() {
                    branch.remove(cursor);
                }
            }
        }
    }

    /// Activate the highlighted item.
    ///
    /// Submenus are entered immediately. Command and options items dispatch
    /// their external invocation and return without blocking; the result is
    /// applied on a later [`Navigator::pump`]. Items with no activation
    /// behavior are a no-op.
    pub fn activate(&mut self) {
        let Some(plan) = self.plan_activation() else {
            return;
        };
        match plan {
            Activation::Descend => {
                self.path.descend();
                self.sink.on_event(MenuEvent::Changed);
            }
            Activation::Command { command, emit } => {
                self.dispatch_command(command, emit);
            }
            Activation::Emit { name, arguments } => {
                self.sink.on_event(MenuEvent::App { name, arguments });
                self.sink.on_event(MenuEvent::Emit);
            }
            Activation::Options { command } => {
                let origin = self.path.clone();
                let tx = self.pending_tx.clone();
                self.runner.run(
                    &command,
                    Box::new(move |outcome| {
                        let _ = tx.send(PendingCompletion::Options { origin, outcome });
                    }),
                );
            }
            Activation::SelectOption {
                script,
                emit,
                label,
            } => {
                // Leave (and tear down) the dynamic submenu before running
                // the selection command.
                self.back();
                if let Some(script) = script {
                    self.dispatch_command(format!("{} {}", script, label), emit);
                }
            }
        }
    }

    /// Inspect the highlighted item and capture what activating it does.
    fn plan_activation(&self) -> Option<Activation> {
        let item = self.current_item()?;
        match &item.action {
            Action::Submenu(items) | Action::DynamicSubmenu { items, .. } => {
                // An empty submenu cannot hold a cursor; refuse to enter it.
                if items.is_empty() {
                    None
                } else {
                    Some(Activation::Descend)
                }
            }
            Action::Command { command, emit } => Some(Activation::Command {
                command: command.clone(),
                emit: emit.clone(),
            }),
            Action::Emit(spec) => Some(Activation::Emit {
                name: spec.name().to_string(),
                arguments: spec.arguments().to_vec(),
            }),
            Action::Options { command, .. } => Some(Activation::Options {
                command: command.clone(),
            }),
            Action::OptionsLeaf => {
                // The parent is the dynamic submenu carrying the script and
                // event for option selection.
                let parent = self.parent_item()?;
                let Action::DynamicSubmenu {
                    select_script,
                    emit,
                    ..
                } = &parent.action
                else {
                    return None;
                };
                Some(Activation::SelectOption {
                    script: select_script.clone(),
                    emit: emit.clone(),
                    label: item.label.clone(),
                })
            }
            Action::None => None,
        }
    }

    fn dispatch_command(&self, command: String, emit: Option<String>) {
        let tx = self.pending_tx.clone();
        self.runner.run(
            &command,
            Box::new(move |outcome| {
                let _ = tx.send(PendingCompletion::Command { emit, outcome });
            }),
        );
    }

    /// Apply queued external completions.
    ///
    /// Call this from the thread that drives navigation (a TUI loop tick is
    /// the natural place). Returns the number of completions applied.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(completion) = self.pending_rx.try_recv() {
            self.apply_completion(completion);
            handled += 1;
        }
        handled
    }

    fn apply_completion(&mut self, completion: PendingCompletion) {
        match completion {
            PendingCompletion::Command { emit, outcome } => {
                if let Some(name) = emit {
                    self.sink.on_event(MenuEvent::AppCommand {
                        name,
                        outcome: outcome.clone(),
                    });
                }
                self.sink.on_event(MenuEvent::Command { outcome });
            }
            PendingCompletion::Options { origin, outcome } => {
                self.apply_options_fetch(origin, outcome);
            }
        }
    }

    /// Splice in the submenu produced by an options fetch, then enter it.
    ///
    /// A fetch that resolves after the user navigated elsewhere is stale and
    /// dropped whole: the current path must still equal the dispatch path and
    /// the item there must still be the originating options item. A failed
    /// fetch, or one that produced no non-empty lines, yields no submenu.
    fn apply_options_fetch(&mut self, origin: SelectionPath, outcome: CommandOutcome) {
        if self.path != origin {
            return;
        }
        let Some(item) = self.current_item() else {
            return;
        };
        let Action::Options {
            select_script,
            select_emit,
            ..
        } = &item.action
        else {
            return;
        };
        let label = item.label.clone();
        let select_script = select_script.clone();
        let emit = select_emit.clone();

        if outcome.error.is_some() {
            return;
        }
        let leaves: Vec<MenuItem> = outcome
            .stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| MenuItem {
                label: line.to_string(),
                action: Action::OptionsLeaf,
            })
            .collect();
        if leaves.is_empty() {
            return;
        }

        let submenu = MenuItem {
            label,
            action: Action::DynamicSubmenu {
                items: leaves,
                select_script,
                emit,
            },
        };
        // Insert immediately before the triggering item, then enter it; the
        // cursor now addresses the fresh submenu at the same index.
        let cursor = self.path.cursor();
        if let Ok(branch) = resolver::active_branch_mut(&mut self.tree, &self.path) {
            branch.insert(cursor, submenu);
        }
        self.activate();
    }

    /// The branch at the current navigation depth
    pub fn active_branch(&self) -> &[MenuItem] {
        resolver::active_branch(&self.tree, &self.path).unwrap_or(&[])
    }

    /// The highlighted item, if the active branch is non-empty
    pub fn current_item(&self) -> Option<&MenuItem> {
        resolver::current_item(&self.tree, &self.path).ok()
    }

    /// The item containing the active branch, `None` at the root
    pub fn parent_item(&self) -> Option<&MenuItem> {
        resolver::parent_item(&self.tree, &self.path).ok().flatten()
    }

    /// Render-ready view of the active branch, trimmed per the configured
    /// display height
    pub fn active_menu(&self) -> Vec<DisplayRow> {
        self.active_menu_limited(self.config.display_lines)
    }

    /// Render-ready view bounded to `max_visible` rows (0 = unbounded)
    pub fn active_menu_limited(&self, max_visible: usize) -> Vec<DisplayRow> {
        let cursor = self.path.cursor();
        let rows = trim::to_rows(self.active_branch(), cursor);
        trim::trim(rows, cursor, max_visible, &self.config)
    }

    /// The current selection path
    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    /// The menu tree as currently navigated, dynamic submenus included
    pub fn tree(&self) -> &[MenuItem] {
        &self.tree
    }
}
