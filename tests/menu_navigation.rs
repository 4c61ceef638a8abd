//! End-to-end navigation over a menu definition loaded from disk.
//!
//! These tests drive the real shell runner; completions are applied by
//! polling `pump` the way a TUI loop tick would.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use menunav::{
    load_menu_with_warnings, CommandOutcome, MenuConfig, MenuEvent, MenuEventSink, Navigator,
    RowMarker,
};

/// Sink that records every event for assertions
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<MenuEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<MenuEvent> {
        self.events.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl MenuEventSink for RecordingSink {
    fn on_event(&self, event: MenuEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn write_menus(dir: &Path) -> PathBuf {
    fs::write(
        dir.join("tools.json"),
        r#"[
            {"label": "Beep", "emit": {"name": "beep", "arguments": ["loud"]}}
        ]"#,
    )
    .unwrap();
    let root = dir.join("menu.json");
    fs::write(
        &root,
        r#"[
            {"label": "Status", "command": "echo ok", "emit": "status_done"},
            {"label": "Tools", "menuFile": "tools.json"},
            {
                "label": "Pick",
                "options": "printf 'x\ny\n\nz'",
                "selectScript": "echo picked",
                "selectEmit": "picked"
            },
            {"label": "About"}
        ]"#,
    )
    .unwrap();
    root
}

fn navigator(dir: &Path) -> (Navigator, Arc<RecordingSink>) {
    let root = write_menus(dir);
    let (menu, warnings) = load_menu_with_warnings(&root).unwrap();
    assert!(warnings.is_empty());

    let sink = Arc::new(RecordingSink::default());
    let nav = Navigator::with_shell(menu, MenuConfig::default(), sink.clone());
    (nav, sink)
}

/// Pump until `done` holds or a generous deadline passes.
fn pump_until(nav: &mut Navigator, mut done: impl FnMut(&Navigator) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        nav.pump();
        if done(nav) {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("timed out waiting for an external completion");
}

#[test]
fn command_item_runs_and_reports_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let (mut nav, sink) = navigator(dir.path());

    nav.activate();
    pump_until(&mut nav, |_| !sink.events().is_empty());

    assert_eq!(
        sink.events(),
        vec![
            MenuEvent::AppCommand {
                name: "status_done".to_string(),
                outcome: CommandOutcome::success("ok\n", ""),
            },
            MenuEvent::Command {
                outcome: CommandOutcome::success("ok\n", ""),
            },
        ]
    );
    // Activation of a command never moves the cursor.
    assert_eq!(nav.path().depth(), 1);
}

#[test]
fn menu_file_submenu_round_trips_and_emits() {
    let dir = tempfile::tempdir().unwrap();
    let (mut nav, sink) = navigator(dir.path());

    nav.move_down();
    nav.activate();
    assert_eq!(nav.path().depth(), 2);
    assert_eq!(nav.current_item().unwrap().label, "Beep");

    sink.clear();
    nav.activate();
    assert_eq!(
        sink.events(),
        vec![
            MenuEvent::App {
                name: "beep".to_string(),
                arguments: vec!["loud".to_string()],
            },
            MenuEvent::Emit,
        ]
    );

    assert!(nav.back());
    assert_eq!(nav.path().depth(), 1);
    assert_eq!(nav.current_item().unwrap().label, "Tools");
}

#[test]
fn options_item_fetches_enters_and_selects() {
    let dir = tempfile::tempdir().unwrap();
    let (mut nav, sink) = navigator(dir.path());

    nav.move_down();
    nav.move_down();
    assert_eq!(nav.current_item().unwrap().label, "Pick");

    nav.activate();
    pump_until(&mut nav, |nav| nav.path().depth() == 2);

    let labels: Vec<_> = nav
        .active_branch()
        .iter()
        .map(|item| item.label.clone())
        .collect();
    assert_eq!(labels, ["x", "y", "z"]);
    assert!(nav.parent_item().unwrap().is_dynamic());

    // Choose "y": the dynamic submenu is torn down, then the select script
    // runs with the chosen label appended.
    nav.move_down();
    sink.clear();
    nav.activate();
    assert_eq!(nav.path().depth(), 1);
    assert_eq!(nav.active_branch().len(), 4);

    pump_until(&mut nav, |_| sink.events().len() >= 3);
    assert_eq!(
        sink.events(),
        vec![
            MenuEvent::Changed,
            MenuEvent::AppCommand {
                name: "picked".to_string(),
                outcome: CommandOutcome::success("picked y\n", ""),
            },
            MenuEvent::Command {
                outcome: CommandOutcome::success("picked y\n", ""),
            },
        ]
    );
}

#[test]
fn active_menu_view_is_bounded_and_flagged() {
    let dir = tempfile::tempdir().unwrap();
    let (nav, _) = navigator(dir.path());

    let rows = nav.active_menu_limited(3);
    assert_eq!(rows.len(), 3);
    assert!(rows[0].selected);
    assert_eq!(rows[0].label, "Status");
    assert_eq!(rows[2].marker, RowMarker::MoreBelow);
}
