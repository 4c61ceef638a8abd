//! Property tests for navigator bounds.

use std::sync::Arc;

use proptest::prelude::*;

use menunav::{
    CommandOutcome, CommandRunner, Completion, MenuConfig, MenuItem, Navigator, NoopEventSink,
};

/// Runner that completes immediately with an empty outcome
struct InertRunner;

impl CommandRunner for InertRunner {
    fn run(&self, _command: &str, done: Completion) {
        done(CommandOutcome::default());
    }
}

fn deep_tree() -> Vec<MenuItem> {
    vec![
        MenuItem::submenu(
            "a",
            vec![
                MenuItem::submenu(
                    "aa",
                    vec![
                        MenuItem::label_only("aaa"),
                        MenuItem::command("aab", "true"),
                    ],
                ),
                MenuItem::label_only("ab"),
            ],
        ),
        MenuItem::command("b", "true"),
        MenuItem::submenu("c", vec![MenuItem::label_only("ca")]),
    ]
}

proptest! {
    /// PROPERTY: no operation sequence leaves the cursor out of range.
    #[test]
    fn property_navigation_stays_in_range(
        ops in proptest::collection::vec(0u8..5, 0..128)
    ) {
        let mut nav = Navigator::new(
            deep_tree(),
            MenuConfig::default(),
            Arc::new(NoopEventSink),
            Arc::new(InertRunner),
        );
        for op in ops {
            match op {
                0 => {
                    let _ = nav.move_up();
                }
                1 => {
                    let _ = nav.move_down();
                }
                2 => {
                    let _ = nav.back();
                }
                3 => nav.activate(),
                _ => {
                    let _ = nav.pump();
                }
            }
            let branch = nav.active_branch();
            prop_assert!(!branch.is_empty());
            prop_assert!(nav.path().cursor() < branch.len());
            prop_assert!(nav.current_item().is_some());
        }
    }
}
