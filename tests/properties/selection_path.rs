//! Property tests for selection path operations.

use proptest::prelude::*;

use menunav::SelectionPath;

proptest! {
    /// PROPERTY: a path is never empty, whatever operations are applied.
    #[test]
    fn property_path_depth_never_zero(
        ops in proptest::collection::vec(0u8..4, 0..64)
    ) {
        let mut path = SelectionPath::new();
        for op in ops {
            match op {
                0 => path.descend(),
                1 => {
                    let _ = path.ascend();
                }
                2 => path.set_cursor(path.cursor() + 1),
                _ => path.set_cursor(path.cursor().saturating_sub(1)),
            }
            prop_assert!(path.depth() >= 1);
            prop_assert_eq!(path.indices().len(), path.depth());
        }
    }

    /// PROPERTY: descend then ascend restores the previous path exactly.
    #[test]
    fn property_descend_ascend_round_trip(
        cursors in proptest::collection::vec(0usize..32, 1..8)
    ) {
        let mut path = SelectionPath::new();
        for &cursor in &cursors {
            path.set_cursor(cursor);
            let before = path.clone();
            path.descend();
            prop_assert_eq!(path.cursor(), 0);
            prop_assert!(path.ascend());
            prop_assert_eq!(&path, &before);
            path.descend();
        }
    }
}
