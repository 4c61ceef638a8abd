//! Property tests for the display window trimmer.

use proptest::prelude::*;

use menunav::{trim, DisplayRow, MenuConfig, RowMarker};

fn rows(len: usize, selected: usize) -> Vec<DisplayRow> {
    (0..len)
        .map(|i| DisplayRow {
            label: i.to_string(),
            selected: i == selected,
            marker: RowMarker::Item,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: trimming never panics and the window length is exact.
    #[test]
    fn property_window_length_is_exact(
        len in 1usize..80,
        max in 1usize..16,
        seed in any::<usize>(),
    ) {
        let selected = seed % len;
        let out = trim(rows(len, selected), selected, max, &MenuConfig::default());
        let expected = if len <= max { len } else { max };
        prop_assert_eq!(out.len(), expected);
    }

    /// PROPERTY: with at least three visible rows the selection is visible.
    #[test]
    fn property_selection_stays_visible(
        len in 1usize..80,
        max in 3usize..16,
        seed in any::<usize>(),
    ) {
        let selected = seed % len;
        let out = trim(rows(len, selected), selected, max, &MenuConfig::default());
        prop_assert!(out.iter().any(|row| row.selected));
    }

    /// PROPERTY: sentinels only ever sit at the window's edges.
    #[test]
    fn property_sentinels_only_at_edges(
        len in 1usize..80,
        max in 1usize..16,
        seed in any::<usize>(),
    ) {
        let selected = seed % len;
        let out = trim(rows(len, selected), selected, max, &MenuConfig::default());
        for (i, row) in out.iter().enumerate() {
            match row.marker {
                RowMarker::MoreAbove => prop_assert_eq!(i, 0),
                RowMarker::MoreBelow => prop_assert_eq!(i, out.len() - 1),
                RowMarker::Item => {}
            }
        }
    }

    /// PROPERTY: the real rows form a contiguous run of the branch.
    #[test]
    fn property_window_is_contiguous(
        len in 1usize..80,
        max in 1usize..16,
        seed in any::<usize>(),
    ) {
        let selected = seed % len;
        let out = trim(rows(len, selected), selected, max, &MenuConfig::default());
        let kept: Vec<usize> = out
            .iter()
            .filter(|row| row.marker == RowMarker::Item)
            .map(|row| row.label.parse().unwrap())
            .collect();
        for pair in kept.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
    }
}
