#![no_main]

use libfuzzer_sys::fuzz_target;
use menunav::{trim, DisplayRow, MenuConfig, RowMarker};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let max_visible = data[0] as usize;
    let selected = data[1] as usize;
    let len = data[2] as usize;

    let rows: Vec<DisplayRow> = (0..len)
        .map(|i| DisplayRow {
            label: i.to_string(),
            selected: i == selected,
            marker: RowMarker::Item,
        })
        .collect();

    // Trimming should never panic, selection in range or not
    let _ = trim(rows, selected, max_visible, &MenuConfig::default());
});
