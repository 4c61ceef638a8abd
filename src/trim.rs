//! Display windowing
//!
//! Fits an arbitrarily long branch into a bounded number of display rows,
//! marking hidden items above and below the window. Sentinel rows are a
//! distinct marker value rather than menu items, so a renderer cannot feed
//! them back into navigation.
//!
//! With fewer than three visible rows the sentinels take priority over
//! content and may crowd out the selection; the window length is still exact.

use crate::config::MenuConfig;
use crate::model::MenuItem;

/// How a display row came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMarker {
    /// A real menu item
    Item,
    /// Items are hidden above the window
    MoreAbove,
    /// Items are hidden below the window
    MoreBelow,
}

/// One render-ready line of the active menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    /// True on the highlighted item
    pub selected: bool,
    pub marker: RowMarker,
}

impl DisplayRow {
    fn more_above(label: &str) -> Self {
        Self {
            label: label.to_string(),
            selected: false,
            marker: RowMarker::MoreAbove,
        }
    }

    fn more_below(label: &str) -> Self {
        Self {
            label: label.to_string(),
            selected: false,
            marker: RowMarker::MoreBelow,
        }
    }

    /// True for the display-only "more" rows
    pub fn is_sentinel(&self) -> bool {
        self.marker != RowMarker::Item
    }
}

/// Map a branch to display rows, flagging the highlighted item
pub fn to_rows(branch: &[MenuItem], selected: usize) -> Vec<DisplayRow> {
    branch
        .iter()
        .enumerate()
        .map(|(index, item)| DisplayRow {
            label: item.label.clone(),
            selected: index == selected,
            marker: RowMarker::Item,
        })
        .collect()
}

/// Bound `rows` to `max_visible` entries while keeping `selected` visible.
///
/// `max_visible` of 0 means unbounded. When trimming applies the result has
/// exactly `max_visible` rows: a leading "more above" sentinel when the
/// window starts past the second row, and a trailing "more below" sentinel
/// replacing the last slot when the window stops short of the end.
pub fn trim(
    rows: Vec<DisplayRow>,
    selected: usize,
    max_visible: usize,
    config: &MenuConfig,
) -> Vec<DisplayRow> {
    if max_visible == 0 || rows.len() <= max_visible {
        return rows;
    }
    let total = rows.len();

    // Window starts at the selection unless it sits within the first two rows.
    let mut start = if selected > 1 { selected } else { 0 };
    // Pull the window back so it does not run past the end.
    if start + max_visible - 1 > total {
        start = total - max_visible + 1;
    }

    let mut out: Vec<DisplayRow> = Vec::with_capacity(max_visible);
    if start > 1 {
        out.push(DisplayRow::more_above(&config.more_up_label));
    }
    let take = max_visible - out.len();
    out.extend(rows.into_iter().skip(start).take(take));

    if start + out.len() <= total {
        if let Some(last) = out.last_mut() {
            *last = DisplayRow::more_below(&config.more_down_label);
        }
    }
    out
}
