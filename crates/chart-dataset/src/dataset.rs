// File: crates/chart-dataset/src/dataset.rs
// Summary: DataSet model: entries ordered by x-index with cached min/max/sum, palette and label styling.
// Notes:
// - Aggregates are kept equal to a full recomputation after every call:
//   bounds are (min, max) of the values or `None` when empty, and the sum is
//   always the sum of absolute values. Appends update both in O(1); removals
//   rescan both.
// - Ascending x order is the caller's job for `add_entry`; `add_entry_checked`
//   and `add_entry_ordered` enforce it.

use std::fmt;
use std::fmt::Write as _;

use tracing::{debug, trace, warn};

use crate::color::Rgba;
use crate::entry::Entry;
use crate::error::{DataSetError, Result};
use crate::palette::Palette;
use crate::search;
use crate::style::{AxisDependency, ValueStyle};

pub const DEFAULT_LABEL: &str = "DataSet";

/// One plotted trace. `Clone` produces a fully independent copy.
#[derive(Clone, Debug)]
pub struct DataSet {
    entries: Vec<Entry>,
    label: String,
    colors: Vec<Rgba>,
    visible: bool,
    draw_values_enabled: bool,
    style: ValueStyle,
    bounds: Option<(f64, f64)>,
    value_sum: f64,
}

impl DataSet {
    pub fn new(entries: Vec<Entry>, label: impl Into<String>) -> Self {
        let mut set = Self {
            entries,
            label: label.into(),
            colors: Palette::default_palette().colors,
            visible: true,
            draw_values_enabled: true,
            style: ValueStyle::default(),
            bounds: None,
            value_sum: 0.0,
        };
        set.recalculate_bounds();
        set.recalculate_sum();
        debug!(label = %set.label, count = set.entries.len(), "data set created");
        set
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::new(entries, DEFAULT_LABEL)
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), DEFAULT_LABEL)
    }

    // ---- aggregates ---------------------------------------------------------

    /// Full O(n) rescan of min/max. Clears the bounds when there are no entries.
    pub fn recalculate_bounds(&mut self) {
        self.bounds = self.entries.iter().fold(None, |acc, e| match acc {
            None => Some((e.value, e.value)),
            Some((lo, hi)) => Some((lo.min(e.value), hi.max(e.value))),
        });
    }

    /// Full O(n) rescan of the absolute-value sum.
    pub fn recalculate_sum(&mut self) {
        self.value_sum = self.entries.iter().map(|e| e.value.abs()).sum();
    }

    /// Smallest value, or 0.0 when empty (see `y_bounds`).
    pub fn y_min(&self) -> f64 { self.bounds.map_or(0.0, |(lo, _)| lo) }

    /// Largest value, or 0.0 when empty (see `y_bounds`).
    pub fn y_max(&self) -> f64 { self.bounds.map_or(0.0, |(_, hi)| hi) }

    /// `(min, max)` of the values; `None` when there are no entries.
    pub fn y_bounds(&self) -> Option<(f64, f64)> { self.bounds }

    /// Sum of absolute values.
    pub fn y_value_sum(&self) -> f64 { self.value_sum }

    // ---- x-index lookup -----------------------------------------------------

    pub fn index_for_x_index(&self, x: i64) -> Option<usize> {
        search::index_for_x_index(&self.entries, x)
    }

    /// First entry at `x`, or the best-effort neighbour when there is no exact match.
    pub fn entry_for_x_index(&self, x: i64) -> Option<&Entry> {
        self.index_for_x_index(x).map(|i| &self.entries[i])
    }

    /// Value of `entry_for_x_index(x)`, NaN when that is `None`.
    pub fn value_for_x_index(&self, x: i64) -> f64 {
        self.entry_for_x_index(x).map_or(f64::NAN, |e| e.value)
    }

    pub fn entries_for_x_index(&self, x: i64) -> &[Entry] {
        search::entries_for_x_index(&self.entries, x)
    }

    // ---- identity / equality lookup -----------------------------------------

    /// Position of this exact entry (same `EntryId`).
    pub fn index_of_entry(&self, entry: &Entry) -> Option<usize> {
        self.entries.iter().position(|e| e.is_same(entry))
    }

    /// Position of the first entry with equal x-index and value.
    pub fn index_of_equal(&self, entry: &Entry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    pub fn entry_index(&self, entry: &Entry, by_equality: bool) -> Option<usize> {
        if by_equality { self.index_of_equal(entry) } else { self.index_of_entry(entry) }
    }

    pub fn contains(&self, entry: &Entry) -> bool {
        self.index_of_equal(entry).is_some()
    }

    // ---- mutation -----------------------------------------------------------

    /// Append without checking x order.
    pub fn add_entry(&mut self, entry: Entry) {
        if let Some(last) = self.entries.last() {
            if entry.x_index < last.x_index {
                warn!(
                    label = %self.label,
                    x_index = entry.x_index,
                    last_x_index = last.x_index,
                    "appended entry breaks ascending x order"
                );
            }
        }
        self.track_added(entry.value);
        self.entries.push(entry);
        trace!(count = self.entries.len(), "append entry");
    }

    /// Append, rejecting an entry that sorts before the current last entry.
    pub fn add_entry_checked(&mut self, entry: Entry) -> Result<()> {
        if let Some(last) = self.entries.last() {
            if entry.x_index < last.x_index {
                return Err(DataSetError::OutOfOrder {
                    x_index: entry.x_index,
                    last_x_index: last.x_index,
                });
            }
        }
        self.track_added(entry.value);
        self.entries.push(entry);
        trace!(count = self.entries.len(), "append entry (checked)");
        Ok(())
    }

    /// Insert at the position that keeps ascending x order (after existing duplicates).
    /// Returns the index the entry landed at.
    pub fn add_entry_ordered(&mut self, entry: Entry) -> usize {
        let at = search::insertion_point(&self.entries, entry.x_index);
        self.track_added(entry.value);
        self.entries.insert(at, entry);
        trace!(count = self.entries.len(), at, "insert entry");
        at
    }

    /// Remove this exact entry (identity match). Returns whether it was present.
    pub fn remove_entry(&mut self, entry: &Entry) -> bool {
        match self.index_of_entry(entry) {
            Some(i) => {
                self.remove_at(i);
                true
            }
            None => false,
        }
    }

    /// Remove the entry `index_for_x_index(x)` resolves to. Without an exact
    /// match that is the best-effort neighbour, so a miss still removes one
    /// entry whenever the set is non-empty.
    pub fn remove_entry_at_x_index(&mut self, x: i64) -> bool {
        match self.index_for_x_index(x) {
            Some(i) => {
                self.remove_at(i);
                true
            }
            None => false,
        }
    }

    pub fn is_sorted_by_x(&self) -> bool { search::is_sorted_by_x(&self.entries) }

    fn track_added(&mut self, value: f64) {
        self.bounds = Some(match self.bounds {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
        self.value_sum += value.abs();
    }

    fn remove_at(&mut self, index: usize) -> Entry {
        let removed = self.entries.remove(index);
        self.recalculate_bounds();
        self.recalculate_sum();
        debug!(x_index = removed.x_index, count = self.entries.len(), "removed entry");
        removed
    }

    // ---- palette ------------------------------------------------------------

    /// Clear the palette. `color_at` returns `None` until a color is added.
    pub fn reset_colors(&mut self) {
        self.colors.clear();
        trace!("palette cleared");
    }

    pub fn add_color(&mut self, color: Rgba) {
        self.colors.push(color);
    }

    /// Replace the palette with a single color.
    pub fn set_color(&mut self, color: Rgba) {
        self.colors.clear();
        self.colors.push(color);
    }

    pub fn set_colors(&mut self, colors: Vec<Rgba>) {
        self.colors = colors;
    }

    pub fn set_palette(&mut self, palette: &Palette) {
        trace!(palette = palette.name, "palette applied");
        self.colors = palette.colors.clone();
    }

    pub fn colors(&self) -> &[Rgba] { &self.colors }

    /// Palette color for element `index`: negative clamps to 0, larger wraps around.
    pub fn color_at(&self, index: i64) -> Option<Rgba> {
        if self.colors.is_empty() {
            return None;
        }
        let i = index.max(0) as u64 % self.colors.len() as u64;
        Some(self.colors[i as usize])
    }

    // ---- plain properties ---------------------------------------------------

    pub fn entries(&self) -> &[Entry] { &self.entries }

    pub fn entry_count(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn label(&self) -> &str { &self.label }

    pub fn set_label(&mut self, label: impl Into<String>) { self.label = label.into(); }

    pub fn is_visible(&self) -> bool { self.visible }

    pub fn set_visible(&mut self, visible: bool) { self.visible = visible; }

    pub fn is_draw_values_enabled(&self) -> bool { self.draw_values_enabled }

    pub fn set_draw_values_enabled(&mut self, enabled: bool) { self.draw_values_enabled = enabled; }

    pub fn style(&self) -> &ValueStyle { &self.style }

    pub fn style_mut(&mut self) -> &mut ValueStyle { &mut self.style }

    pub fn axis_dependency(&self) -> AxisDependency { self.style.axis }

    pub fn format_value(&self, value: f64) -> String { self.style.format_value(value) }

    /// The `Display` line followed by one line per entry.
    pub fn debug_description(&self) -> String {
        let mut out = format!("{self}:");
        for e in &self.entries {
            let _ = write!(out, "\n{e}");
        }
        out
    }
}

impl Default for DataSet {
    fn default() -> Self { Self::empty() }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataSet, label: {}, {} entries", self.label, self.entries.len())
    }
}

impl FromIterator<Entry> for DataSet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
