//! Wheel core: the aggregate state for one wheel page.
//!
//! All three wheel pages (names, numbers, colors) share [`WheelCore`]; they
//! differ only in how the registry is seeded. A page owns one `WheelCore`
//! per mount, so wheel state lives exactly as long as the page and is
//! destroyed on navigation, matching the per-page-load lifecycle.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::borrow::Cow;

use crate::entries::{Entry, EntryList, RangeError};
use crate::geometry::{self, Slice};
use crate::spin::{SpinPlan, SpinState};

/// Core state for one wheel page instance: the entry registry plus the spin
/// and selection state derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelCore {
    pub entries: EntryList,
    pub spin: SpinState,
}

impl WheelCore {
    /// Create an empty wheel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wheel pre-seeded with `entries`.
    #[must_use]
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let mut core = Self::default();
        core.seed(entries);
        core
    }

    /// Append an entry. No-op returning `false` on an empty or duplicate
    /// label.
    pub fn add(&mut self, entry: Entry) -> bool {
        self.entries.add(entry)
    }

    /// Remove every entry matching `label`. Removing the currently selected
    /// entry also clears the selection and hides the result.
    pub fn remove(&mut self, label: &str) -> bool {
        let removed = self.entries.remove(label);
        let selection_removed =
            removed && self.selected_label().is_some_and(|selected| selected == label);
        if selection_removed {
            self.spin.clear_selection();
        }
        removed
    }

    /// Replace the registry with the inclusive integer sequence `[min, max]`
    /// and clear any previous selection.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] (and changes nothing) on an invalid range.
    pub fn generate_range(&mut self, min: i64, max: i64) -> Result<(), RangeError> {
        self.entries.generate_range(min, max)?;
        self.spin.clear_selection();
        Ok(())
    }

    /// Replace the registry wholesale and clear any previous selection.
    pub fn seed(&mut self, entries: Vec<Entry>) {
        self.entries.replace_all(entries);
        self.spin.clear_selection();
    }

    /// Start a spin using `unit` as the random sample in `[0, 1)`.
    ///
    /// Returns `None` on an empty wheel; otherwise the rotation is updated
    /// immediately and the returned plan is passed back to
    /// [`settle`](Self::settle) once the reveal timeout fires.
    pub fn begin_spin(&mut self, unit: f64) -> Option<SpinPlan> {
        self.spin.begin(&self.entries, unit)
    }

    /// Reveal a finished spin. Returns `false` if `plan` was superseded by a
    /// newer spin.
    pub fn settle(&mut self, plan: &SpinPlan) -> bool {
        self.spin.settle(plan)
    }

    /// Close the result modal, keeping the selection.
    pub fn dismiss(&mut self) {
        self.spin.dismiss();
    }

    /// Display label of the current selection, if any.
    #[must_use]
    pub fn selected_label(&self) -> Option<Cow<'_, str>> {
        self.spin.selected.as_ref().map(Entry::label)
    }

    /// Current slice set for the render surface.
    #[must_use]
    pub fn slices(&self) -> Vec<Slice> {
        geometry::slices(&self.entries)
    }
}
