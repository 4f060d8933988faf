//! Selection engine: random index draws and cumulative rotation state.
//!
//! A spin picks a uniformly random entry, then rotates the wheel forward by
//! several full revolutions plus whatever offset lands the pointer on that
//! entry. The rotation value is cumulative so the wheel never visually
//! rewinds; before each spin it is floored to whole turns, which keeps the
//! settle angle a function of the newest target alone no matter how large
//! the accumulated rotation has grown.
//!
//! The reveal is decoupled from the animation: the host schedules a fixed
//! timeout and calls [`SpinState::settle`] when it fires. Each spin bumps a
//! generation counter, and a reveal carrying a stale generation is dropped,
//! so overlapping spins cannot overwrite a newer result with an older one.

#[cfg(test)]
#[path = "spin_test.rs"]
mod spin_test;

use crate::consts::FULL_SPINS;
use crate::entries::{Entry, EntryList};

/// Rotation and selection state for one wheel instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinState {
    /// Cumulative rotation in degrees. Grows monotonically; the animation
    /// layer interpolates toward it over the spin duration.
    pub rotation: f64,
    /// Entry revealed by the most recently settled spin.
    pub selected: Option<Entry>,
    /// Whether the result modal is shown.
    pub result_visible: bool,
    /// Bumped on every spin; reveals carrying an older generation are dropped.
    pub generation: u64,
}

/// Everything the host needs to finish a spin once the reveal timeout fires.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    /// Index of the chosen entry at spin time.
    pub index: usize,
    /// The chosen entry, captured at spin time so later registry edits
    /// cannot change what this spin reveals.
    pub entry: Entry,
    /// Cumulative rotation the wheel is animating toward.
    pub rotation: f64,
    /// Spin generation this plan belongs to.
    pub generation: u64,
}

/// Map a unit sample in `[0, 1)` to an index in `[0, n)`.
///
/// Out-of-range samples are clamped into the valid index range, so a sample
/// of exactly `1.0` still yields `n - 1`.
#[must_use]
pub fn random_index(n: usize, unit: f64) -> usize {
    if n == 0 {
        return 0;
    }
    let scaled = (unit * n as f64).floor();
    if scaled < 0.0 {
        return 0;
    }
    (scaled as usize).min(n - 1)
}

impl SpinState {
    /// Start a spin over `entries` using `unit` as the random sample.
    ///
    /// Returns `None` on an empty registry (spinning an empty wheel is a
    /// silent no-op). Otherwise updates the rotation immediately and returns
    /// the plan the host passes back to [`settle`](Self::settle) after the
    /// animation delay.
    pub fn begin(&mut self, entries: &EntryList, unit: f64) -> Option<SpinPlan> {
        let n = entries.len();
        let index = random_index(n, unit);
        let entry = entries.get(index)?.clone();

        let target_deg = index as f64 * (360.0 / n as f64);
        let completed_turns = (self.rotation / 360.0).floor();
        self.rotation = (completed_turns + FULL_SPINS) * 360.0 - target_deg;
        self.generation += 1;

        Some(SpinPlan {
            index,
            entry,
            rotation: self.rotation,
            generation: self.generation,
        })
    }

    /// Reveal a finished spin.
    ///
    /// Returns `false` (and changes nothing) when `plan` was superseded by a
    /// newer spin before its timeout fired.
    pub fn settle(&mut self, plan: &SpinPlan) -> bool {
        if plan.generation != self.generation {
            return false;
        }
        self.selected = Some(plan.entry.clone());
        self.result_visible = true;
        true
    }

    /// Hide the result modal, keeping the selection.
    pub fn dismiss(&mut self) {
        self.result_visible = false;
    }

    /// Drop the selection and hide the result.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.result_visible = false;
    }

    /// Rotation normalized to `[0, 360)`: the angle the wheel shows once the
    /// animation stops.
    #[must_use]
    pub fn settle_angle(&self) -> f64 {
        self.rotation.rem_euclid(360.0)
    }
}
