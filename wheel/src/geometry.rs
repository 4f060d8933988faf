//! Wheel geometry: converts the entry registry into angular slices.
//!
//! Angles are in degrees, measured from the canvas-arc zero direction
//! (3 o'clock) and growing clockwise (canvas y-axis points down). Slice `i`
//! of an `n`-entry wheel spans the half-open interval
//! `[i * 360/n, (i+1) * 360/n)`.
//!
//! Fill colors come from a fixed palette indexed by slice position, never by
//! the label, so adding or removing entries shifts colors predictably.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::entries::{Entry, EntryList};

/// Fixed fill palette, indexed by slice position modulo its length.
pub const PALETTE: [&str; 12] = [
    "#E09F3E", "#9E2A2B", "#540B0E", "#D88C3E", "#B85231", "#70161E",
    "#F77F00", "#FFBA08", "#E63946", "#F4A261", "#D62828", "#E85D04",
];

/// Human-readable names for [`PALETTE`], in the same order. Used to seed the
/// colors wheel so position-indexed fills match their labels while the list
/// is unmodified.
pub const PALETTE_NAMES: [&str; 12] = [
    "Amber", "Brick", "Mahogany", "Honey", "Rust", "Wine",
    "Tangerine", "Gold", "Crimson", "Peach", "Scarlet", "Flame",
];

/// The angular sector and styling representing one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Position of the backing entry in wheel order.
    pub index: usize,
    /// Start angle in degrees, inclusive.
    pub start_deg: f64,
    /// End angle in degrees, exclusive.
    pub end_deg: f64,
    /// Fill color as a CSS color string.
    pub color: &'static str,
    /// Display label drawn at the slice midpoint.
    pub label: String,
}

impl Slice {
    /// Angular midpoint of the slice, where its label is anchored.
    #[must_use]
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Compute the slice set for the current registry.
///
/// An empty registry yields no slices (the render surface shows an empty
/// circle). Otherwise the `n` slices partition `[0, 360)` with equal spans.
#[must_use]
pub fn slices(entries: &EntryList) -> Vec<Slice> {
    let n = entries.len();
    if n == 0 {
        return Vec::new();
    }
    let span = 360.0 / n as f64;
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Slice {
            index: i,
            start_deg: i as f64 * span,
            end_deg: (i + 1) as f64 * span,
            color: PALETTE[i % PALETTE.len()],
            label: entry.label().into_owned(),
        })
        .collect()
}

/// The full palette as color entries, in palette order.
#[must_use]
pub fn palette_entries() -> Vec<Entry> {
    PALETTE_NAMES
        .iter()
        .map(|name| Entry::Color((*name).to_owned()))
        .collect()
}
