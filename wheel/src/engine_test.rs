#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::{PALETTE, palette_entries};

fn named_wheel(labels: &[&str]) -> WheelCore {
    let mut core = WheelCore::new();
    for label in labels {
        assert!(core.add(Entry::Name((*label).to_owned())));
    }
    core
}

/// Unit sample that makes the spin land on `index` of an `n`-entry wheel.
fn unit_for(index: usize, n: usize) -> f64 {
    (index as f64 + 0.5) / n as f64
}

fn settle_on(core: &mut WheelCore, index: usize) {
    let n = core.entries.len();
    let plan = core.begin_spin(unit_for(index, n)).unwrap();
    assert!(core.settle(&plan));
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_wheel_is_empty_and_idle() {
    let core = WheelCore::new();
    assert!(core.entries.is_empty());
    assert_eq!(core.spin.rotation, 0.0);
    assert_eq!(core.selected_label(), None);
    assert!(core.slices().is_empty());
}

#[test]
fn with_entries_seeds_the_registry() {
    let core = WheelCore::with_entries(palette_entries());
    assert_eq!(core.entries.len(), PALETTE.len());
    assert_eq!(core.selected_label(), None);
}

// =============================================================
// add / remove
// =============================================================

#[test]
fn add_delegates_to_registry_rules() {
    let mut core = named_wheel(&["Alice"]);
    assert!(!core.add(Entry::Name("Alice".to_owned())));
    assert!(!core.add(Entry::Name("  ".to_owned())));
    assert_eq!(core.entries.len(), 1);
}

#[test]
fn remove_clears_matching_selection() {
    let mut core = named_wheel(&["Alice", "Bob"]);
    settle_on(&mut core, 0);
    assert_eq!(core.selected_label().as_deref(), Some("Alice"));

    assert!(core.remove("Alice"));
    assert_eq!(core.selected_label(), None);
    assert!(!core.spin.result_visible);
}

#[test]
fn remove_keeps_unrelated_selection() {
    let mut core = named_wheel(&["Alice", "Bob"]);
    settle_on(&mut core, 0);

    assert!(core.remove("Bob"));
    assert_eq!(core.selected_label().as_deref(), Some("Alice"));
    assert!(core.spin.result_visible);
}

#[test]
fn remove_absent_label_changes_nothing() {
    let mut core = named_wheel(&["Alice"]);
    settle_on(&mut core, 0);

    assert!(!core.remove("Bob"));
    assert_eq!(core.selected_label().as_deref(), Some("Alice"));
}

// =============================================================
// generate_range / seed
// =============================================================

#[test]
fn generate_range_replaces_and_clears_selection() {
    let mut core = named_wheel(&["Alice"]);
    settle_on(&mut core, 0);

    core.generate_range(1, 3).unwrap();
    assert_eq!(core.entries.labels(), vec!["1", "2", "3"]);
    assert_eq!(core.selected_label(), None);
    assert!(!core.spin.result_visible);
}

#[test]
fn generate_range_error_preserves_state() {
    let mut core = named_wheel(&["Alice"]);
    settle_on(&mut core, 0);

    assert!(core.generate_range(5, 3).is_err());
    assert_eq!(core.entries.labels(), vec!["Alice"]);
    assert_eq!(core.selected_label().as_deref(), Some("Alice"));
}

#[test]
fn seed_replaces_and_clears_selection() {
    let mut core = named_wheel(&["Alice"]);
    settle_on(&mut core, 0);

    core.seed(palette_entries());
    assert_eq!(core.entries.len(), PALETTE.len());
    assert_eq!(core.selected_label(), None);
}

// =============================================================
// Spin flow
// =============================================================

#[test]
fn begin_spin_on_empty_wheel_is_noop() {
    let mut core = WheelCore::new();
    assert!(core.begin_spin(0.5).is_none());
    assert_eq!(core.spin.rotation, 0.0);
}

#[test]
fn full_spin_flow_reveals_result() {
    let mut core = named_wheel(&["Alice", "Bob", "Carol"]);
    let plan = core.begin_spin(unit_for(1, 3)).unwrap();

    // Rotation moves immediately; the reveal waits for settle.
    assert_eq!(core.spin.rotation, plan.rotation);
    assert!(!core.spin.result_visible);

    assert!(core.settle(&plan));
    assert_eq!(core.selected_label().as_deref(), Some("Bob"));
    assert!(core.spin.result_visible);

    core.dismiss();
    assert!(!core.spin.result_visible);
    assert_eq!(core.selected_label().as_deref(), Some("Bob"));
}

#[test]
fn superseded_spin_cannot_overwrite_newer_result() {
    let mut core = named_wheel(&["Alice", "Bob"]);
    let stale = core.begin_spin(unit_for(0, 2)).unwrap();
    let fresh = core.begin_spin(unit_for(1, 2)).unwrap();

    assert!(core.settle(&fresh));
    assert!(!core.settle(&stale));
    assert_eq!(core.selected_label().as_deref(), Some("Bob"));
}

// =============================================================
// Slices
// =============================================================

#[test]
fn slices_reflect_registry() {
    let core = named_wheel(&["Alice", "Bob"]);
    let slices = core.slices();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].label, "Alice");
    assert_eq!(slices[1].start_deg, 180.0);
}
