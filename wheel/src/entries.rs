//! Entry registry: the ordered, deduplicated list of selectable entries.
//!
//! This module defines the unit that appears on a slice (`Entry`), the
//! runtime collection that owns all live entries (`EntryList`), and the
//! validation error for numeric-range generation (`RangeError`).
//!
//! Entries are identified by their display label: two entries are duplicates
//! exactly when their labels compare equal (case-sensitive). Insertion order
//! is preserved and determines slice order on the wheel.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_RANGE_LEN;

/// One selectable unit on the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Entry {
    /// Free-text name added by the user.
    Name(String),
    /// One integer from a generated numeric range.
    Number(i64),
    /// A named color from the fixed palette.
    Color(String),
}

impl Entry {
    /// The display string shown on the slice and used for duplicate checks.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Name(text) | Self::Color(text) => Cow::Borrowed(text),
            Self::Number(value) => Cow::Owned(value.to_string()),
        }
    }
}

/// Why a numeric range could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// One of the bounds is not a whole number.
    #[error("Enter whole numbers for Min and Max.")]
    NotANumber,
    /// The lower bound is negative.
    #[error("Min cannot be negative.")]
    Negative,
    /// The upper bound is below the lower bound.
    #[error("Min cannot be greater than Max.")]
    Inverted,
    /// The range would produce more entries than the registry accepts.
    #[error("Range is too large (limit is {limit} numbers).")]
    TooLarge {
        /// The configured cap on generated entries.
        limit: usize,
    },
}

/// Parse the raw min/max field text into integer bounds.
///
/// # Errors
///
/// Returns [`RangeError::NotANumber`] when either field does not parse as a
/// whole number.
pub fn parse_range(min: &str, max: &str) -> Result<(i64, i64), RangeError> {
    let min = min.trim().parse().map_err(|_| RangeError::NotANumber)?;
    let max = max.trim().parse().map_err(|_| RangeError::NotANumber)?;
    Ok((min, max))
}

/// Ordered, deduplicated collection of wheel entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless its label is empty after trimming or already
    /// present. Returns whether the entry was added.
    pub fn add(&mut self, entry: Entry) -> bool {
        let entry = match entry {
            Entry::Name(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return false;
                }
                Entry::Name(trimmed.to_owned())
            }
            other => other,
        };
        if self.contains_label(&entry.label()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove every entry whose label matches. Returns whether anything was
    /// removed; removing an absent label is a no-op.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.label() != label);
        self.entries.len() != before
    }

    /// Replace the registry with the inclusive integer sequence `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] (and leaves the registry untouched) when
    /// `min < 0`, `max < min`, or the range would exceed [`MAX_RANGE_LEN`].
    pub fn generate_range(&mut self, min: i64, max: i64) -> Result<(), RangeError> {
        if min < 0 {
            return Err(RangeError::Negative);
        }
        if max < min {
            return Err(RangeError::Inverted);
        }
        let span = max
            .checked_sub(min)
            .and_then(|d| d.checked_add(1))
            .ok_or(RangeError::TooLarge { limit: MAX_RANGE_LEN })?;
        let span = usize::try_from(span).map_err(|_| RangeError::TooLarge { limit: MAX_RANGE_LEN })?;
        if span > MAX_RANGE_LEN {
            return Err(RangeError::TooLarge { limit: MAX_RANGE_LEN });
        }
        self.entries = (min..=max).map(Entry::Number).collect();
        Ok(())
    }

    /// Replace all entries wholesale, deduplicating by label.
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries.clear();
        for entry in entries {
            self.add(entry);
        }
    }

    /// Whether an entry with this label is present.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.entries.iter().any(|entry| entry.label() == label)
    }

    /// Display labels in wheel order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.label().into_owned())
            .collect()
    }

    /// Return the entry at `index` in wheel order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Iterate entries in wheel order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of entries currently on the wheel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the wheel has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
