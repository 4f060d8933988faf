//! Live-validated state for the numeric range form.

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

use wheel::consts::RANGE_INPUT_MAX;
use wheel::entries::{RangeError, parse_range};

/// Raw text of the min/max fields on the numbers page.
///
/// Field setters reject text that is neither empty nor an integer within
/// `0..=RANGE_INPUT_MAX`, mirroring the bounded number inputs. Validation
/// is live: messages appear while typing, and the generate action stays
/// disabled until the form is ready.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeForm {
    pub min: String,
    pub max: String,
}

impl RangeForm {
    /// Whether `raw` may be committed to a field.
    fn accepts(raw: &str) -> bool {
        raw.is_empty()
            || raw
                .trim()
                .parse::<i64>()
                .is_ok_and(|value| (0..=RANGE_INPUT_MAX).contains(&value))
    }

    /// Commit new min-field text. Returns whether the text was accepted.
    pub fn set_min(&mut self, raw: String) -> bool {
        if Self::accepts(&raw) {
            self.min = raw;
            true
        } else {
            false
        }
    }

    /// Commit new max-field text. Returns whether the text was accepted.
    pub fn set_max(&mut self, raw: String) -> bool {
        if Self::accepts(&raw) {
            self.max = raw;
            true
        } else {
            false
        }
    }

    /// Parsed bounds for generation.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NotANumber`] when either field is empty or not
    /// a whole number.
    pub fn bounds(&self) -> Result<(i64, i64), RangeError> {
        parse_range(&self.min, &self.max)
    }

    /// Validation message shown while typing, if any.
    #[must_use]
    pub fn live_error(&self) -> Option<&'static str> {
        let Ok((min, max)) = self.bounds() else {
            return None;
        };
        if min > max {
            Some("Min cannot be greater than Max.")
        } else if min == max {
            Some("Min and Max cannot be the same.")
        } else {
            None
        }
    }

    /// Whether the generate action is enabled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.bounds(), Ok((min, max)) if min >= 0 && min < max)
    }
}
