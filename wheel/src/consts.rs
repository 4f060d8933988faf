//! Shared numeric constants for the wheel crate.

// ── Spin ────────────────────────────────────────────────────────

/// Full revolutions added to every spin so the wheel visibly whirls before
/// settling.
pub const FULL_SPINS: f64 = 5.0;

/// Wall-clock delay before the result is revealed, in milliseconds. Must
/// match the CSS transition duration on the wheel disc; the reveal and the
/// visual settling are only approximately synchronized.
pub const SPIN_DURATION_MS: u64 = 2000;

// ── Registry ────────────────────────────────────────────────────

/// Upper bound on the number of entries a generated numeric range may
/// produce.
pub const MAX_RANGE_LEN: usize = 1000;

/// Largest value accepted by the numeric range inputs.
pub const RANGE_INPUT_MAX: i64 = 100;

// ── Rendering ───────────────────────────────────────────────────

/// Width and height of the square wheel canvas, in CSS pixels.
pub const WHEEL_SIZE_PX: f64 = 300.0;

/// Gap between a label's right edge and the wheel rim, in pixels.
pub const LABEL_INSET_PX: f64 = 10.0;

/// Label font size in pixels.
pub const LABEL_FONT_PX: f64 = 14.0;
