//! Small numeric helpers shared by the aggregator and the renderer.

/// Rounds to two decimal places.
///
/// Rounding works on the exact binary value, and exact halves go to even,
/// so `0.125` becomes `0.12`. Scaling by 100 first would round the
/// product instead and give `0.13`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Percentage of `part` in `whole`, rounded to two decimals.
///
/// The denominator is clamped to 1, so an empty `whole` yields `0.0`
/// instead of a NaN.
#[allow(clippy::cast_precision_loss)]
pub fn percent(part: u64, whole: u64) -> f64 {
    round2(100.0 * part as f64 / whole.max(1) as f64)
}

/// Displays a float in its shortest form, always keeping a fractional part
/// (`90.0`, `83.33`).
#[allow(clippy::float_cmp)]
pub fn format_float(value: f64) -> String {
    // -0.0 would otherwise render as "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    let text = format!("{value}");
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}
