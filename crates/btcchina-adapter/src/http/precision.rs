/*
[INPUT]:  Raw price/amount floats from the caller
[OUTPUT]: Values truncated to the exchange's fixed precision
[POS]:    HTTP layer - order precision handling
[UPDATE]: When the exchange changes its price/amount precision
*/

use crate::http::envelope::ParamValue;

/// Floor-based truncation to `places` decimal places.
///
/// The exchange enforces fixed-precision order books and rejects
/// over-precise values, so this truncates and never rounds up.
pub fn cut_off(value: f64, places: u32) -> f64 {
    let multiplier = 10f64.powi(places as i32);
    (value * multiplier).floor() / multiplier
}

/// Truncate and collapse to an integer param when nothing fractional
/// remains, so `cut_off(2.0, 5)` travels as `2`.
pub fn cut_off_param(value: f64, places: u32) -> ParamValue {
    ParamValue::number(cut_off(value, places))
}
