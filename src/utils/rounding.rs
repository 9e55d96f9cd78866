//! Decimal rounding with an explicit threshold on the fractional part.

/// Rounds `val` to `places` decimals.
///
/// The scaled value is rounded up when its fractional part is at least
/// `round_on` and down otherwise, so `round(x, 0.5, 1)` is half-up at the
/// tenths digit.
pub fn round(val: f64, round_on: f64, places: i32) -> f64 {
    let pow = 10f64.powi(places);
    let digit = pow * val;
    let rounded = if digit.fract() >= round_on {
        digit.ceil()
    } else {
        digit.floor()
    };
    rounded / pow
}
