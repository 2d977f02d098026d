/// Integer division rounding toward negative infinity.
///
/// Rust's `/` on integers truncates toward zero; this adjusts the quotient
/// down by one whenever the division is inexact and the operands have
/// opposite signs.
///
/// ## Returns
/// - `Some(quotient)` on success.
/// - `None` if `rhs` is zero or the quotient overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use intcalc::util::num::checked_floor_div;
///
/// assert_eq!(checked_floor_div(7, 2), Some(3));
/// assert_eq!(checked_floor_div(-7, 2), Some(-4));
/// assert_eq!(checked_floor_div(7, -2), Some(-4));
/// assert_eq!(checked_floor_div(-7, -2), Some(3));
/// assert_eq!(checked_floor_div(-8, 2), Some(-4));
/// assert_eq!(checked_floor_div(1, 0), None);
/// assert_eq!(checked_floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn checked_floor_div(lhs: i64, rhs: i64) -> Option<i64> {
    let Some(quotient) = lhs.checked_div(rhs) else {
        return None;
    };

    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
