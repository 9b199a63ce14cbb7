//! Percentage change between a current and a historical price.

/// Compute the percentage change from `historical` to `current`.
///
/// Returns `(current - historical) / historical * 100`.
///
/// A `historical` price of zero returns `0.0` rather than dividing by zero.
/// This deliberately reports "no change" for a price the provider filled with
/// zero; callers that can distinguish a genuinely missing observation should
/// use [`crate::performance::WindowChange::Unavailable`] instead of calling
/// this function.
pub fn change_pct(current: f64, historical: f64) -> f64 {
    if historical == 0.0 {
        return 0.0;
    }
    (current - historical) / historical * 100.0
}
