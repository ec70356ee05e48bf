/// Per-night price for a stay, rounded to whole currency units.
///
/// `nights` below one are treated as a single night.
pub fn nightly_price(total: f64, nights: u32) -> i64 {
    (total / f64::from(nights.max(1))).round() as i64
}

/// Total stay price rounded to whole currency units.
pub fn total_price(total: f64) -> i64 {
    total.round() as i64
}
