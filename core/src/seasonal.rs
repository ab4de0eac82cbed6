//! Seasonal demand multiplier.

/// Ticket volume multiplier for a calendar month (1 = January).
/// Winter peaks, summer runs slightly high, April and September are
/// holiday troughs. Any other input maps to the neutral 1.0.
pub fn seasonal_factor(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => 1.30,
        6..=8 => 1.15,
        4 | 9 => 0.80,
        _ => 1.00,
    }
}
