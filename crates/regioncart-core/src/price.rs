//! # Price Helpers
//!
//! Prices are plain `f64` amounts in the region's own currency. There is no
//! conversion between regions and no minor-unit arithmetic: the catalog
//! publishes whole amounts and unavailability is part of the value space.
//!
//! ## Display
//! ```text
//! format_amount(1234.6)   → "1,235"
//! format_amount(-50.2)    → "50"      (sign is shown by the caller)
//! format_amount(NaN)      → "∞"
//! ```

/// Returns the price, or `+∞` when it is unavailable.
///
/// Sorting by this value puts unavailable items last.
///
/// ## Example
/// ```rust
/// use regioncart_core::price::normalize_price;
///
/// assert_eq!(normalize_price(Some(4.0)), 4.0);
/// assert_eq!(normalize_price(None), f64::INFINITY);
/// assert_eq!(normalize_price(Some(f64::NAN)), f64::INFINITY);
/// ```
pub fn normalize_price(price: Option<f64>) -> f64 {
    match price {
        Some(p) if p.is_finite() => p,
        _ => f64::INFINITY,
    }
}

/// Formats the magnitude of `value` rounded to whole units with `,`
/// thousands separators.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "∞".to_string();
    }

    let digits = format!("{:.0}", value.abs().round());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1234.6), "1,235");
        assert_eq!(format_amount(-1234567.0), "1,234,567");
        assert_eq!(format_amount(0.4), "0");
        assert_eq!(format_amount(f64::NAN), "∞");
    }

    #[test]
    fn test_normalize_orders_unavailable_last() {
        let mut prices = vec![Some(3.0), None, Some(1.0)];
        prices.sort_by(|a, b| normalize_price(*a).total_cmp(&normalize_price(*b)));
        assert_eq!(prices, vec![Some(1.0), Some(3.0), None]);
    }
}
