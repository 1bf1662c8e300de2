//! # Validation Module
//!
//! Coercion and clamping helpers shared by the cart sanitizer, the cart
//! operations and the finance summary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Untrusted Input Sources                            │
//! │                                                                         │
//! │  Persisted record (hand-edited, stale, corrupt)                        │
//! │  UI input (NaN, ±∞, fractions, negatives)                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  coerce_number()  ── any JSON value  → f64 (NaN when meaningless)      │
//! │  clamp_count()    ── any f64         → 0..=u32::MAX (floor, ≥ 0)       │
//! │  parse_item_id()  ── object key      → finite integer or None          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Strongly typed CartState (quantities ≥ 1, integer ids)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in here returns an error: bad input degrades to `NaN`, `0` or
//! `None` and the caller decides what that means.

use serde_json::Value;

use crate::types::ItemId;

/// Parses text the way a loosely typed number conversion does.
///
/// - surrounding whitespace is ignored
/// - empty (or all-whitespace) text is `0`
/// - `0x`, `0o` and `0b` prefixes select hex, octal and binary
/// - anything else unparsable is `NaN`
///
/// ## Example
/// ```rust
/// use regioncart_core::validation::parse_number;
///
/// assert_eq!(parse_number(" 42 "), 42.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("0x10"), 16.0);
/// assert!(parse_number("12abc").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&text[2..], radix);
    }

    // Rust accepts "inf"/"nan" spellings that loose conversion does not;
    // only "Infinity" is recognised there.
    let lowered = text.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if lowered.starts_with("inf") || lowered.starts_with("nan") {
        return match text.trim_start_matches('+') {
            "Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            _ => f64::NAN,
        };
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits only: no sign, no separators, at least one digit.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0f64, |acc, ch| {
            ch.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Converts an arbitrary JSON value to a number.
///
/// | Value                   | Result                         |
/// |-------------------------|--------------------------------|
/// | number                  | itself                         |
/// | string                  | [`parse_number`]               |
/// | `true` / `false`        | `1` / `0`                      |
/// | `null`                  | `0`                            |
/// | `[]`                    | `0`                            |
/// | `[x]` (number/string)   | conversion of `x`              |
/// | other arrays, objects   | `NaN`                          |
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single @ (Value::Number(_) | Value::String(_))] => coerce_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// Parses a cart key into an item id.
///
/// Returns `None` unless the key converts to a finite integer that fits
/// an [`ItemId`]. Integers beyond the `i64` range (`"1e20"`) are rejected
/// like any other invalid key.
pub fn parse_item_id(key: &str) -> Option<ItemId> {
    let id = parse_number(key);
    if !is_finite_integer(id) || id < ItemId::MIN as f64 || id > ItemId::MAX as f64 {
        return None;
    }
    Some(id as ItemId)
}

/// Returns true for finite numbers without a fractional part.
pub fn is_finite_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Turns any number into a storable quantity.
///
/// Non-finite input is `0`; otherwise the value is floored and clamped to
/// `0..=u32::MAX`.
///
/// ## Example
/// ```rust
/// use regioncart_core::validation::clamp_count;
///
/// assert_eq!(clamp_count(2.9), 2);
/// assert_eq!(clamp_count(-4.0), 0);
/// assert_eq!(clamp_count(f64::NAN), 0);
/// ```
pub fn clamp_count(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    // `as` saturates at the integer bounds
    value.floor().max(0.0) as u32
}

/// Returns `value` when finite, otherwise `0`.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
