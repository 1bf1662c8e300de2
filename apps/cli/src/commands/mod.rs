//! # CLI Commands
//!
//! One module per subcommand group. Handlers take the loaded stores, the
//! catalog when they need prices, and the writer to print to, so they can be
//! driven from tests with in-memory storage and a `Vec<u8>`.
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (shared output helpers)
//! ├── cart.rs     ◄─── cart show / set / add / remove / clear
//! ├── balance.rs  ◄─── balance show / set / adjust
//! ├── region.rs   ◄─── region show / set / list
//! ├── catalog.rs  ◄─── filtered, price-sorted listing
//! └── summary.rs  ◄─── breakdown and finance totals
//! ```

pub mod balance;
pub mod cart;
pub mod catalog;
pub mod region;
pub mod summary;

use std::io::Write;

use regioncart_core::price::format_amount;
use serde::Serialize;

use crate::error::AppResult;

/// Pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Like `format_amount`, with a leading `-` for negative values.
pub(crate) fn signed_amount(value: f64) -> String {
    if value < 0.0 && value.round() != 0.0 {
        format!("-{}", format_amount(value))
    } else {
        format_amount(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amount() {
        assert_eq!(signed_amount(1500.0), "1,500");
        assert_eq!(signed_amount(-1500.0), "-1,500");
        assert_eq!(signed_amount(-0.2), "0");
        assert_eq!(signed_amount(f64::INFINITY), "∞");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &[1, 2]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  1,\n  2\n]\n");
    }
}
