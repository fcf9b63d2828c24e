//! Field-element conversion: decimal input to `0x`-prefixed hexadecimal.
//!
//! The proving toolchain serializes field elements as decimal strings; the
//! verifier entry point expects them as hexadecimal integers. Values are
//! ~254-bit, so conversion goes through [`BigUint`] end to end.

use num_bigint::BigUint;
use serde_json::Value;

use crate::encode::EncodeError;

/// Convert a non-negative decimal integer string to minimal lowercase hex.
///
/// `"0"` encodes as `"0x0"`; no leading zero padding beyond what the value
/// requires (`"255"` → `"0xff"`).
pub fn decimal_to_hex(decimal: &str) -> Option<String> {
    let value: BigUint = decimal.parse().ok()?;
    Some(format!("0x{}", value.to_str_radix(16)))
}

/// Convert a single proof leaf to hex, naming the coordinate on failure.
///
/// Accepts decimal strings and non-negative JSON integers. Anything else
/// (negative, fractional, non-numeric) is an invalid field element.
pub fn leaf_to_hex(leaf: &Value, path: &str) -> Result<String, EncodeError> {
    let invalid = || EncodeError::InvalidFieldElement {
        path: path.to_string(),
        value: leaf.to_string(),
    };

    match leaf {
        Value::String(decimal) => decimal_to_hex(decimal).ok_or_else(invalid),
        Value::Number(number) => {
            let integer = number.as_u64().ok_or_else(invalid)?;
            Ok(format!("0x{:x}", integer))
        }
        _ => Err(invalid()),
    }
}
