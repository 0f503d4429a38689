//! 20-byte address parsing and formatting shared by tokens and converters.

use crate::TypeError;

/// Width of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Parse a `0x`-prefixed (or bare) 40-digit hex string into address bytes.
pub fn parse_address(s: &str) -> Result<[u8; ADDRESS_LEN], TypeError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() != ADDRESS_LEN * 2 {
        return Err(TypeError::InvalidAddress(format!(
            "{s}: expected {} hex digits, got {}",
            ADDRESS_LEN * 2,
            digits.len()
        )));
    }
    let mut bytes = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| TypeError::InvalidAddress(format!("{s}: {e}")))?;
    Ok(bytes)
}

/// Lowercase `0x`-prefixed hex form of an address.
pub fn format_address(bytes: &[u8; ADDRESS_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}
