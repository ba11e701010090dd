//! Numeric literal decoding.

/// Why a literal could not be decoded.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LiteralError {
    TooLarge,
    Malformed,
}

/// Whether an integer literal carries the `u`/`U` suffix.
pub fn is_unsigned(text: &str) -> bool {
    text.ends_with(['u', 'U'])
}

/// Decode an integer literal: decimal, `0x` hex or leading-zero octal, with
/// an optional `u`/`U` suffix.
///
/// Unsuffixed literals must fit in `i32`, suffixed ones in `u32`.
pub fn parse_int(text: &str) -> Result<i64, LiteralError> {
    let digits = text.trim_end_matches(['u', 'U']);
    let (digits, radix) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (&digits[1..], 8)
    } else {
        (digits, 10)
    };
    if digits.is_empty() {
        return Err(LiteralError::Malformed);
    }
    let value = u32::from_str_radix(digits, radix).map_err(|err| match err.kind() {
        std::num::IntErrorKind::PosOverflow => LiteralError::TooLarge,
        _ => LiteralError::Malformed,
    })?;
    if is_unsigned(text) {
        Ok(i64::from(value))
    } else {
        i32::try_from(value)
            .map(i64::from)
            .map_err(|_| LiteralError::TooLarge)
    }
}

/// Decode a float literal with an optional `f`/`F` suffix.
pub fn parse_float(text: &str) -> Result<f64, LiteralError> {
    let digits = text.trim_end_matches(['f', 'F']);
    let value: f64 = digits.parse().map_err(|_| LiteralError::Malformed)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LiteralError::TooLarge)
    }
}

#[cfg(test)]
mod tests;
