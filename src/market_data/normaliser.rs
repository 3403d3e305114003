// Convert between decimal wire/display strings and integer micro-units.
// Exact in both directions: excess precision is rejected, never rounded.

use thiserror::Error;

use crate::engine::types::PRICE_SCALE;

/// Fractional digits carried by a micro-unit.
pub const MICRO_DECIMALS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormaliseError {
    #[error("invalid decimal amount: {0:?}")]
    Invalid(String),
    #[error("amount {0:?} has more than 6 fractional digits")]
    Precision(String),
    #[error("amount {0:?} does not fit in micro-units")]
    Overflow(String),
}

pub fn parse_micros(s: &str) -> Result<i64, NormaliseError> {
    let trimmed = s.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (integer_part, decimal_part) = match unsigned.find('.') {
        Some(dot_pos) => (&unsigned[..dot_pos], &unsigned[dot_pos + 1..]),
        None => (unsigned, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let no_digits = integer_part.is_empty() && decimal_part.is_empty();
    if no_digits || !all_digits(integer_part) || !all_digits(decimal_part) {
        return Err(NormaliseError::Invalid(s.to_string()));
    }
    if decimal_part.len() > MICRO_DECIMALS {
        return Err(NormaliseError::Precision(s.to_string()));
    }

    // Pad the fraction out to the full scale, e.g. "65" -> "650000"
    let padded = format!("{:0<width$}", decimal_part, width = MICRO_DECIMALS);

    let overflow = || NormaliseError::Overflow(s.to_string());
    let mut magnitude: i128 = 0;
    for b in integer_part.bytes().chain(padded.bytes()) {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(i128::from(b - b'0')))
            .ok_or_else(overflow)?;
    }

    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).map_err(|_| overflow())
}

pub fn format_micros(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let scale = PRICE_SCALE as u64;
    format!("{}{}.{:0width$}", sign, magnitude / scale, magnitude % scale, width = MICRO_DECIMALS)
}
