use std::num::IntErrorKind;

use crate::core::scan;
use crate::domain::model::{Index, Real};
use crate::utils::error::{ParseError, Result};

/// Converts the leading real-number literal of `s` to a `Real`.
///
/// Leading whitespace is skipped and trailing unparsed characters are
/// ignored. Fails with `InvalidFormat` when `s` holds no real literal, and
/// with `OutOfRange` when the literal's magnitude exceeds the `Real` range.
pub fn to_real(s: &str) -> Result<Real> {
    let literal = scan::real_prefix(s).ok_or_else(|| {
        tracing::debug!("No real literal in input: {:?}", s);
        ParseError::InvalidFormat {
            input: s.to_string(),
        }
    })?;

    let value: Real = literal.parse().map_err(|_| ParseError::InvalidFormat {
        input: s.to_string(),
    })?;

    // A digit-bearing literal that parses to an infinity overflowed the
    // type; an explicit inf/infinity literal is a valid infinity.
    if value.is_infinite() && literal.bytes().any(|b| b.is_ascii_digit()) {
        tracing::debug!("Real literal out of range: {:?}", literal);
        return Err(ParseError::OutOfRange {
            value: literal.to_string(),
            target: "Real",
        });
    }

    Ok(value)
}

/// Converts the leading base-10 integer literal of `s` to an `Index`.
///
/// Leading whitespace is skipped and trailing unparsed characters are
/// ignored. Fails with `InvalidFormat` when `s` holds no integer literal,
/// and with `OutOfRange` when the literal exceeds the `Index` range.
pub fn to_index(s: &str) -> Result<Index> {
    let literal = scan::index_prefix(s).ok_or_else(|| {
        tracing::debug!("No integer literal in input: {:?}", s);
        ParseError::InvalidFormat {
            input: s.to_string(),
        }
    })?;

    literal.parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                tracing::debug!("Integer literal out of range: {:?}", literal);
                ParseError::OutOfRange {
                    value: literal.to_string(),
                    target: "Index",
                }
            }
            _ => ParseError::InvalidFormat {
                input: s.to_string(),
            },
        }
    })
}
