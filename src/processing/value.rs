//! Text-to-number coercion shared by the processing stages.

use std::cmp::Ordering;

use crate::error::{ProcessingError, ProcessingResult};

/// Parse a cell or literal as a floating point number.
///
/// Surrounding whitespace is ignored. Anything `f64::from_str` accepts is a number, including
/// exponents (`1e3`), signed values and infinities. `nan` is rejected: it has no place in an
/// ordering, so comparisons and `min`/`max` could not give a meaningful answer.
pub fn parse_number(raw: &str) -> ProcessingResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(ProcessingError::NotNumeric {
            raw: raw.to_owned(),
        }),
    }
}

/// Sort key for a single cell, decided once per cell.
///
/// A cell is [`SortKey::Number`] only if, after removing at most one `.`, it is a non-empty
/// run of ASCII digits. Signs, exponents and whitespace all make a cell [`SortKey::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> SortKey<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if looks_numeric(raw) {
            if let Ok(v) = raw.parse::<f64>() {
                return SortKey::Number(v);
            }
        }
        SortKey::Text(raw)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, SortKey::Number(_))
    }

    /// Compare two keys of the same variant. Mixed variants have no ordering.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

fn looks_numeric(raw: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for c in raw.chars() {
        match c {
            '.' if dots == 0 => dots += 1,
            c if c.is_ascii_digit() => digits += 1,
            _ => return false,
        }
    }
    digits > 0
}
