//! Row ordering for [`crate::types::DataSet`].

use std::cmp::Ordering;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::DataSet;

use super::value::SortKey;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A parsed `column=direction` ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub column: String,
    pub direction: Direction,
}

impl OrderSpec {
    /// Parse `column=direction`. Only the exact text `desc` sorts descending.
    pub fn parse(text: &str) -> ProcessingResult<Self> {
        let mut parts = text.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(column), Some(direction), None) => Ok(Self {
                column: column.to_owned(),
                direction: if direction == "desc" {
                    Direction::Descending
                } else {
                    Direction::Ascending
                },
            }),
            _ => Err(ProcessingError::InvalidOrderSpec {
                spec: text.to_owned(),
            }),
        }
    }
}

/// Returns a new [`DataSet`] sorted by the column named in `order_by`.
///
/// - `None` or an empty spec returns the input unchanged.
/// - The sort is stable in both directions: equal keys keep their input order.
/// - Errors (bad spec, missing column, a column mixing numbers and text) leave the caller's
///   dataset untouched; it is up to the caller to fall back to it.
pub fn order(dataset: &DataSet, order_by: Option<&str>) -> ProcessingResult<DataSet> {
    let Some(text) = order_by.filter(|o| !o.is_empty()) else {
        return Ok(dataset.clone());
    };
    let spec = OrderSpec::parse(text)?;
    order_by_spec(dataset, &spec)
}

/// Apply an already-parsed [`OrderSpec`].
pub fn order_by_spec(dataset: &DataSet, spec: &OrderSpec) -> ProcessingResult<DataSet> {
    let keys: Vec<SortKey<'_>> = dataset
        .column(&spec.column)?
        .into_iter()
        .map(SortKey::classify)
        .collect();

    let numeric = keys.iter().filter(|k| k.is_number()).count();
    if numeric != 0 && numeric != keys.len() {
        return Err(ProcessingError::MixedSortKeys {
            column: spec.column.clone(),
        });
    }

    let mut indices: Vec<usize> = (0..keys.len()).collect();
    indices.sort_by(|&a, &b| {
        let ord = keys[a].compare(&keys[b]).unwrap_or(Ordering::Equal);
        match spec.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });

    Ok(dataset.select_rows(&indices))
}
