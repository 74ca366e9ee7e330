//! Column aggregation for [`crate::types::DataSet`].

use std::fmt;
use std::str::FromStr;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::DataSet;

use super::value::parse_number;

/// Built-in aggregation operations over a single numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Arithmetic mean (`avg`).
    Average,
    /// Smallest value (`min`).
    Minimum,
    /// Largest value (`max`).
    Maximum,
}

impl AggregateOp {
    /// The operator as written on the command line; also used as the result column header.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateOp::Average => "avg",
            AggregateOp::Minimum => "min",
            AggregateOp::Maximum => "max",
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateOp {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(AggregateOp::Average),
            "min" => Ok(AggregateOp::Minimum),
            "max" => Ok(AggregateOp::Maximum),
            other => Err(ProcessingError::UnsupportedAggregate {
                op: other.to_owned(),
            }),
        }
    }
}

/// A parsed `column=operator` aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub column: String,
    pub op: AggregateOp,
}

impl AggregateSpec {
    pub fn parse(text: &str) -> ProcessingResult<Self> {
        let mut parts = text.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(column), Some(op), None) => Ok(Self {
                column: column.to_owned(),
                op: op.parse()?,
            }),
            _ => Err(ProcessingError::InvalidAggregateSpec {
                spec: text.to_owned(),
            }),
        }
    }
}

/// Result of a successful aggregation: one header, one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub op: AggregateOp,
    pub value: f64,
}

/// What the final stage hands to presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// No aggregation requested: render every row and column.
    Table(DataSet),
    /// A single aggregated value.
    Scalar(Scalar),
}

/// Final pipeline stage: aggregate if `spec` is given, otherwise pass the whole dataset on.
pub fn summarize(dataset: DataSet, spec: Option<&str>) -> ProcessingResult<Output> {
    match spec.filter(|s| !s.is_empty()) {
        None => Ok(Output::Table(dataset)),
        Some(text) => {
            let spec = AggregateSpec::parse(text)?;
            aggregate(&dataset, &spec).map(Output::Scalar)
        }
    }
}

/// Reduce a column to a single value.
///
/// Every cell of the column must parse as a number, and `nan` does not. An empty dataset is an
/// error for every operator rather than a NaN or infinite result.
pub fn aggregate(dataset: &DataSet, spec: &AggregateSpec) -> ProcessingResult<Scalar> {
    let values = dataset
        .column(&spec.column)?
        .into_iter()
        .map(parse_number)
        .collect::<ProcessingResult<Vec<f64>>>()?;

    if values.is_empty() {
        return Err(ProcessingError::EmptyAggregate {
            column: spec.column.clone(),
        });
    }

    let value = match spec.op {
        AggregateOp::Average => values.iter().sum::<f64>() / values.len() as f64,
        AggregateOp::Minimum => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregateOp::Maximum => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    Ok(Scalar { op: spec.op, value })
}
