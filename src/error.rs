use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for processing stages.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by ingestion functions.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structure error (ragged rows, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row is unusable (empty, duplicate column names).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

/// Error type returned by the filter, order and aggregate stages.
///
/// Stages never print; the caller decides how to report these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    /// A stage referenced a column that is not in the schema.
    #[error("unknown column '{column}'")]
    MissingColumn { column: String },

    /// A value that had to be compared or reduced numerically is not a number.
    #[error("could not convert '{raw}' to a number")]
    NotNumeric { raw: String },

    /// The filter condition contains none of `>`, `<`, `=`.
    #[error("invalid filter condition '{condition}'")]
    InvalidCondition { condition: String },

    /// The order-by text is not of the form `column=direction`.
    #[error("expected 'column=direction', got '{spec}'")]
    InvalidOrderSpec { spec: String },

    /// The aggregate text is not of the form `column=operator`.
    #[error("expected 'column=operator', got '{spec}'")]
    InvalidAggregateSpec { spec: String },

    /// The aggregate operator is not one of `avg`, `min`, `max`.
    #[error("unsupported aggregation operator '{op}'")]
    UnsupportedAggregate { op: String },

    /// A sort column holds both numeric and textual keys.
    #[error("column '{column}' mixes numeric and text values")]
    MixedSortKeys { column: String },

    /// Aggregation over zero rows.
    #[error("no values to aggregate in column '{column}'")]
    EmptyAggregate { column: String },
}
