//! CSV ingestion implementation.

use std::collections::HashSet;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, Schema};

/// Ingest CSV data from an existing CSV reader.
///
/// Rules:
///
/// - The reader must be configured with `has_headers(true)`; the header row names every column.
/// - Every record must have exactly as many fields as the header.
/// - Values are kept as raw text, surrounding whitespace included.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();
    let schema = schema_from_headers(&headers)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(DataSet::new(schema, rows))
}

/// Reader configuration used by [`super::ingest_from_path`]: comma-delimited, header row
/// required, ragged rows rejected.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(false);
    builder
}

fn schema_from_headers(headers: &csv::StringRecord) -> IngestionResult<Schema> {
    if headers.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "missing header row".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(headers.len());
    for h in headers.iter() {
        if !seen.insert(h) {
            return Err(IngestionError::SchemaMismatch {
                message: format!(
                    "duplicate column '{h}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            });
        }
    }

    Ok(Schema::new(headers.iter()))
}
