//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`], which reads a comma-delimited file with a
//! header row into an in-memory [`crate::types::DataSet`]. The reader functions it builds on live
//! in [`csv`].

pub mod csv;

use std::fs::File;
use std::path::Path;

use crate::error::IngestionResult;
use crate::types::DataSet;

/// Read a comma-delimited file into a [`DataSet`].
///
/// Failing to open the file is an [`crate::IngestionError::Io`]; malformed content is a
/// [`crate::IngestionError::Csv`] or [`crate::IngestionError::SchemaMismatch`]. The file is
/// closed before this function returns, on success and on error alike.
///
/// ```no_run
/// use csv_query::ingestion::ingest_from_path;
///
/// # fn main() -> Result<(), csv_query::IngestionError> {
/// let ds = ingest_from_path("phones.csv")?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut rdr = self::csv::reader_builder().from_reader(file);
    let ds = self::csv::ingest_csv_from_reader(&mut rdr)?;

    tracing::debug!(
        path = %path.display(),
        rows = ds.row_count(),
        columns = ds.schema.len(),
        "ingested csv"
    );
    Ok(ds)
}
