//! Core data model types.
//!
//! Ingestion produces an in-memory [`DataSet`]: an ordered list of column names (the
//! [`Schema`]) plus row-major textual cells. Cells stay as raw text; the processing stages decide
//! per operation whether a value is compared as text or as a number.

use crate::error::{ProcessingError, ProcessingResult};

/// Ordered list of column names describing the shape of every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Column names, in file order.
    pub columns: Vec<String>,
}

impl Schema {
    /// Create a new schema from column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`Self::index_of`], but a missing column is an error.
    pub fn require(&self, name: &str) -> ProcessingResult<usize> {
        self.index_of(name)
            .ok_or_else(|| ProcessingError::MissingColumn {
                column: name.to_owned(),
            })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Borrowed view of a single row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    schema: &'a Schema,
    cells: &'a [String],
}

impl<'a> Record<'a> {
    /// Look up the cell for `column`.
    pub fn get(&self, column: &str) -> ProcessingResult<&'a str> {
        let idx = self.schema.require(column)?;
        self.cell(idx).ok_or_else(|| ProcessingError::MissingColumn {
            column: column.to_owned(),
        })
    }

    /// Cell at a positional index.
    pub fn cell(&self, idx: usize) -> Option<&'a str> {
        self.cells.get(idx).map(|c| c.as_str())
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<String>>` in the same order as the [`Schema`] columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major cell storage.
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<String>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate rows as [`Record`]s.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |cells| Record {
            schema: &self.schema,
            cells,
        })
    }

    /// Collect every cell of `column`, in row order.
    pub fn column(&self, column: &str) -> ProcessingResult<Vec<&str>> {
        let idx = self.schema.require(column)?;
        self.rows
            .iter()
            .map(|row| {
                row.get(idx)
                    .map(|c| c.as_str())
                    .ok_or_else(|| ProcessingError::MissingColumn {
                        column: column.to_owned(),
                    })
            })
            .collect()
    }

    /// Create a new dataset containing only rows for which `predicate` returns `Ok(true)`.
    ///
    /// The first predicate error aborts the whole operation; partial results are never returned.
    /// The returned dataset preserves the original schema.
    pub fn try_filter_rows<F>(&self, mut predicate: F) -> ProcessingResult<Self>
    where
        F: FnMut(Record<'_>) -> ProcessingResult<bool>,
    {
        let mut rows = Vec::new();
        for (record, row) in self.records().zip(&self.rows) {
            if predicate(record)? {
                rows.push(row.clone());
            }
        }
        Ok(Self {
            schema: self.schema.clone(),
            rows,
        })
    }

    /// Create a new dataset with rows taken from `self` in the order given by `indices`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let rows = indices.iter().map(|&i| self.rows[i].clone()).collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }
}
