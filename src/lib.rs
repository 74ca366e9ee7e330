//! `csv-query` reads a delimited text file into an in-memory [`types::DataSet`], optionally keeps
//! the rows matching one condition, optionally orders them by one column, and optionally reduces
//! a column to a single value. The result is rendered as a grid table.
//!
//! ## Pipeline
//!
//! ```text
//! ingest → filter → order → aggregate → render
//! ```
//!
//! - **filter** (`--where`): `column=literal` (exact text), `column>number`, `column<number`.
//!   Operators are searched in the order `>`, `<`, `=`.
//! - **order** (`--order-by`): `column=desc` sorts descending, any other direction ascending.
//!   Cells that are digits with at most one `.` sort numerically, everything else sorts as
//!   text. The sort is stable.
//! - **aggregate** (`--aggregate`): `column=avg`, `column=min` or `column=max`.
//!
//! Stage failures never abort the run: [`execution::Pipeline`] reports them to an
//! [`execution::ExecutionObserver`] and carries on with the rows the stage was given. Only
//! reading the input file is fatal.
//!
//! ## Example
//!
//! ```rust
//! use csv_query::execution::{Pipeline, PipelineOptions};
//! use csv_query::render::render_output;
//! use csv_query::types::{DataSet, Schema};
//!
//! let ds = DataSet::new(
//!     Schema::new(["brand", "price"]),
//!     vec![
//!         vec!["apple".into(), "999".into()],
//!         vec!["samsung".into(), "1199".into()],
//!         vec!["xiaomi".into(), "199".into()],
//!         vec!["xiaomi".into(), "299".into()],
//!     ],
//! );
//!
//! let opts = PipelineOptions {
//!     aggregate: Some("price=avg".to_string()),
//!     ..Default::default()
//! };
//! let outcome = Pipeline::new(opts).run(ds);
//! let table = render_output(outcome.output.as_ref().unwrap());
//! assert!(table.contains("| 674 |"));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV reading
//! - [`types`]: schema + in-memory dataset types
//! - [`processing`]: the filter/order/aggregate stages
//! - [`execution`]: runs the stages in order and contains their failures
//! - [`render`]: grid table output
//! - [`error`]: error types

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod processing;
pub mod render;
pub mod types;

pub use error::{IngestionError, IngestionResult, ProcessingError, ProcessingResult};
