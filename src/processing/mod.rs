//! In-memory row processing.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion. Each
//! stage is a pure function: it borrows its input and returns a new dataset (or scalar), or a
//! [`crate::error::ProcessingError`] describing why it could not.
//!
//! - [`filter()`]: keep rows matching a single `column<op>literal` condition
//! - [`order()`]: stable sort by one column, numeric-aware
//! - [`summarize()`] / [`aggregate()`]: reduce a column to `avg`/`min`/`max`
//!
//! ## Example: filter → order → aggregate
//!
//! ```rust
//! use csv_query::processing::{filter, order, summarize, Output};
//! use csv_query::types::{DataSet, Schema};
//!
//! let ds = DataSet::new(
//!     Schema::new(["brand", "price"]),
//!     vec![
//!         vec!["apple".into(), "999".into()],
//!         vec!["xiaomi".into(), "199".into()],
//!         vec!["xiaomi".into(), "299".into()],
//!     ],
//! );
//!
//! let filtered = filter(&ds, Some("brand=xiaomi")).unwrap();
//! let ordered = order(&filtered, Some("price=desc")).unwrap();
//! assert_eq!(ordered.column("price").unwrap(), vec!["299", "199"]);
//!
//! match summarize(ordered, Some("price=avg")).unwrap() {
//!     Output::Scalar(s) => assert_eq!(s.value, 249.0),
//!     Output::Table(_) => unreachable!(),
//! }
//! ```

pub mod aggregate;
pub mod filter;
pub mod order;
pub mod value;

pub use aggregate::{aggregate, summarize, AggregateOp, AggregateSpec, Output, Scalar};
pub use filter::{filter, CompareOp, Condition};
pub use order::{order, Direction, OrderSpec};
pub use value::{parse_number, SortKey};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::{DataSet, Schema};

    pub fn phones() -> DataSet {
        let rows = [
            ["iphone 15 pro", "apple", "999", "4.9"],
            ["galaxy s23 ultra", "samsung", "1199", "4.8"],
            ["redmi note 12", "xiaomi", "199", "4.6"],
            ["poco x5 pro", "xiaomi", "299", "4.4"],
        ];
        DataSet::new(
            Schema::new(["name", "brand", "price", "rating"]),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }
}
