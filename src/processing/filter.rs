//! Row filtering for [`crate::types::DataSet`].

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::DataSet;

use super::value::parse_number;

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `>`: numeric greater-than.
    GreaterThan,
    /// `<`: numeric less-than.
    LessThan,
    /// `=`: exact text equality.
    Equals,
}

impl CompareOp {
    /// Operators in the order they are searched for.
    const PRIORITY: [(char, CompareOp); 3] = [
        ('>', CompareOp::GreaterThan),
        ('<', CompareOp::LessThan),
        ('=', CompareOp::Equals),
    ];
}

/// A parsed single-column condition such as `price<300`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub op: CompareOp,
    pub literal: String,
}

impl Condition {
    /// Parse `column<op><literal>`.
    ///
    /// `>` is looked for first, then `<`, then `=`; the text is split at the first occurrence of
    /// the first operator found. So `a>=3` is `a > "=3"`, which then fails numeric parsing.
    pub fn parse(text: &str) -> ProcessingResult<Self> {
        for (symbol, op) in CompareOp::PRIORITY {
            if let Some((column, literal)) = text.split_once(symbol) {
                return Ok(Self {
                    column: column.to_owned(),
                    op,
                    literal: literal.to_owned(),
                });
            }
        }
        Err(ProcessingError::InvalidCondition {
            condition: text.to_owned(),
        })
    }
}

/// Returns a new [`DataSet`] containing only rows that satisfy `condition`.
///
/// - `None` or an empty condition returns the input unchanged.
/// - `=` compares text exactly; `>`/`<` parse both sides as numbers.
/// - Any error (no operator, missing column, non-numeric value) aborts the whole filter.
pub fn filter(dataset: &DataSet, condition: Option<&str>) -> ProcessingResult<DataSet> {
    let Some(text) = condition.filter(|c| !c.is_empty()) else {
        return Ok(dataset.clone());
    };
    let cond = Condition::parse(text)?;
    filter_by(dataset, &cond)
}

/// Apply an already-parsed [`Condition`].
pub fn filter_by(dataset: &DataSet, cond: &Condition) -> ProcessingResult<DataSet> {
    dataset.schema.require(&cond.column)?;
    match cond.op {
        CompareOp::Equals => dataset.try_filter_rows(|rec| Ok(rec.get(&cond.column)? == cond.literal)),
        CompareOp::GreaterThan | CompareOp::LessThan => {
            let rhs = parse_number(&cond.literal)?;
            dataset.try_filter_rows(|rec| {
                let lhs = parse_number(rec.get(&cond.column)?)?;
                Ok(match cond.op {
                    CompareOp::GreaterThan => lhs > rhs,
                    _ => lhs < rhs,
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{filter, CompareOp, Condition};
    use crate::error::ProcessingError;
    use crate::processing::test_support::phones;

    fn names(ds: &crate::types::DataSet) -> Vec<&str> {
        ds.column("name").unwrap()
    }

    #[test]
    fn parse_prefers_greater_than_over_equals() {
        let c = Condition::parse("a>=3").unwrap();
        assert_eq!(c.op, CompareOp::GreaterThan);
        assert_eq!(c.column, "a");
        assert_eq!(c.literal, "=3");

        let c = Condition::parse("a<b>c").unwrap();
        assert_eq!(c.op, CompareOp::GreaterThan);
        assert_eq!(c.column, "a<b");

        let c = Condition::parse("note=x=y").unwrap();
        assert_eq!(c.op, CompareOp::Equals);
        assert_eq!(c.literal, "x=y");
    }

    #[test]
    fn filter_equal() {
        let ds = phones();
        let out = filter(&ds, Some("brand=apple")).unwrap();
        assert_eq!(out.row_count(), 1);
        assert_eq!(names(&out), vec!["iphone 15 pro"]);
    }

    #[test]
    fn filter_equal_is_textual() {
        let ds = phones();
        // "999.0" is numerically equal to "999" but not textually.
        assert_eq!(filter(&ds, Some("price=999.0")).unwrap().row_count(), 0);
        assert_eq!(filter(&ds, Some("price=999")).unwrap().row_count(), 1);
    }

    #[test]
    fn filter_greater_than() {
        let out = filter(&phones(), Some("rating>4.7")).unwrap();
        assert_eq!(out.row_count(), 2);
        assert_eq!(names(&out), vec!["iphone 15 pro", "galaxy s23 ultra"]);
    }

    #[test]
    fn filter_less_than_preserves_order() {
        let out = filter(&phones(), Some("price<300")).unwrap();
        assert_eq!(names(&out), vec!["redmi note 12", "poco x5 pro"]);
    }

    #[test]
    fn filter_none_or_empty_is_identity() {
        let ds = phones();
        assert_eq!(filter(&ds, None).unwrap(), ds);
        assert_eq!(filter(&ds, Some("")).unwrap(), ds);
    }

    #[test]
    fn filter_invalid_operator() {
        let err = filter(&phones(), Some("rating!4.5")).unwrap_err();
        assert_eq!(
            err,
            ProcessingError::InvalidCondition {
                condition: "rating!4.5".to_string()
            }
        );
    }

    #[test]
    fn filter_numeric_on_text_column_fails() {
        let err = filter(&phones(), Some("brand>3")).unwrap_err();
        assert_eq!(
            err,
            ProcessingError::NotNumeric {
                raw: "apple".to_string()
            }
        );
        let err = filter(&phones(), Some("price>cheap")).unwrap_err();
        assert!(matches!(err, ProcessingError::NotNumeric { .. }));
    }

    #[test]
    fn filter_missing_column_fails() {
        let err = filter(&phones(), Some("color=red")).unwrap_err();
        assert!(matches!(err, ProcessingError::MissingColumn { .. }));
    }
}
