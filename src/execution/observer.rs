use std::fmt;
use std::time::Duration;

use crate::error::ProcessingError;
use crate::processing::Scalar;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Filter,
    Order,
    Aggregate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Filter => "filter",
            Stage::Order => "order",
            Stage::Aggregate => "aggregate",
        })
    }
}

/// Execution events emitted by the pipeline.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted { rows: usize },
    /// The stage had no spec and passed its input through.
    StageSkipped { stage: Stage },
    StageFinished { stage: Stage, rows: usize },
    /// The stage failed; filter and order fall back to their input, aggregate produces nothing.
    StageFailed { stage: Stage, error: ProcessingError },
    AggregateComputed { scalar: Scalar },
    RunFinished { elapsed: Duration },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// Writes one diagnostic line to stderr per failed stage; other events are ignored.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        if let ExecutionEvent::StageFailed { stage, error } = event {
            eprintln!("{}", diagnostic(*stage, error));
        }
    }
}

/// User-facing message for a failed stage.
pub fn diagnostic(stage: Stage, error: &ProcessingError) -> String {
    match (stage, error) {
        (Stage::Filter, ProcessingError::InvalidCondition { condition }) => {
            format!("Invalid filter condition: {condition}")
        }
        (Stage::Aggregate, ProcessingError::UnsupportedAggregate { op }) => {
            format!("Unsupported aggregation operator: {op}")
        }
        (Stage::Filter, e) => format!("Filtering failed: {e}"),
        (Stage::Order, e) => format!("Ordering failed: {e}"),
        (Stage::Aggregate, e) => format!("Aggregation failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{diagnostic, Stage};
    use crate::error::ProcessingError;

    #[test]
    fn diagnostics_name_the_stage() {
        let missing = ProcessingError::MissingColumn {
            column: "color".to_string(),
        };
        assert_eq!(
            diagnostic(Stage::Order, &missing),
            "Ordering failed: unknown column 'color'"
        );
        assert_eq!(
            diagnostic(Stage::Aggregate, &missing),
            "Aggregation failed: unknown column 'color'"
        );
        assert_eq!(
            diagnostic(
                Stage::Filter,
                &ProcessingError::NotNumeric {
                    raw: "apple".to_string()
                }
            ),
            "Filtering failed: could not convert 'apple' to a number"
        );
    }

    #[test]
    fn diagnostics_for_bad_operators() {
        assert_eq!(
            diagnostic(
                Stage::Filter,
                &ProcessingError::InvalidCondition {
                    condition: "rating!4.5".to_string()
                }
            ),
            "Invalid filter condition: rating!4.5"
        );
        assert_eq!(
            diagnostic(
                Stage::Aggregate,
                &ProcessingError::UnsupportedAggregate {
                    op: "sum".to_string()
                }
            ),
            "Unsupported aggregation operator: sum"
        );
    }
}
