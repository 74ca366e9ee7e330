//! Runs the filter → order → aggregate pipeline over a [`DataSet`].
//!
//! This module sits "above" [`crate::processing`] and owns the failure policy: every stage
//! failure is contained, reported to the observer as [`ExecutionEvent::StageFailed`] and recorded
//! in the [`RunOutcome`]. Filter and order failures fall back to the stage's input rows; an
//! aggregate failure leaves the run with no output.

mod observer;

use std::sync::Arc;
use std::time::Instant;

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::{filter, order, summarize, Output};
use crate::types::DataSet;

pub use observer::{diagnostic, ExecutionEvent, ExecutionObserver, Stage, StdErrExecutionObserver};

/// The three optional stage specs, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Filter condition, e.g. `price<300`.
    pub filter: Option<String>,
    /// Ordering, e.g. `rating=desc`.
    pub order_by: Option<String>,
    /// Aggregation, e.g. `price=avg`.
    pub aggregate: Option<String>,
}

/// A contained stage failure.
#[derive(Debug, Clone, PartialEq)]
pub struct StageFailure {
    pub stage: Stage,
    pub error: ProcessingError,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// What to render; `None` if the aggregate stage failed.
    pub output: Option<Output>,
    /// Failures in stage order.
    pub failures: Vec<StageFailure>,
}

/// Linear pipeline over in-memory rows.
pub struct Pipeline {
    opts: PipelineOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
}

impl Pipeline {
    pub fn new(opts: PipelineOptions) -> Self {
        Self {
            opts,
            observer: None,
        }
    }

    /// Attach an observer for execution events.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run every stage over `dataset`.
    pub fn run(&self, dataset: DataSet) -> RunOutcome {
        let start = Instant::now();
        let mut failures = Vec::new();
        self.emit(ExecutionEvent::RunStarted {
            rows: dataset.row_count(),
        });

        let filtered = self.contain(
            Stage::Filter,
            self.opts.filter.as_deref(),
            &dataset,
            filter,
            &mut failures,
        );
        let ordered = self.contain(
            Stage::Order,
            self.opts.order_by.as_deref(),
            &filtered,
            order,
            &mut failures,
        );

        let spec = self.opts.aggregate.as_deref().filter(|s| !s.is_empty());
        let output = match summarize(ordered, spec) {
            Ok(Output::Scalar(scalar)) => {
                self.emit(ExecutionEvent::AggregateComputed { scalar });
                Some(Output::Scalar(scalar))
            }
            Ok(Output::Table(ds)) => {
                self.emit(ExecutionEvent::StageSkipped {
                    stage: Stage::Aggregate,
                });
                Some(Output::Table(ds))
            }
            Err(error) => {
                self.fail(Stage::Aggregate, error, &mut failures);
                None
            }
        };

        let elapsed = start.elapsed();
        tracing::debug!(?elapsed, failures = failures.len(), "pipeline finished");
        self.emit(ExecutionEvent::RunFinished { elapsed });
        RunOutcome { output, failures }
    }

    /// Run one row-to-row stage, falling back to `input` on failure.
    fn contain(
        &self,
        stage: Stage,
        spec: Option<&str>,
        input: &DataSet,
        run: fn(&DataSet, Option<&str>) -> ProcessingResult<DataSet>,
        failures: &mut Vec<StageFailure>,
    ) -> DataSet {
        let Some(spec) = spec.filter(|s| !s.is_empty()) else {
            self.emit(ExecutionEvent::StageSkipped { stage });
            return input.clone();
        };
        match run(input, Some(spec)) {
            Ok(out) => {
                tracing::debug!(%stage, spec, rows_in = input.row_count(), rows_out = out.row_count(), "stage finished");
                self.emit(ExecutionEvent::StageFinished {
                    stage,
                    rows: out.row_count(),
                });
                out
            }
            Err(error) => {
                self.fail(stage, error, failures);
                input.clone()
            }
        }
    }

    fn fail(&self, stage: Stage, error: ProcessingError, failures: &mut Vec<StageFailure>) {
        tracing::debug!(%stage, %error, "stage failed");
        self.emit(ExecutionEvent::StageFailed {
            stage,
            error: error.clone(),
        });
        failures.push(StageFailure { stage, error });
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
