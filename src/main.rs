use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use csv_query::execution::{Pipeline, PipelineOptions, StdErrExecutionObserver};
use csv_query::ingestion::ingest_from_path;
use csv_query::render::render_output;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Filter, order and aggregate rows of a CSV file
#[derive(Debug, Parser)]
#[command(name = "csv-query", about, long_about = None)]
struct Cli {
    /// Path to CSV file
    #[arg(long)]
    file: PathBuf,

    /// Filter condition (e.g. column=value or column>value)
    #[arg(long = "where", value_name = "CONDITION")]
    where_clause: Option<String>,

    /// Ordering (e.g. column=asc|desc)
    #[arg(long, value_name = "SPEC")]
    order_by: Option<String>,

    /// Aggregation (e.g. column=avg|min|max)
    #[arg(long, value_name = "SPEC")]
    aggregate: Option<String>,
}

impl Cli {
    fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            filter: self.where_clause.clone(),
            order_by: self.order_by.clone(),
            aggregate: self.aggregate.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let dataset = ingest_from_path(&cli.file)
        .with_context(|| format!("Failed to read '{}'", cli.file.display()))?;

    let outcome = Pipeline::new(cli.pipeline_options())
        .with_observer(Arc::new(StdErrExecutionObserver))
        .run(dataset);

    if let Some(output) = outcome.output {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(render_output(&output).as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
