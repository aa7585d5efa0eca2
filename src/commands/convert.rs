use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use coursecal_core::{Config, Conversion, convert};
use tracing::info;

use crate::ingest;
use crate::render::Render;

/// Where the calendar goes when no output path is given: next to the
/// source, with its extension replaced by `.ics`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("ics")
}

pub async fn run(
    input: &Path,
    output: Option<PathBuf>,
    to_stdout: bool,
    config: &Config,
) -> Result<Conversion> {
    let rows = ingest::read_source(input, &config.input).await?;
    let conversion = convert(&rows, &config.calendar);

    if to_stdout {
        println!("{}", conversion.document);
        eprintln!("{}", conversion.render());
        return Ok(conversion);
    }

    let output = output.unwrap_or_else(|| default_output_path(input));
    tokio::fs::write(&output, &conversion.document)
        .await
        .with_context(|| format!("Could not write {}", output.display()))?;

    info!(
        "wrote {} events to {}",
        conversion.events.len(),
        output.display()
    );
    println!("{}", conversion.render());
    println!("Saved {}", output.display());

    Ok(conversion)
}
