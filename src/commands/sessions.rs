use std::path::Path;

use anyhow::Result;
use coursecal_core::recurrence::expand_sessions;
use coursecal_core::{Config, convert};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::ingest;
use crate::render::Render;

/// List every class meeting in the schedule, grouped by event.
pub async fn run(input: &Path, limit: u16, config: &Config) -> Result<()> {
    let rows = ingest::read_source(input, &config.input).await?;
    let conversion = convert(&rows, &config.calendar);

    let mut total = 0;
    for event in &conversion.events {
        println!("{}", event.render());

        match expand_sessions(event, limit) {
            Ok(sessions) => {
                for session in &sessions {
                    println!("   {}", session.render());
                }
                if sessions.len() == usize::from(limit) {
                    println!("   {}", format!("(showing first {limit})").dimmed());
                }
                total += sessions.len();
            }
            Err(e) => {
                warn!("could not expand {}: {e}", event.uid);
                println!("   {} {}", "!".yellow(), e);
            }
        }
        println!();
    }

    println!("{}", conversion.render());
    println!("{total} sessions in {} events", conversion.events.len());

    Ok(())
}
