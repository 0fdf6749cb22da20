// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON renderings of command results.
//!
//! Renderers return strings; commands hand them to the output sink so the
//! same code serves the terminal and the in-memory sink used in tests.

use clap::ValueEnum;
use oc_adapters::{Description, Listing};
use oc_core::{format_age, format_timestamp, JobSummary};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::table::{Column, Table};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Rows become objects keyed by column name.
pub fn render_listing(
    listing: &Listing,
    format: OutputFormat,
    colorize: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(Table::from_listing(listing, colorize).render_to_string()),
        OutputFormat::Json => {
            let rows: Vec<Value> = listing
                .rows
                .iter()
                .map(|row| {
                    let obj: Map<String, Value> = listing
                        .columns
                        .iter()
                        .zip(row)
                        .map(|(col, cell)| (col.clone(), Value::String(cell.clone())))
                        .collect();
                    Value::Object(obj)
                })
                .collect();
            to_json(&rows)
        }
    }
}

pub fn render_description(
    description: &Description,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let width = description
                .fields
                .iter()
                .map(|(name, _)| name.chars().count())
                .max()
                .unwrap_or(0);
            let lines: Vec<String> = description
                .fields
                .iter()
                .map(|(name, value)| format!("{:<width$}  {value}", format!("{name}:"), width = width + 1))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let obj: Map<String, Value> = description
                .fields
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();
            to_json(&obj)
        }
    }
}

/// `show instances` view: one row per job, newest first as returned.
pub fn render_instances(
    jobs: &[JobSummary],
    now_ms: u64,
    format: OutputFormat,
    colorize: bool,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return to_json(jobs);
    }
    let mut table = Table::with_color(
        vec![
            Column::left("ID"),
            Column::muted("OWNER"),
            Column::left("STARTED"),
            Column::right("AGE"),
            Column::status("STATUS"),
        ],
        colorize,
    );
    for job in jobs {
        table.row(vec![
            job.id.to_string(),
            job.owner.clone(),
            format_timestamp(job.start_time_ms),
            format_age(job.start_time_ms, now_ms),
            job.status.to_string(),
        ]);
    }
    Ok(table.render_to_string())
}

/// `top instance` frame: queue position and resource usage per job.
pub fn render_queue(
    jobs: &[JobSummary],
    format: OutputFormat,
    colorize: bool,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return to_json(jobs);
    }
    let mut table = Table::with_color(
        vec![
            Column::left("ID"),
            Column::right("QUEUE"),
            Column::right("PRIORITY"),
            Column::right("CPU%"),
            Column::right("MEM(MB)"),
            Column::right("PROGRESS"),
            Column::muted("OWNER"),
            Column::status("STATUS"),
        ],
        colorize,
    );
    for job in jobs {
        table.row(vec![
            job.id.to_string(),
            dash_or(job.queue_position),
            dash_or(job.priority),
            dash_or(job.cpu_percent),
            dash_or(job.memory_mb),
            job.progress.map_or_else(|| "-".to_string(), |p| format!("{p}%")),
            job.owner.clone(),
            job.status.to_string(),
        ]);
    }
    Ok(table.render_to_string())
}

fn dash_or<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
