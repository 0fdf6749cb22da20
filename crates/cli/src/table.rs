// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared table renderer for listings and the instance views.
//!
//! Widths are computed from the data; color is applied after padding so
//! escape codes never skew alignment.

use std::io::Write;

use oc_adapters::Listing;

use crate::color;

/// Column text alignment.
pub enum Align {
    Left,
    Right,
}

/// How a cell's text is styled after padding.
pub enum CellStyle {
    Plain,
    /// Apply [`color::apply_muted()`].
    Muted,
    /// Apply [`color::apply_status()`], green/yellow/red by meaning.
    Status,
}

/// A column definition in a [`Table`].
pub struct Column {
    pub name: String,
    pub align: Align,
    pub style: CellStyle,
    /// Maximum width (`None` = unlimited). Longer values are truncated.
    pub max_width: Option<usize>,
}

impl Column {
    fn with_style(name: impl Into<String>, align: Align, style: CellStyle) -> Self {
        Self {
            name: name.into(),
            align,
            style,
            max_width: None,
        }
    }

    pub fn left(name: impl Into<String>) -> Self {
        Self::with_style(name, Align::Left, CellStyle::Plain)
    }

    pub fn right(name: impl Into<String>) -> Self {
        Self::with_style(name, Align::Right, CellStyle::Plain)
    }

    pub fn muted(name: impl Into<String>) -> Self {
        Self::with_style(name, Align::Left, CellStyle::Muted)
    }

    pub fn status(name: impl Into<String>) -> Self {
        Self::with_style(name, Align::Left, CellStyle::Status)
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
}

const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_color(columns, color::should_colorize())
    }

    pub fn with_color(columns: Vec<Column>, colorize: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize,
        }
    }

    /// Create a table that never emits color codes.
    #[cfg(test)]
    pub fn plain(columns: Vec<Column>) -> Self {
        Self::with_color(columns, false)
    }

    #[cfg(test)]
    pub fn colored(columns: Vec<Column>) -> Self {
        Self::with_color(columns, true)
    }

    /// Left-aligned plain columns named after a metadata listing.
    pub fn from_listing(listing: &Listing, colorize: bool) -> Self {
        let columns = listing.columns.iter().map(Column::left).collect();
        let mut table = Self::with_color(columns, colorize);
        for row in &listing.rows {
            table.row(row.clone());
        }
        table
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header and rows. An empty table prints nothing.
    ///
    /// The last column is never padded when left-aligned.
    pub fn render(&self, out: &mut impl Write) {
        if self.rows.is_empty() {
            return;
        }

        let widths = self.compute_widths();
        let last = self.columns.len().saturating_sub(1);

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let padded = if i == last && matches!(col.align, Align::Left) {
                    col.name.clone()
                } else {
                    pad(&col.name, widths[i], &col.align)
                };
                if self.colorize {
                    color::apply_header(&padded)
                } else {
                    padded
                }
            })
            .collect();
        let _ = writeln!(out, "{}", header.join(SEP));

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let raw = row.get(i).map(String::as_str).unwrap_or("");
                    let truncated = truncate(raw, col.max_width);
                    let padded = if i == last && matches!(col.align, Align::Left) {
                        truncated.to_string()
                    } else {
                        pad(truncated, widths[i], &col.align)
                    };
                    stylize(&padded, &col.style, self.colorize)
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(SEP));
        }
    }

    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let max_data = self
                    .rows
                    .iter()
                    .map(|row| {
                        let len = row.get(i).map(|s| s.chars().count()).unwrap_or(0);
                        col.max_width.map_or(len, |mw| len.min(mw))
                    })
                    .max()
                    .unwrap_or(0);
                col.name.chars().count().max(max_data)
            })
            .collect()
    }
}

fn pad(text: &str, width: usize, align: &Align) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

/// Truncate to at most `max` characters (if set).
fn truncate(s: &str, max: Option<usize>) -> &str {
    match max.and_then(|m| s.char_indices().nth(m)) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn stylize(text: &str, style: &CellStyle, colorize: bool) -> String {
    if !colorize {
        return text.to_string();
    }
    match style {
        CellStyle::Plain => text.to_string(),
        CellStyle::Muted => color::apply_muted(text),
        CellStyle::Status => color::apply_status(text),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
