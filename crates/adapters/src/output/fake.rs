// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording output sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::OutputSink;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkLine {
    Result(String),
    Progress(String),
    Frame(String),
}

/// Sink that records every line in order.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<SinkLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<SinkLine> {
        self.lines.lock().clone()
    }

    pub fn results(&self) -> Vec<String> {
        self.collect(|l| match l {
            SinkLine::Result(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn progress_lines(&self) -> Vec<String> {
        self.collect(|l| match l {
            SinkLine::Progress(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn frames(&self) -> Vec<String> {
        self.collect(|l| match l {
            SinkLine::Frame(s) => Some(s.clone()),
            _ => None,
        })
    }

    /// Every line of every channel joined with newlines.
    pub fn text(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|l| match l {
                SinkLine::Result(s) | SinkLine::Progress(s) | SinkLine::Frame(s) => s.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Count lines on any channel containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.text().lines().filter(|l| l.contains(needle)).count()
    }

    fn collect(&self, f: impl Fn(&SinkLine) -> Option<String>) -> Vec<String> {
        self.lines.lock().iter().filter_map(f).collect()
    }
}

impl OutputSink for MemorySink {
    fn result(&self, text: &str) {
        self.lines.lock().push(SinkLine::Result(text.to_string()));
    }

    fn progress(&self, text: &str) {
        self.lines.lock().push(SinkLine::Progress(text.to_string()));
    }

    fn frame(&self, text: &str) {
        self.lines.lock().push(SinkLine::Frame(text.to_string()));
    }
}
