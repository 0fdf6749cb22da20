// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Yes/no confirmation prompts

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::ScriptedPrompter;

use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    Closed,
    #[error("failed to read answer: {0}")]
    Io(String),
}

#[async_trait]
pub trait Prompter: Clone + Send + Sync + 'static {
    async fn confirm(&self, question: &str) -> Result<bool, PromptError>;
}

type BoxedLines = Lines<Box<dyn AsyncBufRead + Send + Unpin>>;

/// The console's single line source.
///
/// Clones share one buffered reader. A `next_line` dropped mid-read keeps
/// what it had buffered, so the following call still gets that line.
#[derive(Clone)]
pub struct LineReader {
    lines: Arc<Mutex<BoxedLines>>,
}

impl LineReader {
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        let boxed: Box<dyn AsyncBufRead + Send + Unpin> = Box::new(reader);
        Self {
            lines: Arc::new(Mutex::new(boxed.lines())),
        }
    }

    /// Next line without its terminator; `None` at end of input.
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader").finish_non_exhaustive()
    }
}

/// Asks on stderr and reads answers from the console's input, asking again
/// until it gets yes or no.
#[derive(Clone, Debug)]
pub struct LinePrompter {
    input: LineReader,
}

impl LinePrompter {
    pub fn new(input: LineReader) -> Self {
        Self { input }
    }
}

#[async_trait]
impl Prompter for LinePrompter {
    async fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        loop {
            {
                let mut err = std::io::stderr().lock();
                let _ = write!(err, "{question} (yes/no)? ");
                let _ = err.flush();
            }
            let line = self
                .input
                .next_line()
                .await
                .map_err(|e| PromptError::Io(e.to_string()))?
                .ok_or(PromptError::Closed)?;
            if let Some(yes) = parse_answer(&line) {
                return Ok(yes);
            }
        }
    }
}

/// `y`/`yes` or `n`/`no`, any case.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
