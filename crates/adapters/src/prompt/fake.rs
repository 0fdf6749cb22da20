// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted prompter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PromptError, Prompter};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Default)]
struct ScriptedState {
    answers: VecDeque<bool>,
    questions: Vec<String>,
    /// Never answer; for exercising interruption during a prompt
    hang: bool,
}

/// Replays queued answers; reports the input as closed once they run out.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<ScriptedState>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        let prompter = Self::default();
        prompter.inner.lock().answers.extend(answers);
        prompter
    }

    /// A prompter whose questions never get an answer.
    pub fn hanging() -> Self {
        let prompter = Self::default();
        prompter.inner.lock().hang = true;
        prompter
    }

    pub fn questions(&self) -> Vec<String> {
        self.inner.lock().questions.clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        let hang = {
            let mut inner = self.inner.lock();
            inner.questions.push(question.to_string());
            inner.hang
        };
        if hang {
            std::future::pending::<()>().await;
        }
        self.inner
            .lock()
            .answers
            .pop_front()
            .ok_or(PromptError::Closed)
    }
}
