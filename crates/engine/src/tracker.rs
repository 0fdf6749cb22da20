// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous job tracking.
//!
//! Polls a root job and every child it transitively spawns until all of them
//! are terminal, announcing each job id once.

use crate::error::EngineError;
use crate::interrupt::Interrupt;
use crate::poll::{Poller, Tick};
use oc_adapters::{JobApi, LogViewLinker, OutputSink};
use oc_core::{JobId, JobSnapshot, NodeKind};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackOptions {
    /// Poll once more after everything is terminal (ML jobs publish their
    /// final results late)
    pub trailing_tick: bool,
}

/// Print `ID = <id>` and the log view link for a job.
pub(crate) fn announce<S: OutputSink, L: LogViewLinker>(sink: &S, linker: &L, id: &JobId) {
    sink.progress(&format!("ID = {id}"));
    if let Some(link) = linker.link(id) {
        sink.progress(&format!("Log view: {link}"));
    }
}

/// Print how to follow up on a job the console stopped waiting for.
pub(crate) fn print_follow_up<S: OutputSink>(sink: &S, id: &JobId) {
    sink.progress(&format!("Job {id} is still running on the server."));
    sink.progress(&format!("  check status: status {id}"));
    sink.progress(&format!("  stop it:      kill {id}"));
}

#[derive(Clone)]
pub struct Tracker<J, S, L> {
    api: J,
    sink: S,
    linker: L,
    interval: Duration,
    interrupt: Interrupt,
}

/// Per-wait bookkeeping.
#[derive(Default)]
struct WaitState {
    printed: HashSet<JobId>,
    /// Children seen terminal; they never change again
    finished: HashMap<JobId, JobSnapshot>,
    last_progress: Option<String>,
}

impl<J: JobApi, S: OutputSink, L: LogViewLinker> Tracker<J, S, L> {
    pub fn new(api: J, sink: S, linker: L, interval: Duration, interrupt: Interrupt) -> Self {
        Self {
            api,
            sink,
            linker,
            interval,
            interrupt,
        }
    }

    /// Block until `root` and all its children are terminal.
    ///
    /// On Ctrl+C the remote job is left running, follow-up instructions are
    /// printed and `Interrupted` is returned.
    pub async fn wait(&self, root: &JobId, options: TrackOptions) -> Result<JobSnapshot, EngineError> {
        let mut state = WaitState::default();
        self.note(&mut state, root);

        let mut poller = Poller::new(self.interval, None, self.interrupt.clone());
        let mut trailing_pending = options.trailing_tick;
        loop {
            let snapshot = self.api.get(root).await?;
            let progress = snapshot.progress_line();
            if state.last_progress.as_deref() != Some(progress.as_str()) {
                self.sink.progress(&progress);
                state.last_progress = Some(progress);
            }

            let children_done = self.visit_children(&snapshot, &mut state).await?;
            if snapshot.is_terminal() && children_done {
                if !trailing_pending {
                    tracing::debug!(job_id = %root, status = %snapshot.status, "job finished");
                    return Ok(snapshot);
                }
                trailing_pending = false;
            }

            match poller.tick().await {
                Tick::Ready | Tick::Timeout => {}
                Tick::Interrupted => {
                    tracing::info!(job_id = %root, "wait interrupted");
                    print_follow_up(&self.sink, root);
                    return Err(EngineError::Interrupted {
                        job_id: Some(root.clone()),
                    });
                }
            }
        }
    }

    /// Walk the child tree depth-first. Returns true when every remote
    /// descendant is terminal.
    async fn visit_children(
        &self,
        snapshot: &JobSnapshot,
        state: &mut WaitState,
    ) -> Result<bool, EngineError> {
        let mut all_done = true;
        let mut visited: HashSet<JobId> = HashSet::new();
        let mut stack: Vec<_> = snapshot.children.iter().rev().cloned().collect();

        while let Some(node) = stack.pop() {
            if node.kind == NodeKind::Local || !visited.insert(node.id.clone()) {
                continue;
            }
            if node.kind == NodeKind::Remote {
                self.note(state, &node.id);
            }

            let child = match state.finished.get(&node.id) {
                Some(done) => done.clone(),
                None => self.api.get(&node.id).await?,
            };
            if node.kind == NodeKind::Remote {
                if child.is_terminal() {
                    state.finished.insert(node.id.clone(), child.clone());
                } else {
                    all_done = false;
                }
            }
            stack.extend(child.children.iter().rev().cloned());
        }
        Ok(all_done)
    }

    fn note(&self, state: &mut WaitState, id: &JobId) {
        if state.printed.insert(id.clone()) {
            announce(&self.sink, &self.linker, id);
        }
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
