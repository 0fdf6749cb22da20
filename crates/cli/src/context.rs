// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The console: session state plus the collaborators commands run against.

use crate::output::OutputFormat;
use oc_adapters::{
    ConsoleSink, JobApi, LinePrompter, LineReader, LogViewLinker, MetaApi, OfflineBackend,
    OutputSink, Prompter, TemplateLinker, TracedJobApi, TracedMetaApi,
};
use oc_core::SessionContext;
use oc_engine::{Interrupt, JobRunner, RunnerConfig};
use std::time::Duration;

/// Bundle of collaborator types, so `Console` takes one type parameter.
pub trait Backends: 'static {
    type Jobs: JobApi;
    type Meta: MetaApi;
    type Sink: OutputSink;
    type Prompt: Prompter;
    type Links: LogViewLinker;
}

/// Collaborators used by the shipped binary.
pub struct Live;

impl Backends for Live {
    type Jobs = TracedJobApi<OfflineBackend>;
    type Meta = TracedMetaApi<OfflineBackend>;
    type Sink = ConsoleSink;
    type Prompt = LinePrompter;
    type Links = Option<TemplateLinker>;
}

pub struct ConsoleParts<B: Backends> {
    pub jobs: B::Jobs,
    pub meta: B::Meta,
    pub sink: B::Sink,
    pub prompter: B::Prompt,
    pub linker: B::Links,
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub runner: RunnerConfig,
    pub format: OutputFormat,
    pub colorize: bool,
    /// Refresh interval of `top instance -d`
    pub top_interval: Duration,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            runner: RunnerConfig::default(),
            format: OutputFormat::Text,
            colorize: false,
            top_interval: Duration::from_secs(3),
        }
    }
}

pub struct Console<B: Backends> {
    pub session: SessionContext,
    pub(crate) jobs: B::Jobs,
    pub(crate) meta: B::Meta,
    pub(crate) sink: B::Sink,
    pub(crate) prompter: B::Prompt,
    pub(crate) runner: JobRunner<B::Jobs, B::Sink, B::Links>,
    pub(crate) interrupt: Interrupt,
    pub(crate) options: ConsoleOptions,
}

impl<B: Backends> Console<B> {
    pub fn new(
        session: SessionContext,
        parts: ConsoleParts<B>,
        interrupt: Interrupt,
        options: ConsoleOptions,
    ) -> Self {
        let runner = JobRunner::new(
            parts.jobs.clone(),
            parts.sink.clone(),
            parts.linker,
            oc_core::SystemClock,
            oc_core::UuidIdGen,
            interrupt.clone(),
            options.runner,
        );
        Self {
            session,
            jobs: parts.jobs,
            meta: parts.meta,
            sink: parts.sink,
            prompter: parts.prompter,
            runner,
            interrupt,
            options,
        }
    }

    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }

    /// JSON output either from `-o json` or machine-readable mode.
    pub(crate) fn format(&self) -> OutputFormat {
        if self.session.flags.machine_readable {
            OutputFormat::Json
        } else {
            self.options.format
        }
    }
}

impl Console<Live> {
    /// Console wired to the offline backend and stdout/stderr. Confirmations
    /// read from `input`, which the read-eval loop shares.
    pub fn live(
        session: SessionContext,
        logview_template: Option<String>,
        input: LineReader,
        interrupt: Interrupt,
        options: ConsoleOptions,
    ) -> Self {
        let backend = OfflineBackend::new(session.endpoint.clone());
        let linker = logview_template.map(|template| {
            TemplateLinker::new(template, session.endpoint.clone().unwrap_or_default())
        });
        let parts = ConsoleParts {
            jobs: TracedJobApi::new(backend.clone()),
            meta: TracedMetaApi::new(backend),
            sink: ConsoleSink::new(),
            prompter: LinePrompter::new(input),
            linker,
        };
        Self::new(session, parts, interrupt, options)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use oc_adapters::{FakeJobApi, FakeMetaApi, MemorySink, NoLogView, ScriptedPrompter};

    pub struct Fakes;

    impl Backends for Fakes {
        type Jobs = FakeJobApi;
        type Meta = FakeMetaApi;
        type Sink = MemorySink;
        type Prompt = ScriptedPrompter;
        type Links = NoLogView;
    }

    pub struct Harness {
        pub console: Console<Fakes>,
        pub jobs: FakeJobApi,
        pub meta: FakeMetaApi,
        pub sink: MemorySink,
        pub prompter: ScriptedPrompter,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_prompter(ScriptedPrompter::new([]))
        }

        pub fn with_prompter(prompter: ScriptedPrompter) -> Self {
            let jobs = FakeJobApi::new();
            let meta = FakeMetaApi::new();
            let sink = MemorySink::new();
            let parts = ConsoleParts {
                jobs: jobs.clone(),
                meta: meta.clone(),
                sink: sink.clone(),
                prompter: prompter.clone(),
                linker: NoLogView,
            };
            let options = ConsoleOptions {
                runner: RunnerConfig {
                    poll_interval: Duration::from_millis(100),
                    retry_backoff: Duration::from_millis(100),
                    retry_window: Duration::from_secs(600),
                },
                ..ConsoleOptions::default()
            };
            let console = Console::new(SessionContext::new(), parts, Interrupt::new(), options);
            Self {
                console,
                jobs,
                meta,
                sink,
                prompter,
            }
        }

        /// Harness with `p1` as the active project.
        pub fn in_project() -> Self {
            let mut harness = Self::new();
            harness.console.session.init_project(Some("p1".into()));
            harness
        }
    }
}
