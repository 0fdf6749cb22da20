// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Algorithm (`pai`) and workflow jobs.
//!
//! Both carry their `-D` parameters as statement-local property overrides,
//! so a parameter always wins over a session value of the same name.

use crate::command::Params;
use crate::context::{Backends, Console};
use oc_core::{JobConfig, JobKind};
use oc_engine::{JobRequest, Overrides};

impl<B: Backends> Console<B> {
    /// Run an ML algorithm. The runner polls once more after the job is
    /// terminal for these.
    pub(crate) async fn pai(
        &self,
        algorithm: &str,
        project: Option<&str>,
        params: &Params,
    ) -> anyhow::Result<()> {
        let mut config = JobConfig::new(JobKind::Xlib, algorithm);
        config.project = project.map(String::from);
        self.submit_job(with_params(config, params)).await
    }

    pub(crate) async fn run_workflow(&self, name: &str, params: &Params) -> anyhow::Result<()> {
        let config = JobConfig::new(JobKind::Workflow, name);
        self.submit_job(with_params(config, params)).await
    }
}

fn with_params(config: JobConfig, params: &Params) -> JobRequest {
    let overrides = Overrides {
        properties: params.iter().cloned().collect(),
        ..Overrides::default()
    };
    JobRequest::new(config).with_overrides(overrides)
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
