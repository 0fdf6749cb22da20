// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::error::RemoteError;
use crate::job::JobApi;
use crate::meta::{
    Description, ListQuery, Listing, MetaApi, ObjectRef, ProjectInfo, ResourceSpec, SecurityValue,
};
use async_trait::async_trait;
use oc_core::{JobConfig, JobFilter, JobId, JobSnapshot, JobSummary};
use tracing::Instrument;

/// Wrapper that adds tracing to any JobApi
#[derive(Clone)]
pub struct TracedJobApi<J> {
    inner: J,
}

impl<J> TracedJobApi<J> {
    pub fn new(inner: J) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<J: JobApi> JobApi for TracedJobApi<J> {
    async fn submit(&self, config: &JobConfig) -> Result<JobId, RemoteError> {
        let span = tracing::info_span!(
            "job.submit",
            kind = %config.kind,
            project = config.project.as_deref().unwrap_or("-"),
            token = config.token.as_ref().map(|t| t.as_str()).unwrap_or("-"),
        );
        async {
            tracing::info!(statement_len = config.statement.len(), "submitting");
            let start = std::time::Instant::now();
            let result = self.inner.submit(config).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(id) => tracing::info!(job_id = %id, elapsed_ms, "job created"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, transient = e.is_transient(), "submit failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn get(&self, id: &JobId) -> Result<JobSnapshot, RemoteError> {
        let result = self.inner.get(id).await;
        match &result {
            Ok(snapshot) => tracing::trace!(job_id = %id, status = %snapshot.status, children = snapshot.children.len(), "polled"),
            Err(e) => tracing::warn!(job_id = %id, error = %e, "poll failed"),
        }
        result
    }

    async fn stop(&self, id: &JobId) -> Result<(), RemoteError> {
        let result = self.inner.stop(id).await;
        tracing::info_span!("job.stop", job_id = %id).in_scope(|| match &result {
            Ok(()) => tracing::info!("stop requested"),
            Err(e) => tracing::error!(error = %e, "stop failed"),
        });
        result
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobSummary>, RemoteError> {
        let span = tracing::info_span!("job.list", owner_only = filter.owner_only);
        async {
            let result = self.inner.list(filter).await;
            match &result {
                Ok(jobs) => tracing::debug!(count = jobs.len(), "listed"),
                Err(e) => tracing::error!(error = %e, "list failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any MetaApi
#[derive(Clone)]
pub struct TracedMetaApi<M> {
    inner: M,
}

impl<M> TracedMetaApi<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

fn log_outcome<T>(op: &str, result: &Result<T, RemoteError>) {
    match result {
        Ok(_) => tracing::debug!(op, "ok"),
        Err(e) => tracing::error!(op, error = %e, request_id = e.request_id().unwrap_or("-"), "failed"),
    }
}

#[async_trait]
impl<M: MetaApi> MetaApi for TracedMetaApi<M> {
    async fn project_info(&self, project: &str) -> Result<ProjectInfo, RemoteError> {
        let span = tracing::info_span!("meta.project_info", project);
        let result = self.inner.project_info(project).instrument(span.clone()).await;
        span.in_scope(|| log_outcome("project_info", &result));
        result
    }

    async fn describe(&self, target: &ObjectRef) -> Result<Description, RemoteError> {
        let span = tracing::info_span!("meta.describe", kind = %target.kind, name = %target.name);
        let result = self.inner.describe(target).instrument(span.clone()).await;
        span.in_scope(|| log_outcome("describe", &result));
        result
    }

    async fn list(&self, query: &ListQuery) -> Result<Listing, RemoteError> {
        let span = tracing::info_span!("meta.list", kind = %query.kind, project = %query.project);
        let result = self.inner.list(query).instrument(span.clone()).await;
        span.in_scope(|| log_outcome("list", &result));
        result
    }

    async fn drop(&self, target: &ObjectRef, if_exists: bool) -> Result<(), RemoteError> {
        let span = tracing::info_span!("meta.drop", kind = %target.kind, name = %target.name, if_exists);
        let result = self.inner.drop(target, if_exists).instrument(span.clone()).await;
        span.in_scope(|| log_outcome("drop", &result));
        result
    }

    async fn add_resource(&self, resource: &ResourceSpec) -> Result<(), RemoteError> {
        let span = tracing::info_span!("meta.add_resource", kind = %resource.kind, name = resource.name());
        let result = self.inner.add_resource(resource).instrument(span.clone()).await;
        span.in_scope(|| log_outcome("add_resource", &result));
        result
    }

    async fn update_security(
        &self,
        project: &str,
        key: &str,
        value: &SecurityValue,
    ) -> Result<(), RemoteError> {
        let span = tracing::info_span!("meta.update_security", project, key);
        let result = self
            .inner
            .update_security(project, key, value)
            .instrument(span.clone())
            .await;
        span.in_scope(|| log_outcome("update_security", &result));
        result
    }

    async fn set_project_property(
        &self,
        project: &str,
        key: &str,
        value: &str,
    ) -> Result<(), RemoteError> {
        let span = tracing::info_span!("meta.set_project_property", project, key);
        let result = self
            .inner
            .set_project_property(project, key, value)
            .instrument(span.clone())
            .await;
        span.in_scope(|| log_outcome("set_project_property", &result));
        result
    }

    async fn run_security(&self, project: &str, statement: &str) -> Result<String, RemoteError> {
        let span = tracing::info_span!("meta.run_security", project);
        let result = self.inner.run_security(project, statement).instrument(span.clone()).await;
        span.in_scope(|| log_outcome("run_security", &result));
        result
    }

    async fn attach_session(&self, project: &str, session: &str) -> Result<(), RemoteError> {
        let span = tracing::info_span!("meta.attach_session", project, session);
        let result = self.inner.attach_session(project, session).instrument(span.clone()).await;
        span.in_scope(|| log_outcome("attach_session", &result));
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
