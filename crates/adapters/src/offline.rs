// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend used when no wire client is linked.

use crate::error::RemoteError;
use crate::job::JobApi;
use crate::meta::{
    Description, ListQuery, Listing, MetaApi, ObjectRef, ProjectInfo, ResourceSpec, SecurityValue,
};
use async_trait::async_trait;
use oc_core::{JobConfig, JobFilter, JobId, JobSnapshot, JobSummary};

/// Reports every remote call as unavailable.
///
/// Local statements, help and `--dry-run` submissions never reach it.
#[derive(Debug, Clone, Default)]
pub struct OfflineBackend {
    endpoint: Option<String>,
}

impl OfflineBackend {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }

    fn unavailable(&self) -> RemoteError {
        match &self.endpoint {
            Some(endpoint) => RemoteError::Unavailable(format!("no client for endpoint {endpoint}")),
            None => RemoteError::Unavailable("no endpoint configured".to_string()),
        }
    }
}

#[async_trait]
impl JobApi for OfflineBackend {
    async fn submit(&self, _config: &JobConfig) -> Result<JobId, RemoteError> {
        Err(self.unavailable())
    }

    async fn get(&self, _id: &JobId) -> Result<JobSnapshot, RemoteError> {
        Err(self.unavailable())
    }

    async fn stop(&self, _id: &JobId) -> Result<(), RemoteError> {
        Err(self.unavailable())
    }

    async fn list(&self, _filter: &JobFilter) -> Result<Vec<JobSummary>, RemoteError> {
        Err(self.unavailable())
    }
}

#[async_trait]
impl MetaApi for OfflineBackend {
    async fn project_info(&self, _project: &str) -> Result<ProjectInfo, RemoteError> {
        Err(self.unavailable())
    }

    async fn describe(&self, _target: &ObjectRef) -> Result<Description, RemoteError> {
        Err(self.unavailable())
    }

    async fn list(&self, _query: &ListQuery) -> Result<Listing, RemoteError> {
        Err(self.unavailable())
    }

    async fn drop(&self, _target: &ObjectRef, _if_exists: bool) -> Result<(), RemoteError> {
        Err(self.unavailable())
    }

    async fn add_resource(&self, _resource: &ResourceSpec) -> Result<(), RemoteError> {
        Err(self.unavailable())
    }

    async fn update_security(
        &self,
        _project: &str,
        _key: &str,
        _value: &SecurityValue,
    ) -> Result<(), RemoteError> {
        Err(self.unavailable())
    }

    async fn set_project_property(
        &self,
        _project: &str,
        _key: &str,
        _value: &str,
    ) -> Result<(), RemoteError> {
        Err(self.unavailable())
    }

    async fn run_security(&self, _project: &str, _statement: &str) -> Result<String, RemoteError> {
        Err(self.unavailable())
    }

    async fn attach_session(&self, _project: &str, _session: &str) -> Result<(), RemoteError> {
        Err(self.unavailable())
    }
}
