// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake metadata backend for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{
    Description, ListQuery, Listing, MetaApi, ObjectRef, ProjectInfo, ResourceSpec, SecurityValue,
};
use crate::error::RemoteError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Recorded metadata call
#[derive(Debug, Clone, PartialEq)]
pub enum MetaCall {
    ProjectInfo(String),
    Describe(ObjectRef),
    List(ListQuery),
    Drop { target: ObjectRef, if_exists: bool },
    AddResource(ResourceSpec),
    UpdateSecurity {
        project: String,
        key: String,
        value: SecurityValue,
    },
    SetProjectProperty {
        project: String,
        key: String,
        value: String,
    },
    RunSecurity { project: String, statement: String },
    AttachSession { project: String, session: String },
}

#[derive(Default)]
struct FakeMetaState {
    calls: Vec<MetaCall>,
    errors: VecDeque<RemoteError>,
    projects: HashMap<String, ProjectInfo>,
    description: Option<Description>,
    listing: Option<Listing>,
    security_output: String,
}

/// In-memory metadata backend.
///
/// Every project exists unless `fail_next` says otherwise.
#[derive(Clone, Default)]
pub struct FakeMetaApi {
    inner: Arc<Mutex<FakeMetaState>>,
}

impl FakeMetaApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<MetaCall> {
        self.inner.lock().calls.clone()
    }

    /// Fail the next call of any kind
    pub fn fail_next(&self, err: RemoteError) {
        self.inner.lock().errors.push_back(err);
    }

    pub fn add_project(&self, info: ProjectInfo) {
        self.inner.lock().projects.insert(info.name.clone(), info);
    }

    pub fn set_description(&self, description: Description) {
        self.inner.lock().description = Some(description);
    }

    pub fn set_listing(&self, listing: Listing) {
        self.inner.lock().listing = Some(listing);
    }

    pub fn set_security_output(&self, output: &str) {
        self.inner.lock().security_output = output.to_string();
    }

    fn record(&self, call: MetaCall) -> Result<(), RemoteError> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        match inner.errors.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MetaApi for FakeMetaApi {
    async fn project_info(&self, project: &str) -> Result<ProjectInfo, RemoteError> {
        self.record(MetaCall::ProjectInfo(project.to_string()))?;
        let info = self.inner.lock().projects.get(project).cloned();
        Ok(info.unwrap_or_else(|| ProjectInfo {
            name: project.to_string(),
            owner: "ALIYUN$owner".to_string(),
            default_timezone: None,
        }))
    }

    async fn describe(&self, target: &ObjectRef) -> Result<Description, RemoteError> {
        self.record(MetaCall::Describe(target.clone()))?;
        let description = self.inner.lock().description.clone();
        Ok(description.unwrap_or_else(|| {
            Description::default()
                .field("Name", target.name.clone())
                .field("Kind", target.kind.to_string())
        }))
    }

    async fn list(&self, query: &ListQuery) -> Result<Listing, RemoteError> {
        self.record(MetaCall::List(query.clone()))?;
        Ok(self.inner.lock().listing.clone().unwrap_or_default())
    }

    async fn drop(&self, target: &ObjectRef, if_exists: bool) -> Result<(), RemoteError> {
        self.record(MetaCall::Drop {
            target: target.clone(),
            if_exists,
        })
    }

    async fn add_resource(&self, resource: &ResourceSpec) -> Result<(), RemoteError> {
        self.record(MetaCall::AddResource(resource.clone()))
    }

    async fn update_security(
        &self,
        project: &str,
        key: &str,
        value: &SecurityValue,
    ) -> Result<(), RemoteError> {
        self.record(MetaCall::UpdateSecurity {
            project: project.to_string(),
            key: key.to_string(),
            value: value.clone(),
        })
    }

    async fn set_project_property(
        &self,
        project: &str,
        key: &str,
        value: &str,
    ) -> Result<(), RemoteError> {
        self.record(MetaCall::SetProjectProperty {
            project: project.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    async fn run_security(&self, project: &str, statement: &str) -> Result<String, RemoteError> {
        self.record(MetaCall::RunSecurity {
            project: project.to_string(),
            statement: statement.to_string(),
        })?;
        Ok(self.inner.lock().security_output.clone())
    }

    async fn attach_session(&self, project: &str, session: &str) -> Result<(), RemoteError> {
        self.record(MetaCall::AttachSession {
            project: project.to_string(),
            session: session.to_string(),
        })
    }
}
