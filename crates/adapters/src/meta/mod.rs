// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metadata and security calls against the remote service

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeMetaApi, MetaCall};

use crate::error::RemoteError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Kind of object a metadata call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Table,
    Partition,
    Shard,
    ServingTable,
    Instance,
    Project,
    Function,
    Resource,
    Schema,
    OfflineModel,
    User,
    Role,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectKind::Table => "table",
            ObjectKind::Partition => "partition",
            ObjectKind::Shard => "shard",
            ObjectKind::ServingTable => "serving table",
            ObjectKind::Instance => "instance",
            ObjectKind::Project => "project",
            ObjectKind::Function => "function",
            ObjectKind::Resource => "resource",
            ObjectKind::Schema => "schema",
            ObjectKind::OfflineModel => "offline model",
            ObjectKind::User => "user",
            ObjectKind::Role => "role",
        };
        f.write_str(s)
    }
}

/// A named object inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRef {
    pub kind: ObjectKind,
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    /// Partition spec rendered as `k='v',...`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    pub extended: bool,
}

impl ObjectRef {
    pub fn new(kind: ObjectKind, project: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            project: project.into(),
            schema: None,
            name: name.into(),
            partition: None,
            extended: false,
        }
    }
}

/// Ordered field/value pairs describing one object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Description {
    pub fields: Vec<(String, String)>,
}

impl Description {
    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }
}

/// Listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub kind: ObjectKind,
    /// Empty for service-wide listings such as projects
    pub project: String,
    pub schema: Option<String>,
    /// Owning table for partition listings
    pub table: Option<String>,
    /// Name prefix or `like` pattern
    pub pattern: Option<String>,
    /// Restrict partition listings to this spec
    pub partition: Option<String>,
}

impl ListQuery {
    pub fn new(kind: ObjectKind, project: impl Into<String>) -> Self {
        Self {
            kind,
            project: project.into(),
            schema: None,
            table: None,
            pattern: None,
            partition: None,
        }
    }
}

/// Tabular listing result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Listing {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub owner: String,
    pub default_timezone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    File,
    Jar,
    Archive,
    Py,
    Table,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::File => "file",
            ResourceKind::Jar => "jar",
            ResourceKind::Archive => "archive",
            ResourceKind::Py => "py",
            ResourceKind::Table => "table",
        };
        f.write_str(s)
    }
}

/// `add <kind> <source> [as <alias>] [comment '<text>'] [-f]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSpec {
    pub kind: ResourceKind,
    pub project: String,
    /// Local path, or table name for table resources
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Replace an existing resource of the same name
    pub overwrite: bool,
}

impl ResourceSpec {
    /// Name the resource is registered under.
    pub fn name(&self) -> &str {
        if let Some(alias) = &self.alias {
            return alias;
        }
        self.source
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.source)
    }
}

/// Value of a project security configuration key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityValue {
    Flag(bool),
    /// `ProjectProtection=true WITH EXCEPTION <policy>`
    ProtectionWithException { policy: String },
    /// `ExternalResourceAccessControl=true WITH LOCATIONS <list>`
    AccessControlWithLocations { locations: Vec<String> },
}

impl fmt::Display for SecurityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityValue::Flag(b) => write!(f, "{b}"),
            SecurityValue::ProtectionWithException { policy } => {
                write!(f, "true with exception {policy}")
            }
            SecurityValue::AccessControlWithLocations { locations } => {
                write!(f, "true with locations {}", locations.join(","))
            }
        }
    }
}

/// Synchronous metadata, resource and security calls.
#[async_trait]
pub trait MetaApi: Clone + Send + Sync + 'static {
    async fn project_info(&self, project: &str) -> Result<ProjectInfo, RemoteError>;

    async fn describe(&self, target: &ObjectRef) -> Result<Description, RemoteError>;

    async fn list(&self, query: &ListQuery) -> Result<Listing, RemoteError>;

    async fn drop(&self, target: &ObjectRef, if_exists: bool) -> Result<(), RemoteError>;

    async fn add_resource(&self, resource: &ResourceSpec) -> Result<(), RemoteError>;

    async fn update_security(
        &self,
        project: &str,
        key: &str,
        value: &SecurityValue,
    ) -> Result<(), RemoteError>;

    async fn set_project_property(
        &self,
        project: &str,
        key: &str,
        value: &str,
    ) -> Result<(), RemoteError>;

    /// Run a security statement (grant, revoke, policy, ...) and return its output.
    async fn run_security(&self, project: &str, statement: &str) -> Result<String, RemoteError>;

    /// Verify a compute session exists before statements are routed to it.
    async fn attach_session(&self, project: &str, session: &str) -> Result<(), RemoteError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
