// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session statements: project and schema selection, settings, aliases,
//! compute sessions and `show flags`.

use crate::context::{Backends, Console};
use crate::error::ConsoleError;
use crate::output::{render_description, to_json, OutputFormat};
use oc_adapters::{Description, MetaApi, OutputSink, SecurityValue};
use oc_core::{KeyValueMap, ProjectDefaults, SessionContext, FALLBACK_KEY_PREFIX};
use serde_json::{json, Map, Value};

impl<B: Backends> Console<B> {
    pub(crate) fn help(&self, keyword: Option<&str>) -> anyhow::Result<()> {
        let text = crate::help::render(keyword, self.options.colorize)?;
        self.emit(&text);
        Ok(())
    }

    pub(crate) fn use_quota(&mut self, name: &str) {
        self.session.quota = Some(name.to_string());
        self.sink.progress(&format!("Quota {name} is used for subsequent jobs"));
    }

    pub(crate) fn use_schema(&mut self, name: &str) {
        self.session.set_schema(Some(name.to_string()));
        self.sink.progress(&format!("Schema changed to {name}"));
    }

    /// Switch projects. The project must exist; its default timezone
    /// replaces any explicit one.
    pub(crate) async fn use_project(&mut self, project: &str) -> anyhow::Result<()> {
        let info = self.meta.project_info(project).await?;
        let switch = self.session.switch_project(
            project,
            ProjectDefaults {
                timezone: info.default_timezone,
            },
        );
        tracing::info!(project, previous = ?switch.previous, "project switched");
        if let Some(detached) = switch.detached_session {
            self.sink.progress(&format!(
                "warning: detached from session {detached}; statements now run as separate jobs"
            ));
        }
        self.sink.progress(&format!("Project changed to {project}"));
        Ok(())
    }

    pub(crate) async fn attach(&mut self, session: &str) -> anyhow::Result<()> {
        let project = self.project()?;
        self.meta.attach_session(&project, session).await?;
        self.session.attach(session);
        self.sink.progress(&format!("Attached to session {session}"));
        Ok(())
    }

    pub(crate) fn detach(&mut self) {
        match self.session.detach() {
            Some(session) => self.sink.progress(&format!("Detached from session {session}")),
            None => self.sink.progress("Not attached to any session"),
        }
    }

    pub(crate) fn whoami(&self) -> anyhow::Result<()> {
        let session = &self.session;
        let description = Description::default()
            .field("Endpoint", or_dash(session.endpoint.as_deref()))
            .field("Access Id", or_dash(session.identity()))
            .field("Project", or_dash(session.project()))
            .field("Schema", or_dash(session.schema()))
            .field("Session", or_dash(session.attached_session()));
        self.emit(&render_description(&description, self.format())?);
        Ok(())
    }

    /// `alias` lists, `alias k=v` defines.
    pub(crate) fn alias(&mut self, entry: Option<&(String, String)>) -> anyhow::Result<()> {
        if let Some((key, value)) = entry {
            self.session.aliases.set(key.clone(), value.clone());
            return Ok(());
        }
        let text = match self.format() {
            OutputFormat::Json => to_json(self.session.aliases.as_map())?,
            OutputFormat::Text => key_value_lines(&self.session.aliases),
        };
        self.emit(&text);
        Ok(())
    }

    pub(crate) fn unset(&mut self, key: &str) {
        if !self.session.unset(key) {
            self.sink.progress(&format!("warning: {key} is not set"));
        }
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let target = self
            .session
            .apply_setting(key, value)
            .map_err(ConsoleError::from)?;
        tracing::debug!(key, ?target, "setting applied");
        Ok(())
    }

    /// Security switches are project state on the server, not session state.
    pub(crate) async fn set_security(
        &mut self,
        key: &str,
        value: &SecurityValue,
    ) -> anyhow::Result<()> {
        let project = self.project()?;
        self.meta.update_security(&project, key, value).await?;
        self.sink.progress("OK");
        Ok(())
    }

    pub(crate) async fn set_project(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let project = self.project()?;
        self.meta.set_project_property(&project, key, value).await?;
        self.sink.progress("OK");
        Ok(())
    }

    pub(crate) fn show_flags(&self) -> anyhow::Result<()> {
        let session = &self.session;
        let text = match self.format() {
            OutputFormat::Json => to_json(&flags_json(session))?,
            OutputFormat::Text => {
                let mut text = render_description(&flags_description(session), OutputFormat::Text)?;
                for (title, map) in [
                    ("settings", &session.settings),
                    ("aliases", &session.aliases),
                    ("hooks", &session.hooks),
                ] {
                    if !map.is_empty() {
                        text.push_str(&format!("\n[{title}]\n{}", key_value_lines(map)));
                    }
                }
                text.push_str("\n[fallback]");
                for (flag, enabled) in session.fallback.entries() {
                    text.push_str(&format!("\n{FALLBACK_KEY_PREFIX}{}={enabled}", flag.key()));
                }
                text
            }
        };
        self.emit(&text);
        Ok(())
    }

    /// Before-hook: record the statement on the diagnostic channel and in the log.
    pub(crate) fn audit(&self, statement: &str) {
        tracing::info!(target: "oc::audit", project = ?self.session.project(), statement);
        self.sink.progress(&format!("audit: {statement}"));
    }
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn key_value_lines(map: &KeyValueMap) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn flags_description(session: &SessionContext) -> Description {
    Description::default()
        .field("Project", or_dash(session.project()))
        .field("Schema", or_dash(session.schema()))
        .field("Retry count", session.retry_count.to_string())
        .field("Async", session.flags.async_mode.to_string())
        .field("Dry run", session.flags.dry_run.to_string())
        .field("Machine readable", session.flags.machine_readable.to_string())
        .field("Interactive", session.flags.interactive.to_string())
        .field("Priority", session.priority.map_or_else(|| "-".into(), |p| p.to_string()))
        .field("Running cluster", or_dash(session.running_cluster.as_deref()))
        .field("Timezone", or_dash(session.timezone()))
        .field("Quota", or_dash(session.quota.as_deref()))
        .field("Namespace schema", session.namespace_schema.to_string())
        .field("Session", or_dash(session.attached_session()))
}

fn flags_json(session: &SessionContext) -> Value {
    let fallback: Map<String, Value> = session
        .fallback
        .entries()
        .map(|(flag, enabled)| (flag.key().to_string(), Value::Bool(enabled)))
        .collect();
    json!({
        "project": session.project(),
        "schema": session.schema(),
        "retry_count": session.retry_count,
        "async": session.flags.async_mode,
        "dry_run": session.flags.dry_run,
        "machine_readable": session.flags.machine_readable,
        "interactive": session.flags.interactive,
        "priority": session.priority,
        "running_cluster": session.running_cluster,
        "timezone": session.timezone(),
        "quota": session.quota,
        "namespace_schema": session.namespace_schema,
        "session": session.attached_session(),
        "settings": session.settings.as_map(),
        "aliases": session.aliases.as_map(),
        "hooks": session.hooks.as_map(),
        "fallback": fallback,
    })
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
