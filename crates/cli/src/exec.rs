// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution: before-hooks, confirmation, whole-command retry and
//! composite sequencing.

use crate::command::{Command, CommandKind, CompositeCommand};
use crate::context::{Backends, Console};
use crate::error::{is_retryable, request_id, wrap_domain, ConsoleError};
use oc_adapters::Prompter;
use oc_grammar::Statement;

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

type HookConstructor = fn(&Command) -> Command;

/// Hooks a `[hooks]` entry can name.
const HOOK_CONSTRUCTORS: &[(&str, HookConstructor)] = &[("audit", audit_hook), ("whoami", whoami_hook)];

fn audit_hook(target: &Command) -> Command {
    Command::new(
        target.statement.clone(),
        "audit",
        CommandKind::Audit {
            statement: target.statement.normalized.clone(),
        },
    )
}

fn whoami_hook(_: &Command) -> Command {
    Command::new(Statement::new("whoami"), "whoami", CommandKind::WhoAmI)
}

fn hook_for(name: &str) -> Option<HookConstructor> {
    HOOK_CONSTRUCTORS
        .iter()
        .find(|(hook, _)| *hook == name)
        .map(|(_, constructor)| *constructor)
}

impl<B: Backends> Console<B> {
    /// Run one command: hook, confirmation, then `run` with retries.
    pub async fn execute(&mut self, command: &Command) -> anyhow::Result<Flow> {
        self.run_hook(command).await;

        if self.session.flags.interactive
            && !self.session.flags.assume_yes
            && command.needs_confirmation()
            && !self.confirm(command).await
        {
            return Ok(Flow::Continue);
        }

        self.run_with_retry(command).await
    }

    async fn run_hook(&mut self, command: &Command) {
        let Some(name) = self.session.hooks.get(command.family).map(String::from) else {
            return;
        };
        let Some(constructor) = hook_for(&name) else {
            tracing::warn!(family = command.family, hook = %name, "unknown hook");
            return;
        };
        let hook = constructor(command);
        if let Err(err) = self.run(&hook).await {
            tracing::warn!(family = command.family, hook = %name, error = %err, "hook failed");
        }
    }

    /// "no", a closed prompt and Ctrl+C all decline.
    async fn confirm(&self, command: &Command) -> bool {
        let question = format!("Confirm to \"{}\"", command.statement.normalized);
        tokio::select! {
            answer = self.prompter.confirm(&question) => match answer {
                Ok(yes) => yes,
                Err(err) => {
                    tracing::debug!(error = %err, "confirmation not answered");
                    false
                }
            },
            _ = self.interrupt.wait() => {
                self.interrupt.clear();
                false
            }
        }
    }

    /// At most `retry_count` attempts; only remote failures are retried.
    async fn run_with_retry(&mut self, command: &Command) -> anyhow::Result<Flow> {
        let attempts = self.session.retry_count.max(1);
        let mut remaining = attempts;
        loop {
            remaining -= 1;
            let err = match self.run(command).await {
                Ok(flow) => return Ok(flow),
                Err(err) => err,
            };
            if !is_retryable(&err) {
                return Err(err);
            }
            if remaining > 0 {
                tracing::warn!(
                    family = command.family,
                    remaining,
                    error = %err,
                    "command failed, retrying"
                );
                continue;
            }
            if attempts == 1 {
                return Err(err);
            }
            return Err(ConsoleError::RetriesExhausted {
                attempts,
                request_id: request_id(&err),
                message: err.to_string(),
            }
            .into());
        }
    }

    /// Members in order; the first failure stops the rest.
    pub async fn run_composite(&mut self, composite: &CompositeCommand) -> anyhow::Result<Flow> {
        for member in &composite.members {
            match self.execute(member).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(Flow::Quit),
                Err(err) => return Err(wrap_domain(err)),
            }
        }
        Ok(Flow::Continue)
    }

    /// Dispatch on the command kind.
    pub(crate) async fn run(&mut self, command: &Command) -> anyhow::Result<Flow> {
        match &command.kind {
            CommandKind::Quit => return Ok(Flow::Quit),
            CommandKind::Help { keyword } => self.help(keyword.as_deref())?,
            CommandKind::UseQuota { name } => self.use_quota(name),
            CommandKind::UseSchema { name } => self.use_schema(name),
            CommandKind::UseProject { project } => self.use_project(project).await?,
            CommandKind::Attach { session } => self.attach(session).await?,
            CommandKind::Detach => self.detach(),
            CommandKind::WhoAmI => self.whoami()?,
            CommandKind::Alias { entry } => self.alias(entry.as_ref())?,
            CommandKind::Unset { key } => self.unset(key),
            CommandKind::Set { key, value } => self.set(key, value)?,
            CommandKind::SetSecurity { key, value } => self.set_security(key, value).await?,
            CommandKind::SetProject { key, value } => self.set_project(key, value).await?,
            CommandKind::ShowFlags => self.show_flags()?,
            CommandKind::ShowInstances {
                from_ms,
                until_ms,
                limit,
            } => self.show_instances(*from_ms, *until_ms, *limit).await?,
            CommandKind::TopInstance { refresh, limit } => {
                self.top_instance(*refresh, *limit).await?
            }
            CommandKind::Status { id } => self.status(id).await?,
            CommandKind::Wait { id } => self.wait(id).await?,
            CommandKind::Kill { id, sync } => self.kill(id, *sync).await?,
            CommandKind::Describe {
                kind,
                name,
                partition,
                extended,
            } => {
                self.describe(*kind, name, partition.as_ref(), *extended)
                    .await?
            }
            CommandKind::ShowTables {
                project,
                schema,
                pattern,
            } => {
                self.show_tables(project.as_deref(), schema.as_deref(), pattern.as_deref())
                    .await?
            }
            CommandKind::ShowPartitions { table, partition } => {
                self.show_partitions(table, partition.as_ref()).await?
            }
            CommandKind::ShowSchemas { project } => self.show_schemas(project.as_deref()).await?,
            CommandKind::ListProjects => self.list_projects().await?,
            CommandKind::List { kind, project } => self.list(*kind, project.as_deref()).await?,
            CommandKind::ShowSecurityConfiguration => self.show_security_configuration().await?,
            CommandKind::AddResource {
                kind,
                source,
                partition,
                alias,
                comment,
                overwrite,
            } => {
                let spec = self.resource_spec(
                    *kind,
                    source,
                    partition.as_ref(),
                    alias.as_deref(),
                    comment.as_deref(),
                    *overwrite,
                )?;
                self.add_resource(&spec).await?
            }
            CommandKind::DropResource { name } => self.drop_resource(name).await?,
            CommandKind::DropOfflineModel { name, if_exists } => {
                self.drop_offline_model(name, *if_exists).await?
            }
            CommandKind::Read {
                table,
                columns,
                partition,
                limit,
            } => {
                self.read(table, columns, partition.as_ref(), *limit)
                    .await?
            }
            CommandKind::Count { table, partition } => {
                self.count(table, partition.as_ref()).await?
            }
            CommandKind::Pai {
                algorithm,
                project,
                params,
            } => self.pai(algorithm, project.as_deref(), params).await?,
            CommandKind::RunWorkflow { name, params } => self.run_workflow(name, params).await?,
            CommandKind::Security { statement } => self.security(statement).await?,
            CommandKind::Sql { statement } => self.sql(statement).await?,
            CommandKind::Audit { statement } => self.audit(statement),
        }
        Ok(Flow::Continue)
    }
}

impl CompositeCommand {
    pub async fn run<B: Backends>(&self, console: &mut Console<B>) -> anyhow::Result<Flow> {
        console.run_composite(self).await
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
