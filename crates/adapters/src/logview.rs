// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitoring links for remote jobs.

use oc_core::JobId;

pub trait LogViewLinker: Clone + Send + Sync + 'static {
    fn link(&self, job: &JobId) -> Option<String>;
}

/// Fills `{endpoint}` and `{id}` in a URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLinker {
    template: String,
    endpoint: String,
}

impl TemplateLinker {
    pub fn new(template: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl LogViewLinker for TemplateLinker {
    fn link(&self, job: &JobId) -> Option<String> {
        Some(
            self.template
                .replace("{endpoint}", &self.endpoint)
                .replace("{id}", job.as_str()),
        )
    }
}

impl<L: LogViewLinker> LogViewLinker for Option<L> {
    fn link(&self, job: &JobId) -> Option<String> {
        self.as_ref().and_then(|l| l.link(job))
    }
}

/// No monitoring UI configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLogView;

impl LogViewLinker for NoLogView {
    fn link(&self, _job: &JobId) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_substitutes_endpoint_and_id() {
        let linker = TemplateLinker::new("{endpoint}/logview?h={id}&i={id}", "https://svc");
        assert_eq!(
            linker.link(&JobId::new("2026abc")).as_deref(),
            Some("https://svc/logview?h=2026abc&i=2026abc")
        );
    }

    #[test]
    fn no_log_view_has_no_link() {
        assert_eq!(NoLogView.link(&JobId::new("x")), None);
    }

    #[test]
    fn optional_linker_delegates_when_present() {
        let none: Option<TemplateLinker> = None;
        assert_eq!(none.link(&JobId::new("x")), None);
        let some = Some(TemplateLinker::new("{id}", ""));
        assert_eq!(some.link(&JobId::new("x")).as_deref(), Some("x"));
    }
}
