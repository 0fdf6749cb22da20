// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statement grammars and the resolver that picks one of them.

mod describe;
mod instance;
mod job;
mod listing;
mod names;
mod passthrough;
pub mod registry;
mod resolver;
mod resource;
mod session;

pub use names::QualifiedName;
pub use registry::{grammars_for, Grammar, GRAMMARS};
pub use resolver::{resolve, resolve_script, resolve_statement};
