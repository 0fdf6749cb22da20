// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::lexer::{Token, TokenKind};
use std::fmt;

/// `partition(k1='v1', k2=v2)` as ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionSpec(Vec<(String, String)>);

impl PartitionSpec {
    /// Build from the tokens inside the parentheses.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, String> {
        let mut pairs = Vec::new();
        for group in tokens.split(|t| t.kind == TokenKind::Comma) {
            let text: String = group.iter().map(|t| t.text.as_str()).collect();
            let (key, value) = text
                .split_once('=')
                .ok_or_else(|| format!("invalid partition spec '{text}', expected key=value"))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("invalid partition spec '{text}', missing column name"));
            }
            pairs.push((key.to_string(), value.trim().to_string()));
        }
        if pairs.is_empty() {
            return Err("empty partition spec".to_string());
        }
        Ok(Self(pairs))
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl fmt::Display for PartitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{k}='{v}'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod tests;
