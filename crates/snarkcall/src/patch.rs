// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! Textual patching of generated verifier contract sources.
//!
//! Code generators emit verifiers with a stale version pragma and a
//! generic contract name; deploying several fixtures side by side needs
//! both rewritten. Rules apply in order, each substituting its first
//! match. A rule whose pattern is absent but whose replacement is
//! already present is a no-op, so patching an already-patched file is
//! idempotent; a rule matching neither fails loudly instead of silently
//! producing unchanged output when the generator's format drifts.

use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::Context;

use crate::error::{SnarkCallError, SnarkCallResult};

/// What a rule looks for.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact substring.
    Literal(String),
    /// `pragma solidity ^X.Y.Z` with any numeric version.
    SolidityPragma,
}

impl Pattern {
    fn find(&self, text: &str) -> Option<Range<usize>> {
        match self {
            Pattern::Literal(lit) => text.find(lit.as_str()).map(|i| i..i + lit.len()),
            Pattern::SolidityPragma => find_pragma(text),
        }
    }

    fn describe(&self) -> String {
        match self {
            Pattern::Literal(lit) => format!("{lit:?}"),
            Pattern::SolidityPragma => "solidity version pragma".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatchRule {
    pub pattern: Pattern,
    pub replacement: String,
}

impl PatchRule {
    /// Bump the version pragma to the given version.
    pub fn pragma(version: &str) -> Self {
        Self {
            pattern: Pattern::SolidityPragma,
            replacement: format!("pragma solidity ^{version}"),
        }
    }

    /// Rename a contract declaration.
    pub fn rename_contract(from: &str, to: &str) -> Self {
        Self {
            pattern: Pattern::Literal(format!("contract {from}")),
            replacement: format!("contract {to}"),
        }
    }
}

/// Apply every rule in order, returning the transformed source.
pub fn apply_rules(source: &str, rules: &[PatchRule]) -> SnarkCallResult<String> {
    let mut out = source.to_string();
    for rule in rules {
        out = apply_rule(&out, rule)?;
    }
    Ok(out)
}

fn apply_rule(text: &str, rule: &PatchRule) -> SnarkCallResult<String> {
    if let Some(range) = rule.pattern.find(text) {
        let mut out = String::with_capacity(text.len() + rule.replacement.len());
        out.push_str(&text[..range.start]);
        out.push_str(&rule.replacement);
        out.push_str(&text[range.end..]);
        Ok(out)
    } else if text.contains(rule.replacement.as_str()) {
        // already patched
        Ok(text.to_string())
    } else {
        Err(SnarkCallError::PatternNotFound(rule.pattern.describe()))
    }
}

fn find_pragma(text: &str) -> Option<Range<usize>> {
    const PREFIX: &str = "pragma solidity ^";
    let start = text.find(PREFIX)?;
    let version = version_len(&text[start + PREFIX.len()..])?;
    Some(start..start + PREFIX.len() + version)
}

/// Length of a leading `X.Y.Z` numeric version, if present.
fn version_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut n = 0;
    for part in 0..3 {
        if part > 0 {
            if bytes.get(n) != Some(&b'.') {
                return None;
            }
            n += 1;
        }
        let digits_start = n;
        while bytes.get(n).is_some_and(u8::is_ascii_digit) {
            n += 1;
        }
        if n == digits_start {
            return None;
        }
    }
    Some(n)
}

/// Read, patch, and rewrite a source file in place.
pub fn patch_file(path: &Path, rules: &[PatchRule]) -> anyhow::Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let patched = apply_rules(&source, rules)?;
    fs::write(path, patched).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
