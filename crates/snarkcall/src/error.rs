// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! Typed errors for the marshalling pipeline.
//!
//! A verification call that executes and returns `false` is **not** an
//! error — [`VerificationCall`](SnarkCallError::VerificationCall) is
//! reserved for calls that failed to execute at all (revert, transport).

#[derive(Debug, thiserror::Error)]
pub enum SnarkCallError {
    /// A string that was expected to be an integer literal is not one,
    /// or a structure is nested beyond any sane proof-object depth.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Calldata token count or token content violates the grammar.
    #[error("calldata format: {0}")]
    CalldataFormat(String),

    /// Parsed token count is insufficient for the declared scheme.
    #[error("argument shape: {0}")]
    ArgumentShape(String),

    /// The verification call itself failed to execute (as opposed to
    /// executing and returning `false`).
    #[error("verification call: {0}")]
    VerificationCall(String),

    /// A mandatory textual pattern was absent during source patching.
    #[error("pattern not found: {0}")]
    PatternNotFound(String),

    /// Prover-defined failure (inputs do not satisfy the circuit, missing
    /// artifacts, ...).
    #[error("prover: {0}")]
    Prover(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SnarkCallResult<T> = Result<T, SnarkCallError>;
