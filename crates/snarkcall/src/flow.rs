// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! End-to-end verification flow over injected collaborators.
//!
//! prover → normalize → calldata export → parse → build arguments →
//! entry point. Each collaborator is a trait so a flow can run against a
//! real proving stack, an in-process arkworks adapter, or a stub — the
//! flow itself owns no state and can run concurrently against
//! independent collaborator instances.

use std::path::{Path, PathBuf};

use crate::args::{build_arguments, VerifierArguments};
use crate::calldata::{parse_calldata, Scheme};
use crate::error::SnarkCallResult;
use crate::value::{normalize, Value};
use crate::verify::VerificationEntryPoint;

/// Compiled circuit artifacts the prover consumes.
#[derive(Debug, Clone)]
pub struct CircuitArtifacts {
    pub wasm: PathBuf,
    pub zkey: PathBuf,
}

impl CircuitArtifacts {
    pub fn new(wasm: impl Into<PathBuf>, zkey: impl Into<PathBuf>) -> Self {
        Self {
            wasm: wasm.into(),
            zkey: zkey.into(),
        }
    }
}

/// Proof generation collaborator.
///
/// `inputs` are (signal name, field-element string) pairs; the returned
/// public signals keep the order the circuit declared them in.
pub trait Prover {
    fn full_prove(
        &self,
        inputs: &[(&str, &str)],
        wasm: &Path,
        zkey: &Path,
    ) -> SnarkCallResult<(Value, Vec<String>)>;
}

/// Calldata export collaborator; scheme-specific formatting is the
/// implementation's business.
pub trait CalldataExporter {
    fn export_solidity_calldata(
        &self,
        proof: &Value,
        public_signals: &Value,
    ) -> SnarkCallResult<String>;
}

/// Marshal an already-produced proof into verifier arguments.
///
/// The full pipeline minus the prover: normalize both artifacts, export
/// calldata, tokenize, build the argument tuple.
pub fn marshal_proof(
    exporter: &dyn CalldataExporter,
    proof: &Value,
    public_signals: &[String],
    scheme: Scheme,
) -> SnarkCallResult<VerifierArguments> {
    let proof = normalize(proof)?;
    let signals = normalize(&Value::Seq(
        public_signals
            .iter()
            .map(|s| Value::Text(s.clone()))
            .collect(),
    ))?;
    let calldata = exporter.export_solidity_calldata(&proof, &signals)?;
    let tokens = parse_calldata(&calldata, scheme)?;
    build_arguments(&tokens, scheme)
}

/// Run one proof/verification flow end to end, returning the verifier's
/// boolean verdict.
pub fn run_verification(
    prover: &dyn Prover,
    exporter: &dyn CalldataExporter,
    entry_point: &dyn VerificationEntryPoint,
    inputs: &[(&str, &str)],
    artifacts: &CircuitArtifacts,
    scheme: Scheme,
) -> SnarkCallResult<bool> {
    let (proof, public_signals) = prover.full_prove(inputs, &artifacts.wasm, &artifacts.zkey)?;
    let args = marshal_proof(exporter, &proof, &public_signals, scheme)?;
    entry_point.verify_proof(&args)
}
