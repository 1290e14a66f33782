// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! PLONK flows against stub collaborators. The PLONK proof blob is
//! opaque end to end — these tests pin down that the pipeline never
//! parses or reshapes it.

use std::path::Path;

use snarkcall::{
    build_arguments, parse_calldata, run_verification, CalldataExporter, CircuitArtifacts,
    PlonkArgs, Prover, Scheme, SnarkCallError, SnarkCallResult, Value, VerificationEntryPoint,
    VerifierArguments,
};

/// Stands in for the external PLONK prover; the proof object itself is
/// irrelevant here because the stub exporter owns the blob.
struct StubPlonkProver {
    signal: String,
}

impl Prover for StubPlonkProver {
    fn full_prove(
        &self,
        _inputs: &[(&str, &str)],
        _wasm: &Path,
        _zkey: &Path,
    ) -> SnarkCallResult<(Value, Vec<String>)> {
        let proof = Value::Map(vec![
            ("protocol".into(), Value::Text("plonk".into())),
            ("curve".into(), Value::Text("bn128".into())),
        ]);
        Ok((proof, vec![self.signal.clone()]))
    }
}

/// Emits the scheme's calldata shape: one quoted proof blob, then the
/// signals.
struct StubPlonkExporter {
    blob: String,
}

impl CalldataExporter for StubPlonkExporter {
    fn export_solidity_calldata(
        &self,
        _proof: &Value,
        public_signals: &Value,
    ) -> SnarkCallResult<String> {
        let Value::Seq(signals) = public_signals else {
            return Err(SnarkCallError::MalformedInput(
                "public signals must be a sequence".into(),
            ));
        };
        let rendered = signals
            .iter()
            .map(|s| match s {
                Value::Int(n) => Ok(format!("\"{}\"", n.to_str_radix(10))),
                other => Err(SnarkCallError::MalformedInput(format!(
                    "expected an integer signal, found {other:?}"
                ))),
            })
            .collect::<SnarkCallResult<Vec<String>>>()?
            .join(",");
        Ok(format!("[\"{}\", {rendered}]", self.blob))
    }
}

/// Deployed-verifier stand-in: accepts exactly one (proof, signals)
/// pair, reports everything else as `false`.
struct StubPlonkEntryPoint {
    expected_proof: String,
    expected_input: Vec<String>,
}

impl VerificationEntryPoint for StubPlonkEntryPoint {
    fn verify_proof(&self, args: &VerifierArguments) -> SnarkCallResult<bool> {
        match args {
            VerifierArguments::Plonk(p) => {
                Ok(p.proof == self.expected_proof && p.input == self.expected_input)
            }
            VerifierArguments::Groth16(_) => Err(SnarkCallError::VerificationCall(
                "entry point takes plonk arguments".into(),
            )),
        }
    }
}

#[test]
fn valid_plonk_proof_verifies_true() {
    let blob = "0xabc123".to_string();
    let prover = StubPlonkProver {
        signal: "5".into(),
    };
    let exporter = StubPlonkExporter { blob: blob.clone() };
    let entry = StubPlonkEntryPoint {
        expected_proof: blob,
        expected_input: vec!["5".into()],
    };
    let artifacts = CircuitArtifacts::new(
        "contracts/circuits/_plonkMultiplier3/Multiplier3.wasm",
        "contracts/circuits/_plonkMultiplier3/circuit_final.zkey",
    );
    let verdict = run_verification(
        &prover,
        &exporter,
        &entry,
        &[("a", "1"), ("b", "2"), ("c", "4")],
        &artifacts,
        Scheme::Plonk,
    )
    .unwrap();
    assert!(verdict);
}

#[test]
fn mismatched_plonk_proof_verifies_false_not_error() {
    let entry = StubPlonkEntryPoint {
        expected_proof: "0xabc123".into(),
        expected_input: vec!["5".into()],
    };
    let args = VerifierArguments::Plonk(PlonkArgs {
        proof: "0x00".into(),
        input: vec!["0".into()],
    });
    assert_eq!(entry.verify_proof(&args).unwrap(), false);
}

#[test]
fn proof_blob_is_opaque_through_the_pipeline() {
    // blob parses as hex, signals as decimal; only the signals may be
    // re-rendered
    let tokens = parse_calldata(r#""0xabc123", "0x5""#, Scheme::Plonk).unwrap();
    assert_eq!(tokens[0], "0xabc123");
    assert_eq!(tokens[1], "5");

    let args = build_arguments(&tokens, Scheme::Plonk).unwrap();
    let VerifierArguments::Plonk(p) = args else {
        panic!("expected plonk arguments")
    };
    assert_eq!(p.proof, "0xabc123");
    assert_eq!(p.input, ["5"]);
}

#[test]
fn wrong_scheme_is_a_failed_call() {
    let entry = StubPlonkEntryPoint {
        expected_proof: "0xabc123".into(),
        expected_input: vec!["5".into()],
    };
    let tokens: Vec<String> = ["1", "2", "3", "4", "5", "6", "7", "8"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let args = build_arguments(&tokens, Scheme::Groth16).unwrap();
    match entry.verify_proof(&args) {
        Err(SnarkCallError::VerificationCall(_)) => {}
        other => panic!("expected VerificationCall, got {other:?}"),
    }
}
