// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! Typed verifier-call arguments, built from parsed calldata tokens.
//!
//! The argument shapes mirror the verifier contracts' entry points:
//! `verifyProof(uint[2], uint[2][2], uint[2], uint[])` for Groth16 and
//! `verifyProof(bytes, uint[])` for PLONK. Numeric fields are canonical
//! decimal strings; the PLONK proof blob is carried verbatim.

use serde::Serialize;

use crate::calldata::{Scheme, GROTH16_FIXED_TOKENS};
use crate::error::{SnarkCallError, SnarkCallResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Groth16Args {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
    pub input: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlonkArgs {
    pub proof: String,
    pub input: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VerifierArguments {
    Groth16(Groth16Args),
    Plonk(PlonkArgs),
}

impl VerifierArguments {
    pub fn scheme(&self) -> Scheme {
        match self {
            VerifierArguments::Groth16(_) => Scheme::Groth16,
            VerifierArguments::Plonk(_) => Scheme::Plonk,
        }
    }
}

/// Assemble parsed tokens into the scheme's argument shape.
///
/// Groth16: `A = [t0,t1]`, `B = [[t2,t3],[t4,t5]]`, `C = [t6,t7]`,
/// `input = tokens[8..]` (may be empty). PLONK: `proof = t0`,
/// `input = tokens[1..]` (must be non-empty).
pub fn build_arguments(tokens: &[String], scheme: Scheme) -> SnarkCallResult<VerifierArguments> {
    match scheme {
        Scheme::Groth16 => {
            if tokens.len() < GROTH16_FIXED_TOKENS {
                return Err(SnarkCallError::ArgumentShape(format!(
                    "groth16 arguments need {GROTH16_FIXED_TOKENS} fixed tokens, got {}",
                    tokens.len()
                )));
            }
            let t = |i: usize| tokens[i].clone();
            Ok(VerifierArguments::Groth16(Groth16Args {
                a: [t(0), t(1)],
                b: [[t(2), t(3)], [t(4), t(5)]],
                c: [t(6), t(7)],
                input: tokens[GROTH16_FIXED_TOKENS..].to_vec(),
            }))
        }
        Scheme::Plonk => {
            if tokens.len() < 2 {
                return Err(SnarkCallError::ArgumentShape(
                    "plonk arguments need at least one public signal".into(),
                ));
            }
            Ok(VerifierArguments::Plonk(PlonkArgs {
                proof: tokens[0].clone(),
                input: tokens[1..].to_vec(),
            }))
        }
    }
}
