// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! Arkworks-backed Groth16 collaborator adapters (BN254).
//!
//! Three pieces bridge `ark-groth16` artifacts and the marshalling
//! pipeline:
//!
//! - [`proof_to_value`] renders a proof in the proving library's JSON
//!   object shape (`pi_a`/`pi_b`/`pi_c`, projective with z = 1, decimal
//!   strings), ready for normalization.
//! - [`Groth16CalldataExporter`] produces the solidity calldata text
//!   format from a normalized proof object: 0x-padded 256-bit hex groups,
//!   with G2 coordinate limbs emitted c1-before-c0 as the EVM pairing
//!   precompile expects.
//! - [`Groth16EntryPoint`] plays the deployed verifier: it decodes the
//!   positional argument strings back into curve points and runs the
//!   pairing check. `(0, 0)` decodes as the identity (the precompile's
//!   convention), so an all-zero argument tuple verifies to `false`
//!   rather than failing the call; genuinely off-curve points fail the
//!   call the way a contract would revert.

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use ark_snark::SNARK;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::args::VerifierArguments;
use crate::error::{SnarkCallError, SnarkCallResult};
use crate::flow::CalldataExporter;
use crate::value::{parse_bigint, Value};
use crate::verify::VerificationEntryPoint;

// ---------------------------------------------------------------------------
// Field-element rendering
// ---------------------------------------------------------------------------

pub fn fq_to_biguint(x: &Fq) -> BigUint {
    BigUint::from_bytes_be(&x.into_bigint().to_bytes_be())
}

pub fn fr_to_dec(x: &Fr) -> String {
    BigUint::from_bytes_be(&x.into_bigint().to_bytes_be()).to_str_radix(10)
}

fn fq_to_dec(x: &Fq) -> String {
    fq_to_biguint(x).to_str_radix(10)
}

/// 0x-prefixed, zero-padded 256-bit hex — the calldata token format.
fn p256(n: &BigUint) -> String {
    format!("0x{n:064x}")
}

// ---------------------------------------------------------------------------
// Proof object in the proving library's shape
// ---------------------------------------------------------------------------

/// Render an arkworks proof as the library-style proof object.
///
/// Coordinates are decimal strings so the result round-trips through
/// [`normalize`](crate::value::normalize) exactly like a proof parsed
/// from the proving library's JSON output.
pub fn proof_to_value(proof: &Proof<Bn254>) -> Value {
    let one = || Value::Text("1".into());
    let zero = || Value::Text("0".into());
    let g1 = |p: &G1Affine| {
        let (x, y) = p.xy().unwrap_or((Fq::zero(), Fq::zero()));
        Value::Seq(vec![
            Value::Text(fq_to_dec(&x)),
            Value::Text(fq_to_dec(&y)),
            one(),
        ])
    };
    let (bx, by) = proof
        .b
        .xy()
        .unwrap_or((Fq2::zero(), Fq2::zero()));
    let fq2 = |v: &Fq2| {
        Value::Seq(vec![
            Value::Text(fq_to_dec(&v.c0)),
            Value::Text(fq_to_dec(&v.c1)),
        ])
    };

    Value::Map(vec![
        ("pi_a".into(), g1(&proof.a)),
        (
            "pi_b".into(),
            Value::Seq(vec![fq2(&bx), fq2(&by), Value::Seq(vec![one(), zero()])]),
        ),
        ("pi_c".into(), g1(&proof.c)),
        ("protocol".into(), Value::Text("groth16".into())),
        ("curve".into(), Value::Text("bn128".into())),
    ])
}

// ---------------------------------------------------------------------------
// Calldata export
// ---------------------------------------------------------------------------

/// Calldata exporter for Groth16 proof objects.
pub struct Groth16CalldataExporter;

impl CalldataExporter for Groth16CalldataExporter {
    fn export_solidity_calldata(
        &self,
        proof: &Value,
        public_signals: &Value,
    ) -> SnarkCallResult<String> {
        let a = point_limbs(proof, "pi_a", 2)?;
        let c = point_limbs(proof, "pi_c", 2)?;
        let b = match proof.get("pi_b") {
            Some(Value::Seq(rows)) if rows.len() >= 2 => {
                (fq2_limbs(&rows[0])?, fq2_limbs(&rows[1])?)
            }
            _ => {
                return Err(SnarkCallError::MalformedInput(
                    "proof object has no pi_b coordinate rows".into(),
                ))
            }
        };
        let signals = match public_signals {
            Value::Seq(items) => items
                .iter()
                .map(int_of)
                .collect::<SnarkCallResult<Vec<BigUint>>>()?,
            _ => {
                return Err(SnarkCallError::MalformedInput(
                    "public signals must be a sequence".into(),
                ))
            }
        };

        let ((bx0, bx1), (by0, by1)) = b;
        let input = signals
            .iter()
            .map(|n| format!("\"{}\"", p256(n)))
            .collect::<Vec<_>>()
            .join(",");

        // G2 limbs go out c1-first
        Ok(format!(
            "[\"{}\", \"{}\"],[[\"{}\", \"{}\"],[\"{}\", \"{}\"]],[\"{}\", \"{}\"],[{}]",
            p256(&a[0]),
            p256(&a[1]),
            p256(&bx1),
            p256(&bx0),
            p256(&by1),
            p256(&by0),
            p256(&c[0]),
            p256(&c[1]),
            input,
        ))
    }
}

fn int_of(v: &Value) -> SnarkCallResult<BigUint> {
    match v {
        Value::Int(n) => Ok(n.clone()),
        Value::Text(s) => parse_bigint(s).ok_or_else(|| {
            SnarkCallError::MalformedInput(format!("{s:?} is not an integer literal"))
        }),
        other => Err(SnarkCallError::MalformedInput(format!(
            "expected an integer, found {other:?}"
        ))),
    }
}

fn point_limbs(proof: &Value, key: &str, count: usize) -> SnarkCallResult<Vec<BigUint>> {
    match proof.get(key) {
        Some(Value::Seq(items)) if items.len() >= count => {
            items[..count].iter().map(int_of).collect()
        }
        _ => Err(SnarkCallError::MalformedInput(format!(
            "proof object field {key:?} is missing or too short"
        ))),
    }
}

fn fq2_limbs(row: &Value) -> SnarkCallResult<(BigUint, BigUint)> {
    match row {
        Value::Seq(limbs) if limbs.len() >= 2 => Ok((int_of(&limbs[0])?, int_of(&limbs[1])?)),
        _ => Err(SnarkCallError::MalformedInput(
            "pi_b coordinate row must hold two limbs".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Verification entry point
// ---------------------------------------------------------------------------

/// In-process stand-in for a deployed Groth16 verifier contract.
pub struct Groth16EntryPoint {
    pvk: PreparedVerifyingKey<Bn254>,
}

impl Groth16EntryPoint {
    pub fn new(vk: VerifyingKey<Bn254>) -> Self {
        Self {
            pvk: PreparedVerifyingKey::from(vk),
        }
    }
}

impl VerificationEntryPoint for Groth16EntryPoint {
    fn verify_proof(&self, args: &VerifierArguments) -> SnarkCallResult<bool> {
        let VerifierArguments::Groth16(g) = args else {
            return Err(SnarkCallError::VerificationCall(
                "entry point takes groth16 arguments".into(),
            ));
        };
        let proof = Proof {
            a: g1_from_tokens(&g.a)?,
            b: g2_from_tokens(&g.b)?,
            c: g1_from_tokens(&g.c)?,
        };
        let input = g
            .input
            .iter()
            .map(|s| fr_from_token(s))
            .collect::<SnarkCallResult<Vec<Fr>>>()?;

        // Mismatched input length surfaces as a failed call, the same way
        // a contract invoked with a wrong-arity tuple reverts.
        Groth16::<Bn254>::verify_with_processed_vk(&self.pvk, &input, &proof)
            .map_err(|e| SnarkCallError::VerificationCall(e.to_string()))
    }
}

fn fq_from_token(s: &str) -> SnarkCallResult<Fq> {
    let n = parse_bigint(s).ok_or_else(|| {
        SnarkCallError::MalformedInput(format!("coordinate {s:?} is not an integer literal"))
    })?;
    Ok(Fq::from(n))
}

fn fr_from_token(s: &str) -> SnarkCallResult<Fr> {
    let n = parse_bigint(s).ok_or_else(|| {
        SnarkCallError::MalformedInput(format!("signal {s:?} is not an integer literal"))
    })?;
    Ok(Fr::from(n))
}

fn g1_from_tokens(xy: &[String; 2]) -> SnarkCallResult<G1Affine> {
    let x = fq_from_token(&xy[0])?;
    let y = fq_from_token(&xy[1])?;
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::identity());
    }
    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(SnarkCallError::VerificationCall(
            "G1 point not on curve".into(),
        ));
    }
    Ok(p)
}

fn g2_from_tokens(b: &[[String; 2]; 2]) -> SnarkCallResult<G2Affine> {
    // the calldata shape carries limbs c1-first; undo that here
    let x = Fq2::new(fq_from_token(&b[0][1])?, fq_from_token(&b[0][0])?);
    let y = Fq2::new(fq_from_token(&b[1][1])?, fq_from_token(&b[1][0])?);
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::identity());
    }
    let p = G2Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(SnarkCallError::VerificationCall(
            "G2 point not on curve".into(),
        ));
    }
    Ok(p)
}
