// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! # snarkcall
//!
//! Glue between a zero-knowledge proving stack and the solidity
//! verifiers it generates: normalize raw proof artifacts, marshal them
//! into the exact positional argument tuple a verifier's entry point
//! expects (Groth16 and PLONK shapes), invoke the entry point through an
//! injected handle, and patch generated verifier sources.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`value`] | `Value` sum type + recursive string → bigint normalization |
//! | [`calldata`] | Exported-calldata tokenizer, per-scheme grammar |
//! | [`args`] | Token groups → typed verifier argument tuples |
//! | [`verify`] | `VerificationEntryPoint` seam (`false` ≠ error) |
//! | [`flow`] | Collaborator traits and the end-to-end flow |
//! | [`groth16`] | Arkworks-backed exporter and entry point (BN254) |
//! | [`patch`] | Pragma/contract-name patching of generated sources |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use snarkcall::{CircuitArtifacts, Scheme};
//!
//! # fn example(
//! #     prover: &dyn snarkcall::Prover,
//! #     exporter: &dyn snarkcall::CalldataExporter,
//! #     entry_point: &dyn snarkcall::VerificationEntryPoint,
//! # ) -> snarkcall::SnarkCallResult<()> {
//! let artifacts = CircuitArtifacts::new(
//!     "contracts/circuits/HelloWorld/HelloWorld.wasm",
//!     "contracts/circuits/HelloWorld/circuit_final.zkey",
//! );
//! let verdict = snarkcall::run_verification(
//!     prover,
//!     exporter,
//!     entry_point,
//!     &[("a", "1"), ("b", "2")],
//!     &artifacts,
//!     Scheme::Groth16,
//! )?;
//! assert!(verdict);
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod calldata;
pub mod error;
pub mod flow;
pub mod groth16;
pub mod patch;
pub mod value;
pub mod verify;

pub use args::{build_arguments, Groth16Args, PlonkArgs, VerifierArguments};
pub use calldata::{parse_calldata, Scheme, GROTH16_FIXED_TOKENS};
pub use error::{SnarkCallError, SnarkCallResult};
pub use flow::{marshal_proof, run_verification, CalldataExporter, CircuitArtifacts, Prover};
pub use patch::{apply_rules, patch_file, PatchRule, Pattern};
pub use value::{normalize, parse_bigint, Value};
pub use verify::VerificationEntryPoint;
