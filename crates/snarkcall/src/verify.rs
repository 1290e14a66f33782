// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! Verification entry-point seam.
//!
//! The deployed verifier is an external collaborator; callers inject a
//! handle instead of capturing it from ambient fixtures. The contract of
//! the seam: a proof that executes verification and fails yields
//! `Ok(false)`, **never** an error — errors mean the call itself did not
//! execute (revert, transport failure, wrong argument scheme).

use crate::args::VerifierArguments;
use crate::error::SnarkCallResult;

/// Handle to a deployed verification entry point.
pub trait VerificationEntryPoint {
    /// Invoke the verifier with marshalled arguments.
    ///
    /// `Ok(false)` is the documented negative result for a mismatched or
    /// deliberately malformed proof; [`SnarkCallError::VerificationCall`]
    /// (or another variant) is reserved for calls that failed to execute.
    ///
    /// [`SnarkCallError::VerificationCall`]: crate::SnarkCallError::VerificationCall
    fn verify_proof(&self, args: &VerifierArguments) -> SnarkCallResult<bool>;
}

impl<T: VerificationEntryPoint + ?Sized> VerificationEntryPoint for &T {
    fn verify_proof(&self, args: &VerifierArguments) -> SnarkCallResult<bool> {
        (**self).verify_proof(args)
    }
}
