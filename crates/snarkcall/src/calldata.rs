// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! Tokenizer for exported solidity calldata strings.
//!
//! A proving library's calldata export is a quoted, bracketed,
//! comma-separated list of integer tokens. Stripping `"`, `[`, `]` and
//! whitespace and splitting on `,` yields exactly `8 + n` tokens for a
//! Groth16 proof with `n` public signals, and `1 + n` tokens for PLONK
//! (an opaque proof blob followed by the signals).

use crate::error::{SnarkCallError, SnarkCallResult};
use crate::value::parse_bigint;

/// Proof scheme tag, selects the calldata grammar and argument shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Groth16,
    Plonk,
}

/// Fixed Groth16 field count: A (2) + B (4) + C (2).
pub const GROTH16_FIXED_TOKENS: usize = 8;

/// Split a calldata string into canonical tokens.
///
/// Every numeric token is re-rendered as a decimal integer string (hex
/// accepted on input). For [`Scheme::Plonk`], token 0 is the opaque proof
/// blob and is passed through byte-for-byte, even if it looks numeric.
pub fn parse_calldata(raw: &str, scheme: Scheme) -> SnarkCallResult<Vec<String>> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '"' | '[' | ']') && !c.is_whitespace())
        .collect();
    let tokens: Vec<&str> = cleaned.split(',').collect();

    match scheme {
        Scheme::Groth16 => {
            if tokens.len() < GROTH16_FIXED_TOKENS {
                return Err(SnarkCallError::CalldataFormat(format!(
                    "groth16 calldata needs at least {GROTH16_FIXED_TOKENS} tokens, got {}",
                    tokens.len()
                )));
            }
            tokens.iter().map(|t| canonical_decimal(t)).collect()
        }
        Scheme::Plonk => {
            if tokens[0].is_empty() {
                return Err(SnarkCallError::CalldataFormat(
                    "plonk calldata has an empty proof token".into(),
                ));
            }
            let mut out = Vec::with_capacity(tokens.len());
            out.push(tokens[0].to_string());
            for t in &tokens[1..] {
                out.push(canonical_decimal(t)?);
            }
            Ok(out)
        }
    }
}

fn canonical_decimal(token: &str) -> SnarkCallResult<String> {
    parse_bigint(token)
        .map(|n| n.to_str_radix(10))
        .ok_or_else(|| {
            SnarkCallError::CalldataFormat(format!("token {token:?} is not an integer literal"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groth16_strips_and_splits() {
        let raw = r#"["0x1", "0x2"],[["3", "4"],["5", "6"]],["7", "8"],["2"]"#;
        let tokens = parse_calldata(raw, Scheme::Groth16).unwrap();
        assert_eq!(tokens, ["1", "2", "3", "4", "5", "6", "7", "8", "2"]);
    }

    #[test]
    fn groth16_token_count_tracks_signals() {
        for n in 0..4 {
            let mut parts: Vec<String> = (1..=8).map(|i| i.to_string()).collect();
            parts.extend((0..n).map(|i| i.to_string()));
            let raw = parts.join(",");
            let tokens = parse_calldata(&raw, Scheme::Groth16).unwrap();
            assert_eq!(tokens.len(), GROTH16_FIXED_TOKENS + n);
        }
    }

    #[test]
    fn groth16_hex_is_canonicalized_to_decimal() {
        let raw = "0xff,0x0,1,2,3,4,5,6";
        let tokens = parse_calldata(raw, Scheme::Groth16).unwrap();
        assert_eq!(tokens[0], "255");
        assert_eq!(tokens[1], "0");
    }

    #[test]
    fn groth16_too_few_tokens_fails() {
        let raw = "1,2,3,4,5,6,7";
        match parse_calldata(raw, Scheme::Groth16) {
            Err(SnarkCallError::CalldataFormat(_)) => {}
            other => panic!("expected CalldataFormat, got {other:?}"),
        }
    }

    #[test]
    fn groth16_non_integer_token_fails() {
        let raw = "1,2,3,4,bad,6,7,8";
        match parse_calldata(raw, Scheme::Groth16) {
            Err(SnarkCallError::CalldataFormat(_)) => {}
            other => panic!("expected CalldataFormat, got {other:?}"),
        }
    }

    #[test]
    fn plonk_proof_token_is_passed_through() {
        let tokens = parse_calldata(r#""0xabc123", "5""#, Scheme::Plonk).unwrap();
        assert_eq!(tokens, ["0xabc123", "5"]);
    }

    #[test]
    fn plonk_numeric_looking_proof_is_not_parsed() {
        // token 0 could parse as hex; it must still come back verbatim
        let tokens = parse_calldata("0x0f,0x0f", Scheme::Plonk).unwrap();
        assert_eq!(tokens[0], "0x0f");
        assert_eq!(tokens[1], "15");
    }

    #[test]
    fn plonk_empty_proof_token_fails() {
        match parse_calldata("", Scheme::Plonk) {
            Err(SnarkCallError::CalldataFormat(_)) => {}
            other => panic!("expected CalldataFormat, got {other:?}"),
        }
    }

    #[test]
    fn plonk_bad_signal_fails() {
        match parse_calldata("0xabc,not-a-number", Scheme::Plonk) {
            Err(SnarkCallError::CalldataFormat(_)) => {}
            other => panic!("expected CalldataFormat, got {other:?}"),
        }
    }
}
