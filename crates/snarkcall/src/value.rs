// Copyright 2026 snarkcall contributors
// Licensed under the Apache License, Version 2.0

//! Recursive string → bigint normalization over proof artifacts.
//!
//! Proving libraries emit proofs and public signals as nested JSON-ish
//! structures whose field elements are decimal or `0x`-hex *strings*.
//! [`normalize`] walks such a structure and turns every integer-looking
//! string into an arbitrary-precision integer, leaving everything else
//! untouched. Order is preserved throughout: sequences keep element
//! order, mappings keep key insertion order.

use num_bigint::BigUint;

use crate::error::{SnarkCallError, SnarkCallResult};

/// Proof-artifact structures cannot be cyclic (they are owned trees), but
/// a depth bound keeps a pathologically nested input from blowing the
/// stack before it can be rejected.
const MAX_DEPTH: usize = 128;

/// Tagged-variant model of a proof/signal structure.
///
/// Mappings are ordered pairs rather than a hash map so that key order
/// survives normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(BigUint),
    Text(String),
    Seq(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Bridge from `serde_json` (the shape proving libraries serialize).
    ///
    /// Numbers that fit a `u64` become [`Value::Int`]; anything else
    /// (floats, negatives) is carried as text and left alone by
    /// [`normalize`].
    pub fn from_json(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(u) => Value::Int(BigUint::from(u)),
                None => Value::Text(n.to_string()),
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Seq(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Look up a key in a [`Value::Map`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Parse a decimal or `0x`-hex integer literal.
///
/// Returns `None` for anything that is not *entirely* such a literal —
/// the caller decides whether that is a passthrough or an error.
pub fn parse_bigint(s: &str) -> Option<BigUint> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        BigUint::parse_bytes(s.as_bytes(), 10)
    } else if let Some(digits) = s.strip_prefix("0x") {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            BigUint::parse_bytes(digits.as_bytes(), 16)
        } else {
            None
        }
    } else {
        None
    }
}

/// Recursively convert integer-looking strings into integers.
///
/// Pure: the input is never mutated. Already-normalized values pass
/// through unchanged, so the function is idempotent.
pub fn normalize(value: &Value) -> SnarkCallResult<Value> {
    normalize_at(value, 0)
}

fn normalize_at(value: &Value, depth: usize) -> SnarkCallResult<Value> {
    if depth > MAX_DEPTH {
        return Err(SnarkCallError::MalformedInput(format!(
            "structure nested deeper than {MAX_DEPTH} levels"
        )));
    }
    match value {
        Value::Text(s) => Ok(match parse_bigint(s) {
            Some(n) => Value::Int(n),
            None => Value::Text(s.clone()),
        }),
        Value::Seq(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(normalize_at(item, depth + 1)?);
            }
            Ok(Value::Seq(out))
        }
        Value::Map(pairs) => {
            let mut out = Vec::with_capacity(pairs.len());
            for (k, v) in pairs {
                out.push((k.clone(), normalize_at(v, depth + 1)?));
            }
            Ok(Value::Map(out))
        }
        other => Ok(other.clone()),
    }
}
