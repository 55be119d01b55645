//! A mock plugin host driving attribute types through their contracts.
//!
//! The host only ever holds `dyn AttrType` / `dyn AttrValue` and discovers
//! validation and semantic equality by capability query, the same way a
//! real host treats provider-supplied types.
//!
//! Pattern coverage:
//! - decode:   wire bytes -> value via the declared type
//! - validate: per-attribute validation, diagnostics collected
//! - plan:     prior vs new value, drift suppressed by semantic equality
//! - parallel: many evaluations at once across tasks

use framework_types::prelude::*;
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════
// MOCK HOST
// ═══════════════════════════════════════════════════════════════════

struct MockHost {
    schema: Vec<(String, Box<dyn AttrType>)>,
}

/// Outcome of evaluating one attribute.
#[derive(Debug)]
struct Evaluated {
    value: Box<dyn AttrValue>,
    diagnostics: Diagnostics,
}

impl MockHost {
    fn new() -> Self {
        Self { schema: vec![] }
    }

    fn with_attribute(mut self, name: &str, ty: impl AttrType) -> Self {
        self.schema.push((name.to_string(), Box::new(ty)));
        self
    }

    fn attr_type(&self, name: &str) -> &dyn AttrType {
        self.schema
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_ref())
            .unwrap()
    }

    /// Decode then validate one attribute as received over the wire.
    fn evaluate(&self, name: &str, bytes: &[u8]) -> TypeResult<Evaluated> {
        let wire = WireValue::from_bytes(bytes)?;
        let value = self.attr_type(name).value_from_wire(&wire)?;

        let mut resp = ValidateAttributeResponse::default();
        if let Some(v) = value.as_validateable() {
            v.validate_attribute(
                &ValidateAttributeRequest::new(AttributePath::root(name)),
                &mut resp,
            );
        }

        Ok(Evaluated {
            value,
            diagnostics: resp.diagnostics,
        })
    }

    /// Decide which value ends up in state: the prior one when the new one
    /// is semantically equal, otherwise the new one.
    fn plan(
        &self,
        prior: Box<dyn AttrValue>,
        new: Box<dyn AttrValue>,
    ) -> (Box<dyn AttrValue>, Diagnostics) {
        if prior.equal(new.as_ref()) {
            return (prior, Diagnostics::new());
        }

        let (Some(semantic), Some(new_bool)) = (prior.as_semantic_equals(), new.as_bool_valuable())
        else {
            return (new, Diagnostics::new());
        };

        let (equal, diags) = semantic.bool_semantic_equals(new_bool);
        if diags.has_error() || !equal {
            (new, diags)
        } else {
            (prior, diags)
        }
    }
}

fn bytes(v: &WireValue) -> Vec<u8> {
    v.to_bytes().unwrap()
}

fn host() -> MockHost {
    MockHost::new()
        .with_attribute("enabled", EmptyType::new())
        .with_attribute("plain", BoolType)
}

// ═══════════════════════════════════════════════════════════════════
// DECODE
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_decode_states() {
    let host = host();

    let got = host.evaluate("enabled", &bytes(&WireValue::bool(true))).unwrap();
    assert!(got.value.equal(&Empty::new_value(true)));

    let got = host
        .evaluate("enabled", &bytes(&WireValue::null(WireType::Bool)))
        .unwrap();
    assert!(got.value.equal(&Empty::new_null()));
    assert!(got.value.is_null());

    let got = host
        .evaluate("enabled", &bytes(&WireValue::unknown(WireType::Bool)))
        .unwrap();
    assert!(got.value.equal(&Empty::new_unknown()));
    assert!(got.value.is_unknown());
}

#[test]
fn test_decode_reports_type() {
    let host = host();
    let got = host.evaluate("enabled", &bytes(&WireValue::bool(true))).unwrap();

    let ty = got.value.type_of();
    assert!(ty.equal(&EmptyType::new()));
    assert!(!ty.equal(&BoolType));
    assert_eq!(ty.to_string(), "empty.EmptyType");
}

#[test]
fn test_decode_wrong_wire_type() {
    let host = host();
    let err = host
        .evaluate("enabled", &bytes(&WireValue::number(123)))
        .unwrap_err();
    assert!(err.is_decode_error());
    assert!(err.to_string().contains("Number"));
}

#[test]
fn test_decode_garbage_bytes() {
    let err = host().evaluate("enabled", b"not json").unwrap_err();
    assert!(matches!(err, TypeError::Encoding(_)));
}

#[test]
fn test_wire_roundtrip() {
    let ty = EmptyType::new();
    for v in [
        Empty::new_null(),
        Empty::new_unknown(),
        Empty::new_value(true),
        Empty::new_value(false),
    ] {
        let encoded = v.to_wire().unwrap().to_bytes().unwrap();
        let decoded = ty
            .value_from_wire(&WireValue::from_bytes(&encoded).unwrap())
            .unwrap();
        assert!(decoded.equal(&v), "{} did not survive the wire", v);
    }
}

// ═══════════════════════════════════════════════════════════════════
// VALIDATE
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_validate_false_rejected() {
    let got = host()
        .evaluate("enabled", &bytes(&WireValue::bool(false)))
        .unwrap();

    assert_eq!(got.diagnostics.error_count(), 1);
    let diag = got.diagnostics.iter().next().unwrap();
    assert_eq!(diag.summary, "Attribute must not be `false`");
    assert_eq!(diag.code, ErrorCode::InvalidValue);
    assert_eq!(diag.path, Some(AttributePath::root("enabled")));
}

#[test]
fn test_validate_allowed_values() {
    let host = host();
    for wire in [
        WireValue::bool(true),
        WireValue::null(WireType::Bool),
        WireValue::unknown(WireType::Bool),
    ] {
        let got = host.evaluate("enabled", &bytes(&wire)).unwrap();
        assert!(got.diagnostics.is_empty(), "{:?}", wire);
    }
}

#[test]
fn test_plain_bool_has_no_validation() {
    let got = host()
        .evaluate("plain", &bytes(&WireValue::bool(false)))
        .unwrap();
    assert!(got.diagnostics.is_empty());
}

// ═══════════════════════════════════════════════════════════════════
// PLAN (semantic equality)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_plan_null_and_false_do_not_drift() {
    let host = host();
    let (kept, diags) = host.plan(
        Box::new(Empty::new_null()),
        Box::new(Empty::new_value(false)),
    );
    assert!(diags.is_empty());
    assert!(kept.is_null());
}

#[test]
fn test_plan_true_to_null_drifts() {
    let host = host();
    let (kept, diags) = host.plan(
        Box::new(Empty::new_value(true)),
        Box::new(Empty::new_null()),
    );
    assert!(diags.is_empty());
    assert!(kept.equal(&Empty::new_null()));
}

#[test]
fn test_plan_foreign_value_reports_internal_error() {
    let host = host();
    let (kept, diags) = host.plan(
        Box::new(Empty::new_value(true)),
        Box::new(BoolValue::new_value(true)),
    );
    assert!(diags.has_error());
    assert_eq!(diags.iter().next().unwrap().code, ErrorCode::Internal);
    assert!(kept.equal(&BoolValue::new_value(true)));
}

// ═══════════════════════════════════════════════════════════════════
// PARALLEL EVALUATION
// ═══════════════════════════════════════════════════════════════════

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_evaluation() {
    let host = Arc::new(host());
    let mut handles = vec![];

    for i in 0..64 {
        let host = Arc::clone(&host);
        handles.push(tokio::spawn(async move {
            let wire = match i % 3 {
                0 => WireValue::bool(true),
                1 => WireValue::bool(false),
                _ => WireValue::null(WireType::Bool),
            };
            let got = host.evaluate("enabled", &bytes(&wire)).unwrap();
            (i, got.diagnostics.error_count())
        }));
    }

    for handle in handles {
        let (i, errors) = handle.await.unwrap();
        let expected = if i % 3 == 1 { 1 } else { 0 };
        assert_eq!(errors, expected, "task {}", i);
    }
}
