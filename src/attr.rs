//! Attribute type and value capabilities.
//!
//! The host never sees concrete types. It holds `dyn AttrType` and
//! `dyn AttrValue` and discovers optional behaviour by asking a value for
//! each capability in turn:
//!
//! ```rust,ignore
//! if let Some(v) = value.as_validateable() {
//!     v.validate_attribute(&req, &mut resp);
//! }
//! if let Some(v) = value.as_semantic_equals() {
//!     let (equal, diags) = v.bool_semantic_equals(prior);
//! }
//! ```
//!
//! A value type opts in by overriding the matching `as_*` method.

use crate::basetypes::BoolValue;
use crate::errors::{Diagnostics, TypeResult};
use crate::path::AttributePath;
use crate::wire::{WireType, WireValue};
use std::any::Any;

// ═══════════════════════════════════════════════════════════════════
// REQUIRED CAPABILITIES
// ═══════════════════════════════════════════════════════════════════

/// A type the host can declare attributes with.
pub trait AttrType: std::fmt::Debug + std::fmt::Display + Send + Sync + Any {
    /// Human-readable type name for diagnostics
    fn name(&self) -> &'static str;

    /// Primitive kind this type is carried as on the wire
    fn wire_type(&self) -> WireType;

    /// Structural equality against any other type
    fn equal(&self, other: &dyn AttrType) -> bool;

    /// Decode a value the host received for an attribute of this type
    fn value_from_wire(&self, value: &WireValue) -> TypeResult<Box<dyn AttrValue>>;

    /// Zero value of this type's value type
    fn value_type(&self) -> Box<dyn AttrValue>;

    fn as_any(&self) -> &dyn Any;
}

/// One attribute value.
pub trait AttrValue: std::fmt::Debug + std::fmt::Display + Send + Sync + Any {
    fn type_of(&self) -> Box<dyn AttrType>;

    /// Structural equality against any other value
    fn equal(&self, other: &dyn AttrValue) -> bool;

    fn is_null(&self) -> bool;

    fn is_unknown(&self) -> bool;

    /// Re-encode for the host
    fn to_wire(&self) -> TypeResult<WireValue>;

    fn as_any(&self) -> &dyn Any;

    /// Concrete Rust type name, used in contract-violation diagnostics
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    // ═══════════════════════════════════════════════════════
    // OPTIONAL CAPABILITIES (default: not supported)
    // ═══════════════════════════════════════════════════════

    fn as_bool_valuable(&self) -> Option<&dyn BoolValuable> {
        None
    }

    fn as_semantic_equals(&self) -> Option<&dyn BoolValuableWithSemanticEquals> {
        None
    }

    fn as_validateable(&self) -> Option<&dyn ValidateableAttribute> {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════
// BOOLEAN SPECIALISATION
// ═══════════════════════════════════════════════════════════════════

/// A type whose values are carried as booleans.
pub trait BoolTypable: AttrType {
    type Value: BoolValuable;

    /// Wrap an already-decoded boolean value
    fn value_from_bool(&self, value: BoolValue) -> Result<Self::Value, Diagnostics>;
}

/// A value that can be read as a plain tri-state boolean.
pub trait BoolValuable: AttrValue {
    fn to_bool_value(&self) -> Result<BoolValue, Diagnostics>;
}

/// Override for deciding whether a new value should count as unchanged.
///
/// The host consults this when the new value differs structurally from the
/// prior one; returning `true` keeps the prior value and suppresses drift.
pub trait BoolValuableWithSemanticEquals: BoolValuable {
    fn bool_semantic_equals(&self, new_value: &dyn BoolValuable) -> (bool, Diagnostics);
}

// ═══════════════════════════════════════════════════════════════════
// VALIDATION
// ═══════════════════════════════════════════════════════════════════

/// Request passed to [`ValidateableAttribute::validate_attribute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateAttributeRequest {
    /// Where the attribute lives in the configuration
    pub path: AttributePath,
}

impl ValidateAttributeRequest {
    pub fn new(path: AttributePath) -> Self {
        Self { path }
    }
}

/// Response filled in by [`ValidateableAttribute::validate_attribute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateAttributeResponse {
    pub diagnostics: Diagnostics,
}

/// A value that constrains itself beyond what its wire type allows.
pub trait ValidateableAttribute {
    fn validate_attribute(
        &self,
        req: &ValidateAttributeRequest,
        resp: &mut ValidateAttributeResponse,
    );
}
