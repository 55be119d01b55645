//! Values of the `Empty` attribute type.
//!
//! An `Empty` is either `true`, null or unknown. Presence implies `true`;
//! leaving the attribute out is the only way to say "no". A known `false`
//! can still be constructed (the host may decode one from user
//! configuration) but [`ValidateableAttribute::validate_attribute`] rejects
//! it.
//!
//! Semantic equality reads every state through [`Empty::value_bool`], so
//! null, unknown and `false` are interchangeable when the host checks for
//! drift. Only `true` stands apart.

use crate::attr::{
    AttrType, AttrValue, BoolValuable, BoolValuableWithSemanticEquals, ValidateAttributeRequest,
    ValidateAttributeResponse, ValidateableAttribute,
};
use crate::basetypes::{BoolState, BoolValue};
use crate::empty_type::EmptyType;
use crate::errors::{Diagnostics, TypeResult};
use crate::wire::WireValue;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Tri-state boolean restricted to `true` and null.
///
/// The zero value is null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Empty {
    inner: BoolValue,
}

impl Empty {
    /// Null value. Check with [`Empty::is_null`].
    pub fn new_null() -> Self {
        Self {
            inner: BoolValue::new_null(),
        }
    }

    /// Unknown value. Check with [`Empty::is_unknown`].
    pub fn new_unknown() -> Self {
        Self {
            inner: BoolValue::new_unknown(),
        }
    }

    /// Known value. Read it back with [`Empty::value_bool`].
    pub fn new_value(value: bool) -> Self {
        Self {
            inner: BoolValue::new_value(value),
        }
    }

    /// Null when `value` is `None`, known otherwise.
    pub fn new_pointer_value(value: Option<&bool>) -> Self {
        Self {
            inner: BoolValue::new_pointer_value(value),
        }
    }

    pub fn is_null(&self) -> bool {
        self.inner.is_null()
    }

    pub fn is_unknown(&self) -> bool {
        self.inner.is_unknown()
    }

    pub fn state(&self) -> BoolState {
        self.inner.state()
    }

    /// The known value, or `false` when null or unknown.
    pub fn value_bool(&self) -> bool {
        self.inner.value_bool()
    }

    /// The known value, or `None` when null or unknown.
    pub fn value_bool_pointer(&self) -> Option<bool> {
        self.inner.value_bool_pointer()
    }

    pub fn to_bool_value(&self) -> Result<BoolValue, Diagnostics> {
        Ok(self.inner)
    }
}

impl From<BoolValue> for Empty {
    fn from(inner: BoolValue) -> Self {
        Self { inner }
    }
}

impl From<Option<bool>> for Empty {
    fn from(value: Option<bool>) -> Self {
        Self::new_pointer_value(value.as_ref())
    }
}

impl std::fmt::Display for Empty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl AttrValue for Empty {
    fn type_of(&self) -> Box<dyn AttrType> {
        Box::new(EmptyType::new())
    }

    fn equal(&self, other: &dyn AttrValue) -> bool {
        match other.as_any().downcast_ref::<Empty>() {
            Some(other) => self.inner == other.inner,
            None => false,
        }
    }

    fn is_null(&self) -> bool {
        self.inner.is_null()
    }

    fn is_unknown(&self) -> bool {
        self.inner.is_unknown()
    }

    fn to_wire(&self) -> TypeResult<WireValue> {
        self.inner.to_wire()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_bool_valuable(&self) -> Option<&dyn BoolValuable> {
        Some(self)
    }

    fn as_semantic_equals(&self) -> Option<&dyn BoolValuableWithSemanticEquals> {
        Some(self)
    }

    fn as_validateable(&self) -> Option<&dyn ValidateableAttribute> {
        Some(self)
    }
}

impl BoolValuable for Empty {
    fn to_bool_value(&self) -> Result<BoolValue, Diagnostics> {
        Empty::to_bool_value(self)
    }
}

impl BoolValuableWithSemanticEquals for Empty {
    /// Treats `false` and null as equal.
    fn bool_semantic_equals(&self, new_value: &dyn BoolValuable) -> (bool, Diagnostics) {
        let mut diags = Diagnostics::new();

        let Some(new_value) = new_value.as_any().downcast_ref::<Empty>() else {
            diags.add_internal_error(
                "Semantic Equality Check Error",
                format!(
                    "An unexpected value type was received while performing semantic equality checks. \
                     Please report this to the provider developers.\n\n\
                     Expected Value Type: {}\n\
                     Got Value Type: {}",
                    self.type_name(),
                    new_value.type_name(),
                ),
            );
            tracing::debug!(got = new_value.type_name(), "semantic equality type mismatch");
            return (false, diags);
        };

        (self.value_bool() == new_value.value_bool(), diags)
    }
}

impl ValidateableAttribute for Empty {
    /// Only `true` is accepted; null and unknown are left alone.
    fn validate_attribute(
        &self,
        req: &ValidateAttributeRequest,
        resp: &mut ValidateAttributeResponse,
    ) {
        if self.is_unknown() || self.is_null() {
            return;
        }

        if !self.value_bool() {
            tracing::debug!(path = %req.path, "rejecting known false");
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                "Attribute must not be `false`",
                format!(
                    "Valid values are `true` and `null`, got `{}`",
                    self.value_bool()
                ),
            );
        }
    }
}
