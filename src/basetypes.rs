//! The generic boolean type.
//!
//! Custom boolean types compose [`BoolType`] for wire decoding and wrap
//! [`BoolValue`] for storage, then layer their own rules on top.

use crate::attr::{AttrType, AttrValue, BoolTypable, BoolValuable};
use crate::errors::{Diagnostics, TypeError, TypeResult};
use crate::wire::{WireState, WireType, WireValue};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// State of a tri-state boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolState {
    #[default]
    Null,
    Unknown,
    Known(bool),
}

/// A boolean that may also be null or unknown.
///
/// The zero value is null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoolValue {
    state: BoolState,
}

impl BoolValue {
    pub fn new_null() -> Self {
        Self {
            state: BoolState::Null,
        }
    }

    pub fn new_unknown() -> Self {
        Self {
            state: BoolState::Unknown,
        }
    }

    pub fn new_value(value: bool) -> Self {
        Self {
            state: BoolState::Known(value),
        }
    }

    /// Null when `value` is `None`, known otherwise.
    pub fn new_pointer_value(value: Option<&bool>) -> Self {
        match value {
            Some(v) => Self::new_value(*v),
            None => Self::new_null(),
        }
    }

    pub fn state(&self) -> BoolState {
        self.state
    }

    pub fn is_null(&self) -> bool {
        self.state == BoolState::Null
    }

    pub fn is_unknown(&self) -> bool {
        self.state == BoolState::Unknown
    }

    /// The known value, or `false` when null or unknown.
    pub fn value_bool(&self) -> bool {
        matches!(self.state, BoolState::Known(true))
    }

    /// The known value, or `None` when null or unknown.
    pub fn value_bool_pointer(&self) -> Option<bool> {
        match self.state {
            BoolState::Known(v) => Some(v),
            BoolState::Null | BoolState::Unknown => None,
        }
    }

    pub(crate) fn wire(&self) -> WireValue {
        match self.state {
            BoolState::Known(v) => WireValue::bool(v),
            BoolState::Null => WireValue::null(WireType::Bool),
            BoolState::Unknown => WireValue::unknown(WireType::Bool),
        }
    }
}

impl std::fmt::Display for BoolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state {
            BoolState::Null => write!(f, "<null>"),
            BoolState::Unknown => write!(f, "<unknown>"),
            BoolState::Known(v) => write!(f, "{}", v),
        }
    }
}

impl AttrValue for BoolValue {
    fn type_of(&self) -> Box<dyn AttrType> {
        Box::new(BoolType)
    }

    fn equal(&self, other: &dyn AttrValue) -> bool {
        other
            .as_any()
            .downcast_ref::<BoolValue>()
            .is_some_and(|o| o == self)
    }

    fn is_null(&self) -> bool {
        BoolValue::is_null(self)
    }

    fn is_unknown(&self) -> bool {
        BoolValue::is_unknown(self)
    }

    fn to_wire(&self) -> TypeResult<WireValue> {
        Ok(self.wire())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_bool_valuable(&self) -> Option<&dyn BoolValuable> {
        Some(self)
    }
}

impl BoolValuable for BoolValue {
    fn to_bool_value(&self) -> Result<BoolValue, Diagnostics> {
        Ok(*self)
    }
}

/// The generic boolean attribute type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolType;

impl BoolType {
    /// Decode a wire value into a tri-state boolean.
    pub fn decode(&self, value: &WireValue) -> TypeResult<BoolValue> {
        if value.wire_type() != WireType::Bool {
            return Err(TypeError::WireTypeMismatch {
                found: value.wire_type(),
            });
        }

        match value.state() {
            WireState::Null => Ok(BoolValue::new_null()),
            WireState::Unknown => Ok(BoolValue::new_unknown()),
            WireState::Known(serde_json::Value::Bool(b)) => Ok(BoolValue::new_value(*b)),
            WireState::Known(other) => Err(TypeError::MalformedPayload(other.clone())),
        }
    }
}

impl std::fmt::Display for BoolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AttrType for BoolType {
    fn name(&self) -> &'static str {
        "basetypes.BoolType"
    }

    fn wire_type(&self) -> WireType {
        WireType::Bool
    }

    fn equal(&self, other: &dyn AttrType) -> bool {
        other.as_any().downcast_ref::<BoolType>().is_some()
    }

    fn value_from_wire(&self, value: &WireValue) -> TypeResult<Box<dyn AttrValue>> {
        Ok(Box::new(self.decode(value)?))
    }

    fn value_type(&self) -> Box<dyn AttrValue> {
        Box::new(BoolValue::default())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl BoolTypable for BoolType {
    type Value = BoolValue;

    fn value_from_bool(&self, value: BoolValue) -> Result<BoolValue, Diagnostics> {
        Ok(value)
    }
}
