//! The `Empty` attribute type.

use crate::attr::{AttrType, AttrValue, BoolTypable};
use crate::basetypes::{BoolType, BoolValue};
use crate::empty_value::Empty;
use crate::errors::{Diagnostics, TypeError, TypeResult};
use crate::wire::{WireType, WireValue};
use std::any::Any;

/// Type of attributes that may be `true` or null, never `false`.
///
/// Wire decoding is delegated to the composed [`BoolType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyType {
    inner: BoolType,
}

impl EmptyType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a wire value straight into an [`Empty`].
    pub fn decode(&self, value: &WireValue) -> TypeResult<Empty> {
        let attr_value = self.inner.value_from_wire(value)?;

        let bool_value = attr_value
            .as_any()
            .downcast_ref::<BoolValue>()
            .copied()
            .ok_or_else(|| TypeError::unexpected_value_type(attr_value.type_name()))?;

        let empty = self
            .value_from_bool(bool_value)
            .map_err(TypeError::Conversion)?;

        tracing::trace!(value = %empty, "decoded {}", self.name());
        Ok(empty)
    }
}

impl std::fmt::Display for EmptyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AttrType for EmptyType {
    fn name(&self) -> &'static str {
        "empty.EmptyType"
    }

    fn wire_type(&self) -> WireType {
        self.inner.wire_type()
    }

    fn equal(&self, other: &dyn AttrType) -> bool {
        match other.as_any().downcast_ref::<EmptyType>() {
            Some(other) => self.inner == other.inner,
            None => false,
        }
    }

    fn value_from_wire(&self, value: &WireValue) -> TypeResult<Box<dyn AttrValue>> {
        Ok(Box::new(self.decode(value)?))
    }

    fn value_type(&self) -> Box<dyn AttrValue> {
        Box::new(Empty::default())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl BoolTypable for EmptyType {
    type Value = Empty;

    fn value_from_bool(&self, value: BoolValue) -> Result<Empty, Diagnostics> {
        Ok(Empty::from(value))
    }
}
