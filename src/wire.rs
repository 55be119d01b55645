//! Wire values exchanged with the plugin host.
//!
//! Every attribute arrives from the host as a [`WireValue`]: a declared
//! [`WireType`] plus one of three states: a concrete payload, a null
//! marker, or an unknown marker (not yet resolved during planning).
//!
//! The byte encoding produced by [`WireValue::to_bytes`] is JSON.

use crate::errors::TypeResult;
use serde::{Deserialize, Serialize};

/// Primitive kinds a wire value can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireType {
    Bool,
    Number,
    String,
}

impl std::fmt::Display for WireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Number => write!(f, "Number"),
            Self::String => write!(f, "String"),
        }
    }
}

/// The three states of a wire value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireState {
    /// A concrete payload (JSON scalar).
    Known(serde_json::Value),

    /// Explicitly absent.
    Null,

    /// Not yet resolved.
    Unknown,
}

/// A typed value as the host sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireValue {
    #[serde(rename = "type")]
    ty: WireType,

    state: WireState,
}

impl WireValue {
    /// Known boolean.
    pub fn bool(value: bool) -> Self {
        Self {
            ty: WireType::Bool,
            state: WireState::Known(serde_json::Value::Bool(value)),
        }
    }

    /// Known number.
    pub fn number(value: impl Into<serde_json::Number>) -> Self {
        Self {
            ty: WireType::Number,
            state: WireState::Known(serde_json::Value::Number(value.into())),
        }
    }

    /// Known string.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            ty: WireType::String,
            state: WireState::Known(serde_json::Value::String(value.into())),
        }
    }

    /// Null value of the given type.
    pub fn null(ty: WireType) -> Self {
        Self {
            ty,
            state: WireState::Null,
        }
    }

    /// Unknown value of the given type.
    pub fn unknown(ty: WireType) -> Self {
        Self {
            ty,
            state: WireState::Unknown,
        }
    }

    pub fn wire_type(&self) -> WireType {
        self.ty
    }

    pub fn state(&self) -> &WireState {
        &self.state
    }

    pub fn is_null(&self) -> bool {
        matches!(self.state, WireState::Null)
    }

    /// False only for unknown values; null counts as known.
    pub fn is_known(&self) -> bool {
        !matches!(self.state, WireState::Unknown)
    }

    /// Encode for transport to the host.
    pub fn to_bytes(&self) -> TypeResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode bytes received from the host.
    pub fn from_bytes(bytes: &[u8]) -> TypeResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
