//! # Framework Types
//!
//! Custom attribute types for provider plugins.
//!
//! The plugin host decodes every attribute through its declared type, then
//! asks the resulting value for optional capabilities (validation, semantic
//! equality) before deciding whether the configuration is acceptable and
//! whether anything drifted. This crate provides:
//!
//! - **Capability traits** (`attr`): `AttrType`, `AttrValue`, and the
//!   optional `BoolValuableWithSemanticEquals` / `ValidateableAttribute`
//!   the host queries for
//! - **Generic boolean** (`basetypes`): `BoolType` / `BoolValue`, the
//!   tri-state boolean custom types build on
//! - **Empty** (`empty_type`, `empty_value`): a boolean that may be `true`,
//!   null or unknown, but never `false`
//! - **Errors** (`errors`): hard `TypeError` for decode failures and
//!   `Diagnostics` for everything the host should report
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! framework-types = "0.1"
//! ```
//!
//! ```rust,ignore
//! use framework_types::prelude::*;
//!
//! let ty = EmptyType::new();
//! let value = ty.value_from_wire(&WireValue::bool(false))?;
//!
//! let req = ValidateAttributeRequest::new(AttributePath::root("enabled"));
//! let mut resp = ValidateAttributeResponse::default();
//! if let Some(v) = value.as_validateable() {
//!     v.validate_attribute(&req, &mut resp);
//! }
//! assert!(resp.diagnostics.has_error());
//! ```
//!
//! ## Why "Empty"
//!
//! Some APIs model a flag as the presence of an empty object. In
//! configuration that maps to an attribute that is either set to `true` or
//! left out; `false` would be a second way of saying "absent" and is
//! rejected.

pub mod attr;
pub mod basetypes;
pub mod empty_type;
pub mod empty_value;
pub mod errors;
pub mod path;
pub mod wire;

// Re-export everything in prelude for convenience
pub mod prelude {
    pub use crate::attr::*;
    pub use crate::basetypes::*;
    pub use crate::empty_type::*;
    pub use crate::empty_value::*;
    pub use crate::errors::*;
    pub use crate::path::*;
    pub use crate::wire::*;
}

// Also re-export at crate root
pub use prelude::*;
