//! Typed-layer errors.
//!
//! Exactly two failure families exist at this layer: a required field
//! missing at construction time, and malformed wire data surfaced from the
//! codec below. Everything else (absent optionals, unknown enum values,
//! empty repeated fields, unrecognized data) is a normal outcome, not an
//! error.

use courier_wire::WireError;
use thiserror::Error;

/// Typed message layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtoError {
    #[error("Missing required field {field} in {message}")]
    MissingRequiredField {
        message: &'static str,
        field: &'static str,
    },

    #[error("Wire error: {0}")]
    Wire(#[from] WireError),
}

/// Result type for typed message operations
pub type ProtoResult<T> = std::result::Result<T, ProtoError>;
