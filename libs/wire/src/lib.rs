//! # Courier Wire Codec - Self-Describing Field Records
//!
//! ## Purpose
//!
//! Bottom layer of the Courier message stack: encodes and decodes the
//! tag/wire-type field format that every typed message travels in. The codec
//! is schema-free; it knows how to walk fields, not what they mean.
//! Callers hand `parse` the set of tags they claim, and every field outside
//! that set is carried as verbatim bytes so a round trip through this layer
//! never drops data produced by a newer schema.
//!
//! ## Wire Format
//!
//! A serialized record is a plain sequence of fields with no framing:
//!
//! ```text
//! [key varint][payload][key varint][payload]...
//!
//! key     = (tag << 3) | wire_type
//! tag     = 1 ..= 536,870,911
//! payload = varint            (wire type 0)
//!         | 8 bytes LE        (wire type 1)
//!         | len varint + data (wire type 2)
//!         | 4 bytes LE        (wire type 5)
//! ```
//!
//! Wire types 3 and 4 (group markers) were never part of this format and are
//! rejected as malformed, as are tags outside the 29-bit range.
//!
//! ## Integration Points
//!
//! - **Input**: Untrusted buffers from transport or storage
//! - **Output**: [`WireRecord`] with per-tag field buckets plus the verbatim
//!   unrecognized blob
//! - **Consumers**: The typed message layer drives recursion and field
//!   meaning; this crate only enforces wire-level shape
//!
//! ## What This Crate Does NOT Contain
//! - Message schemas, field names, or required/optional rules
//! - Transport framing, checksums, or crypto
//! - Async anything; parsing and serialization are pure functions of bytes
//!
//! ## Examples
//!
//! ```rust
//! use courier_wire::WireRecord;
//!
//! let mut record = WireRecord::new();
//! record.set_varint(5, 1_700_000_000);
//! record.set_str(9, "8a0e1c37");
//!
//! let bytes = record.serialize();
//! let parsed = WireRecord::parse(&bytes, &[5, 9]).unwrap();
//! assert_eq!(parsed.u64_at(5), Some(1_700_000_000));
//! assert_eq!(parsed.str_at(9), Some("8a0e1c37"));
//! ```

use thiserror::Error;

pub mod record;
pub mod varint;

pub use record::{WireRecord, WireValue};

/// Highest addressable field tag (29 tag bits above the 3 wire-type bits).
pub const MAX_FIELD_TAG: u32 = (1 << 29) - 1;

/// Wire-level encoding of a single field payload.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, num_enum::TryFromPrimitive)]
pub enum WireType {
    /// Base-128 varint (integers, booleans, enum values)
    Varint = 0,
    /// Eight little-endian bytes
    Fixed64 = 1,
    /// Varint length prefix followed by that many bytes
    Delimited = 2,
    /// Four little-endian bytes
    Fixed32 = 5,
}

impl WireType {
    /// Short name used in error context.
    pub fn name(self) -> &'static str {
        match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::Delimited => "delimited",
            WireType::Fixed32 => "fixed32",
        }
    }
}

/// Wire codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("Truncated field at offset {offset}")]
    Truncated { offset: usize },

    #[error("Varint longer than 10 bytes at offset {offset}")]
    VarintOverflow { offset: usize },

    #[error("Invalid field tag {tag} at offset {offset}")]
    InvalidTag { tag: u64, offset: usize },

    #[error("Unsupported wire type {wire_type} for field {tag}")]
    UnsupportedWireType { wire_type: u8, tag: u32 },

    #[error("Field {tag} is not valid UTF-8")]
    InvalidUtf8 { tag: u32 },

    #[error("Field {tag} has wire type {actual}, expected {expected}")]
    WrongWireType {
        tag: u32,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for wire codec operations
pub type WireResult<T> = std::result::Result<T, WireError>;
