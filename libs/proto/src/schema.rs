//! # Field Schema Engine
//!
//! ## Purpose
//!
//! The shared machinery every generated message type drives: field tables,
//! construction-time record validation, required-field extraction, repeated
//! collection, nested decoding, and the enum adapter. Generated code
//! declares WHAT its fields are; this module owns HOW a field table is
//! checked and read, which keeps the per-type surface declarative.
//!
//! ## Construction Contract
//!
//! [`Message::decode`] is the only road from untrusted bytes to a value
//! object. It parses with the type's claimed tag set, then
//! [`Message::from_record`] validates wire-type shape and UTF-8 text,
//! extracts required fields, recursively builds nested children, and
//! collects repeated fields in wire order. A constructed value is immutable
//! and always serializable.

use courier_wire::{WireRecord, WireType};
use tracing::error;

use crate::error::{ProtoError, ProtoResult};

/// Field cardinality in a message schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Required,
    Optional,
    Repeated,
}

/// Value kind a schema field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U32,
    U64,
    Bool,
    Fixed64,
    Str,
    Bytes,
    Enum,
    Message,
}

impl FieldKind {
    /// Wire type this kind is encoded with.
    pub fn wire_type(self) -> WireType {
        match self {
            FieldKind::U32 | FieldKind::U64 | FieldKind::Bool | FieldKind::Enum => {
                WireType::Varint
            }
            FieldKind::Fixed64 => WireType::Fixed64,
            FieldKind::Str | FieldKind::Bytes | FieldKind::Message => WireType::Delimited,
        }
    }
}

/// One row of a generated field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub tag: u32,
    pub cardinality: Cardinality,
    pub kind: FieldKind,
}

/// Validate `record` against a field table.
///
/// Flags wire-type mismatches and non-UTF-8 text fields. Required presence
/// is enforced by the per-field extractors so the error names the exact
/// field. Repeated varint-kind fields skip the wire-type check because a
/// packed run arrives length-delimited.
pub fn check_record(fields: &[FieldDef], record: &WireRecord) -> ProtoResult<()> {
    for field in fields {
        let expected = field.kind.wire_type();
        let packed_ok =
            field.cardinality == Cardinality::Repeated && expected == WireType::Varint;
        if !packed_ok {
            record.check_field(field.tag, expected)?;
        }
        if field.kind == FieldKind::Str {
            record.check_utf8(field.tag)?;
        }
    }
    Ok(())
}

fn missing(message: &'static str, field: &'static str) -> ProtoError {
    ProtoError::MissingRequiredField { message, field }
}

/// Extract a required varint field.
pub fn require_u64(
    record: &WireRecord,
    message: &'static str,
    field: &'static str,
    tag: u32,
) -> ProtoResult<u64> {
    record.u64_at(tag).ok_or_else(|| missing(message, field))
}

pub fn require_u32(
    record: &WireRecord,
    message: &'static str,
    field: &'static str,
    tag: u32,
) -> ProtoResult<u32> {
    record.u32_at(tag).ok_or_else(|| missing(message, field))
}

pub fn require_bool(
    record: &WireRecord,
    message: &'static str,
    field: &'static str,
    tag: u32,
) -> ProtoResult<bool> {
    record.bool_at(tag).ok_or_else(|| missing(message, field))
}

/// Extract a required fixed64 field.
pub fn require_fixed64(
    record: &WireRecord,
    message: &'static str,
    field: &'static str,
    tag: u32,
) -> ProtoResult<u64> {
    record.fixed64_at(tag).ok_or_else(|| missing(message, field))
}

/// Extract a required text field. [`check_record`] has already rejected
/// non-UTF-8 payloads, so absence is the only failure left.
pub fn require_string(
    record: &WireRecord,
    message: &'static str,
    field: &'static str,
    tag: u32,
) -> ProtoResult<String> {
    record
        .str_at(tag)
        .map(str::to_owned)
        .ok_or_else(|| missing(message, field))
}

pub fn require_bytes(
    record: &WireRecord,
    message: &'static str,
    field: &'static str,
    tag: u32,
) -> ProtoResult<Vec<u8>> {
    record
        .bytes_at(tag)
        .map(<[u8]>::to_vec)
        .ok_or_else(|| missing(message, field))
}

/// Decode an optional nested message field, validating it recursively.
pub fn optional_message<T: Message>(record: &WireRecord, tag: u32) -> ProtoResult<Option<T>> {
    match record.bytes_at(tag) {
        Some(bytes) => Ok(Some(T::decode(bytes)?)),
        None => Ok(None),
    }
}

/// Decode every occurrence of a repeated nested message field, in wire
/// order. The first invalid child aborts construction.
pub fn repeated_message<T: Message>(record: &WireRecord, tag: u32) -> ProtoResult<Vec<T>> {
    record.delimited_at(tag).map(T::decode).collect()
}

/// Collect a repeated varint field in wire order, unpacking packed runs.
pub fn repeated_u64(record: &WireRecord, tag: u32) -> ProtoResult<Vec<u64>> {
    Ok(record.varints_at(tag)?)
}

/// Behavior shared by every generated message type.
///
/// `decode` is parse and validate in one step; `encode` serializes the
/// record the value was validated from, so presence and unrecognized bytes
/// travel through unchanged.
pub trait Message: Sized {
    /// Type name used in error and log context.
    const NAME: &'static str;
    /// The declarative field table driving validation.
    const FIELDS: &'static [FieldDef];
    /// Tags this type claims during wire parsing.
    const TAGS: &'static [u32];

    /// Validate a parsed record and build the value object.
    fn from_record(record: WireRecord) -> ProtoResult<Self>;

    /// The validated record backing this value.
    fn record(&self) -> &WireRecord;

    /// Parse and validate `bytes` into a value object.
    fn decode(bytes: &[u8]) -> ProtoResult<Self> {
        Self::from_record(WireRecord::parse(bytes, Self::TAGS)?)
    }

    /// Serialize the value. Infallible: a value object cannot hold an
    /// unserializable state.
    fn encode(&self) -> Vec<u8> {
        self.record().serialize()
    }

    /// Length of [`Message::encode`]'s output without building it.
    fn encoded_len(&self) -> usize {
        self.record().serialized_len()
    }

    /// Raw bytes of fields captured during decode that this schema does
    /// not claim.
    fn unrecognized(&self) -> &[u8] {
        self.record().unrecognized()
    }
}

/// Bijective adapter between wire integers and closed enum domains.
///
/// Blanket-implemented for every `#[repr(u32)]` enum deriving
/// `num_enum::TryFromPrimitive` and `num_enum::IntoPrimitive`; the derives
/// are what make the mapping bijective over the recognized set.
pub trait WireEnum: Sized + Copy {
    /// Map a wire integer to the enum, if recognized.
    fn from_wire(value: u64) -> Option<Self>;

    /// Map the enum back to its wire integer.
    fn to_wire(self) -> u64;
}

impl<E> WireEnum for E
where
    E: Copy + Into<u32> + num_enum::TryFromPrimitive<Primitive = u32>,
{
    fn from_wire(value: u64) -> Option<Self> {
        let raw = u32::try_from(value).ok()?;
        E::try_from_primitive(raw).ok()
    }

    fn to_wire(self) -> u64 {
        let raw: u32 = self.into();
        u64::from(raw)
    }
}

/// Unchecked enum read: substitute the default case instead of failing.
///
/// Absent or unrecognized values are a sending-side defect, not a reason to
/// crash the receiver, so this logs loudly and degrades.
pub fn enum_or_default<E>(message: &'static str, field: &'static str, raw: Option<u64>) -> E
where
    E: WireEnum + Default,
{
    match raw {
        Some(value) => E::from_wire(value).unwrap_or_else(|| {
            error!(
                message_type = message,
                field, value, "unrecognized enum value, using default case"
            );
            E::default()
        }),
        None => {
            error!(
                message_type = message,
                field, "unchecked enum accessor on absent field, using default case"
            );
            E::default()
        }
    }
}
