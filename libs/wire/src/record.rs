//! # Wire Field Records
//!
//! ## Purpose
//!
//! Single-pass parsing of a serialized record into per-tag field buckets plus
//! a verbatim blob of every field the caller's tag set does not claim, and
//! the reverse serialization. This is the boundary where untrusted bytes
//! become structured data: every read is bounds-checked and every failure
//! reports the offset it happened at.
//!
//! ## Unrecognized Fields
//!
//! Unknown fields are copied as raw bytes (key and payload together) rather
//! than decoded and re-encoded. Re-encoding would normalize overlong varints
//! and silently change bytes a newer peer produced; copying keeps the round
//! trip exact. On serialization the blob is appended after all recognized
//! fields.
//!
//! ## Occurrence Semantics
//!
//! Buckets keep every occurrence of a tag in arrival order. Scalar accessors
//! read the last occurrence, matching the established merge rule for
//! singular fields; repeated accessors hand back all occurrences, unpacking
//! any length-delimited run of varints so both encodings of a repeated field
//! decode the same way.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{varint, WireError, WireResult, WireType, MAX_FIELD_TAG};

/// One decoded field occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    Delimited(Vec<u8>),
}

impl WireValue {
    /// Wire type this value serializes as.
    pub fn wire_type(&self) -> WireType {
        match self {
            WireValue::Varint(_) => WireType::Varint,
            WireValue::Fixed64(_) => WireType::Fixed64,
            WireValue::Fixed32(_) => WireType::Fixed32,
            WireValue::Delimited(_) => WireType::Delimited,
        }
    }

    pub fn as_varint(&self) -> Option<u64> {
        match self {
            WireValue::Varint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_fixed64(&self) -> Option<u64> {
        match self {
            WireValue::Fixed64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_fixed32(&self) -> Option<u32> {
        match self {
            WireValue::Fixed32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            WireValue::Delimited(b) => Some(b),
            _ => None,
        }
    }
}

/// A parsed or under-construction field record.
///
/// Recognized fields live in per-tag buckets keyed by field tag; the map is
/// ordered so serialization walks tags ascending. Fields outside the
/// caller's recognized set survive as verbatim bytes in `unrecognized`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireRecord {
    fields: BTreeMap<u32, Vec<WireValue>>,
    unrecognized: Vec<u8>,
}

fn field_key(tag: u32, wire_type: WireType) -> u64 {
    (u64::from(tag) << 3) | wire_type as u64
}

impl WireRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `data`, decoding fields whose tag appears in `recognized` and
    /// copying every other field verbatim into the unrecognized blob.
    pub fn parse(data: &[u8], recognized: &[u32]) -> WireResult<Self> {
        let mut record = Self::new();
        let mut offset = 0;

        while offset < data.len() {
            let field_start = offset;
            let (key, after_key) = varint::decode(data, offset)?;

            let tag64 = key >> 3;
            if tag64 == 0 || tag64 > u64::from(MAX_FIELD_TAG) {
                return Err(WireError::InvalidTag {
                    tag: tag64,
                    offset: field_start,
                });
            }
            let tag = tag64 as u32;

            let wire_type = WireType::try_from((key & 0x7) as u8).map_err(|_| {
                WireError::UnsupportedWireType {
                    wire_type: (key & 0x7) as u8,
                    tag,
                }
            })?;
            offset = after_key;

            let value = match wire_type {
                WireType::Varint => {
                    let (v, next) = varint::decode(data, offset)?;
                    offset = next;
                    WireValue::Varint(v)
                }
                WireType::Fixed64 => {
                    let end = offset
                        .checked_add(8)
                        .filter(|&end| end <= data.len())
                        .ok_or(WireError::Truncated { offset })?;
                    let mut raw = [0u8; 8];
                    raw.copy_from_slice(&data[offset..end]);
                    offset = end;
                    WireValue::Fixed64(u64::from_le_bytes(raw))
                }
                WireType::Fixed32 => {
                    let end = offset
                        .checked_add(4)
                        .filter(|&end| end <= data.len())
                        .ok_or(WireError::Truncated { offset })?;
                    let mut raw = [0u8; 4];
                    raw.copy_from_slice(&data[offset..end]);
                    offset = end;
                    WireValue::Fixed32(u32::from_le_bytes(raw))
                }
                WireType::Delimited => {
                    let (len, after_len) = varint::decode(data, offset)?;
                    let len =
                        usize::try_from(len).map_err(|_| WireError::Truncated { offset })?;
                    let end = after_len
                        .checked_add(len)
                        .filter(|&end| end <= data.len())
                        .ok_or(WireError::Truncated { offset })?;
                    let payload = data[after_len..end].to_vec();
                    offset = end;
                    WireValue::Delimited(payload)
                }
            };

            if recognized.contains(&tag) {
                record.fields.entry(tag).or_default().push(value);
            } else {
                debug!(tag, len = offset - field_start, "keeping unrecognized field");
                record
                    .unrecognized
                    .extend_from_slice(&data[field_start..offset]);
            }
        }

        Ok(record)
    }

    /// Serialized length in bytes.
    pub fn serialized_len(&self) -> usize {
        let mut len = 0;
        for (tag, values) in &self.fields {
            for value in values {
                len += varint::encoded_len(field_key(*tag, value.wire_type()));
                len += match value {
                    WireValue::Varint(v) => varint::encoded_len(*v),
                    WireValue::Fixed64(_) => 8,
                    WireValue::Fixed32(_) => 4,
                    WireValue::Delimited(b) => varint::encoded_len(b.len() as u64) + b.len(),
                };
            }
        }
        len + self.unrecognized.len()
    }

    /// Serialize recognized fields in ascending tag order, repeated
    /// occurrences in insertion order, with the unrecognized blob appended
    /// last. Infallible: a record cannot hold an unserializable state.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        for (tag, values) in &self.fields {
            for value in values {
                varint::encode_into(&mut out, field_key(*tag, value.wire_type()));
                match value {
                    WireValue::Varint(v) => varint::encode_into(&mut out, *v),
                    WireValue::Fixed64(v) => out.extend_from_slice(&v.to_le_bytes()),
                    WireValue::Fixed32(v) => out.extend_from_slice(&v.to_le_bytes()),
                    WireValue::Delimited(b) => {
                        varint::encode_into(&mut out, b.len() as u64);
                        out.extend_from_slice(b);
                    }
                }
            }
        }
        out.extend_from_slice(&self.unrecognized);
        out
    }

    /// True when at least one occurrence of `tag` is present.
    pub fn has(&self, tag: u32) -> bool {
        self.fields.get(&tag).map_or(false, |v| !v.is_empty())
    }

    /// Number of occurrences of `tag`.
    pub fn count(&self, tag: u32) -> usize {
        self.fields.get(&tag).map_or(0, Vec::len)
    }

    /// All occurrences of `tag` in arrival order.
    pub fn values(&self, tag: u32) -> &[WireValue] {
        self.fields.get(&tag).map_or(&[], Vec::as_slice)
    }

    fn last(&self, tag: u32) -> Option<&WireValue> {
        self.fields.get(&tag).and_then(|v| v.last())
    }

    /// Last varint occurrence of `tag`, if any.
    pub fn u64_at(&self, tag: u32) -> Option<u64> {
        self.last(tag).and_then(WireValue::as_varint)
    }

    /// Last varint occurrence truncated to 32 bits.
    pub fn u32_at(&self, tag: u32) -> Option<u32> {
        self.u64_at(tag).map(|v| v as u32)
    }

    /// Last varint occurrence interpreted as a boolean.
    pub fn bool_at(&self, tag: u32) -> Option<bool> {
        self.u64_at(tag).map(|v| v != 0)
    }

    /// Last fixed64 occurrence of `tag`, if any.
    pub fn fixed64_at(&self, tag: u32) -> Option<u64> {
        self.last(tag).and_then(WireValue::as_fixed64)
    }

    /// Last fixed32 occurrence of `tag`, if any.
    pub fn fixed32_at(&self, tag: u32) -> Option<u32> {
        self.last(tag).and_then(WireValue::as_fixed32)
    }

    /// Last length-delimited occurrence of `tag`, if any.
    pub fn bytes_at(&self, tag: u32) -> Option<&[u8]> {
        self.last(tag).and_then(WireValue::as_bytes)
    }

    /// Last length-delimited occurrence of `tag` as UTF-8 text.
    ///
    /// Returns None for non-UTF-8 payloads; callers that need a hard error
    /// run [`WireRecord::check_utf8`] first.
    pub fn str_at(&self, tag: u32) -> Option<&str> {
        self.bytes_at(tag).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Varint occurrences of `tag` in arrival order.
    ///
    /// A length-delimited occurrence is treated as a packed run and
    /// unpacked, so both encodings of a repeated field decode identically.
    pub fn varints_at(&self, tag: u32) -> WireResult<Vec<u64>> {
        let mut out = Vec::new();
        for value in self.values(tag) {
            match value {
                WireValue::Varint(v) => out.push(*v),
                WireValue::Delimited(bytes) => {
                    let mut offset = 0;
                    while offset < bytes.len() {
                        let (v, next) = varint::decode(bytes, offset)?;
                        out.push(v);
                        offset = next;
                    }
                }
                other => {
                    return Err(WireError::WrongWireType {
                        tag,
                        expected: WireType::Varint.name(),
                        actual: other.wire_type().name(),
                    })
                }
            }
        }
        Ok(out)
    }

    /// Length-delimited occurrences of `tag` in arrival order.
    pub fn delimited_at(&self, tag: u32) -> impl Iterator<Item = &[u8]> + '_ {
        self.values(tag).iter().filter_map(WireValue::as_bytes)
    }

    /// Verify every occurrence of `tag` arrived with `expected` wire type.
    pub fn check_field(&self, tag: u32, expected: WireType) -> WireResult<()> {
        for value in self.values(tag) {
            let actual = value.wire_type();
            if actual != expected {
                return Err(WireError::WrongWireType {
                    tag,
                    expected: expected.name(),
                    actual: actual.name(),
                });
            }
        }
        Ok(())
    }

    /// Verify every length-delimited occurrence of `tag` is valid UTF-8.
    pub fn check_utf8(&self, tag: u32) -> WireResult<()> {
        for value in self.values(tag) {
            if let Some(bytes) = value.as_bytes() {
                if std::str::from_utf8(bytes).is_err() {
                    return Err(WireError::InvalidUtf8 { tag });
                }
            }
        }
        Ok(())
    }

    /// Replace `tag` with a single varint occurrence. Establishes presence
    /// even for zero.
    pub fn set_varint(&mut self, tag: u32, value: u64) {
        self.fields.insert(tag, vec![WireValue::Varint(value)]);
    }

    pub fn set_u32(&mut self, tag: u32, value: u32) {
        self.set_varint(tag, u64::from(value));
    }

    pub fn set_bool(&mut self, tag: u32, value: bool) {
        self.set_varint(tag, u64::from(value));
    }

    /// Replace `tag` with a single fixed64 occurrence.
    pub fn set_fixed64(&mut self, tag: u32, value: u64) {
        self.fields.insert(tag, vec![WireValue::Fixed64(value)]);
    }

    /// Replace `tag` with a single fixed32 occurrence.
    pub fn set_fixed32(&mut self, tag: u32, value: u32) {
        self.fields.insert(tag, vec![WireValue::Fixed32(value)]);
    }

    /// Replace `tag` with a single length-delimited occurrence.
    pub fn set_bytes(&mut self, tag: u32, value: Vec<u8>) {
        self.fields.insert(tag, vec![WireValue::Delimited(value)]);
    }

    pub fn set_str(&mut self, tag: u32, value: &str) {
        self.set_bytes(tag, value.as_bytes().to_vec());
    }

    /// Append one varint occurrence to `tag`.
    pub fn push_varint(&mut self, tag: u32, value: u64) {
        self.fields
            .entry(tag)
            .or_default()
            .push(WireValue::Varint(value));
    }

    /// Append one length-delimited occurrence to `tag`.
    pub fn push_bytes(&mut self, tag: u32, value: Vec<u8>) {
        self.fields
            .entry(tag)
            .or_default()
            .push(WireValue::Delimited(value));
    }

    /// Drop every occurrence of `tag`.
    pub fn clear(&mut self, tag: u32) {
        self.fields.remove(&tag);
    }

    /// Raw bytes of every field kept verbatim during parse.
    pub fn unrecognized(&self) -> &[u8] {
        &self.unrecognized
    }

    /// Replace the verbatim blob.
    pub fn set_unrecognized(&mut self, bytes: Vec<u8>) {
        self.unrecognized = bytes;
    }
}
