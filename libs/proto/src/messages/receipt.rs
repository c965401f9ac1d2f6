//! Delivery, read, and viewed receipts.

use crate::macros::proto_message;

/// What the receipt acknowledges.
#[repr(u32)]
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    num_enum::TryFromPrimitive,
    num_enum::IntoPrimitive,
)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum ReceiptType {
    #[default]
    Delivery = 0,
    Read = 1,
    Viewed = 2,
}

proto_message! {
    /// Acknowledges one or more earlier messages, named by their
    /// client-assigned timestamps.
    pub struct ReceiptMessage {
        optional enum(ReceiptType) receipt_type = 1;
        repeated u64 timestamps = 2;
    }
}
