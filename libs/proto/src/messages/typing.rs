//! Typing indicators.

use crate::macros::proto_message;

/// Whether the peer started or stopped composing.
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
pub enum TypingAction {
    #[default]
    Started = 0,
    Stopped = 1,
}

proto_message! {
    /// Ephemeral composing notice. `group_id` scopes the indicator to one
    /// group conversation; absent means the one-to-one thread.
    pub struct TypingMessage {
        required u64 timestamp = 1;
        optional enum(TypingAction) action = 2;
        optional bytes group_id = 3;
    }
}
