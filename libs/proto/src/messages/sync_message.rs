//! Cross-device sync: transcripts and read state between a user's own devices.
//!
//! When a device sends, its siblings receive a [`SyncSent`] transcript
//! embedding the full [`DataMessage`]; when a device reads, siblings receive
//! [`SyncRead`] markers. Three levels of nesting
//! (`SyncMessage → SyncSent → DataMessage`) make this family the deepest in
//! the crate.

use crate::macros::proto_message;
use crate::messages::data_message::DataMessage;

proto_message! {
    /// Device-to-device sync wrapper.
    pub struct SyncMessage {
        optional message(SyncSent) sent = 1;
        repeated message(SyncRead) read = 5;
        optional bytes padding = 8;
    }
}

proto_message! {
    /// Transcript of a message this account just sent from another device.
    pub struct SyncSent {
        optional u64 timestamp = 2;
        optional message(DataMessage) message = 3;
        optional u64 expiration_start_timestamp = 4;
        optional bool is_recipient_update = 6;
        optional string destination_service_id = 7;
    }
}

proto_message! {
    /// One message this account read on another device.
    pub struct SyncRead {
        required u64 timestamp = 2;
        optional string sender_aci = 3;
    }
}
