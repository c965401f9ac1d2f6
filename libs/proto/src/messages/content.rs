//! Plaintext body of an unwrapped envelope.
//!
//! [`Content`] is a sum-in-practice: senders populate exactly one of its
//! branches, but the wire allows any combination and so does this type.
//! Routing code checks the `has_*` accessors in priority order.

use crate::macros::proto_message;
use crate::messages::call_message::CallMessage;
use crate::messages::data_message::DataMessage;
use crate::messages::receipt::ReceiptMessage;
use crate::messages::sync_message::SyncMessage;
use crate::messages::typing::TypingMessage;

proto_message! {
    /// Decrypted payload of an [`Envelope`](crate::messages::Envelope).
    pub struct Content {
        optional message(DataMessage) data_message = 1;
        optional message(SyncMessage) sync_message = 2;
        optional message(CallMessage) call_message = 3;
        optional message(NullMessage) null_message = 4;
        optional message(ReceiptMessage) receipt_message = 5;
        optional message(TypingMessage) typing_message = 6;
        optional bytes sender_key_distribution_message = 7;
        optional bytes decryption_error_message = 8;
    }
}

proto_message! {
    /// Keep-alive with no semantic content. The padding hides the true
    /// length from traffic analysis.
    pub struct NullMessage {
        optional bytes padding = 1;
    }
}
