//! Courier message schemas.
//!
//! One module per message family, each defined through `proto_message!`
//! tables plus hand-written case enums.
//! [`Envelope`] is the outermost frame; [`Content`] is the plaintext body it
//! carries after the session layer unwraps it; everything else hangs off
//! [`Content`].

pub mod attachment;
pub mod call_message;
pub mod content;
pub mod data_message;
pub mod envelope;
pub mod group;
pub mod receipt;
pub mod sync_message;
pub mod typing;

pub use attachment::{AttachmentPointer, AttachmentPointerBuilder};
pub use call_message::{
    CallAnswer, CallAnswerBuilder, CallBusy, CallBusyBuilder, CallHangup, CallHangupBuilder,
    CallIceUpdate, CallIceUpdateBuilder, CallMessage, CallMessageBuilder, CallOffer,
    CallOfferBuilder, HangupType, OfferType,
};
pub use content::{Content, ContentBuilder, NullMessage, NullMessageBuilder};
pub use data_message::{
    BodyRange, BodyRangeBuilder, BodyRangeStyle, DataMessage, DataMessageBuilder, Delete,
    DeleteBuilder, Quote, QuoteBuilder, Reaction, ReactionBuilder,
};
pub use envelope::{Envelope, EnvelopeBuilder, EnvelopeType};
pub use group::{GroupContextV2, GroupContextV2Builder};
pub use receipt::{ReceiptMessage, ReceiptMessageBuilder, ReceiptType};
pub use sync_message::{
    SyncMessage, SyncMessageBuilder, SyncRead, SyncReadBuilder, SyncSent, SyncSentBuilder,
};
pub use typing::{TypingAction, TypingMessage, TypingMessageBuilder};
