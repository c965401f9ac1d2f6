//! Courier message layer: schema-checked typed messages over a raw field codec.
//!
//! ## Purpose
//!
//! [`courier_wire`] moves opaque tagged fields; this crate gives those fields
//! names, types, and rules. Every message type here is an immutable value
//! object built by a chained builder and validated exactly once, at
//! construction. After that point accessors are infallible: required fields
//! are plain values, optional fields answer through a presence/value pair,
//! nested messages are pre-built, and repeated fields keep wire order.
//!
//! ## Message Model
//!
//! ```text
//! ┌──────────────┐  set_*/add_*   ┌──────────────┐  build()   ┌────────────┐
//! │ Xxx::builder │ ─────────────► │  XxxBuilder  │ ─────────► │    Xxx     │
//! └──────────────┘                └──────────────┘  validate  └────────────┘
//!        ▲                                                          │
//!        │ to_builder()                        encode() / decode()  │
//!        └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields the schema does not recognize are carried through decode, builder
//! seeding, and encode as verbatim bytes, so a round trip through an older
//! schema never sheds data a newer peer wrote.
//!
//! ## Integration Points
//!
//! - **Input**: length-framed payloads from the transport session layer
//! - **Output**: [`Vec<u8>`] payloads handed back to the transport
//! - **Errors**: [`ProtoError`] for schema violations, wrapping
//!   [`WireError`] for malformed bytes
//!
//! ## Example
//!
//! ```
//! use courier_proto::{Envelope, EnvelopeType, Message};
//!
//! let envelope = Envelope::builder(1_700_000_000_000)
//!     .set_envelope_type(EnvelopeType::Ciphertext)
//!     .set_source_device(4)
//!     .build()?;
//!
//! let bytes = envelope.encode();
//! let decoded = Envelope::decode(&bytes)?;
//! assert_eq!(decoded, envelope);
//! assert_eq!(decoded.timestamp(), 1_700_000_000_000);
//! # Ok::<(), courier_proto::ProtoError>(())
//! ```

pub mod error;
mod macros;
pub mod messages;
pub mod schema;

pub use courier_wire::{WireError, WireRecord};
pub use error::{ProtoError, ProtoResult};
pub use schema::{Message, WireEnum};

pub use messages::{
    AttachmentPointer, BodyRange, BodyRangeStyle, CallAnswer, CallBusy, CallHangup,
    CallIceUpdate, CallMessage, CallOffer, Content, DataMessage, Delete, Envelope,
    EnvelopeType, GroupContextV2, HangupType, NullMessage, OfferType, Quote, Reaction,
    ReceiptMessage, ReceiptType, SyncMessage, SyncRead, SyncSent, TypingAction,
    TypingMessage,
};
