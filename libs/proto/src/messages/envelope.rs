//! Transport envelope: the outermost message on the courier wire.
//!
//! Every payload a relay hands to a device is one [`Envelope`]. The envelope
//! names the delivery class, addressing, and server timing; the ciphertext in
//! `content` decodes to a [`Content`](crate::messages::Content) only after
//! the session layer has unwrapped it.

use crate::macros::proto_message;

/// Delivery class of an [`Envelope`].
///
/// Wire value 4 was retired long ago and deliberately has no case here;
/// envelopes carrying it stay readable, they just answer `None` from the
/// typed accessor.
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
pub enum EnvelopeType {
    #[default]
    Unknown = 0,
    Ciphertext = 1,
    KeyExchange = 2,
    PrekeyBundle = 3,
    Receipt = 5,
    UnidentifiedSender = 6,
    SenderkeyMessage = 7,
    PlaintextContent = 8,
}

proto_message! {
    /// One delivery from a relay to a device.
    ///
    /// `timestamp` is the sender's clock at send time and the only field a
    /// relay refuses to forward without; `server_timestamp` is the relay's
    /// own clock at acceptance.
    pub struct Envelope {
        optional enum(EnvelopeType) envelope_type = 1;
        required u64 timestamp = 5;
        optional u32 source_device = 7;
        optional bytes content = 8;
        optional string server_guid = 9;
        optional u64 server_timestamp = 10;
        optional string source_service_id = 11;
        optional string destination_service_id = 13;
        optional bool urgent = 14;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtoError;
    use crate::schema::Message;

    #[test]
    fn test_round_trip_all_fields() {
        let envelope = Envelope::builder(1_700_000_000_000)
            .set_envelope_type(EnvelopeType::Ciphertext)
            .set_source_service_id("aci:9d0652a3")
            .set_source_device(2)
            .set_destination_service_id("aci:61f7cb11")
            .set_content(vec![0xde, 0xad, 0xbe, 0xef])
            .set_server_guid("8c1f2d90-77b1-4321-8ee0-2f5f6a0f2a11")
            .set_server_timestamp(1_700_000_000_123)
            .set_urgent(true)
            .build()
            .unwrap();

        let decoded = Envelope::decode(&envelope.encode()).unwrap();
        assert_eq!(decoded, envelope);
        assert_eq!(decoded.timestamp(), 1_700_000_000_000);
        assert_eq!(decoded.envelope_type(), Some(EnvelopeType::Ciphertext));
        assert_eq!(decoded.source_service_id(), Some("aci:9d0652a3"));
        assert_eq!(decoded.source_device(), Some(2));
        assert_eq!(decoded.content(), Some(&[0xde, 0xad, 0xbe, 0xef][..]));
        assert_eq!(decoded.urgent(), Some(true));
    }

    #[test]
    fn test_missing_timestamp_refused() {
        // Delivery class alone, no timestamp.
        let bytes = [0x08, 0x01];
        let err = Envelope::decode(&bytes).unwrap_err();
        assert_eq!(
            err,
            ProtoError::MissingRequiredField {
                message: "Envelope",
                field: "timestamp"
            }
        );
    }

    #[test]
    fn test_envelope_type_cases_survive_the_wire() {
        let cases = [
            EnvelopeType::Unknown,
            EnvelopeType::Ciphertext,
            EnvelopeType::KeyExchange,
            EnvelopeType::PrekeyBundle,
            EnvelopeType::Receipt,
            EnvelopeType::UnidentifiedSender,
            EnvelopeType::SenderkeyMessage,
            EnvelopeType::PlaintextContent,
        ];
        for case in cases {
            let envelope = Envelope::builder(1)
                .set_envelope_type(case)
                .build()
                .unwrap();
            let decoded = Envelope::decode(&envelope.encode()).unwrap();
            assert!(decoded.has_envelope_type());
            assert_eq!(decoded.envelope_type(), Some(case));
        }
    }

    #[test]
    fn test_retired_envelope_type_is_present_but_untyped() {
        // envelope_type = 4 (retired), timestamp = 1.
        let bytes = [0x08, 0x04, 0x28, 0x01];
        let envelope = Envelope::decode(&bytes).unwrap();
        assert!(envelope.has_envelope_type());
        assert_eq!(envelope.envelope_type(), None);
        assert_eq!(envelope.envelope_type_unchecked(), EnvelopeType::Unknown);
        // The raw value is not rewritten.
        assert_eq!(envelope.encode(), bytes);
    }

    #[test]
    fn test_explicit_false_is_present() {
        let envelope = Envelope::builder(5).set_urgent(false).build().unwrap();
        assert!(envelope.has_urgent());
        assert_eq!(envelope.urgent(), Some(false));

        let decoded = Envelope::decode(&envelope.encode()).unwrap();
        assert!(decoded.has_urgent());
        assert_eq!(decoded.urgent(), Some(false));

        let absent = Envelope::builder(5).build().unwrap();
        assert!(!absent.has_urgent());
        assert_eq!(absent.urgent(), None);
    }

    #[test]
    fn test_to_builder_round_trip() {
        let envelope = Envelope::builder(99)
            .set_envelope_type(EnvelopeType::Receipt)
            .set_server_guid("b7a2")
            .build()
            .unwrap();

        let copy = envelope.to_builder().build().unwrap();
        assert_eq!(copy, envelope);

        let retimed = envelope.to_builder().set_timestamp(100).build().unwrap();
        assert_eq!(retimed.timestamp(), 100);
        assert_eq!(retimed.server_guid(), Some("b7a2"));
    }
}
