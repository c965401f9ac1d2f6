//! Call signaling: offers, answers, ICE candidates, hangups.
//!
//! Every signal in one call shares the sender-chosen call `id`. The SDP and
//! candidate payloads are opaque to the message layer and travel as bytes
//! for the call stack to interpret.

use crate::macros::proto_message;

/// Media class of a [`CallOffer`].
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
pub enum OfferType {
    #[default]
    OfferAudioCall = 0,
    OfferVideoCall = 1,
}

/// How a call ended, carried by [`CallHangup`].
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
pub enum HangupType {
    #[default]
    Normal = 0,
    Accepted = 1,
    Declined = 2,
    Busy = 3,
    NeedPermission = 4,
}

proto_message! {
    /// Envelope branch for call signaling. Like
    /// [`Content`](crate::messages::Content), senders populate one branch per
    /// message.
    pub struct CallMessage {
        optional message(CallOffer) offer = 1;
        optional message(CallAnswer) answer = 2;
        repeated message(CallIceUpdate) ice_updates = 3;
        optional message(CallBusy) busy = 5;
        optional message(CallHangup) hangup = 7;
        optional bool multi_ring = 8;
        optional u32 destination_device_id = 9;
    }
}

proto_message! {
    /// Invitation to start a call.
    pub struct CallOffer {
        required u64 id = 1;
        optional enum(OfferType) offer_type = 3;
        optional bytes opaque = 4;
    }
}

proto_message! {
    /// Callee's acceptance of an offer.
    pub struct CallAnswer {
        required u64 id = 1;
        optional bytes opaque = 3;
    }
}

proto_message! {
    /// One batch of ICE candidates for connection establishment.
    pub struct CallIceUpdate {
        required u64 id = 1;
        optional bytes opaque = 5;
    }
}

proto_message! {
    /// Callee is on another call.
    pub struct CallBusy {
        required u64 id = 1;
    }
}

proto_message! {
    /// Call teardown. `device_id` names which of the sender's devices
    /// answered when `hangup_type` is [`HangupType::Accepted`].
    pub struct CallHangup {
        required u64 id = 1;
        optional enum(HangupType) hangup_type = 2;
        optional u32 device_id = 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtoError;
    use crate::schema::Message;

    #[test]
    fn test_video_offer_wire_value() {
        let offer = CallOffer::builder(4242)
            .set_offer_type(OfferType::OfferVideoCall)
            .build()
            .unwrap();
        // id=4242 as varint, then offer_type tag 3 value 1.
        assert_eq!(offer.encode(), [0x08, 0x92, 0x21, 0x18, 0x01]);

        let decoded = CallOffer::decode(&offer.encode()).unwrap();
        assert_eq!(decoded.offer_type(), Some(OfferType::OfferVideoCall));
        assert_eq!(decoded.id(), 4242);
    }

    #[test]
    fn test_audio_offer_zero_survives() {
        let offer = CallOffer::builder(7)
            .set_offer_type(OfferType::OfferAudioCall)
            .build()
            .unwrap();
        let decoded = CallOffer::decode(&offer.encode()).unwrap();
        assert!(decoded.has_offer_type());
        assert_eq!(decoded.offer_type(), Some(OfferType::OfferAudioCall));
    }

    #[test]
    fn test_ice_updates_batch_in_order() {
        let call = CallMessage::builder()
            .add_ice_updates(&CallIceUpdate::builder(9).set_opaque(vec![1]).build().unwrap())
            .add_ice_updates(&CallIceUpdate::builder(9).set_opaque(vec![2]).build().unwrap())
            .set_multi_ring(true)
            .build()
            .unwrap();

        let decoded = CallMessage::decode(&call.encode()).unwrap();
        assert_eq!(decoded.ice_updates().len(), 2);
        assert_eq!(decoded.ice_updates()[0].opaque(), Some(&[1u8][..]));
        assert_eq!(decoded.ice_updates()[1].opaque(), Some(&[2u8][..]));
        assert_eq!(decoded.multi_ring(), Some(true));
    }

    #[test]
    fn test_hangup_cases() {
        for case in [
            HangupType::Normal,
            HangupType::Accepted,
            HangupType::Declined,
            HangupType::Busy,
            HangupType::NeedPermission,
        ] {
            let hangup = CallHangup::builder(11)
                .set_hangup_type(case)
                .set_device_id(3)
                .build()
                .unwrap();
            let decoded = CallHangup::decode(&hangup.encode()).unwrap();
            assert_eq!(decoded.hangup_type(), Some(case));
            assert_eq!(decoded.device_id(), Some(3));
        }
    }

    #[test]
    fn test_every_signal_requires_the_call_id() {
        fn missing_id(message: &'static str) -> ProtoError {
            ProtoError::MissingRequiredField { message, field: "id" }
        }

        assert_eq!(CallOfferBuilder::default().build().unwrap_err(), missing_id("CallOffer"));
        assert_eq!(CallAnswerBuilder::default().build().unwrap_err(), missing_id("CallAnswer"));
        assert_eq!(
            CallIceUpdateBuilder::default().build().unwrap_err(),
            missing_id("CallIceUpdate")
        );
        assert_eq!(CallBusyBuilder::default().build().unwrap_err(), missing_id("CallBusy"));
        assert_eq!(CallHangupBuilder::default().build().unwrap_err(), missing_id("CallHangup"));
        assert_eq!(CallOffer::decode(&[]).unwrap_err(), missing_id("CallOffer"));
    }

    #[test]
    fn test_busy_is_bare() {
        let busy = CallBusy::builder(505).build().unwrap();
        let call = CallMessage::builder().set_busy(&busy).build().unwrap();
        let decoded = CallMessage::decode(&call.encode()).unwrap();
        assert_eq!(decoded.busy().unwrap().id(), 505);
        assert!(!decoded.has_offer());
    }
}
