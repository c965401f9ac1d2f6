//! Conversation traffic: text, attachments, quotes, reactions, deletes.
//!
//! [`DataMessage`] is the widest schema in the crate and the usual reason a
//! [`Content`](crate::messages::Content) exists at all. Its children keep
//! their own types because sync transcripts and quotes embed them
//! independently.

use crate::macros::proto_message;
use crate::messages::attachment::AttachmentPointer;
use crate::messages::group::GroupContextV2;

/// Text styling applied to a [`BodyRange`].
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
pub enum BodyRangeStyle {
    #[default]
    None = 0,
    Bold = 1,
    Italic = 2,
    Spoiler = 3,
    Strikethrough = 4,
    Monospace = 5,
}

proto_message! {
    /// One conversation message as the sender composed it.
    ///
    /// `timestamp` here is client-assigned and doubles as the message id for
    /// quotes, reactions, and deletes aimed back at it.
    pub struct DataMessage {
        optional string body = 1;
        repeated message(AttachmentPointer) attachments = 2;
        optional u32 flags = 4;
        optional u32 expire_timer = 5;
        optional bytes profile_key = 6;
        optional u64 timestamp = 7;
        optional message(Quote) quote = 8;
        optional u32 required_protocol_version = 12;
        optional bool is_view_once = 14;
        optional message(GroupContextV2) group_v2 = 15;
        optional message(Reaction) reaction = 16;
        optional message(Delete) delete = 17;
        repeated message(BodyRange) body_ranges = 18;
    }
}

proto_message! {
    /// Reference to an earlier message being replied to. `id` is the quoted
    /// message's client timestamp.
    pub struct Quote {
        required u64 id = 1;
        optional string text = 3;
        optional string author_aci = 5;
        repeated message(BodyRange) body_ranges = 6;
    }
}

proto_message! {
    /// Emoji reaction aimed at one earlier message.
    pub struct Reaction {
        required string emoji = 1;
        optional bool remove = 2;
        required string target_author_aci = 4;
        required u64 target_sent_timestamp = 5;
    }
}

proto_message! {
    /// Remote delete of one earlier message from the same sender.
    pub struct Delete {
        required u64 target_sent_timestamp = 1;
    }
}

proto_message! {
    /// Half-open span of the message body, in UTF-16 code units, carrying a
    /// mention or a style.
    pub struct BodyRange {
        optional u32 start = 1;
        optional u32 length = 2;
        optional string mention_aci = 3;
        optional enum(BodyRangeStyle) style = 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtoError;
    use crate::schema::Message;

    #[test]
    fn test_attachment_order_preserved() {
        let first = AttachmentPointer::builder()
            .set_file_name("one.jpg")
            .build()
            .unwrap();
        let second = AttachmentPointer::builder()
            .set_file_name("two.jpg")
            .build()
            .unwrap();
        let third = AttachmentPointer::builder()
            .set_file_name("three.jpg")
            .build()
            .unwrap();

        let message = DataMessage::builder()
            .set_body("holiday photos")
            .add_attachments(&first)
            .add_attachments(&second)
            .add_attachments(&third)
            .build()
            .unwrap();

        let decoded = DataMessage::decode(&message.encode()).unwrap();
        let names: Vec<_> = decoded
            .attachments()
            .iter()
            .map(|a| a.file_name().unwrap())
            .collect();
        assert_eq!(names, ["one.jpg", "two.jpg", "three.jpg"]);
    }

    #[test]
    fn test_quote_nests_and_requires_id() {
        let quote = Quote::builder(1_699_999_000_000)
            .set_text("see you there")
            .set_author_aci("aci:41d2")
            .build()
            .unwrap();
        let message = DataMessage::builder()
            .set_body("sounds good")
            .set_quote(&quote)
            .build()
            .unwrap();

        let decoded = DataMessage::decode(&message.encode()).unwrap();
        let decoded_quote = decoded.quote().unwrap();
        assert_eq!(decoded_quote.id(), 1_699_999_000_000);
        assert_eq!(decoded_quote.text(), Some("see you there"));

        // A quote with no id poisons the whole parent decode.
        let bad = [0x42, 0x04, 0x1a, 0x02, b'h', b'i'];
        let err = DataMessage::decode(&bad).unwrap_err();
        assert_eq!(
            err,
            ProtoError::MissingRequiredField {
                message: "Quote",
                field: "id"
            }
        );
    }

    #[test]
    fn test_reaction_builder_sets_required_fields() {
        let reaction = Reaction::builder("🔥", "aci:77aa", 1_700_000_000_555)
            .set_remove(false)
            .build()
            .unwrap();
        assert_eq!(reaction.emoji(), "🔥");
        assert_eq!(reaction.target_author_aci(), "aci:77aa");
        assert_eq!(reaction.target_sent_timestamp(), 1_700_000_000_555);
        assert_eq!(reaction.remove(), Some(false));

        let decoded = Reaction::decode(&reaction.encode()).unwrap();
        assert_eq!(decoded, reaction);
    }

    #[test]
    fn test_empty_reaction_names_type_and_one_missing_field() {
        // Three required fields are absent at once. The error names the
        // type and one of them, not any particular one.
        let required = ["emoji", "target_author_aci", "target_sent_timestamp"];
        for err in [
            ReactionBuilder::default().build().unwrap_err(),
            Reaction::decode(&[]).unwrap_err(),
        ] {
            match err {
                ProtoError::MissingRequiredField { message, field } => {
                    assert_eq!(message, "Reaction");
                    assert!(required.contains(&field));
                }
                other => panic!("expected a missing-field error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_delete_round_trip() {
        let delete = Delete::builder(1_700_000_000_001).build().unwrap();
        let message = DataMessage::builder().set_delete(&delete).build().unwrap();

        let decoded = DataMessage::decode(&message.encode()).unwrap();
        assert_eq!(
            decoded.delete().unwrap().target_sent_timestamp(),
            1_700_000_000_001
        );
    }

    #[test]
    fn test_body_ranges_keep_order_and_style() {
        let bold = BodyRange::builder()
            .set_start(0)
            .set_length(5)
            .set_style(BodyRangeStyle::Bold)
            .build()
            .unwrap();
        let mention = BodyRange::builder()
            .set_start(6)
            .set_length(1)
            .set_mention_aci("aci:12ef")
            .build()
            .unwrap();

        let message = DataMessage::builder()
            .set_body("hello @")
            .set_body_ranges(&[bold, mention])
            .build()
            .unwrap();

        let decoded = DataMessage::decode(&message.encode()).unwrap();
        let ranges = decoded.body_ranges();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].style(), Some(BodyRangeStyle::Bold));
        assert_eq!(ranges[0].start(), Some(0));
        assert_eq!(ranges[1].mention_aci(), Some("aci:12ef"));
        assert!(!ranges[1].has_style());
    }

    #[test]
    fn test_every_style_survives_the_wire() {
        for style in [
            BodyRangeStyle::None,
            BodyRangeStyle::Bold,
            BodyRangeStyle::Italic,
            BodyRangeStyle::Spoiler,
            BodyRangeStyle::Strikethrough,
            BodyRangeStyle::Monospace,
        ] {
            let range = BodyRange::builder().set_style(style).build().unwrap();
            let decoded = BodyRange::decode(&range.encode()).unwrap();
            assert_eq!(decoded.style(), Some(style));
        }
    }

    #[test]
    fn test_group_context_rides_along() {
        let group = GroupContextV2::builder()
            .set_master_key(vec![7u8; 32])
            .set_revision(12)
            .build()
            .unwrap();
        let message = DataMessage::builder()
            .set_body("meeting moved to 3pm")
            .set_group_v2(&group)
            .build()
            .unwrap();

        let decoded = DataMessage::decode(&message.encode()).unwrap();
        let decoded_group = decoded.group_v2().unwrap();
        assert_eq!(decoded_group.revision(), Some(12));
        assert_eq!(decoded_group.master_key(), Some(&[7u8; 32][..]));
    }
}
