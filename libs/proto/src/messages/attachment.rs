//! Attachment pointers: CDN coordinates plus decryption material.
//!
//! The bytes themselves never ride the message wire; a pointer tells the
//! receiver where to fetch them (`cdn_number` + `cdn_id`/`cdn_key`) and how
//! to verify and decrypt what comes back (`digest`, `key`).

use crate::macros::proto_message;

proto_message! {
    /// Locator and crypto envelope for one uploaded blob.
    ///
    /// Uploads are addressed either by numeric `cdn_id` (legacy hosts) or by
    /// string `cdn_key`; senders set exactly one of the two.
    pub struct AttachmentPointer {
        optional fixed64 cdn_id = 1;
        optional string content_type = 2;
        optional bytes key = 3;
        optional u32 size = 4;
        optional bytes thumbnail = 5;
        optional bytes digest = 6;
        optional string file_name = 7;
        optional u32 flags = 8;
        optional u32 width = 9;
        optional u32 height = 10;
        optional string caption = 11;
        optional string blur_hash = 12;
        optional u64 upload_timestamp = 13;
        optional u32 cdn_number = 14;
        optional string cdn_key = 15;
    }
}
