//! Group context attached to conversation traffic.

use crate::macros::proto_message;

proto_message! {
    /// Names the group a message belongs to and the group-state revision the
    /// sender composed it against. Receivers behind on `revision` fetch the
    /// signed `group_change` before rendering.
    pub struct GroupContextV2 {
        optional bytes master_key = 1;
        optional u32 revision = 2;
        optional bytes group_change = 3;
    }
}
