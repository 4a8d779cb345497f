use super::*;

bitflags::bitflags! {
    pub struct MessageFlags: u32 {
        /// Do not render link previews or embeds for this message
        const SUPPRESS_EMBEDS           = 1 << 2;

        /// Deliver the message without push or desktop notifications
        const SUPPRESS_NOTIFICATIONS    = 1 << 12;
    }
}

serde_shims::impl_serde_for_bitflags!(MessageFlags);

impl Default for MessageFlags {
    #[inline]
    fn default() -> Self {
        MessageFlags::empty()
    }
}

/// Reserved for file uploads. Carries no data and is never populated by the builders.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {}

/// Top-level body of a webhook execution request.
///
/// `attachments` and `flags` are always present in the serialized form, `flags` as its integer value.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDocument {
    /// Overrides the webhook's default username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<SmolStr>,

    /// Overrides the webhook's default avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SmolStr>,

    /// Creates a thread with this name when posting to a forum channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "MaybeThinVec::is_empty")]
    pub embeds: MaybeThinVec<EmbedDocument>,

    #[serde(default)]
    pub attachments: MaybeThinVec<Attachment>,

    #[serde(default)]
    pub flags: MessageFlags,
}
