use crate::{PostId, UserId};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Comment,
    Reply,
    Mention,
    Reaction,
    /// Only offered as a filter value to clients, never planned by the core
    Like,
}

/// A notification that should be stored for `recipient_id`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub recipient_id: UserId,
    pub sender_id: UserId,
    pub post_id: PostId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
}
