use std::{fmt, str::FromStr};

use uuid::Uuid;

use crate::{Error, PostId, Reaction, Time, UserId, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "PENDING",
            CommentStatus::Approved => "APPROVED",
            CommentStatus::Rejected => "REJECTED",
        }
    }

    /// Rejected comments are only ever shown to admins
    pub fn is_publicly_visible(&self) -> bool {
        !matches!(self, CommentStatus::Rejected)
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<CommentStatus, Error> {
        match s {
            "PENDING" => Ok(CommentStatus::Pending),
            "APPROVED" => Ok(CommentStatus::Approved),
            "REJECTED" => Ok(CommentStatus::Rejected),
            _ => Err(Error::UnknownStatus(String::from(s))),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author_id: UserId,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub created_at: Time,

    #[serde(default)]
    pub is_edited: bool,
    #[serde(default)]
    pub edited_at: Option<Time>,

    pub status: CommentStatus,

    /// At most one entry per user
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Comment {
    pub fn new(
        author_id: UserId,
        post_id: PostId,
        parent_id: Option<CommentId>,
        content: String,
        status: CommentStatus,
        created_at: Time,
    ) -> Comment {
        Comment {
            id: CommentId(Uuid::new_v4()),
            content,
            author_id,
            post_id,
            parent_id,
            created_at,
            is_edited: false,
            edited_at: None,
            status,
            reactions: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_content(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names() {
        for s in [
            CommentStatus::Pending,
            CommentStatus::Approved,
            CommentStatus::Rejected,
        ] {
            assert_eq!(s.as_str().parse::<CommentStatus>(), Ok(s));
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!("\"{}\"", s.as_str())
            );
        }
        assert_eq!(
            "approved".parse::<CommentStatus>(),
            Err(Error::UnknownStatus(String::from("approved")))
        );
    }

    #[test]
    fn parses_minimal_json() {
        let c: Comment = serde_json::from_str(
            r#"{
                "id": "00000000-0000-0000-0000-000000000001",
                "content": "hello",
                "authorId": "00000000-0000-0000-0000-00000000000a",
                "postId": "00000000-0000-0000-0000-0000000000ff",
                "parentId": null,
                "createdAt": "2024-01-01T12:00:00Z",
                "status": "APPROVED"
            }"#,
        )
        .unwrap();
        assert!(c.is_root());
        assert!(!c.is_edited);
        assert_eq!(c.edited_at, None);
        assert!(c.reactions.is_empty());
        assert_eq!(c.status, CommentStatus::Approved);
    }
}
