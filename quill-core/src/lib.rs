mod config;
pub use config::Config;

mod mention;
pub use mention::{is_mentioned, mentioned_users, mentions};

mod moderation;
pub use moderation::{moderation_page, visible_comments};

mod notify;
pub use notify::{NewComment, Planner};

mod page;
pub use page::paginate;

mod policy;
pub use policy::Policy;

mod reaction;
pub use reaction::{apply_reaction, react, summarize, user_reaction, ReactionAction, ReactionGroup};

mod tree;
pub use tree::{sort_newest_first, CommentNode, CommentTree, Thread, Walk};

pub mod api {
    pub use quill_api::*;
}

#[cfg(test)]
pub(crate) mod test_util {
    use chrono::{Duration, TimeZone, Utc};

    use crate::api::{Comment, CommentId, CommentStatus, PostId, Time, UserId, Uuid};

    pub fn t0() -> Time {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    pub fn cid(n: u128) -> CommentId {
        CommentId(Uuid::from_u128(n))
    }

    pub fn uid(n: u128) -> UserId {
        UserId(Uuid::from_u128(0xA000 + n))
    }

    /// Comment `id` by user 1, created `minutes` after t0
    pub fn comment(id: u128, parent: Option<u128>, minutes: i64) -> Comment {
        Comment {
            id: cid(id),
            content: format!("comment {id}"),
            author_id: uid(1),
            post_id: PostId::stub(),
            parent_id: parent.map(cid),
            created_at: t0() + Duration::minutes(minutes),
            is_edited: false,
            edited_at: None,
            status: CommentStatus::Approved,
            reactions: Vec::new(),
        }
    }
}
