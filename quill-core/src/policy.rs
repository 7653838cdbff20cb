use chrono::Duration;

use crate::{
    api::{Comment, CommentStatus, Error, Time, User, UserId},
    Config,
};

/// Who may do what to a comment, and when
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    pub edit_window: Duration,
    pub max_reply_depth: usize,
}

impl Default for Policy {
    fn default() -> Policy {
        Policy::from_config(&Config::default())
    }
}

impl Policy {
    pub fn from_config(cfg: &Config) -> Policy {
        Policy {
            edit_window: cfg.edit_window,
            max_reply_depth: cfg.max_reply_depth,
        }
    }

    pub fn can_edit(&self, comment: &Comment, user: UserId, now: Time) -> bool {
        comment.author_id == user && now.signed_duration_since(comment.created_at) <= self.edit_window
    }

    pub fn can_delete(&self, comment: &Comment, user: &User) -> bool {
        comment.author_id == user.id || user.is_admin()
    }

    pub fn can_moderate(&self, user: &User) -> bool {
        user.is_admin()
    }

    /// `depth` is the depth of the comment being replied to
    pub fn can_reply(&self, depth: usize) -> bool {
        depth < self.max_reply_depth
    }

    pub fn apply_edit(
        &self,
        comment: &mut Comment,
        user: UserId,
        content: String,
        now: Time,
    ) -> Result<(), Error> {
        if comment.author_id != user {
            tracing::debug!(comment_id = ?comment.id, ?user, "refusing edit by non-author");
            return Err(Error::PermissionDenied);
        }
        if !self.can_edit(comment, user, now) {
            return Err(Error::EditWindowExpired);
        }
        crate::api::validate_content(&content)?;
        comment.content = content;
        comment.is_edited = true;
        comment.edited_at = Some(now);
        Ok(())
    }

    /// Any status can be switched to any other one
    pub fn set_status(
        &self,
        comment: &mut Comment,
        user: &User,
        status: CommentStatus,
    ) -> Result<(), Error> {
        if !self.can_moderate(user) {
            tracing::debug!(comment_id = ?comment.id, user = ?user.id, "refusing moderation by non-admin");
            return Err(Error::PermissionDenied);
        }
        comment.status = status;
        Ok(())
    }
}
