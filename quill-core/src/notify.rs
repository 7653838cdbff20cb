use crate::{
    api::{Comment, Notification, NotificationType, PostRef, User, UserId},
    Config, ReactionAction,
};

const ANONYMOUS_SENDER: &str = "Someone";

/// Everything needed to decide who hears about a freshly submitted comment
pub struct NewComment<'a> {
    pub comment: &'a Comment,
    pub sender_name: Option<&'a str>,
    pub post: &'a PostRef,
    /// Author of the comment being replied to, if any
    pub parent_author: Option<UserId>,
    /// Users whose name matched one of the comment's mentions
    pub mentioned: &'a [User],
}

#[derive(Clone, Debug)]
pub struct Planner {
    preview_len: usize,
}

impl Default for Planner {
    fn default() -> Planner {
        Planner::from_config(&Config::default())
    }
}

impl Planner {
    pub fn from_config(cfg: &Config) -> Planner {
        Planner {
            preview_len: cfg.preview_len,
        }
    }

    fn preview(&self, content: &str) -> String {
        let mut res = content.chars().take(self.preview_len).collect::<String>();
        res.push_str("...");
        res
    }

    /// Mentioned users, the post author and the parent comment's author each
    /// get at most one notification, and nobody is notified of their own
    /// comment
    pub fn plan_for_comment(&self, ev: &NewComment<'_>) -> Vec<Notification> {
        let sender = ev.comment.author_id;
        let name = ev.sender_name.unwrap_or(ANONYMOUS_SENDER);
        let notif = |recipient_id, kind, message| Notification {
            recipient_id,
            sender_id: sender,
            post_id: ev.post.id,
            kind,
            message,
        };
        let was_mentioned = |user: UserId| ev.mentioned.iter().any(|u| u.id == user);

        let mut res: Vec<Notification> = Vec::new();
        for user in ev.mentioned {
            if user.id == sender || res.iter().any(|n| n.recipient_id == user.id) {
                continue;
            }
            res.push(notif(
                user.id,
                NotificationType::Mention,
                format!(
                    "{name} mentioned you in a comment: \"{}\"",
                    self.preview(&ev.comment.content)
                ),
            ));
        }

        let post_author = ev.post.author_id;
        if post_author != sender && !was_mentioned(post_author) {
            res.push(notif(
                post_author,
                NotificationType::Comment,
                format!("{name} commented on your post \"{}\"", ev.post.title),
            ));
        }

        // The post author already heard about this comment one way or another
        if let Some(parent_author) = ev.parent_author {
            if parent_author != sender && parent_author != post_author && !was_mentioned(parent_author)
            {
                res.push(notif(
                    parent_author,
                    NotificationType::Reply,
                    format!("{name} replied to your comment"),
                ));
            }
        }

        tracing::debug!(
            comment_id = ?ev.comment.id,
            num_notifications = res.len(),
            "planned comment notifications"
        );
        res
    }

    pub fn plan_for_reaction(
        &self,
        comment: &Comment,
        reactor: UserId,
        reactor_name: Option<&str>,
        action: ReactionAction,
    ) -> Option<Notification> {
        if !action.should_notify(comment.author_id, reactor) {
            return None;
        }
        Some(Notification {
            recipient_id: comment.author_id,
            sender_id: reactor,
            post_id: comment.post_id,
            kind: NotificationType::Reaction,
            message: format!(
                "{} reacted to your comment: \"{}\"",
                reactor_name.unwrap_or(ANONYMOUS_SENDER),
                self.preview(&comment.content)
            ),
        })
    }
}
