use crate::{
    api::{Comment, CommentStatus, PageRequest, Pagination},
    paginate, sort_newest_first, CommentTree,
};

/// What a non-admin reader may see
pub fn visible_comments(comments: impl IntoIterator<Item = Comment>) -> Vec<Comment> {
    comments
        .into_iter()
        .filter(|c| c.status.is_publicly_visible())
        .collect()
}

impl CommentTree {
    /// The thread shown under a post: rejected comments hidden, newest
    /// first at every level
    pub fn for_display(comments: impl IntoIterator<Item = Comment>) -> CommentTree {
        let mut comments = visible_comments(comments);
        sort_newest_first(&mut comments);
        CommentTree::build(comments)
    }
}

/// The admin moderation list: every comment, optionally only those with
/// `status`, newest first
pub fn moderation_page(
    comments: &[Comment],
    status: Option<CommentStatus>,
    req: PageRequest,
) -> (Vec<&Comment>, Pagination) {
    let mut matching = comments
        .iter()
        .filter(|c| status.map_or(true, |s| c.status == s))
        .collect::<Vec<_>>();
    matching.sort_by_key(|c| std::cmp::Reverse(c.created_at));
    let (page, info) = paginate(&matching, req);
    (page.to_vec(), info)
}
