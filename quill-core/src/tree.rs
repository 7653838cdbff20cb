use std::{
    cmp::Reverse,
    collections::{hash_map, HashMap},
};

use crate::api::{Comment, CommentId};

#[derive(Clone, Debug)]
struct Node {
    comment: Comment,
    replies: Vec<usize>,
}

/// Comments of one post arranged as a forest.
///
/// Comments are stored in a flat arena, parents refer to their replies by
/// index. Siblings keep the order in which they were passed to `build`.
#[derive(Clone, Debug, Default)]
pub struct CommentTree {
    nodes: Vec<Node>,
    roots: Vec<usize>,
}

impl CommentTree {
    /// Comments whose parent is not part of `comments` are left out of the
    /// tree, along with all their replies.
    pub fn build(comments: impl IntoIterator<Item = Comment>) -> CommentTree {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        for comment in comments {
            match index.entry(comment.id) {
                hash_map::Entry::Occupied(_) => {
                    tracing::warn!(comment_id = ?comment.id, "duplicate comment id, ignoring it");
                }
                hash_map::Entry::Vacant(v) => {
                    v.insert(nodes.len());
                    nodes.push(Node {
                        comment,
                        replies: Vec::new(),
                    });
                }
            }
        }

        let mut roots = Vec::new();
        for i in 0..nodes.len() {
            let parent_id = nodes[i].comment.parent_id;
            match parent_id {
                None => roots.push(i),
                Some(parent_id) => match index.get(&parent_id) {
                    Some(&parent) => nodes[parent].replies.push(i),
                    None => tracing::debug!(
                        comment_id = ?nodes[i].comment.id,
                        ?parent_id,
                        "parent of comment not found, leaving it out of the tree"
                    ),
                },
            }
        }

        CommentTree { nodes, roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> impl Iterator<Item = Thread<'_>> {
        self.roots.iter().map(move |&idx| Thread {
            tree: self,
            idx,
            depth: 0,
        })
    }

    /// Depth-first, parents before their replies
    pub fn iter(&self) -> Walk<'_> {
        Walk {
            stack: self.roots().collect::<Vec<_>>().into_iter().rev().collect(),
        }
    }

    /// Number of comments that are actually displayed
    pub fn reachable(&self) -> usize {
        self.iter().count()
    }

    pub fn find(&self, id: CommentId) -> Option<Thread<'_>> {
        self.iter().find(|t| t.comment().id == id)
    }

    pub fn into_forest(self) -> Vec<CommentNode> {
        let CommentTree { nodes, roots } = self;

        let mut order = Vec::with_capacity(nodes.len());
        let mut stack = roots.iter().rev().copied().collect::<Vec<_>>();
        while let Some(i) = stack.pop() {
            order.push(i);
            stack.extend(nodes[i].replies.iter().rev());
        }

        // Replies always come after their parent in `order`, so walking it
        // backwards builds every reply before the node that holds it
        let mut pending = nodes.into_iter().map(Some).collect::<Vec<_>>();
        let mut built = std::iter::repeat_with(|| None)
            .take(pending.len())
            .collect::<Vec<Option<CommentNode>>>();
        for &i in order.iter().rev() {
            let Some(Node { comment, replies }) = pending[i].take() else {
                continue;
            };
            let replies = replies.iter().filter_map(|&r| built[r].take()).collect();
            built[i] = Some(CommentNode { comment, replies });
        }

        roots.into_iter().filter_map(|r| built[r].take()).collect()
    }
}

impl<'a> IntoIterator for &'a CommentTree {
    type Item = Thread<'a>;
    type IntoIter = Walk<'a>;

    fn into_iter(self) -> Walk<'a> {
        self.iter()
    }
}

/// A comment in a `CommentTree`, along with its position
#[derive(Clone, Copy, Debug)]
pub struct Thread<'a> {
    tree: &'a CommentTree,
    idx: usize,
    depth: usize,
}

impl<'a> Thread<'a> {
    pub fn comment(&self) -> &'a Comment {
        &self.tree.nodes[self.idx].comment
    }

    /// 0 for root comments
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn replies(&self) -> impl Iterator<Item = Thread<'a>> + 'a {
        let tree = self.tree;
        let depth = self.depth + 1;
        tree.nodes[self.idx]
            .replies
            .iter()
            .map(move |&idx| Thread { tree, idx, depth })
    }

    pub fn num_replies(&self) -> usize {
        self.tree.nodes[self.idx].replies.len()
    }
}

pub struct Walk<'a> {
    stack: Vec<Thread<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Thread<'a>;

    fn next(&mut self) -> Option<Thread<'a>> {
        let t = self.stack.pop()?;
        let first_reply = self.stack.len();
        self.stack.extend(t.replies());
        self.stack[first_reply..].reverse();
        Some(t)
    }
}

/// Owned, nested form of a thread, as returned to clients
///
/// Dropping is iterative. Serializing and comparing recurse once per level.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl Drop for CommentNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.replies);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.replies);
        }
    }
}

/// Stable, so comments sharing a timestamp keep their relative order
pub fn sort_newest_first(comments: &mut [Comment]) {
    comments.sort_by_key(|c| Reverse(c.created_at));
}
