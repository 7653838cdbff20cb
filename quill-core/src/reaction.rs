use crate::api::{Comment, Reaction, ReactionType, UserId};

/// What toggling a reaction did
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Created,
    Updated,
    Removed,
}

impl ReactionAction {
    /// Only brand new reactions from someone else are worth a notification
    pub fn should_notify(&self, comment_author: UserId, reactor: UserId) -> bool {
        *self == ReactionAction::Created && comment_author != reactor
    }
}

/// Toggle `user`'s reaction: add it, switch its type, or remove it if the
/// same type was already there
pub fn apply_reaction(
    mut reactions: Vec<Reaction>,
    user: UserId,
    kind: ReactionType,
) -> (Vec<Reaction>, ReactionAction) {
    let action = match reactions.iter().position(|r| r.user_id == user) {
        None => {
            reactions.push(Reaction {
                user_id: user,
                kind,
            });
            ReactionAction::Created
        }
        Some(i) if reactions[i].kind == kind => {
            reactions.retain(|r| r.user_id != user);
            ReactionAction::Removed
        }
        Some(i) => {
            reactions[i].kind = kind;
            ReactionAction::Updated
        }
    };
    (reactions, action)
}

/// `apply_reaction` on a comment's own reaction list
pub fn react(comment: &mut Comment, user: UserId, kind: ReactionType) -> ReactionAction {
    let (reactions, action) = apply_reaction(std::mem::take(&mut comment.reactions), user, kind);
    comment.reactions = reactions;
    action
}

pub fn user_reaction(reactions: &[Reaction], user: UserId) -> Option<ReactionType> {
    reactions.iter().find(|r| r.user_id == user).map(|r| r.kind)
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionGroup {
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub count: usize,
    pub user_ids: Vec<UserId>,
}

/// Reactions grouped by type, in picker order, omitting unused types
pub fn summarize(reactions: &[Reaction]) -> Vec<ReactionGroup> {
    ReactionType::ALL
        .into_iter()
        .filter_map(|kind| {
            let user_ids = reactions
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| r.user_id)
                .collect::<Vec<_>>();
            (!user_ids.is_empty()).then(|| ReactionGroup {
                kind,
                count: user_ids.len(),
                user_ids,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::test_util::*;

    #[test]
    fn toggle() {
        let a = uid(1);
        let (r, action) = apply_reaction(Vec::new(), a, ReactionType::Like);
        assert_eq!(action, ReactionAction::Created);
        assert_eq!(
            r,
            vec![Reaction {
                user_id: a,
                kind: ReactionType::Like
            }]
        );

        let (removed, action) = apply_reaction(r.clone(), a, ReactionType::Like);
        assert_eq!(action, ReactionAction::Removed);
        assert!(removed.is_empty());

        let (r, action) = apply_reaction(r, a, ReactionType::Love);
        assert_eq!(action, ReactionAction::Updated);
        assert_eq!(
            r,
            vec![Reaction {
                user_id: a,
                kind: ReactionType::Love
            }]
        );
    }

    #[test]
    fn other_users_untouched() {
        let mut c = comment(1, None, 0);
        assert_eq!(react(&mut c, uid(1), ReactionType::Sad), ReactionAction::Created);
        assert_eq!(react(&mut c, uid(2), ReactionType::Haha), ReactionAction::Created);
        assert_eq!(react(&mut c, uid(1), ReactionType::Sad), ReactionAction::Removed);
        assert_eq!(user_reaction(&c.reactions, uid(1)), None);
        assert_eq!(user_reaction(&c.reactions, uid(2)), Some(ReactionType::Haha));
    }

    #[test]
    fn notify_only_on_created_by_other() {
        assert!(ReactionAction::Created.should_notify(uid(1), uid(2)));
        assert!(!ReactionAction::Created.should_notify(uid(1), uid(1)));
        assert!(!ReactionAction::Updated.should_notify(uid(1), uid(2)));
        assert!(!ReactionAction::Removed.should_notify(uid(1), uid(2)));
    }

    #[test]
    fn summary_order() {
        let r = |u, kind| Reaction {
            user_id: uid(u),
            kind,
        };
        let groups = summarize(&[
            r(1, ReactionType::Angry),
            r(2, ReactionType::Like),
            r(3, ReactionType::Angry),
        ]);
        assert_eq!(
            groups,
            vec![
                ReactionGroup {
                    kind: ReactionType::Like,
                    count: 1,
                    user_ids: vec![uid(2)],
                },
                ReactionGroup {
                    kind: ReactionType::Angry,
                    count: 2,
                    user_ids: vec![uid(1), uid(3)],
                },
            ]
        );
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn fuzz_one_reaction_per_user() {
        bolero::check!()
            .with_type::<Vec<(u8, ReactionType)>>()
            .cloned()
            .for_each(|toggles| {
                let mut reactions = Vec::new();
                for (user, kind) in toggles {
                    let user = uid(u128::from(user % 8));
                    let before = user_reaction(&reactions, user);
                    let (after, action) = apply_reaction(reactions, user, kind);
                    reactions = after;
                    let expected = match before {
                        None => ReactionAction::Created,
                        Some(k) if k == kind => ReactionAction::Removed,
                        Some(_) => ReactionAction::Updated,
                    };
                    assert_eq!(action, expected);
                    let users = reactions.iter().map(|r| r.user_id).collect::<HashSet<_>>();
                    assert_eq!(users.len(), reactions.len());
                }
            })
    }
}
