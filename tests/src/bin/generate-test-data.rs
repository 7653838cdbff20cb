use chrono::{Duration, Utc};
use quill_api::{
    Comment, CommentId, CommentStatus, PostId, Reaction, ReactionType, UserId,
};
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

const NUM_USERS: usize = 8;
const NUM_COMMENTS: usize = 200;

// Out of 100
const REPLY_CHANCE: u32 = 60;
const ORPHAN_CHANCE: u32 = 2;
const REACTION_CHANCE: u32 = 30;

const COMMENT_WORD_COUNT: usize = 25;
const MAX_AGE_DAYS: i64 = 30;

fn gen_status(rng: &mut impl Rng) -> CommentStatus {
    match rng.gen_range(0..10) {
        0 => CommentStatus::Rejected,
        1 | 2 => CommentStatus::Pending,
        _ => CommentStatus::Approved,
    }
}

fn main() {
    let mut rng = rand::thread_rng();
    let post = PostId(Uuid::new_v4());
    let users = (0..NUM_USERS)
        .map(|_| UserId(Uuid::new_v4()))
        .collect::<Vec<_>>();

    // Comments are generated oldest first so that replies can point to
    // earlier ones
    let start = Utc::now() - Duration::days(MAX_AGE_DAYS);
    let mut offsets = (0..NUM_COMMENTS)
        .map(|_| rng.gen_range(0..MAX_AGE_DAYS * 24 * 3600))
        .collect::<Vec<_>>();
    offsets.sort_unstable();

    let mut comments: Vec<Comment> = Vec::with_capacity(NUM_COMMENTS);
    for offset in offsets {
        let parent_id = if rng.gen_ratio(ORPHAN_CHANCE, 100) {
            Some(CommentId(Uuid::new_v4()))
        } else if !comments.is_empty() && rng.gen_ratio(REPLY_CHANCE, 100) {
            comments.choose(&mut rng).map(|c| c.id)
        } else {
            None
        };

        let mut reactions = Vec::new();
        for user in users.iter() {
            if rng.gen_ratio(REACTION_CHANCE, 100) {
                reactions.push(Reaction {
                    user_id: *user,
                    kind: *ReactionType::ALL
                        .choose(&mut rng)
                        .expect("there are reaction types"),
                });
            }
        }

        let created_at = start + Duration::seconds(offset);
        let is_edited = rng.gen_ratio(1, 10);
        comments.push(Comment {
            id: CommentId(Uuid::new_v4()),
            content: lipsum::lipsum_words(COMMENT_WORD_COUNT),
            author_id: *users.choose(&mut rng).expect("there are users"),
            post_id: post,
            parent_id,
            created_at,
            is_edited,
            edited_at: is_edited.then(|| created_at + Duration::seconds(rng.gen_range(1..300))),
            status: gen_status(&mut rng),
            reactions,
        });
    }

    // Storage hands out comments in no particular order
    comments.shuffle(&mut rng);
    println!(
        "{}",
        serde_json::to_string_pretty(&comments).expect("serializing comments")
    );
}
