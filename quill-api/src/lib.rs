pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod comment;
pub use comment::{Comment, CommentId, CommentStatus};

mod error;
pub use error::Error;

mod notification;
pub use notification::{Notification, NotificationType};

mod page;
pub use page::{PageRequest, Pagination, DEFAULT_PAGE_SIZE};

mod post;
pub use post::{PostId, PostRef};

mod reaction;
pub use reaction::{Reaction, ReactionType};

mod user;
pub use user::{Role, User, UserId};

// Validation happens at the boundary: anything coming from a client goes
// through one of these before reaching quill-core.
pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(String::from(s)));
    }
    Ok(())
}

pub fn validate_content(s: &str) -> Result<(), Error> {
    validate_string(s)?;
    if s.trim().is_empty() {
        return Err(Error::EmptyContent);
    }
    Ok(())
}
