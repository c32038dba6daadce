use crate::{id::*, time::*};

/// A threaded reply to a review.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: Id,
    pub review_id: Id,
    pub parent_reply_id: Option<Id>,
    pub user_id: Id,
    pub content: String,
    pub created_at: Timestamp,
}
