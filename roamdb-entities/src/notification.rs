use crate::{id::*, time::*};

/// A stored message for a user, created as a side effect of booking and
/// review activity, never by the recipient's own actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Id,
    pub user_id: Id,
    pub message: String,
    pub read: bool,
    pub created_at: Timestamp,
}
