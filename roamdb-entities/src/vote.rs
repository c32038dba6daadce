use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoteTarget {
    Review,
    Reply,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoteType {
    Upvote,
    Downvote,
}

/// An up- or downvote on a review or reply.
///
/// At most one vote exists per (user, target, target type); re-voting
/// updates the existing record in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub id: Id,
    pub user_id: Id,
    pub target_id: Id,
    pub target_type: VoteTarget,
    pub vote_type: VoteType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
