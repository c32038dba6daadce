use crate::{
    id::Id,
    time::Timestamp,
    vote::{VoteTarget, VoteType},
};

/// Denormalized sub-aggregate of a stats document: a count plus the
/// snapshot records it was derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSection<T> {
    pub count: u64,
    pub entries: Vec<T>,
}

impl<T> From<Vec<T>> for StatsSection<T> {
    fn from(entries: Vec<T>) -> Self {
        Self {
            count: entries.len() as u64,
            entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditedPlace {
    pub place_id: Id,
    pub name: String,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredReview {
    pub review_id: Id,
    pub place_id: Id,
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastVote {
    pub vote_id: Id,
    pub target_id: Id,
    pub target_type: VoteTarget,
    pub vote_type: VoteType,
    pub created_at: Timestamp,
}

/// Materialized view of a user's activity.
///
/// Always rebuilt wholesale from the source collections; deliberately
/// carries no timestamps of its own so that two rebuilds without
/// intervening writes compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_id: Id,
    pub edited_places: StatsSection<EditedPlace>,
    pub reviews_created: StatsSection<AuthoredReview>,
    pub votes_created: StatsSection<CastVote>,
}
