use crate::{id::*, time::*};

/// A user's rated review of a place.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Id,
    pub place_id: Id,
    pub user_id: Id,
    // Validated against MIN_RATING..=MAX_RATING on every write.
    pub rating: u8,
    pub comment: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Review {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;
}
