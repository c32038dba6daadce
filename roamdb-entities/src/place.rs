use crate::{category::*, contact::*, geo::*, id::*, time::*};

/// A geotagged place users can review, visit, and book.
///
/// Pricing and operational data live on the associated
/// [`PlaceStatus`](crate::place_status::PlaceStatus) record, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub pos: MapPoint,
    pub description: Option<String>,
    pub category: Category,
    pub image_url: Option<String>,
    pub contact: Option<Contact>,
    pub favorite_count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    // Most recent editor, fed into the per-user statistics.
    pub updated_by: Option<Id>,
}
