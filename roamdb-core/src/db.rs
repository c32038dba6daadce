use crate::{entities::*, repositories::*};
use anyhow::Result as Fallible;

/// Everything the usecases may need from the persistence collaborator.
pub trait Db:
    PlaceRepo
    + PlaceStatusRepo
    + BookingRepo
    + JourneyRepo
    + ReviewRepo
    + ReplyRepo
    + VoteRepo
    + UserRepo
    + UserStatsRepo
    + NotificationRepo
{
}

impl<T> Db for T where
    T: PlaceRepo
        + PlaceStatusRepo
        + BookingRepo
        + JourneyRepo
        + ReviewRepo
        + ReplyRepo
        + VoteRepo
        + UserRepo
        + UserStatsRepo
        + NotificationRepo
{
}

/// Filters of a place lookup.
///
/// Text filters are case-insensitive substring matches. When an origin
/// is given each match carries its distance from it, and a radius
/// restricts matches to `distance <= radius`.
#[derive(Debug, Default, Clone)]
pub struct PlaceIndexQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub origin: Option<MapPoint>,
    pub radius: Option<Distance>,
}

/// Query strategy for place lookups.
///
/// The only implementation in this crate scans all records; the trait
/// keeps the seam open for an indexed backend without touching callers.
pub trait PlaceIndex {
    fn query_places(&self, query: &PlaceIndexQuery) -> Fallible<Vec<(Place, Option<Distance>)>>;
}
