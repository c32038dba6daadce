// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    // Raised by cancellation-aware stores when the caller gave up on
    // the request; propagated unchanged through all layers.
    #[error("The operation was canceled")]
    Canceled,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    fn create_place(&self, place: Place) -> Result<()>;
    fn get_place(&self, id: &str) -> Result<Place>;
    fn all_places(&self) -> Result<Vec<Place>>;
    fn count_places(&self) -> Result<usize>;
    fn update_place(&self, place: &Place) -> Result<()>;
    fn delete_place(&self, id: &str) -> Result<()>;

    // Places whose most recent editor is the given user.
    fn places_last_edited_by(&self, user_id: &str) -> Result<Vec<Place>>;
}

pub trait PlaceStatusRepo {
    fn create_place_status(&self, status: PlaceStatus) -> Result<()>;
    fn get_place_status_of_place(&self, place_id: &str) -> Result<PlaceStatus>;
    fn try_get_place_status_of_place(&self, place_id: &str) -> Result<Option<PlaceStatus>>;
    fn update_place_status(&self, status: &PlaceStatus) -> Result<()>;
    fn delete_place_status_of_place(&self, place_id: &str) -> Result<usize>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: Booking) -> Result<()>;
    fn get_booking(&self, id: &str) -> Result<Booking>;
    fn update_booking(&self, booking: &Booking) -> Result<()>;
    fn delete_booking(&self, id: &str) -> Result<()>;
    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>>;
}

pub trait JourneyRepo {
    fn create_journey(&self, journey: Journey) -> Result<()>;

    // Ownership is part of the lookup predicate: another user's journey
    // is indistinguishable from a missing one.
    fn get_journey(&self, id: &str, user_id: &str) -> Result<Journey>;
    fn journeys_of_user(&self, user_id: &str) -> Result<Vec<Journey>>;
    fn update_journey(&self, journey: &Journey) -> Result<()>;
    fn delete_journey(&self, id: &str, user_id: &str) -> Result<()>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: Review) -> Result<()>;
    fn get_review(&self, id: &str) -> Result<Review>;
    fn reviews_of_place(&self, place_id: &str) -> Result<Vec<Review>>;
    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;
}

pub trait ReplyRepo {
    fn create_reply(&self, reply: Reply) -> Result<()>;
    fn get_reply(&self, id: &str) -> Result<Reply>;
    fn replies_of_review(&self, review_id: &str) -> Result<Vec<Reply>>;
    fn update_reply(&self, reply: &Reply) -> Result<()>;
    fn delete_reply(&self, id: &str) -> Result<()>;
}

pub trait VoteRepo {
    fn create_vote(&self, vote: Vote) -> Result<()>;
    fn update_vote(&self, vote: &Vote) -> Result<()>;
    fn delete_vote(&self, id: &str, user_id: &str) -> Result<()>;
    fn votes_of_user(&self, user_id: &str) -> Result<Vec<Vote>>;
    fn votes_for_target(&self, target_id: &str, target_type: VoteTarget) -> Result<Vec<Vote>>;
    fn try_get_vote(
        &self,
        user_id: &str,
        target_id: &str,
        target_type: VoteTarget,
    ) -> Result<Option<Vote>>;
}

pub trait UserRepo {
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    fn update_user(&self, user: &User) -> Result<()>;
}

pub trait UserStatsRepo {
    // Replaces the whole stats document of the user, creating it if
    // necessary.
    fn upsert_user_stats(&self, stats: UserStats) -> Result<()>;
    fn try_get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>>;
}

pub trait NotificationRepo {
    fn create_notification(&self, notification: Notification) -> Result<()>;
    fn get_notification(&self, id: &str) -> Result<Notification>;
    fn update_notification(&self, notification: &Notification) -> Result<()>;
    fn notifications_of_user(&self, user_id: &str) -> Result<Vec<Notification>>;
}

impl<R: NotificationRepo> NotificationRepo for &R {
    fn create_notification(&self, notification: Notification) -> Result<()> {
        (*self).create_notification(notification)
    }
    fn get_notification(&self, id: &str) -> Result<Notification> {
        (*self).get_notification(id)
    }
    fn update_notification(&self, notification: &Notification) -> Result<()> {
        (*self).update_notification(notification)
    }
    fn notifications_of_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        (*self).notifications_of_user(user_id)
    }
}
