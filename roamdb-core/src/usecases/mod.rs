mod cast_vote;
mod confirm_booking;
mod create_booking;
mod create_journey;
mod create_place;
mod create_place_status;
mod create_reply;
mod create_review;
mod delete_booking;
mod error;
mod get_user_stats;
mod pay_booking;
mod place_rating_summary;
mod price_booking;
mod rebuild_user_stats;
mod search_places;
mod seed_place_statuses;
mod set_journey_status;
mod toggle_favorite;
mod update_booking;
mod update_journey;
mod update_place;
mod update_place_status;
mod update_review;
mod visit_journey_place;

pub use self::{
    cast_vote::*, confirm_booking::*, create_booking::*, create_journey::*, create_place::*,
    create_place_status::*, create_reply::*, create_review::*, delete_booking::*, error::Error,
    get_user_stats::*, pay_booking::*, place_rating_summary::*, price_booking::*,
    rebuild_user_stats::*, search_places::*, seed_place_statuses::*, set_journey_status::*,
    toggle_favorite::*, update_booking::*, update_journey::*, update_place::*,
    update_place_status::*, update_review::*, visit_journey_place::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        authorization,
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
use self::prelude::*;

pub fn get_place<R: PlaceRepo>(repo: &R, id: &str) -> Result<Place> {
    Ok(repo.get_place(id)?)
}

pub fn delete_place<D>(db: &D, id: &str) -> Result<()>
where
    D: PlaceRepo + PlaceStatusRepo,
{
    db.delete_place(id)?;
    let cascaded = db.delete_place_status_of_place(id)?;
    if cascaded > 0 {
        log::debug!("Deleted {cascaded} place status record(s) of place {id}");
    }
    Ok(())
}

pub fn get_place_status<R: PlaceStatusRepo>(repo: &R, place_id: &str) -> Result<PlaceStatus> {
    Ok(repo.get_place_status_of_place(place_id)?)
}

pub fn get_booking<R: BookingRepo>(repo: &R, actor: &Actor, id: &str) -> Result<Booking> {
    let booking = repo.get_booking(id)?;
    authorization::authorize_owner_or_admin(actor, &booking.user_id)?;
    Ok(booking)
}

pub fn bookings_of_user<R: BookingRepo>(
    repo: &R,
    actor: &Actor,
    user_id: &Id,
) -> Result<Vec<Booking>> {
    authorization::authorize_owner_or_admin(actor, user_id)?;
    Ok(repo.bookings_of_user(user_id.as_str())?)
}

pub fn reviews_of_place<R: ReviewRepo>(repo: &R, place_id: &str) -> Result<Vec<Review>> {
    Ok(repo.reviews_of_place(place_id)?)
}

pub fn delete_review<R: ReviewRepo>(repo: &R, actor: &Actor, id: &str) -> Result<Review> {
    let review = repo.get_review(id)?;
    authorization::authorize_owner_or_admin(actor, &review.user_id)?;
    repo.delete_review(id)?;
    Ok(review)
}

pub fn replies_of_review<R: ReplyRepo>(repo: &R, review_id: &str) -> Result<Vec<Reply>> {
    Ok(repo.replies_of_review(review_id)?)
}

pub fn update_reply<R: ReplyRepo>(
    repo: &R,
    actor: &Actor,
    id: &str,
    content: String,
) -> Result<Reply> {
    if content.trim().is_empty() {
        return Err(Error::EmptyContent);
    }
    let mut reply = repo.get_reply(id)?;
    authorization::authorize_owner_or_admin(actor, &reply.user_id)?;
    reply.content = content;
    repo.update_reply(&reply)?;
    Ok(reply)
}

pub fn delete_reply<R: ReplyRepo>(repo: &R, actor: &Actor, id: &str) -> Result<()> {
    let reply = repo.get_reply(id)?;
    authorization::authorize_owner_or_admin(actor, &reply.user_id)?;
    repo.delete_reply(id)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct VoteTally {
    pub upvotes: u64,
    pub downvotes: u64,
}

pub fn vote_tally<R: VoteRepo>(
    repo: &R,
    target_id: &str,
    target_type: VoteTarget,
) -> Result<VoteTally> {
    let mut tally = VoteTally::default();
    for vote in repo.votes_for_target(target_id, target_type)? {
        match vote.vote_type {
            VoteType::Upvote => tally.upvotes += 1,
            VoteType::Downvote => tally.downvotes += 1,
        }
    }
    Ok(tally)
}

pub fn delete_vote<R: VoteRepo>(repo: &R, actor: &Actor, id: &str) -> Result<()> {
    // Ownership is part of the lookup predicate: another user's vote is
    // indistinguishable from a missing one.
    Ok(repo.delete_vote(id, actor.id.as_str())?)
}

pub fn get_journey<R: JourneyRepo>(repo: &R, actor: &Actor, id: &str) -> Result<Journey> {
    Ok(repo.get_journey(id, actor.id.as_str())?)
}

pub fn journeys_of_user<R: JourneyRepo>(repo: &R, actor: &Actor) -> Result<Vec<Journey>> {
    Ok(repo.journeys_of_user(actor.id.as_str())?)
}

pub fn delete_journey<R: JourneyRepo>(repo: &R, actor: &Actor, id: &str) -> Result<()> {
    Ok(repo.delete_journey(id, actor.id.as_str())?)
}

pub fn favorite_places<D>(db: &D, user_id: &str) -> Result<Vec<Place>>
where
    D: PlaceRepo + UserRepo,
{
    let user = db.get_user(user_id)?;
    let mut places = Vec::with_capacity(user.favorites.len());
    for place_id in &user.favorites {
        match db.get_place(place_id.as_str()) {
            Ok(place) => places.push(place),
            // Favorites may still reference places deleted in the meantime.
            Err(RepoError::NotFound) => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(places)
}

pub fn notifications_of_user<R: NotificationRepo>(
    repo: &R,
    actor: &Actor,
) -> Result<Vec<Notification>> {
    let mut notifications = repo.notifications_of_user(actor.id.as_str())?;
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(notifications)
}

pub fn mark_notification_read<R: NotificationRepo>(
    repo: &R,
    actor: &Actor,
    id: &str,
) -> Result<Notification> {
    let mut notification = repo.get_notification(id)?;
    authorization::authorize_owner_or_admin(actor, &notification.user_id)?;
    if !notification.read {
        notification.read = true;
        repo.update_notification(&notification)?;
    }
    Ok(notification)
}
