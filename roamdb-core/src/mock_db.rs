//! In-memory implementation of the repository traits for tests.

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;

trait Record {
    fn id(&self) -> &str;
}

impl Record for Place {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for PlaceStatus {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Journey {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Review {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Reply {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Vote {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Notification {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Record>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Record>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Record>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Record>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[derive(Default)]
pub struct MockDb {
    pub places: RefCell<Vec<Place>>,
    pub place_statuses: RefCell<Vec<PlaceStatus>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub journeys: RefCell<Vec<Journey>>,
    pub reviews: RefCell<Vec<Review>>,
    pub replies: RefCell<Vec<Reply>>,
    pub votes: RefCell<Vec<Vote>>,
    pub users: RefCell<Vec<User>>,
    pub user_stats: RefCell<Vec<UserStats>>,
    pub notifications: RefCell<Vec<Notification>>,
}

pub fn actor(id: &str, role: Role) -> Actor {
    Actor {
        id: id.into(),
        role,
        name: id.into(),
    }
}

pub fn new_user(id: &str) -> User {
    User {
        id: id.into(),
        name: id.into(),
        email: format!("{id}@example.com"),
        role: Role::User,
        avatar_url: None,
        favorites: vec![],
    }
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: Place) -> RepoResult<()> {
        create(&mut self.places.borrow_mut(), place)
    }

    fn get_place(&self, id: &str) -> RepoResult<Place> {
        get(&self.places.borrow(), id)
    }

    fn all_places(&self) -> RepoResult<Vec<Place>> {
        Ok(self.places.borrow().clone())
    }

    fn count_places(&self) -> RepoResult<usize> {
        self.all_places().map(|v| v.len())
    }

    fn update_place(&self, place: &Place) -> RepoResult<()> {
        update(&mut self.places.borrow_mut(), place)
    }

    fn delete_place(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.places.borrow_mut(), id)
    }

    fn places_last_edited_by(&self, user_id: &str) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| p.updated_by.as_ref().is_some_and(|e| e.as_str() == user_id))
            .cloned()
            .collect())
    }
}

impl PlaceStatusRepo for MockDb {
    fn create_place_status(&self, status: PlaceStatus) -> RepoResult<()> {
        create(&mut self.place_statuses.borrow_mut(), status)
    }

    fn get_place_status_of_place(&self, place_id: &str) -> RepoResult<PlaceStatus> {
        self.try_get_place_status_of_place(place_id)?
            .ok_or(RepoError::NotFound)
    }

    fn try_get_place_status_of_place(&self, place_id: &str) -> RepoResult<Option<PlaceStatus>> {
        Ok(self
            .place_statuses
            .borrow()
            .iter()
            .find(|s| s.place_id.as_str() == place_id)
            .cloned())
    }

    fn update_place_status(&self, status: &PlaceStatus) -> RepoResult<()> {
        update(&mut self.place_statuses.borrow_mut(), status)
    }

    fn delete_place_status_of_place(&self, place_id: &str) -> RepoResult<usize> {
        let mut statuses = self.place_statuses.borrow_mut();
        let before = statuses.len();
        statuses.retain(|s| s.place_id.as_str() != place_id);
        Ok(before - statuses.len())
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, booking: Booking) -> RepoResult<()> {
        create(&mut self.bookings.borrow_mut(), booking)
    }

    fn get_booking(&self, id: &str) -> RepoResult<Booking> {
        get(&self.bookings.borrow(), id)
    }

    fn update_booking(&self, booking: &Booking) -> RepoResult<()> {
        update(&mut self.bookings.borrow_mut(), booking)
    }

    fn delete_booking(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.bookings.borrow_mut(), id)
    }

    fn bookings_of_user(&self, user_id: &str) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}

impl JourneyRepo for MockDb {
    fn create_journey(&self, journey: Journey) -> RepoResult<()> {
        create(&mut self.journeys.borrow_mut(), journey)
    }

    fn get_journey(&self, id: &str, user_id: &str) -> RepoResult<Journey> {
        self.journeys
            .borrow()
            .iter()
            .find(|j| j.id.as_str() == id && j.user_id.as_str() == user_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn journeys_of_user(&self, user_id: &str) -> RepoResult<Vec<Journey>> {
        Ok(self
            .journeys
            .borrow()
            .iter()
            .filter(|j| j.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn update_journey(&self, journey: &Journey) -> RepoResult<()> {
        update(&mut self.journeys.borrow_mut(), journey)
    }

    fn delete_journey(&self, id: &str, user_id: &str) -> RepoResult<()> {
        let mut journeys = self.journeys.borrow_mut();
        if let Some(pos) = journeys
            .iter()
            .position(|j| j.id.as_str() == id && j.user_id.as_str() == user_id)
        {
            journeys.remove(pos);
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: Review) -> RepoResult<()> {
        create(&mut self.reviews.borrow_mut(), review)
    }

    fn get_review(&self, id: &str) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }

    fn reviews_of_place(&self, place_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }

    fn reviews_of_user(&self, user_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn update_review(&self, review: &Review) -> RepoResult<()> {
        update(&mut self.reviews.borrow_mut(), review)
    }

    fn delete_review(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.reviews.borrow_mut(), id)
    }
}

impl ReplyRepo for MockDb {
    fn create_reply(&self, reply: Reply) -> RepoResult<()> {
        create(&mut self.replies.borrow_mut(), reply)
    }

    fn get_reply(&self, id: &str) -> RepoResult<Reply> {
        get(&self.replies.borrow(), id)
    }

    fn replies_of_review(&self, review_id: &str) -> RepoResult<Vec<Reply>> {
        Ok(self
            .replies
            .borrow()
            .iter()
            .filter(|r| r.review_id.as_str() == review_id)
            .cloned()
            .collect())
    }

    fn update_reply(&self, reply: &Reply) -> RepoResult<()> {
        update(&mut self.replies.borrow_mut(), reply)
    }

    fn delete_reply(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.replies.borrow_mut(), id)
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: Vote) -> RepoResult<()> {
        create(&mut self.votes.borrow_mut(), vote)
    }

    fn update_vote(&self, vote: &Vote) -> RepoResult<()> {
        update(&mut self.votes.borrow_mut(), vote)
    }

    fn delete_vote(&self, id: &str, user_id: &str) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        if let Some(pos) = votes
            .iter()
            .position(|v| v.id.as_str() == id && v.user_id.as_str() == user_id)
        {
            votes.remove(pos);
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }

    fn votes_of_user(&self, user_id: &str) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn votes_for_target(&self, target_id: &str, target_type: VoteTarget) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.target_id.as_str() == target_id && v.target_type == target_type)
            .cloned()
            .collect())
    }

    fn try_get_vote(
        &self,
        user_id: &str,
        target_id: &str,
        target_type: VoteTarget,
    ) -> RepoResult<Option<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .find(|v| {
                v.user_id.as_str() == user_id
                    && v.target_id.as_str() == target_id
                    && v.target_type == target_type
            })
            .cloned())
    }
}

impl UserRepo for MockDb {
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
}

impl UserStatsRepo for MockDb {
    fn upsert_user_stats(&self, stats: UserStats) -> RepoResult<()> {
        let mut documents = self.user_stats.borrow_mut();
        if let Some(pos) = documents.iter().position(|s| s.user_id == stats.user_id) {
            documents[pos] = stats;
        } else {
            documents.push(stats);
        }
        Ok(())
    }

    fn try_get_user_stats(&self, user_id: &str) -> RepoResult<Option<UserStats>> {
        Ok(self
            .user_stats
            .borrow()
            .iter()
            .find(|s| s.user_id.as_str() == user_id)
            .cloned())
    }
}

impl NotificationRepo for MockDb {
    fn create_notification(&self, notification: Notification) -> RepoResult<()> {
        create(&mut self.notifications.borrow_mut(), notification)
    }

    fn get_notification(&self, id: &str) -> RepoResult<Notification> {
        get(&self.notifications.borrow(), id)
    }

    fn update_notification(&self, notification: &Notification) -> RepoResult<()> {
        update(&mut self.notifications.borrow_mut(), notification)
    }

    fn notifications_of_user(&self, user_id: &str) -> RepoResult<Vec<Notification>> {
        Ok(self
            .notifications
            .borrow()
            .iter()
            .filter(|n| n.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}
