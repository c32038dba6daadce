pub mod prelude {

    use std::cell::RefCell;

    pub use roamdb_core::{
        entities::*,
        gateways::notify::{NotificationEvent, NotificationGateway},
        mock_db::{actor, new_user, MockDb},
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use roamdb_entities::builders::*;

    pub use crate::{error::AppError, prelude as flows};

    /// Records (recipient, event label) pairs instead of delivering.
    #[derive(Default)]
    pub struct RecordingNotifyGW {
        pub events: RefCell<Vec<(Id, &'static str)>>,
    }

    impl RecordingNotifyGW {
        pub fn recipients_of(&self, label: &str) -> Vec<Id> {
            self.events
                .borrow()
                .iter()
                .filter(|(_, recorded)| *recorded == label)
                .map(|(recipient, _)| recipient.clone())
                .collect()
        }
    }

    impl NotificationGateway for RecordingNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            use NotificationEvent as E;
            let label = match &event {
                E::BookingConfirmed { .. } => "booking_confirmed",
                E::BookingPaid { .. } => "booking_paid",
                E::BookingCanceled { .. } => "booking_canceled",
                E::ReviewReplied { .. } => "review_replied",
                E::VoteReceived { .. } => "vote_received",
            };
            self.events
                .borrow_mut()
                .push((event.recipient().clone(), label));
        }
    }

    pub struct BackendFixture {
        pub db: MockDb,
        pub notify: RecordingNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db: MockDb::default(),
                notify: RecordingNotifyGW::default(),
            }
        }

        pub fn create_place(&self, id: &str, category: &str, price: f64) {
            self.db
                .places
                .borrow_mut()
                .push(Place::build().id(id).name(id).category(category).finish());
            self.db
                .place_statuses
                .borrow_mut()
                .push(PlaceStatus::build().place_id(id).price(price).finish());
        }

        pub fn create_review(&self, id: &str, author: &str) {
            self.db
                .reviews
                .borrow_mut()
                .push(Review::build().id(id).user_id(author).rating(4).finish());
        }

        pub fn book_hotel(&self, user: &str) -> Booking {
            usecases::create_booking(
                &self.db,
                &actor(user, Role::User),
                usecases::NewBooking {
                    place_id: "hotel".into(),
                    number_of_people: 2,
                    booking_at: Timestamp::from_secs(0),
                    checkout_at: Some(Timestamp::from_secs(0) + time::Duration::hours(3)),
                },
            )
            .unwrap()
        }
    }
}

use self::prelude::*;

#[test]
fn confirming_a_booking_notifies_its_owner() {
    let fixture = BackendFixture::new();
    fixture.create_place("hotel", "hotel", 100_000.0);
    let booking = fixture.book_hotel("alice");

    let confirmed =
        flows::confirm_booking(&fixture.db, &fixture.notify, booking.id.as_str()).unwrap();
    assert!(confirmed.is_confirmed);
    assert_eq!(
        fixture.notify.recipients_of("booking_confirmed"),
        ["alice".into()]
    );
}

#[test]
fn paying_a_booking_notifies_its_owner() {
    let fixture = BackendFixture::new();
    fixture.create_place("hotel", "hotel", 100_000.0);
    let booking = fixture.book_hotel("alice");
    assert!(!booking.is_paid);

    let paid = flows::pay_booking(&fixture.db, &fixture.notify, booking.id.as_str()).unwrap();
    assert!(paid.is_paid);
    assert_eq!(fixture.notify.recipients_of("booking_paid"), ["alice".into()]);
}

#[test]
fn deleting_a_booking_notifies_the_affected_user() {
    let fixture = BackendFixture::new();
    fixture.create_place("hotel", "hotel", 100_000.0);
    let booking = fixture.book_hotel("alice");

    // Also when an admin deletes on the user's behalf.
    flows::delete_booking(
        &fixture.db,
        &fixture.notify,
        &actor("admin", Role::Admin),
        booking.id.as_str(),
    )
    .unwrap();
    assert!(fixture.db.bookings.borrow().is_empty());
    assert_eq!(
        fixture.notify.recipients_of("booking_canceled"),
        ["alice".into()]
    );
}

#[test]
fn voting_on_a_foreign_review_notifies_the_author_once() {
    let fixture = BackendFixture::new();
    fixture.create_review("r", "alice");

    flows::cast_vote(
        &fixture.db,
        &fixture.notify,
        &actor("bob", Role::User),
        usecases::VoteRequest {
            target_id: "r".into(),
            target_type: VoteTarget::Review,
            vote_type: VoteType::Upvote,
        },
    )
    .unwrap();
    assert_eq!(
        fixture.notify.recipients_of("vote_received"),
        ["alice".into()]
    );
}

#[test]
fn voting_on_ones_own_review_stays_silent() {
    let fixture = BackendFixture::new();
    fixture.create_review("r", "alice");

    flows::cast_vote(
        &fixture.db,
        &fixture.notify,
        &actor("alice", Role::User),
        usecases::VoteRequest {
            target_id: "r".into(),
            target_type: VoteTarget::Review,
            vote_type: VoteType::Downvote,
        },
    )
    .unwrap();
    assert!(fixture.notify.events.borrow().is_empty());
    // The vote itself is stored and counted.
    assert_eq!(fixture.db.votes.borrow().len(), 1);
}

#[test]
fn replying_to_a_foreign_review_notifies_the_author() {
    let fixture = BackendFixture::new();
    fixture.create_review("r", "alice");

    flows::create_reply(
        &fixture.db,
        &fixture.notify,
        &actor("bob", Role::User),
        usecases::NewReply {
            review_id: "r".into(),
            parent_reply_id: None,
            content: "agreed".into(),
        },
    )
    .unwrap();
    assert_eq!(
        fixture.notify.recipients_of("review_replied"),
        ["alice".into()]
    );
}

#[test]
fn replying_to_ones_own_review_stays_silent() {
    let fixture = BackendFixture::new();
    fixture.create_review("r", "alice");

    flows::create_reply(
        &fixture.db,
        &fixture.notify,
        &actor("alice", Role::User),
        usecases::NewReply {
            review_id: "r".into(),
            parent_reply_id: None,
            content: "addendum".into(),
        },
    )
    .unwrap();
    assert!(fixture.notify.events.borrow().is_empty());
    assert_eq!(fixture.db.replies.borrow().len(), 1);
}

#[test]
fn review_writes_keep_the_stats_document_fresh() {
    let fixture = BackendFixture::new();
    fixture.create_place("cafe", "cafe", 0.0);

    let review = flows::create_review(
        &fixture.db,
        &actor("alice", Role::User),
        usecases::NewReview {
            place_id: "cafe".into(),
            rating: 5,
            comment: None,
            image_url: None,
        },
    )
    .unwrap();
    let stats = fixture.db.try_get_user_stats("alice").unwrap().unwrap();
    assert_eq!(stats.reviews_created.count, 1);

    // An admin deleting the review still refreshes the author's stats.
    flows::delete_review(&fixture.db, &actor("admin", Role::Admin), review.id.as_str()).unwrap();
    let stats = fixture.db.try_get_user_stats("alice").unwrap().unwrap();
    assert_eq!(stats.reviews_created.count, 0);
}

#[test]
fn vote_writes_keep_the_stats_document_fresh() {
    let fixture = BackendFixture::new();
    fixture.create_review("r", "alice");

    let vote = flows::cast_vote(
        &fixture.db,
        &fixture.notify,
        &actor("bob", Role::User),
        usecases::VoteRequest {
            target_id: "r".into(),
            target_type: VoteTarget::Review,
            vote_type: VoteType::Upvote,
        },
    )
    .unwrap();
    assert_eq!(
        fixture
            .db
            .try_get_user_stats("bob")
            .unwrap()
            .unwrap()
            .votes_created
            .count,
        1
    );

    flows::delete_vote(&fixture.db, &actor("bob", Role::User), vote.id.as_str()).unwrap();
    assert_eq!(
        fixture
            .db
            .try_get_user_stats("bob")
            .unwrap()
            .unwrap()
            .votes_created
            .count,
        0
    );
}

// There is no inventory decrement or per-interval lock: two bookings
// for the same place and time window both succeed. Documented gap.
#[test]
fn overlapping_lodging_bookings_are_not_serialized() {
    let fixture = BackendFixture::new();
    fixture.create_place("hotel", "hotel", 100_000.0);

    let first = fixture.book_hotel("alice");
    let second = fixture.book_hotel("bob");
    assert_eq!(first.booking_at, second.booking_at);
    assert_eq!(fixture.db.bookings.borrow().len(), 2);
}

#[test]
fn stored_notifications_reach_the_user() {
    let fixture = BackendFixture::new();
    fixture.create_place("hotel", "hotel", 100_000.0);
    let booking = fixture.book_hotel("alice");

    let notify = roamdb_gateways::Notify::new(&fixture.db);
    flows::confirm_booking(&fixture.db, &notify, booking.id.as_str()).unwrap();

    let inbox =
        usecases::notifications_of_user(&fixture.db, &actor("alice", Role::User)).unwrap();
    assert_eq!(inbox.len(), 1);
    assert!(!inbox[0].read);
    assert!(inbox[0].message.contains("confirmed"));
}
