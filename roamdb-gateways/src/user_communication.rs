//! Message texts for user notifications.

use roamdb_core::gateways::notify::NotificationEvent;
use roamdb_entities::{booking::Booking, reply::Reply, review::Review, vote::Vote};

pub fn message(event: &NotificationEvent) -> String {
    use NotificationEvent as E;
    match event {
        E::BookingConfirmed { booking } => booking_confirmed_message(booking),
        E::BookingPaid { booking } => booking_paid_message(booking),
        E::BookingCanceled { booking } => booking_canceled_message(booking),
        E::ReviewReplied { review, reply } => review_replied_message(review, reply),
        E::VoteReceived { vote, .. } => vote_received_message(vote),
    }
}

pub fn booking_confirmed_message(booking: &Booking) -> String {
    format!("Your booking {} has been confirmed.", booking.id)
}

pub fn booking_paid_message(booking: &Booking) -> String {
    format!("Your booking {} has been marked as paid.", booking.id)
}

pub fn booking_canceled_message(booking: &Booking) -> String {
    format!("Your booking {} has been canceled.", booking.id)
}

pub fn review_replied_message(review: &Review, _reply: &Reply) -> String {
    format!(
        "Your review of place {} received a new reply.",
        review.place_id
    )
}

pub fn vote_received_message(vote: &Vote) -> String {
    format!(
        "Your {} received a new {}.",
        vote.target_type, vote.vote_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roamdb_entities::{
        builders::*,
        vote::{VoteTarget, VoteType},
    };

    #[test]
    fn messages_name_the_subject() {
        let booking = Booking::build().id("b-1").user_id("alice").finish();
        assert_eq!(
            booking_confirmed_message(&booking),
            "Your booking b-1 has been confirmed."
        );
        assert_eq!(
            booking_canceled_message(&booking),
            "Your booking b-1 has been canceled."
        );

        let vote = roamdb_entities::vote::Vote {
            id: "v".into(),
            user_id: "bob".into(),
            target_id: "r".into(),
            target_type: VoteTarget::Reply,
            vote_type: VoteType::Downvote,
            created_at: roamdb_entities::time::Timestamp::from_secs(0),
            updated_at: roamdb_entities::time::Timestamp::from_secs(0),
        };
        assert_eq!(
            vote_received_message(&vote),
            "Your reply received a new downvote."
        );
    }
}
