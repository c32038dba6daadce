use crate::entities::*;

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    BookingConfirmed { booking: &'a Booking },
    BookingPaid { booking: &'a Booking },
    BookingCanceled { booking: &'a Booking },
    ReviewReplied { review: &'a Review, reply: &'a Reply },
    VoteReceived { vote: &'a Vote, author_id: &'a Id },
}

impl NotificationEvent<'_> {
    /// The user the event is addressed to.
    pub fn recipient(&self) -> &Id {
        use NotificationEvent as E;
        match self {
            E::BookingConfirmed { booking }
            | E::BookingPaid { booking }
            | E::BookingCanceled { booking } => &booking.user_id,
            E::ReviewReplied { review, .. } => &review.user_id,
            E::VoteReceived { author_id, .. } => author_id,
        }
    }
}

/// Delivery is fire-and-forget: implementations log failures and never
/// propagate them into the triggering mutation.
pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
