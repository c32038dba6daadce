use crate::{id::*, time::*};

/// A user's reservation of a place.
///
/// `total_price` is always derived server-side from the place status
/// price and never taken from client input. `checkout_at` is only
/// present for lodging bookings. Both paid and confirmed flags start
/// out false and only ever flip to true.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Id,
    pub user_id: Id,
    pub place_id: Id,
    pub number_of_people: u32,
    pub booking_at: Timestamp,
    pub checkout_at: Option<Timestamp>,
    pub total_price: f64,
    pub is_paid: bool,
    pub is_confirmed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
