use super::{prelude::*, price_booking};

/// Partial update: absent fields retain the stored values.
#[derive(Debug, Clone, Default)]
pub struct BookingUpdate {
    pub place_id: Option<Id>,
    pub number_of_people: Option<u32>,
    pub booking_at: Option<Timestamp>,
    pub checkout_at: Option<Timestamp>,
}

pub fn update_booking<D>(db: &D, actor: &Actor, id: &str, u: BookingUpdate) -> Result<Booking>
where
    D: PlaceRepo + PlaceStatusRepo + BookingRepo,
{
    let mut booking = db.get_booking(id)?;
    authorization::authorize_owner_or_admin(actor, &booking.user_id)?;

    // Merge the request into the stored booking before requoting.
    if let Some(place_id) = u.place_id {
        booking.place_id = place_id;
    }
    if let Some(number_of_people) = u.number_of_people {
        booking.number_of_people = number_of_people;
    }
    if let Some(booking_at) = u.booking_at {
        booking.booking_at = booking_at;
    }
    if let Some(checkout_at) = u.checkout_at {
        booking.checkout_at = Some(checkout_at);
    }

    let place = db.get_place(booking.place_id.as_str())?;
    let status = db.get_place_status_of_place(place.id.as_str())?;
    let quote = price_booking(
        &place.category,
        status.price,
        booking.number_of_people,
        booking.booking_at,
        booking.checkout_at,
    )?;
    booking.total_price = quote.total_price;
    booking.checkout_at = quote.checkout_at;
    // Derived the same way as on create: editing a lodging booking
    // resets an earlier manual payment.
    booking.is_paid = quote.prepaid;
    booking.updated_at = Timestamp::now();
    db.update_booking(&booking)?;
    Ok(booking)
}
