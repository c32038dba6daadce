use super::prelude::*;

/// Removes the booking and returns it so the caller can notify the
/// affected user.
pub fn delete_booking<R: BookingRepo>(repo: &R, actor: &Actor, id: &str) -> Result<Booking> {
    let booking = repo.get_booking(id)?;
    authorization::authorize_owner_or_admin(actor, &booking.user_id)?;
    repo.delete_booking(id)?;
    log::info!("Deleted booking {id}");
    Ok(booking)
}
