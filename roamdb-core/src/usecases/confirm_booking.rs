use super::prelude::*;

/// One-way flip; never reverted through the public contract. Role
/// gating is left to the transport layer.
pub fn confirm_booking<R: BookingRepo>(repo: &R, id: &str) -> Result<Booking> {
    let mut booking = repo.get_booking(id)?;
    booking.is_confirmed = true;
    booking.updated_at = Timestamp::now();
    repo.update_booking(&booking)?;
    log::info!("Confirmed booking {id}");
    Ok(booking)
}
