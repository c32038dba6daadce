use super::prelude::*;

/// One-way flip, the counterpart of
/// [`confirm_booking`](super::confirm_booking).
pub fn pay_booking<R: BookingRepo>(repo: &R, id: &str) -> Result<Booking> {
    let mut booking = repo.get_booking(id)?;
    booking.is_paid = true;
    booking.updated_at = Timestamp::now();
    repo.update_booking(&booking)?;
    log::info!("Marked booking {id} as paid");
    Ok(booking)
}
