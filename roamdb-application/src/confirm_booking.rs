use super::*;

pub fn confirm_booking<R, G>(repo: &R, notify: &G, id: &str) -> Result<Booking>
where
    R: BookingRepo,
    G: NotificationGateway,
{
    let booking = usecases::confirm_booking(repo, id)?;
    notify.notify(NotificationEvent::BookingConfirmed { booking: &booking });
    Ok(booking)
}
