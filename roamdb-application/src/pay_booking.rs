use super::*;

pub fn pay_booking<R, G>(repo: &R, notify: &G, id: &str) -> Result<Booking>
where
    R: BookingRepo,
    G: NotificationGateway,
{
    let booking = usecases::pay_booking(repo, id)?;
    notify.notify(NotificationEvent::BookingPaid { booking: &booking });
    Ok(booking)
}
