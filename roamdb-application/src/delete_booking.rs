use super::*;

/// Deleting a booking always notifies the affected user, also when an
/// admin deletes on their behalf.
pub fn delete_booking<R, G>(repo: &R, notify: &G, actor: &Actor, id: &str) -> Result<()>
where
    R: BookingRepo,
    G: NotificationGateway,
{
    let booking = usecases::delete_booking(repo, actor, id)?;
    notify.notify(NotificationEvent::BookingCanceled { booking: &booking });
    Ok(())
}
