use super::prelude::*;

/// Explicit status changes only toggle between ongoing and suspended.
/// Completion is reached by visiting every stop, never requested, and
/// is terminal.
pub fn set_journey_status<R: JourneyRepo>(
    repo: &R,
    actor: &Actor,
    id: &str,
    status: JourneyStatus,
) -> Result<Journey> {
    if !matches!(status, JourneyStatus::Ongoing | JourneyStatus::Suspended) {
        return Err(Error::JourneyStatus);
    }
    let mut journey = repo.get_journey(id, actor.id.as_str())?;
    if journey.status == JourneyStatus::Completed {
        return Err(Error::JourneyCompleted);
    }
    journey.status = status;
    journey.updated_at = Timestamp::now();
    repo.update_journey(&journey)?;
    Ok(journey)
}
