use super::{create_journey::dedup_stops, prelude::*};

/// Replaces the journey's stop list.
///
/// Stops that survive the replacement keep their visited flag; new
/// ones start unvisited. The journey resumes: its status is forced
/// back to ongoing, even from completed.
pub fn update_journey<R: JourneyRepo>(
    repo: &R,
    actor: &Actor,
    id: &str,
    place_ids: Vec<Id>,
) -> Result<Journey> {
    let mut journey = repo.get_journey(id, actor.id.as_str())?;
    let old_stops = std::mem::take(&mut journey.stops);
    journey.stops = dedup_stops(place_ids, |place_id| {
        old_stops
            .iter()
            .any(|stop| stop.place_id == *place_id && stop.visited)
    });
    journey.status = JourneyStatus::Ongoing;
    journey.updated_at = Timestamp::now();
    repo.update_journey(&journey)?;
    Ok(journey)
}
