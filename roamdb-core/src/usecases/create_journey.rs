use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewJourney {
    pub place_ids: Vec<Id>,
}

pub fn create_journey<R: JourneyRepo>(repo: &R, actor: &Actor, j: NewJourney) -> Result<Journey> {
    let now = Timestamp::now();
    let journey = Journey {
        id: Id::new(),
        user_id: actor.id.clone(),
        stops: dedup_stops(j.place_ids, |_| false),
        status: JourneyStatus::Ongoing,
        created_at: now,
        updated_at: now,
    };
    repo.create_journey(journey.clone())?;
    Ok(journey)
}

// The stop list is an ordered set: repeated place ids collapse into
// the first occurrence.
pub(super) fn dedup_stops(
    place_ids: Vec<Id>,
    mut visited: impl FnMut(&Id) -> bool,
) -> Vec<JourneyStop> {
    let mut stops: Vec<JourneyStop> = Vec::with_capacity(place_ids.len());
    for place_id in place_ids {
        if stops.iter().any(|stop| stop.place_id == place_id) {
            continue;
        }
        let visited = visited(&place_id);
        stops.push(JourneyStop { place_id, visited });
    }
    stops
}
