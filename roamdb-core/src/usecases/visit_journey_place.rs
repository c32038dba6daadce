use super::prelude::*;

/// Marks a stop as visited. Once the last stop is visited the journey
/// automatically completes.
pub fn visit_journey_place<R: JourneyRepo>(
    repo: &R,
    actor: &Actor,
    id: &str,
    place_id: &Id,
) -> Result<Journey> {
    let mut journey = repo.get_journey(id, actor.id.as_str())?;
    if journey.status != JourneyStatus::Ongoing {
        return Err(Error::JourneyNotOngoing);
    }
    let Some(stop) = journey.stop_mut(place_id) else {
        return Err(Error::Repo(RepoError::NotFound));
    };
    stop.visited = true;
    if journey.all_visited() {
        journey.status = JourneyStatus::Completed;
        log::debug!("Journey {id} of user {} completed", actor.id);
    }
    journey.updated_at = Timestamp::now();
    repo.update_journey(&journey)?;
    Ok(journey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_db::{actor, MockDb};
    use roamdb_entities::builders::*;

    fn db_with_journey(status: JourneyStatus) -> MockDb {
        let db = MockDb::default();
        db.journeys.borrow_mut().push(
            Journey::build()
                .id("j")
                .user_id("alice")
                .stop("a", false)
                .stop("b", false)
                .status(status)
                .finish(),
        );
        db
    }

    #[test]
    fn visiting_the_last_stop_completes_the_journey() {
        let db = db_with_journey(JourneyStatus::Ongoing);
        let a = actor("alice", Role::User);

        let journey = visit_journey_place(&db, &a, "j", &"a".into()).unwrap();
        assert_eq!(journey.status, JourneyStatus::Ongoing);

        let journey = visit_journey_place(&db, &a, "j", &"b".into()).unwrap();
        assert_eq!(journey.status, JourneyStatus::Completed);
        assert!(journey.all_visited());
        assert_eq!(db.journeys.borrow()[0].status, JourneyStatus::Completed);
    }

    #[test]
    fn suspended_journeys_reject_visits() {
        let db = db_with_journey(JourneyStatus::Suspended);
        assert!(matches!(
            visit_journey_place(&db, &actor("alice", Role::User), "j", &"a".into()),
            Err(Error::JourneyNotOngoing)
        ));
    }

    #[test]
    fn unknown_stops_are_reported() {
        let db = db_with_journey(JourneyStatus::Ongoing);
        assert!(matches!(
            visit_journey_place(&db, &actor("alice", Role::User), "j", &"zzz".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn revisiting_a_stop_is_harmless() {
        let db = db_with_journey(JourneyStatus::Ongoing);
        let a = actor("alice", Role::User);
        visit_journey_place(&db, &a, "j", &"a".into()).unwrap();
        let journey = visit_journey_place(&db, &a, "j", &"a".into()).unwrap();
        assert_eq!(journey.status, JourneyStatus::Ongoing);
    }
}
