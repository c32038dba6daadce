use super::{prelude::*, rebuild_user_stats};

/// Reads the stats document, rebuilding it first if none exists yet.
pub fn get_user_stats<D>(db: &D, user_id: &Id) -> Result<UserStats>
where
    D: PlaceRepo + ReviewRepo + VoteRepo + UserStatsRepo,
{
    if !user_id.is_valid() {
        return Err(Error::UserId);
    }
    if let Some(stats) = db.try_get_user_stats(user_id.as_str())? {
        return Ok(stats);
    }
    rebuild_user_stats(db, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_db::MockDb;
    use roamdb_entities::builders::*;

    #[test]
    fn reading_lazily_builds_the_first_snapshot() {
        let db = MockDb::default();
        db.reviews
            .borrow_mut()
            .push(Review::build().id("r").user_id("alice").rating(3).finish());

        assert!(db.user_stats.borrow().is_empty());
        let stats = get_user_stats(&db, &"alice".into()).unwrap();
        assert_eq!(stats.reviews_created.count, 1);
        assert_eq!(db.user_stats.borrow().len(), 1);
    }

    #[test]
    fn an_existing_snapshot_is_returned_as_is() {
        let db = MockDb::default();
        let stats = rebuild_user_stats(&db, &"alice".into()).unwrap();
        // A later write without a rebuild leaves the snapshot stale.
        db.reviews
            .borrow_mut()
            .push(Review::build().id("r").user_id("alice").rating(3).finish());
        assert_eq!(get_user_stats(&db, &"alice".into()).unwrap(), stats);
    }
}
