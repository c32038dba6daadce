use super::*;

pub fn delete_review<D>(db: &D, actor: &Actor, id: &str) -> Result<()>
where
    D: PlaceRepo + ReviewRepo + VoteRepo + UserStatsRepo,
{
    // Stats are rebuilt for the review's author, who need not be the
    // actor when an admin deletes.
    let review = usecases::delete_review(db, actor, id)?;
    refresh_user_stats(db, &review.user_id);
    Ok(())
}
