use super::*;

pub fn delete_vote<D>(db: &D, actor: &Actor, id: &str) -> Result<()>
where
    D: PlaceRepo + ReviewRepo + VoteRepo + UserStatsRepo,
{
    usecases::delete_vote(db, actor, id)?;
    refresh_user_stats(db, &actor.id);
    Ok(())
}
