use super::*;

pub fn update_review<D>(
    db: &D,
    actor: &Actor,
    id: &str,
    u: usecases::ReviewUpdate,
) -> Result<Review>
where
    D: PlaceRepo + ReviewRepo + VoteRepo + UserStatsRepo,
{
    let review = usecases::update_review(db, actor, id, u)?;
    refresh_user_stats(db, &review.user_id);
    Ok(review)
}
