use super::*;

pub fn create_review<D>(db: &D, actor: &Actor, r: usecases::NewReview) -> Result<Review>
where
    D: PlaceRepo + ReviewRepo + VoteRepo + UserStatsRepo,
{
    let review = usecases::create_review(db, actor, r)?;
    refresh_user_stats(db, &review.user_id);
    Ok(review)
}
