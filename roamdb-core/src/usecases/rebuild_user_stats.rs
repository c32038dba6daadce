use super::prelude::*;

/// Rebuilds the user's stats document wholesale from the source
/// collections and upserts it. Never patched incrementally: the full
/// re-scan keeps the document consistent with its sources without
/// bookkeeping on every write path.
pub fn rebuild_user_stats<D>(db: &D, user_id: &Id) -> Result<UserStats>
where
    D: PlaceRepo + ReviewRepo + VoteRepo + UserStatsRepo,
{
    if !user_id.is_valid() {
        return Err(Error::UserId);
    }
    let edited_places: Vec<_> = db
        .places_last_edited_by(user_id.as_str())?
        .into_iter()
        .map(|place| EditedPlace {
            place_id: place.id,
            name: place.name,
            updated_at: place.updated_at,
        })
        .collect();
    let reviews_created: Vec<_> = db
        .reviews_of_user(user_id.as_str())?
        .into_iter()
        .map(|review| AuthoredReview {
            review_id: review.id,
            place_id: review.place_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        })
        .collect();
    let votes_created: Vec<_> = db
        .votes_of_user(user_id.as_str())?
        .into_iter()
        .map(|vote| CastVote {
            vote_id: vote.id,
            target_id: vote.target_id,
            target_type: vote.target_type,
            vote_type: vote.vote_type,
            created_at: vote.created_at,
        })
        .collect();
    let stats = UserStats {
        user_id: user_id.clone(),
        edited_places: edited_places.into(),
        reviews_created: reviews_created.into(),
        votes_created: votes_created.into(),
    };
    log::debug!(
        "Rebuilt stats of user {user_id}: {} place(s), {} review(s), {} vote(s)",
        stats.edited_places.count,
        stats.reviews_created.count,
        stats.votes_created.count
    );
    db.upsert_user_stats(stats.clone())?;
    Ok(stats)
}
