use super::prelude::*;

#[derive(Debug, Clone)]
pub struct VoteRequest {
    pub target_id: Id,
    pub target_type: VoteTarget,
    pub vote_type: VoteType,
}

/// Casts or re-casts a vote. At most one vote exists per
/// (user, target, target type); re-voting updates it in place.
///
/// Returns the vote and the author of the voted-on target, the
/// notification recipient.
pub fn cast_vote<D>(db: &D, actor: &Actor, v: VoteRequest) -> Result<(Vote, Id)>
where
    D: ReviewRepo + ReplyRepo + VoteRepo,
{
    let VoteRequest {
        target_id,
        target_type,
        vote_type,
    } = v;
    // Resolving the author also rejects votes on dangling targets.
    let target_author_id = match target_type {
        VoteTarget::Review => db.get_review(target_id.as_str())?.user_id,
        VoteTarget::Reply => db.get_reply(target_id.as_str())?.user_id,
    };
    let now = Timestamp::now();
    let vote = match db.try_get_vote(actor.id.as_str(), target_id.as_str(), target_type)? {
        Some(mut vote) => {
            vote.vote_type = vote_type;
            vote.updated_at = now;
            db.update_vote(&vote)?;
            vote
        }
        None => {
            let vote = Vote {
                id: Id::new(),
                user_id: actor.id.clone(),
                target_id,
                target_type,
                vote_type,
                created_at: now,
                updated_at: now,
            };
            db.create_vote(vote.clone())?;
            vote
        }
    };
    Ok((vote, target_author_id))
}
