use super::*;

pub fn cast_vote<D, G>(db: &D, notify: &G, actor: &Actor, v: usecases::VoteRequest) -> Result<Vote>
where
    D: PlaceRepo + ReviewRepo + ReplyRepo + VoteRepo + UserStatsRepo,
    G: NotificationGateway,
{
    let (vote, target_author_id) = usecases::cast_vote(db, actor, v)?;
    refresh_user_stats(db, &vote.user_id);
    // Voting on one's own content stays silent.
    if target_author_id != vote.user_id {
        notify.notify(NotificationEvent::VoteReceived {
            vote: &vote,
            author_id: &target_author_id,
        });
    }
    Ok(vote)
}
