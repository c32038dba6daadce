use super::*;

pub fn create_reply<D, G>(db: &D, notify: &G, actor: &Actor, r: usecases::NewReply) -> Result<Reply>
where
    D: ReviewRepo + ReplyRepo,
    G: NotificationGateway,
{
    let (reply, review) = usecases::create_reply(db, actor, r)?;
    // Replying to one's own review stays silent.
    if review.user_id != reply.user_id {
        notify.notify(NotificationEvent::ReviewReplied {
            review: &review,
            reply: &reply,
        });
    }
    Ok(reply)
}
