use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReply {
    pub review_id: Id,
    pub parent_reply_id: Option<Id>,
    pub content: String,
}

/// Returns the reply together with the reviewed-on record so the
/// caller can notify the review's author.
pub fn create_reply<D>(db: &D, actor: &Actor, r: NewReply) -> Result<(Reply, Review)>
where
    D: ReviewRepo + ReplyRepo,
{
    let NewReply {
        review_id,
        parent_reply_id,
        content,
    } = r;
    if content.trim().is_empty() {
        return Err(Error::EmptyContent);
    }
    let review = db.get_review(review_id.as_str())?;
    if let Some(parent_id) = &parent_reply_id {
        let parent = db.get_reply(parent_id.as_str())?;
        // A parent from another review's thread counts as absent.
        if parent.review_id != review.id {
            return Err(Error::Repo(RepoError::NotFound));
        }
    }
    let reply = Reply {
        id: Id::new(),
        review_id: review.id.clone(),
        parent_reply_id,
        user_id: actor.id.clone(),
        content,
        created_at: Timestamp::now(),
    };
    db.create_reply(reply.clone())?;
    Ok((reply, review))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_db::{actor, MockDb};
    use roamdb_entities::builders::*;

    fn db_with_review() -> MockDb {
        let db = MockDb::default();
        db.reviews
            .borrow_mut()
            .push(Review::build().id("r").user_id("alice").rating(4).finish());
        db
    }

    fn request(content: &str) -> NewReply {
        NewReply {
            review_id: "r".into(),
            parent_reply_id: None,
            content: content.into(),
        }
    }

    #[test]
    fn reply_returns_the_reviewed_record() {
        let db = db_with_review();
        let (reply, review) = create_reply(&db, &actor("bob", Role::User), request("agreed")).unwrap();
        assert_eq!(reply.user_id.as_str(), "bob");
        assert_eq!(review.user_id.as_str(), "alice");
        assert_eq!(db.replies.borrow().len(), 1);
    }

    #[test]
    fn blank_content_is_rejected() {
        let db = db_with_review();
        assert!(matches!(
            create_reply(&db, &actor("bob", Role::User), request("  \n")),
            Err(Error::EmptyContent)
        ));
    }

    #[test]
    fn threading_requires_a_parent_in_the_same_review() {
        let db = db_with_review();
        db.reviews
            .borrow_mut()
            .push(Review::build().id("other").user_id("carol").rating(3).finish());
        db.replies.borrow_mut().push(Reply {
            id: "parent".into(),
            review_id: "other".into(),
            parent_reply_id: None,
            user_id: "carol".into(),
            content: "first".into(),
            created_at: Timestamp::from_secs(0),
        });

        let r = NewReply {
            parent_reply_id: Some("parent".into()),
            ..request("nested")
        };
        assert!(matches!(
            create_reply(&db, &actor("bob", Role::User), r),
            Err(Error::Repo(RepoError::NotFound))
        ));

        db.replies.borrow_mut()[0].review_id = "r".into();
        let r = NewReply {
            parent_reply_id: Some("parent".into()),
            ..request("nested")
        };
        assert!(create_reply(&db, &actor("bob", Role::User), r).is_ok());
    }
}
