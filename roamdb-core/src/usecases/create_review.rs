use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub place_id: Id,
    pub rating: u8,
    pub comment: Option<String>,
    pub image_url: Option<String>,
}

pub fn create_review<D>(db: &D, actor: &Actor, r: NewReview) -> Result<Review>
where
    D: PlaceRepo + ReviewRepo,
{
    let NewReview {
        place_id,
        rating,
        comment,
        image_url,
    } = r;
    if !(Review::MIN_RATING..=Review::MAX_RATING).contains(&rating) {
        return Err(Error::RatingValue);
    }
    let place = db.get_place(place_id.as_str())?;
    let now = Timestamp::now();
    let review = Review {
        id: Id::new(),
        place_id: place.id,
        user_id: actor.id.clone(),
        rating,
        comment,
        image_url,
        created_at: now,
        updated_at: now,
    };
    log::debug!(
        "Creating new review {} of place {} by user {}",
        review.id,
        review.place_id,
        review.user_id
    );
    db.create_review(review.clone())?;
    Ok(review)
}
