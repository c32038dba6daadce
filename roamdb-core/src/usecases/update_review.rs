use super::prelude::*;

#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub rating: u8,
    pub comment: Option<String>,
    pub image_url: Option<String>,
}

pub fn update_review<R: ReviewRepo>(
    repo: &R,
    actor: &Actor,
    id: &str,
    u: ReviewUpdate,
) -> Result<Review> {
    let ReviewUpdate {
        rating,
        comment,
        image_url,
    } = u;
    if !(Review::MIN_RATING..=Review::MAX_RATING).contains(&rating) {
        return Err(Error::RatingValue);
    }
    let mut review = repo.get_review(id)?;
    authorization::authorize_owner_or_admin(actor, &review.user_id)?;
    review.rating = rating;
    review.comment = comment;
    review.image_url = image_url;
    review.updated_at = Timestamp::now();
    repo.update_review(&review)?;
    Ok(review)
}
