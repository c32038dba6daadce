use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    /// Mean rating, rounded to two decimals; 0 without any reviews.
    pub average: f64,
    pub total: u64,
    /// `distribution[i]` counts the reviews rated `i + 1`.
    pub distribution: [u64; Review::MAX_RATING as usize],
}

pub fn place_rating_summary<R: ReviewRepo>(repo: &R, place_id: &str) -> Result<RatingSummary> {
    let reviews = repo.reviews_of_place(place_id)?;
    let mut distribution = [0; Review::MAX_RATING as usize];
    let mut sum: u64 = 0;
    for review in &reviews {
        if let Some(slot) = distribution.get_mut(usize::from(review.rating).wrapping_sub(1)) {
            *slot += 1;
            sum += u64::from(review.rating);
        }
    }
    let total = distribution.iter().sum();
    let average = if total == 0 {
        0.0
    } else {
        (sum as f64 / total as f64 * 100.0).round() / 100.0
    };
    Ok(RatingSummary {
        average,
        total,
        distribution,
    })
}
