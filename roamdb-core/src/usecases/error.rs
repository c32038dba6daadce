use crate::{authorization, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The number of people must be positive")]
    NumberOfPeople,
    #[error("A checkout time is required for lodging bookings")]
    CheckoutRequired,
    #[error("The checkout must be after the checkin")]
    CheckoutNotAfterCheckin,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The name must not be empty")]
    EmptyName,
    #[error("The price must not be negative")]
    Price,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty content")]
    EmptyContent,
    #[error("Invalid user id")]
    UserId,
    #[error("Page and limit must be positive")]
    Pagination,
    #[error("This is not allowed")]
    Forbidden,
    #[error("Unsupported journey status")]
    JourneyStatus,
    #[error("The journey is already completed")]
    JourneyCompleted,
    #[error("The journey is not ongoing")]
    JourneyNotOngoing,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<authorization::Error> for Error {
    fn from(_: authorization::Error) -> Self {
        Self::Forbidden
    }
}
