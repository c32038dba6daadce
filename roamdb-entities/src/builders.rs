pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    booking_builder::*, journey_builder::*, place_builder::*, place_status_builder::*,
    review_builder::*,
};

pub mod place_builder {

    use super::*;
    use crate::{category::*, geo::*, id::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.category = category.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn updated_by(mut self, user_id: &str) -> Self {
            self.place.updated_by = Some(user_id.into());
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    name: "".into(),
                    address: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    description: None,
                    category: Category::default(),
                    image_url: None,
                    contact: None,
                    favorite_count: 0,
                    created_at: Timestamp::from_secs(0),
                    updated_at: Timestamp::from_secs(0),
                    updated_by: None,
                },
            }
        }
    }
}

pub mod place_status_builder {

    use super::*;
    use crate::{id::*, place_status::*, time::*};

    #[derive(Debug)]
    pub struct PlaceStatusBuild {
        status: PlaceStatus,
    }

    impl PlaceStatusBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.status.id = id.into();
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.status.place_id = place_id.into();
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.status.price = price;
            self
        }
        pub fn available_rooms(mut self, rooms: u32) -> Self {
            self.status.availability = Some(Availability::Available);
            self.status.available_rooms = Some(rooms);
            self
        }
        pub fn finish(self) -> PlaceStatus {
            self.status
        }
    }

    impl Builder for PlaceStatus {
        type Build = PlaceStatusBuild;
        fn build() -> PlaceStatusBuild {
            PlaceStatusBuild {
                status: PlaceStatus {
                    id: Id::new(),
                    place_id: Id::default(),
                    opening_state: OpeningState::Open,
                    opening_time: None,
                    closing_time: None,
                    availability: None,
                    available_rooms: None,
                    price: 0.0,
                    contact: None,
                    updated_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*, time::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.booking.user_id = user_id.into();
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.booking.place_id = place_id.into();
            self
        }
        pub fn number_of_people(mut self, number_of_people: u32) -> Self {
            self.booking.number_of_people = number_of_people;
            self
        }
        pub fn booking_at(mut self, booking_at: Timestamp) -> Self {
            self.booking.booking_at = booking_at;
            self
        }
        pub fn checkout_at(mut self, checkout_at: Timestamp) -> Self {
            self.booking.checkout_at = Some(checkout_at);
            self
        }
        pub fn paid(mut self) -> Self {
            self.booking.is_paid = true;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            BookingBuild {
                booking: Booking {
                    id: Id::new(),
                    user_id: Id::default(),
                    place_id: Id::default(),
                    number_of_people: 1,
                    booking_at: Timestamp::from_secs(0),
                    checkout_at: None,
                    total_price: 0.0,
                    is_paid: false,
                    is_confirmed: false,
                    created_at: Timestamp::from_secs(0),
                    updated_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod journey_builder {

    use super::*;
    use crate::{id::*, journey::*, time::*};

    #[derive(Debug)]
    pub struct JourneyBuild {
        journey: Journey,
    }

    impl JourneyBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.journey.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.journey.user_id = user_id.into();
            self
        }
        pub fn stop(mut self, place_id: &str, visited: bool) -> Self {
            self.journey.stops.push(JourneyStop {
                place_id: place_id.into(),
                visited,
            });
            self
        }
        pub fn status(mut self, status: JourneyStatus) -> Self {
            self.journey.status = status;
            self
        }
        pub fn finish(self) -> Journey {
            self.journey
        }
    }

    impl Builder for Journey {
        type Build = JourneyBuild;
        fn build() -> JourneyBuild {
            JourneyBuild {
                journey: Journey {
                    id: Id::new(),
                    user_id: Id::default(),
                    stops: vec![],
                    status: JourneyStatus::Ongoing,
                    created_at: Timestamp::from_secs(0),
                    updated_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.review.place_id = place_id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.review.user_id = user_id.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.review.rating = rating;
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = Some(comment.into());
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    place_id: Id::default(),
                    user_id: Id::default(),
                    rating: Review::MIN_RATING,
                    comment: None,
                    image_url: None,
                    created_at: Timestamp::from_secs(0),
                    updated_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}
