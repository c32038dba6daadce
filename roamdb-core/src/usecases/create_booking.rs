use super::{prelude::*, price_booking};

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub place_id: Id,
    pub number_of_people: u32,
    pub booking_at: Timestamp,
    pub checkout_at: Option<Timestamp>,
}

pub fn create_booking<D>(db: &D, actor: &Actor, b: NewBooking) -> Result<Booking>
where
    D: PlaceRepo + PlaceStatusRepo + BookingRepo,
{
    let NewBooking {
        place_id,
        number_of_people,
        booking_at,
        checkout_at,
    } = b;
    let place = db.get_place(place_id.as_str())?;
    // The status price is authoritative, never the place record.
    let status = db.get_place_status_of_place(place.id.as_str())?;
    let quote = price_booking(
        &place.category,
        status.price,
        number_of_people,
        booking_at,
        checkout_at,
    )?;
    let now = Timestamp::now();
    let booking = Booking {
        id: Id::new(),
        user_id: actor.id.clone(),
        place_id: place.id,
        number_of_people,
        booking_at,
        checkout_at: quote.checkout_at,
        total_price: quote.total_price,
        is_paid: quote.prepaid,
        is_confirmed: false,
        created_at: now,
        updated_at: now,
    };
    log::debug!(
        "Creating new booking {} of user {} for place {}",
        booking.id,
        booking.user_id,
        booking.place_id
    );
    db.create_booking(booking.clone())?;
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_db::{actor, MockDb};
    use roamdb_entities::builders::*;
    use time::Duration;

    fn fixture(category: &str, price: f64) -> MockDb {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").category(category).finish());
        db.place_statuses
            .borrow_mut()
            .push(PlaceStatus::build().place_id("p").price(price).finish());
        db
    }

    fn request(checkout_at: Option<Timestamp>) -> NewBooking {
        NewBooking {
            place_id: "p".into(),
            number_of_people: 2,
            booking_at: Timestamp::from_secs(0),
            checkout_at,
        }
    }

    #[test]
    fn lodging_booking_starts_unpaid_and_unconfirmed() {
        let db = fixture("hotel", 100_000.0);
        let booking = create_booking(
            &db,
            &actor("alice", Role::User),
            request(Some(Timestamp::from_secs(0) + Duration::hours(3))),
        )
        .unwrap();
        assert_eq!(booking.total_price, 600_000.0);
        assert!(!booking.is_paid);
        assert!(!booking.is_confirmed);
        assert_eq!(booking.user_id.as_str(), "alice");
        assert_eq!(db.bookings.borrow().len(), 1);
    }

    #[test]
    fn flat_booking_is_paid_immediately() {
        let db = fixture("restaurant", 50_000.0);
        let booking = create_booking(&db, &actor("alice", Role::User), request(None)).unwrap();
        assert_eq!(booking.total_price, 100_000.0);
        assert!(booking.is_paid);
        assert_eq!(booking.checkout_at, None);
    }

    #[test]
    fn booking_an_unknown_place_fails() {
        let db = MockDb::default();
        assert!(matches!(
            create_booking(&db, &actor("alice", Role::User), request(None)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn booking_requires_a_place_status() {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").category("hotel").finish());
        assert!(matches!(
            create_booking(
                &db,
                &actor("alice", Role::User),
                request(Some(Timestamp::from_secs(3600)))
            ),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(db.bookings.borrow().is_empty());
    }
}
