use super::prelude::*;

/// Server-side pricing result for a booking request.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuote {
    pub total_price: f64,
    /// `None` for flat-priced categories, even when the request
    /// carried a checkout time.
    pub checkout_at: Option<Timestamp>,
    /// Flat-priced bookings are settled up front, so there is no
    /// pending payment step.
    pub prepaid: bool,
}

/// Computes the authoritative price of a booking.
///
/// Lodging categories are priced per person-hour over the stay and
/// require a checkout time; all other categories are priced flat per
/// person. Re-run on every update, never trusted from a prior state.
pub fn price_booking(
    category: &Category,
    status_price: f64,
    number_of_people: u32,
    booking_at: Timestamp,
    checkout_at: Option<Timestamp>,
) -> Result<BookingQuote> {
    if number_of_people == 0 {
        return Err(Error::NumberOfPeople);
    }
    match category.pricing_policy() {
        PricingPolicy::PerPersonHour => {
            let checkout_at = checkout_at.ok_or(Error::CheckoutRequired)?;
            let hours = (checkout_at - booking_at).as_seconds_f64() / 3600.0;
            if hours <= 0.0 {
                return Err(Error::CheckoutNotAfterCheckin);
            }
            Ok(BookingQuote {
                total_price: hours * status_price * f64::from(number_of_people),
                checkout_at: Some(checkout_at),
                prepaid: false,
            })
        }
        PricingPolicy::PerPerson => Ok(BookingQuote {
            total_price: status_price * f64::from(number_of_people),
            checkout_at: None,
            prepaid: true,
        }),
    }
}
