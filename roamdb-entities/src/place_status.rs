use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OpeningState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Availability {
    Available,
    Unavailable,
}

/// Mutable operational and pricing record, one-to-one with a place.
///
/// `price` is the authoritative booking price: per person for flat
/// categories, per person-hour for lodging. Availability and room count
/// only apply to lodging places.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceStatus {
    pub id: Id,
    pub place_id: Id,
    pub opening_state: OpeningState,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub availability: Option<Availability>,
    pub available_rooms: Option<u32>,
    pub price: f64,
    pub contact: Option<String>,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_opening_state() {
        assert_eq!("open".parse(), Ok(OpeningState::Open));
        assert_eq!("Closed".parse(), Ok(OpeningState::Closed));
        assert!("ajar".parse::<OpeningState>().is_err());
        assert_eq!(OpeningState::Open.to_string(), "open");
    }

    #[test]
    fn parse_availability() {
        assert_eq!("available".parse(), Ok(Availability::Available));
        assert_eq!("UNAVAILABLE".parse(), Ok(Availability::Unavailable));
        assert!("".parse::<Availability>().is_err());
    }
}
