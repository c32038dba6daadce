use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum JourneyStatus {
    Ongoing,
    Suspended,
    // Terminal: reached automatically once every stop is visited.
    Completed,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct JourneyStop {
    pub place_id: Id,
    pub visited: bool,
}

/// A user-owned ordered checklist of places to visit.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub id: Id,
    pub user_id: Id,
    pub stops: Vec<JourneyStop>,
    pub status: JourneyStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Journey {
    pub fn contains_place(&self, place_id: &Id) -> bool {
        self.stops.iter().any(|stop| stop.place_id == *place_id)
    }

    pub fn stop_mut(&mut self, place_id: &Id) -> Option<&mut JourneyStop> {
        self.stops.iter_mut().find(|stop| stop.place_id == *place_id)
    }

    pub fn all_visited(&self) -> bool {
        self.stops.iter().all(|stop| stop.visited)
    }
}
