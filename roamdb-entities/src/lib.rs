#![deny(missing_debug_implementations)]

//! # roamdb-entities
//!
//! Reusable, agnostic domain entities for roamdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod booking;
pub mod category;
pub mod contact;
pub mod geo;
pub mod id;
pub mod journey;
pub mod notification;
pub mod place;
pub mod place_status;
pub mod reply;
pub mod review;
pub mod time;
pub mod user;
pub mod user_stats;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
