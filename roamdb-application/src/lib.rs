//! # roamdb-application
//!
//! Flows that tie a core usecase to its side effects: rebuilding the
//! derived per-user statistics and notifying affected users. Side
//! effects run after the owning mutation has been committed and are
//! logged, never escalated, when they fail.

#[macro_use]
extern crate log;

mod cast_vote;
mod confirm_booking;
mod create_reply;
mod create_review;
mod delete_booking;
mod delete_review;
mod delete_vote;
mod pay_booking;
mod update_review;

pub mod prelude {
    pub use super::{
        cast_vote::*, confirm_booking::*, create_reply::*, create_review::*, delete_booking::*,
        delete_review::*, delete_vote::*, pay_booking::*, update_review::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use roamdb_core::{entities::*, gateways::notify::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

/// The mutation already stands; a stale stats document is repaired by
/// the next write or lazy read.
pub(crate) fn refresh_user_stats<D>(db: &D, user_id: &Id)
where
    D: PlaceRepo + ReviewRepo + VoteRepo + UserStatsRepo,
{
    if let Err(err) = usecases::rebuild_user_stats(db, user_id) {
        error!("Failed to rebuild stats of user {user_id}: {err}");
    }
}
