//! # roamdb-gateways
//!
//! Gateway implementations for the abstract interfaces of roamdb-core.

mod notify;
pub mod user_communication;

pub use self::notify::Notify;
