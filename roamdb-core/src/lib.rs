//! # roamdb-core
//!
//! Business rules and abstract storage/gateway interfaces of roamdb.

pub mod authorization;
pub mod db;
pub mod entities;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

#[cfg(any(test, feature = "mock-db"))]
pub mod mock_db;
