use roamdb_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use std::io;
use thiserror::Error;

pub use roamdb_core::repositories;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] UsecaseError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<UsecaseError> for AppError {
    fn from(err: UsecaseError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}
