use crate::entities::*;

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("not the owner of the resource")]
    NotOwner,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(actor: &Actor, min_required_role: Role) -> Result<()> {
    if actor.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

// Mutations of owned resources are permitted to the owner and to admins.
pub fn authorize_owner_or_admin(actor: &Actor, owner_id: &Id) -> Result<()> {
    if actor.role >= Role::Admin || actor.id == *owner_id {
        return Ok(());
    }
    Err(Error::NotOwner)
}
