use num_derive::{FromPrimitive, ToPrimitive};

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub email      : String,
    pub role       : Role,
    pub avatar_url : Option<String>,
    pub favorites  : Vec<Id>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    User  = 0,
    Admin = 1,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

/// Verified identity of the caller, supplied by the authentication
/// collaborator before any operation is invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: Id,
    pub role: Role,
    pub name: String,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}
