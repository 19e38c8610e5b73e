// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::{UserId, UserResourceId};

/// An address as delivered by the roster source, either `login` or `login/resource`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserOrResourceId {
    User(UserId),
    UserResource(UserResourceId),
}

impl UserOrResourceId {
    /// Parses a bare or full address. A trailing `/` without a resource is treated as a bare
    /// address.
    pub fn parse(address: &str) -> Result<Self, jid::Error> {
        let address = address.strip_suffix('/').unwrap_or(address);
        if address.contains('/') {
            Ok(Self::UserResource(address.parse()?))
        } else {
            Ok(Self::User(address.parse()?))
        }
    }

    pub fn to_user_id(&self) -> UserId {
        match self {
            UserOrResourceId::User(id) => id.clone(),
            UserOrResourceId::UserResource(id) => id.to_user_id(),
        }
    }

    pub fn resource_str(&self) -> Option<&str> {
        match self {
            UserOrResourceId::User(_) => None,
            UserOrResourceId::UserResource(id) => Some(id.resource_str()),
        }
    }
}

impl From<UserId> for UserOrResourceId {
    fn from(value: UserId) -> Self {
        Self::User(value)
    }
}

impl From<UserResourceId> for UserOrResourceId {
    fn from(value: UserResourceId) -> Self {
        Self::UserResource(value)
    }
}

impl FromStr for UserOrResourceId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for UserOrResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UserOrResourceId::User(id) => Display::fmt(id, f),
            UserOrResourceId::UserResource(id) => Display::fmt(id, f),
        }
    }
}
