// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::roster::repos::UserRepository;
use crate::domain::shared::models::{UserId, UserOrResourceId};

use super::SelfIdentity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The address belongs to the local account.
    UserMe,
    /// The address belongs to the roster user with this login.
    Roster(UserId),
}

/// Matches addresses against the local account and the roster users.
pub struct IdentityResolver<'a> {
    user_me: &'a SelfIdentity,
    users: &'a UserRepository,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(user_me: &'a SelfIdentity, users: &'a UserRepository) -> Self {
        Self { user_me, users }
    }

    pub fn resolve(&self, address: &UserOrResourceId) -> Option<Resolution> {
        let user_id = address.to_user_id();

        if self.user_me.is_me(&user_id) {
            return Some(Resolution::UserMe);
        }

        if address.resource_str().is_some() {
            if let Some(user) = self
                .users
                .all_users()
                .find(|user| &user.full_id() == address)
            {
                return Some(Resolution::Roster(user.id.clone()));
            }
        }

        self.users
            .get(&user_id)
            .map(|user| Resolution::Roster(user.id.clone()))
    }
}
