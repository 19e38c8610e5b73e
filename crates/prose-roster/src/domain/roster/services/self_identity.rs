// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::roster::models::User;
use crate::domain::shared::models::UserId;

/// Holds the record of the local account. It is never part of the roster collections.
#[derive(Debug, Default)]
pub struct SelfIdentity {
    user: Option<User>,
}

impl SelfIdentity {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn get(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    pub fn set(&mut self, user: User) -> Option<User> {
        self.user.replace(user)
    }

    pub fn is_me(&self, id: &UserId) -> bool {
        self.user.as_ref().is_some_and(|me| &me.id == id)
    }
}
