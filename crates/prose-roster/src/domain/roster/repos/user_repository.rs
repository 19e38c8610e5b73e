// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;

use crate::domain::roster::models::{Contact, User};
use crate::domain::shared::models::UserId;

/// Owns the users of a roster together with their contact projections. Both collections are
/// only ever mutated together.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: IndexMap<UserId, User>,
    contacts: IndexMap<UserId, Contact>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `user`, replacing (in place) and returning any record with the same login.
    pub fn add(&mut self, user: User) -> Option<User> {
        self.contacts.insert(user.id.clone(), Contact::from(&user));
        self.users.insert(user.id.clone(), user)
    }

    pub fn remove(&mut self, id: &UserId) -> Option<User> {
        self.contacts.shift_remove(id);
        self.users.shift_remove(id)
    }

    pub fn exists(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Applies `f` to the user with `id` and refreshes its contact.
    pub fn update<F>(&mut self, id: &UserId, f: F) -> Option<&User>
    where
        F: FnOnce(&mut User),
    {
        let user = self.users.get_mut(id)?;
        f(user);
        self.contacts.insert(user.id.clone(), Contact::from(&*user));
        Some(user)
    }

    pub fn all_users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn users_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.values_mut()
    }

    /// Rebuilds every contact after an in-place bulk mutation via [`Self::users_mut`].
    pub fn refresh_contacts(&mut self) {
        self.contacts = self
            .users
            .iter()
            .map(|(id, user)| (id.clone(), Contact::from(user)))
            .collect();
    }

    pub fn contact(&self, id: &UserId) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn all_contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn clear(&mut self) {
        self.users.clear();
        self.contacts.clear();
    }
}
