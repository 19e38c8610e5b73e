// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, info, warn};

use crate::domain::roster::models::{Contact, PresenceEvent, ResolutionMode, User};
use crate::domain::roster::repos::UserRepository;
use crate::domain::shared::models::UserOrResourceId;

use super::{
    IdentityResolver, Resolution, RosterEventSink, RosterSource, SelfIdentity,
    TransportClassifier,
};

/// Everything guarded by a roster's lock.
#[derive(Debug, Default)]
pub struct RosterState {
    pub user_me: SelfIdentity,
    pub users: UserRepository,
}

impl RosterState {
    pub fn new(user_me: Option<User>) -> Self {
        Self {
            user_me: SelfIdentity::new(user_me),
            users: UserRepository::new(),
        }
    }
}

/// Applies roster events to a [`RosterState`]. Callers are expected to hold the lock guarding
/// `state` for the lifetime of the reconciler.
pub struct RosterReconciler<'a> {
    state: &'a mut RosterState,
    source: &'a dyn RosterSource,
    sink: &'a dyn RosterEventSink,
}

impl<'a> RosterReconciler<'a> {
    pub fn new(
        state: &'a mut RosterState,
        source: &'a dyn RosterSource,
        sink: &'a dyn RosterEventSink,
    ) -> Self {
        Self {
            state,
            source,
            sink,
        }
    }

    /// Creates users for all roster entries not known yet, then classifies transports.
    pub fn bulk_load(&mut self) -> usize {
        let entries = self.source.entries();
        info!("Loading {} roster entries…", entries.len());

        for entry in entries {
            self.resolve_or_add_user(&UserOrResourceId::from(entry.id));
        }

        let associations = TransportClassifier::classify(&mut self.state.users);
        debug!("Recorded {} transport associations.", associations);

        self.state.users.len()
    }

    pub fn entries_added(&mut self, addresses: &[String]) {
        for address in addresses.iter().filter_map(|address| parse_address(address)) {
            debug!("Roster entry added: {}", address);
            self.resolve_or_add_user(&address);
        }
    }

    pub fn entries_updated(&mut self, addresses: &[String]) {
        for address in addresses.iter().filter_map(|address| parse_address(address)) {
            self.resolve_or_add_user(&address);

            let Some(resolution) = self.resolve(&address) else {
                debug!("Ignoring update for unknown roster entry {}.", address);
                continue;
            };
            let Some(entry) = self.source.entry(&address.to_user_id()) else {
                debug!("Roster source has no entry for updated address {}.", address);
                continue;
            };

            let user = self.update_resolved(&resolution, |user| {
                user.name = entry.display_name();
                user.groups = entry.groups;
            });

            if let Some(user) = user {
                self.sink.send_roster_updated(&user);
            }
        }
    }

    pub fn entries_deleted(&mut self, addresses: &[String]) {
        for address in addresses.iter().filter_map(|address| parse_address(address)) {
            match self.resolve(&address) {
                Some(Resolution::Roster(id)) => {
                    self.state.users.remove(&id);
                    self.sink.send_roster_deleted(&address);
                }
                Some(Resolution::UserMe) => {
                    debug!("Ignoring deletion of own account {}.", address);
                }
                None => {
                    debug!("Ignoring deletion of unknown roster entry {}.", address);
                }
            }
        }
    }

    pub fn presence_changed(&mut self, event: &PresenceEvent) {
        let Some(from) = parse_address(&event.from) else {
            return;
        };

        let Some(resolution) = self.resolve(&from) else {
            debug!("Discarding presence from {} which is not in the roster.", from);
            return;
        };

        let user = self.update_resolved(&resolution, |user| {
            user.apply_presence(&from, &event.presence);
        });

        if let Some(user) = user {
            self.sink.send_roster_updated(&user);
        }
    }

    pub fn get_user(&mut self, address: &UserOrResourceId, mode: ResolutionMode) -> Option<User> {
        match mode {
            ResolutionMode::ExistingOnly => self
                .resolve(address)
                .and_then(|resolution| self.resolved_user(&resolution)),
            ResolutionMode::SetupIfMissing => match self.resolve(address) {
                Some(resolution) => self.resolved_user(&resolution),
                None => Some(self.setup_user(address, false)),
            },
            ResolutionMode::AddIfMissing => Some(self.resolve_or_add_user(address)),
        }
    }

    /// Builds a user from the roster source's entry and current presence. Addresses unknown
    /// to the source yield a placeholder that is never stored.
    pub fn setup_user(&mut self, address: &UserOrResourceId, add_if_missing: bool) -> User {
        let id = address.to_user_id();

        let Some(entry) = self.source.entry(&id) else {
            warn!("Creating invalid user for {}", address);
            return User::placeholder(address);
        };

        let user = User::from_entry(entry, &self.source.presence(&id));
        if !add_if_missing {
            return user;
        }

        self.merge_user(user.clone());
        self.state.users.get(&id).cloned().unwrap_or(user)
    }

    /// Stores `user`, superseding a placeholder for the same login. A placeholder never
    /// replaces a resolved record, and a resolved record replacing another one keeps its
    /// locally held state. Returns the record that was found for that login before, if any.
    pub fn merge_user(&mut self, mut user: User) -> Option<User> {
        if self.state.user_me.is_me(&user.id) {
            debug!("Not adding own account {} to the roster.", user.id);
            return None;
        }

        let existing = match self.resolve(&user.full_id()) {
            Some(Resolution::Roster(id)) => self.state.users.get(&id).cloned(),
            _ => None,
        };

        match existing {
            Some(ref previous) if previous.state.is_superseded_on_merge() => {
                self.state.users.remove(&previous.id);
                self.sink.send_roster_deleted(&previous.full_id());
                self.state.users.add(user.clone());
                self.sink.send_roster_added(&user);
            }
            Some(ref previous) if user.state.is_superseded_on_merge() => {
                debug!("Keeping resolved record {} over a placeholder.", previous.id);
            }
            Some(ref previous) => {
                user.inherit_local_state(previous);
                self.state.users.add(user.clone());
                self.sink.send_roster_updated(&user);
            }
            None => {
                self.state.users.add(user.clone());
                self.sink.send_roster_added(&user);
            }
        }

        existing
    }

    /// Replaces the contact payload of the user with the same login, leaving everything else
    /// untouched.
    pub fn update_user_contact(&mut self, user: &User) -> User {
        let address = UserOrResourceId::from(user.id.clone());
        let mut target = self.resolve_or_add_user(&address);

        if let Some(resolution) = self.resolve(&address) {
            if let Some(updated) = self.update_resolved(&resolution, |stored| {
                stored.contact = user.contact.clone();
            }) {
                return updated;
            }
        }

        target.contact = user.contact.clone();
        target
    }

    pub fn get_contact(
        &mut self,
        address: &UserOrResourceId,
        add_if_missing: bool,
    ) -> Option<Contact> {
        let id = address.to_user_id();

        if let Some(me) = self.state.user_me.get().filter(|me| me.id == id) {
            return Some(Contact::from(me));
        }
        if let Some(contact) = self.state.users.contact(&id) {
            return Some(contact.clone());
        }

        let bare = UserOrResourceId::from(id.clone());
        if add_if_missing {
            self.resolve_or_add_user(&bare);
            return self.state.users.contact(&id).cloned();
        }

        self.get_user(&bare, ResolutionMode::SetupIfMissing)
            .map(|user| Contact::from(&user))
    }

    /// Replaces the local account's record. A roster user with the same login is dropped so
    /// that the account never shows up among the roster users.
    pub fn set_user_me(&mut self, user: User) {
        if let Some(stale) = self.state.users.remove(&user.id) {
            debug!("Removing own account {} from the roster.", stale.id);
            self.sink.send_roster_deleted(&stale.full_id());
        }
        self.state.user_me.set(user);
    }

    /// Returns the record `address` resolves to, setting it up from the roster source if there
    /// is none or only a placeholder.
    pub fn resolve_or_add_user(&mut self, address: &UserOrResourceId) -> User {
        if let Some(resolution) = self.resolve(address) {
            if let Some(user) = self.resolved_user(&resolution) {
                if !user.state.is_superseded_on_merge() {
                    return user;
                }
            }
        }
        self.setup_user(address, true)
    }

    pub fn classify_transports(&mut self) -> usize {
        TransportClassifier::classify(&mut self.state.users)
    }

    fn resolve(&self, address: &UserOrResourceId) -> Option<Resolution> {
        IdentityResolver::new(&self.state.user_me, &self.state.users).resolve(address)
    }

    fn resolved_user(&self, resolution: &Resolution) -> Option<User> {
        match resolution {
            Resolution::UserMe => self.state.user_me.get().cloned(),
            Resolution::Roster(id) => self.state.users.get(id).cloned(),
        }
    }

    fn update_resolved<F>(&mut self, resolution: &Resolution, f: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        match resolution {
            Resolution::UserMe => {
                let me = self.state.user_me.get_mut()?;
                f(me);
                Some(me.clone())
            }
            Resolution::Roster(id) => self.state.users.update(id, f).cloned(),
        }
    }
}

fn parse_address(address: &str) -> Option<UserOrResourceId> {
    match UserOrResourceId::parse(address) {
        Ok(address) => Some(address),
        Err(err) => {
            warn!("Ignoring malformed address {}. {}", address, err);
            None
        }
    }
}
