// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;
use tracing::info;

use crate::app::deps::{DynRosterEventSink, DynRosterListener, DynRosterSource};
use crate::domain::roster::models::{
    Contact, GroupList, PresenceEvent, ResolutionMode, RosterError, User,
};
use crate::domain::roster::services::{RosterReconciler, RosterState};
use crate::domain::shared::models::UserOrResourceId;

use super::{RosterConfig, RosterServiceBuilder, UndefinedEventSink, UndefinedRosterSource};

/// Keeps a local mirror of a remote roster in sync and resolves addresses against it.
///
/// All reconciliation happens under a single lock. After [`RosterService::destroy`] every
/// call fails with [`RosterError::Destroyed`].
pub struct RosterService {
    state: Mutex<Option<RosterState>>,
    listener: Mutex<Option<DynRosterListener>>,
    roster_source: DynRosterSource,
    event_sink: DynRosterEventSink,
    config: RosterConfig,
}

impl RosterService {
    pub fn builder() -> RosterServiceBuilder<UndefinedRosterSource, UndefinedEventSink> {
        RosterServiceBuilder::new()
    }

    pub(crate) fn new(
        roster_source: DynRosterSource,
        event_sink: DynRosterEventSink,
        user_me: Option<User>,
        config: RosterConfig,
    ) -> Self {
        Self {
            state: Mutex::new(Some(RosterState::new(user_me))),
            listener: Default::default(),
            roster_source,
            event_sink,
            config,
        }
    }

    pub(crate) fn attach_listener(&self, listener: DynRosterListener) {
        self.roster_source.add_listener(listener.clone());
        self.listener.lock().replace(listener);
    }

    pub fn bulk_load(&self) -> Result<usize, RosterError> {
        self.reconcile(|roster| roster.bulk_load())
    }

    pub fn entries_added(&self, addresses: &[String]) -> Result<(), RosterError> {
        self.reconcile(|roster| roster.entries_added(addresses))
    }

    pub fn entries_updated(&self, addresses: &[String]) -> Result<(), RosterError> {
        self.reconcile(|roster| roster.entries_updated(addresses))
    }

    pub fn entries_deleted(&self, addresses: &[String]) -> Result<(), RosterError> {
        self.reconcile(|roster| roster.entries_deleted(addresses))
    }

    pub fn presence_changed(&self, event: &PresenceEvent) -> Result<(), RosterError> {
        self.reconcile(|roster| roster.presence_changed(event))
    }

    /// Asks the roster source to create an entry and resolves it into a local user once the
    /// source has accepted it. The lock is not held while waiting for the source.
    ///
    /// `name` defaults to the login, empty `groups` to the roster's first group.
    pub async fn create_and_add_user(
        &self,
        login: &str,
        name: Option<&str>,
        groups: Vec<String>,
    ) -> Result<User, RosterError> {
        self.ensure_alive()?;

        let id = parse_address(login)?.to_user_id();
        let name = name.unwrap_or(login);
        let groups = if groups.is_empty() {
            self.default_groups()
        } else {
            GroupList::from(groups)
        };

        if let Err(err) = self.roster_source.create_entry(&id, name, &groups).await {
            info!("Failed to add user {}. {:?}", login, err);
            return Err(RosterError::SourceRejected {
                login: login.to_string(),
                reason: err,
            });
        }

        self.reconcile(|roster| roster.resolve_or_add_user(&UserOrResourceId::from(id)))
    }

    pub fn get_user(
        &self,
        address: &str,
        mode: ResolutionMode,
    ) -> Result<Option<User>, RosterError> {
        let address = parse_address(address)?;
        self.reconcile(|roster| roster.get_user(&address, mode))
    }

    pub fn setup_user(&self, address: &str, add_if_missing: bool) -> Result<User, RosterError> {
        let address = parse_address(address)?;
        self.reconcile(|roster| roster.setup_user(&address, add_if_missing))
    }

    pub fn merge_user(&self, user: User) -> Result<Option<User>, RosterError> {
        self.reconcile(|roster| roster.merge_user(user))
    }

    pub fn update_user_contact(&self, user: &User) -> Result<User, RosterError> {
        self.reconcile(|roster| roster.update_user_contact(user))
    }

    pub fn get_contact(
        &self,
        address: &str,
        add_if_missing: bool,
    ) -> Result<Option<Contact>, RosterError> {
        let address = parse_address(address)?;
        self.reconcile(|roster| roster.get_contact(&address, add_if_missing))
    }

    pub fn classify_transports(&self) -> Result<usize, RosterError> {
        self.reconcile(|roster| roster.classify_transports())
    }

    pub fn users(&self) -> Result<Vec<User>, RosterError> {
        self.read(|state| state.users.all_users().cloned().collect())
    }

    pub fn contact_list(&self) -> Result<Vec<Contact>, RosterError> {
        self.read(|state| state.users.all_users().map(Contact::from).collect())
    }

    pub fn contains_user(&self, login: &str) -> Result<bool, RosterError> {
        let id = parse_address(login)?.to_user_id();
        self.read(|state| state.users.exists(&id))
    }

    pub fn groups(&self) -> Result<GroupList, RosterError> {
        self.ensure_alive()?;
        Ok(self.roster_source.groups())
    }

    pub fn user_me(&self) -> Result<Option<User>, RosterError> {
        self.read(|state| state.user_me.get().cloned())
    }

    pub fn set_user_me(&self, user: User) -> Result<(), RosterError> {
        self.reconcile(|roster| roster.set_user_me(user))
    }

    /// Detaches from the roster source and releases all users. Can only be called once.
    pub fn destroy(&self) -> Result<(), RosterError> {
        if let Some(listener) = self.listener.lock().take() {
            self.roster_source.remove_listener(&listener);
        }

        let Some(mut state) = self.state.lock().take() else {
            return Err(RosterError::Destroyed);
        };
        state.users.clear();

        info!("Roster destroyed.");
        Ok(())
    }
}

impl RosterService {
    fn reconcile<T, F>(&self, f: F) -> Result<T, RosterError>
    where
        F: FnOnce(&mut RosterReconciler<'_>) -> T,
    {
        let mut guard = self.state.lock();
        let state = guard.as_mut().ok_or(RosterError::Destroyed)?;
        let mut reconciler =
            RosterReconciler::new(state, &*self.roster_source, &*self.event_sink);
        Ok(f(&mut reconciler))
    }

    fn read<T, F>(&self, f: F) -> Result<T, RosterError>
    where
        F: FnOnce(&RosterState) -> T,
    {
        let guard = self.state.lock();
        let state = guard.as_ref().ok_or(RosterError::Destroyed)?;
        Ok(f(state))
    }

    fn ensure_alive(&self) -> Result<(), RosterError> {
        self.read(|_| ())
    }

    fn default_groups(&self) -> GroupList {
        let groups = self.roster_source.groups();
        let group = groups
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| self.config.default_group.clone());
        GroupList::from_iter([group])
    }
}

fn parse_address(address: &str) -> Result<UserOrResourceId, RosterError> {
    UserOrResourceId::parse(address).map_err(|source| RosterError::InvalidAddress {
        address: address.to_string(),
        source,
    })
}
