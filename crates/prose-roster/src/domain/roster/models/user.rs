// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{Presence, UserId, UserOrResourceId};

use super::{GroupList, RosterEntry, UserState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportRole {
    /// An ordinary contact.
    #[default]
    Peer,
    /// A gateway other contacts are reached through.
    Gateway,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// The resource of the last presence received, if any.
    pub resource: Option<String>,
    pub name: String,
    pub groups: GroupList,
    pub state: UserState,
    pub transport_role: TransportRole,
    /// Gateways this user is reached through.
    pub transports: IndexSet<UserId>,
    pub contact: Option<serde_json::Value>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        let transport_role = if id.is_domain_only() {
            TransportRole::Gateway
        } else {
            TransportRole::Peer
        };

        Self {
            name: id.to_string(),
            id,
            resource: None,
            groups: Default::default(),
            state: Default::default(),
            transport_role,
            transports: Default::default(),
            contact: None,
        }
    }

    pub fn from_entry(entry: RosterEntry, presence: &Presence) -> Self {
        let mut user = User::new(entry.id.clone());
        user.name = entry.display_name();
        user.groups = entry.groups;
        user.state = UserState::from(presence);
        user
    }

    /// A stand-in for an address the roster source doesn't know about.
    pub fn placeholder(address: &UserOrResourceId) -> Self {
        let mut user = User::new(address.to_user_id());
        user.resource = address.resource_str().map(ToString::to_string);
        user.state = UserState::Invalid;
        user
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_groups(mut self, groups: GroupList) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_state(mut self, state: UserState) -> Self {
        self.state = state;
        self
    }

    /// The login plus the active resource, if there is one.
    pub fn full_id(&self) -> UserOrResourceId {
        self.resource
            .as_ref()
            .and_then(|res| self.id.with_resource(res).ok())
            .map(UserOrResourceId::from)
            .unwrap_or_else(|| UserOrResourceId::from(self.id.clone()))
    }

    pub fn is_placeholder(&self) -> bool {
        self.state.is_invalid()
    }

    pub fn is_transport(&self) -> bool {
        self.transport_role == TransportRole::Gateway
    }

    /// True if this user is reached through `gateway`, i.e. the gateway serves its domain.
    pub fn is_served_by(&self, gateway: &User) -> bool {
        !self.is_transport()
            && gateway.is_transport()
            && gateway.id.is_same_domain(&self.id)
    }

    /// Takes over the state that only exists locally (active resource, contact payload and
    /// gateway affinities) from the record this user replaces, unless it brings its own.
    pub fn inherit_local_state(&mut self, previous: &User) {
        if self.resource.is_none() {
            self.resource = previous.resource.clone();
        }
        if self.contact.is_none() {
            self.contact = previous.contact.clone();
        }
        self.transports.extend(previous.transports.iter().cloned());
    }

    pub fn apply_presence(&mut self, from: &UserOrResourceId, presence: &Presence) {
        self.state = UserState::from(presence);
        self.resource = from.resource_str().map(ToString::to_string);
    }
}
