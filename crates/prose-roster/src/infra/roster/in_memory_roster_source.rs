// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::app::deps::DynRosterListener;
use crate::domain::roster::models::{GroupList, RosterEntry, RosterEvent};
use crate::domain::roster::services::{RosterListener, RosterSource};
use crate::domain::shared::models::{Presence, UserId};

/// A roster kept in memory. Hosts feed it and call [`InMemoryRosterSource::emit`] to notify
/// listeners.
#[derive(Default)]
pub struct InMemoryRosterSource {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    entries: IndexMap<UserId, RosterEntry>,
    groups: GroupList,
    presences: HashMap<UserId, Presence>,
    listeners: Vec<DynRosterListener>,
    rejection: Option<String>,
}

impl InMemoryRosterSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        let source = Self::new();
        for entry in entries {
            source.set_entry(entry);
        }
        source
    }

    pub fn set_entry(&self, entry: RosterEntry) {
        let mut inner = self.inner.lock();
        for group in entry.groups.iter() {
            inner.groups.insert(group);
        }
        inner.entries.insert(entry.id.clone(), entry);
    }

    pub fn remove_entry(&self, id: &UserId) -> Option<RosterEntry> {
        self.inner.lock().entries.shift_remove(id)
    }

    pub fn add_group(&self, group: impl Into<String>) {
        self.inner.lock().groups.insert(group);
    }

    pub fn set_presence(&self, id: &UserId, presence: Presence) {
        self.inner.lock().presences.insert(id.clone(), presence);
    }

    /// Makes `create_entry` fail with `reason` until called with `None`.
    pub fn reject_new_entries(&self, reason: Option<&str>) {
        self.inner.lock().rejection = reason.map(ToString::to_string);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Delivers `event` to all registered listeners.
    pub fn emit(&self, event: RosterEvent) {
        let listeners = self.inner.lock().listeners.clone();
        for listener in listeners {
            listener.handle_roster_event(event.clone());
        }
    }
}

#[async_trait]
impl RosterSource for InMemoryRosterSource {
    fn entries(&self) -> Vec<RosterEntry> {
        self.inner.lock().entries.values().cloned().collect()
    }

    fn entry(&self, id: &UserId) -> Option<RosterEntry> {
        self.inner.lock().entries.get(id).cloned()
    }

    fn groups(&self) -> GroupList {
        self.inner.lock().groups.clone()
    }

    fn presence(&self, id: &UserId) -> Presence {
        self.inner
            .lock()
            .presences
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    async fn create_entry(&self, id: &UserId, name: &str, groups: &GroupList) -> Result<()> {
        {
            let inner = self.inner.lock();
            if let Some(reason) = &inner.rejection {
                bail!("{}", reason);
            }
            if inner.entries.contains_key(id) {
                bail!("Roster already contains {}", id);
            }
        }

        self.set_entry(RosterEntry::new(
            id.clone(),
            Some(name.to_string()),
            groups.clone(),
        ));
        self.emit(RosterEvent::EntriesAdded(vec![id.to_string()]));
        Ok(())
    }

    fn add_listener(&self, listener: Arc<dyn RosterListener>) {
        self.inner.lock().listeners.push(listener);
    }

    fn remove_listener(&self, listener: &Arc<dyn RosterListener>) {
        self.inner
            .lock()
            .listeners
            .retain(|registered| !Arc::ptr_eq(registered, listener));
    }
}
