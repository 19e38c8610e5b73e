// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::roster::models::{GroupList, RosterEntry, RosterEvent};
use crate::domain::shared::models::{Presence, UserId};

/// The remote, presence-enabled contact list mirrored by the roster.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RosterSource: Send + Sync {
    fn entries(&self) -> Vec<RosterEntry>;
    fn entry(&self, id: &UserId) -> Option<RosterEntry>;
    fn groups(&self) -> GroupList;
    fn presence(&self, id: &UserId) -> Presence;

    /// Asks the remote side to create a new roster item. May be slow or fail.
    async fn create_entry(&self, id: &UserId, name: &str, groups: &GroupList) -> Result<()>;

    fn add_listener(&self, listener: Arc<dyn RosterListener>);
    fn remove_listener(&self, listener: &Arc<dyn RosterListener>);
}

/// Receives the events of a [`RosterSource`]. Events may arrive on any thread.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RosterListener: Send + Sync {
    fn handle_roster_event(&self, event: RosterEvent);
}
