// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::Presence;

#[derive(Debug, Clone, PartialEq)]
pub struct PresenceEvent {
    /// Sender address, usually `login/resource`.
    pub from: String,
    pub presence: Presence,
}

/// Events delivered by a roster source to its listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterEvent {
    EntriesAdded(Vec<String>),
    EntriesUpdated(Vec<String>),
    EntriesDeleted(Vec<String>),
    PresenceChanged(PresenceEvent),
}
