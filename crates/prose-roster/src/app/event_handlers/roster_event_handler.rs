// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Weak;

use tracing::{debug, error};

use crate::app::services::RosterService;
use crate::domain::roster::models::{RosterError, RosterEvent};
use crate::domain::roster::services::RosterListener;

/// Routes events of a roster source to the [`RosterService`] they were registered for.
pub struct RosterEventHandler {
    service: Weak<RosterService>,
}

impl RosterEventHandler {
    pub fn new(service: Weak<RosterService>) -> Self {
        Self { service }
    }
}

impl RosterListener for RosterEventHandler {
    fn handle_roster_event(&self, event: RosterEvent) {
        let Some(service) = self.service.upgrade() else {
            debug!("Dropping roster event. RosterService is gone.");
            return;
        };

        let result = match event {
            RosterEvent::EntriesAdded(addresses) => service.entries_added(&addresses),
            RosterEvent::EntriesUpdated(addresses) => service.entries_updated(&addresses),
            RosterEvent::EntriesDeleted(addresses) => service.entries_deleted(&addresses),
            RosterEvent::PresenceChanged(event) => service.presence_changed(&event),
        };

        match result {
            Ok(()) => (),
            Err(RosterError::Destroyed) => {
                debug!("Dropping roster event. RosterService was destroyed.")
            }
            Err(err) => error!("Failed to handle roster event. {}", err),
        }
    }
}
