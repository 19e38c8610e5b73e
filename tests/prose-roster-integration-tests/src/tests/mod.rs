// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use prose_roster::dtos::{RosterEntry, User};
use prose_roster::infra::roster::{ChannelEventSink, InMemoryRosterSource, RosterNotification};
use prose_roster::{RosterConfig, RosterService};

mod merge_user;
mod roster_event_handler;
mod transport_classification;

struct Fixture {
    source: Arc<InMemoryRosterSource>,
    service: Arc<RosterService>,
    notifications: UnboundedReceiver<RosterNotification>,
}

impl Fixture {
    fn new(entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        Self::build(entries, None, RosterConfig::default())
    }

    fn with_user_me(entries: impl IntoIterator<Item = RosterEntry>, user_me: User) -> Self {
        Self::build(entries, Some(user_me), RosterConfig::default())
    }

    fn build(
        entries: impl IntoIterator<Item = RosterEntry>,
        user_me: Option<User>,
        config: RosterConfig,
    ) -> Self {
        let source = Arc::new(InMemoryRosterSource::with_entries(entries));
        let (sink, notifications) = ChannelEventSink::new();

        let mut builder = RosterService::builder()
            .set_roster_source(source.clone())
            .set_event_sink(Arc::new(sink))
            .set_config(config);
        if let Some(user_me) = user_me {
            builder = builder.set_user_me(user_me);
        }
        let service = builder.build();

        Self {
            source,
            service,
            notifications,
        }
    }

    fn drain_notifications(&mut self) -> Vec<RosterNotification> {
        let mut notifications = vec![];
        while let Ok(notification) = self.notifications.try_recv() {
            notifications.push(notification);
        }
        notifications
    }

    fn logins(&self) -> Vec<String> {
        self.service
            .users()
            .expect("roster was destroyed")
            .into_iter()
            .map(|user| user.id.to_string())
            .collect()
    }
}
