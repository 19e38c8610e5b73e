// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::domain::roster::models::User;
use crate::domain::roster::services::RosterEventSink;
use crate::domain::shared::models::UserOrResourceId;

#[derive(Debug, Clone, PartialEq)]
pub enum RosterNotification {
    Added(User),
    Updated(User),
    Deleted(UserOrResourceId),
}

/// Forwards roster notifications into an unbounded channel.
pub struct ChannelEventSink {
    sender: UnboundedSender<RosterNotification>,
}

impl ChannelEventSink {
    pub fn new() -> (Self, UnboundedReceiver<RosterNotification>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }

    fn send(&self, notification: RosterNotification) {
        if self.sender.send(notification).is_err() {
            debug!("Dropping roster notification. Receiver is gone.");
        }
    }
}

impl RosterEventSink for ChannelEventSink {
    fn send_roster_added(&self, user: &User) {
        self.send(RosterNotification::Added(user.clone()))
    }

    fn send_roster_updated(&self, user: &User) {
        self.send(RosterNotification::Updated(user.clone()))
    }

    fn send_roster_deleted(&self, id: &UserOrResourceId) {
        self.send(RosterNotification::Deleted(id.clone()))
    }
}
