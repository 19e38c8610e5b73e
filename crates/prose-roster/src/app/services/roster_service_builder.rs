// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tracing::warn;

use crate::app::deps::{DynRosterEventSink, DynRosterListener, DynRosterSource};
use crate::app::event_handlers::RosterEventHandler;
use crate::domain::roster::models::User;
use crate::domain::roster::services::{RosterEventSink, RosterSource};

use super::{RosterConfig, RosterService};

pub struct UndefinedRosterSource;
pub struct UndefinedEventSink;

pub struct RosterServiceBuilder<S, E> {
    config: RosterConfig,
    event_sink: E,
    roster_source: S,
    user_me: Option<User>,
}

impl RosterServiceBuilder<UndefinedRosterSource, UndefinedEventSink> {
    pub(crate) fn new() -> Self {
        RosterServiceBuilder {
            config: Default::default(),
            event_sink: UndefinedEventSink,
            roster_source: UndefinedRosterSource,
            user_me: None,
        }
    }
}

impl<E> RosterServiceBuilder<UndefinedRosterSource, E> {
    pub fn set_roster_source<S: RosterSource + 'static>(
        self,
        roster_source: Arc<S>,
    ) -> RosterServiceBuilder<DynRosterSource, E> {
        let roster_source: DynRosterSource = roster_source;
        RosterServiceBuilder {
            config: self.config,
            event_sink: self.event_sink,
            roster_source,
            user_me: self.user_me,
        }
    }
}

impl<S> RosterServiceBuilder<S, UndefinedEventSink> {
    pub fn set_event_sink<E: RosterEventSink + 'static>(
        self,
        event_sink: Arc<E>,
    ) -> RosterServiceBuilder<S, DynRosterEventSink> {
        let event_sink: DynRosterEventSink = event_sink;
        RosterServiceBuilder {
            config: self.config,
            event_sink,
            roster_source: self.roster_source,
            user_me: self.user_me,
        }
    }
}

impl<S, E> RosterServiceBuilder<S, E> {
    pub fn set_user_me(mut self, user: User) -> Self {
        self.user_me = Some(user);
        self
    }

    pub fn set_config(mut self, config: RosterConfig) -> Self {
        self.config = config;
        self
    }
}

impl RosterServiceBuilder<DynRosterSource, DynRosterEventSink> {
    /// Registers the service as listener on the roster source and, unless disabled in the
    /// config, loads the current roster.
    pub fn build(self) -> Arc<RosterService> {
        let load_on_build = self.config.load_on_build;
        let service = Arc::new(RosterService::new(
            self.roster_source,
            self.event_sink,
            self.user_me,
            self.config,
        ));

        let listener: DynRosterListener =
            Arc::new(RosterEventHandler::new(Arc::downgrade(&service)));
        service.attach_listener(listener);

        if load_on_build {
            if let Err(err) = service.bulk_load() {
                warn!("Failed to load roster. {}", err);
            }
        }

        service
    }
}
