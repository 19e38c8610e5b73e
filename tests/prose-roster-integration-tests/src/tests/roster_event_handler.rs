// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_roster::app::event_handlers::RosterEventHandler;
use prose_roster::domain::roster::services::RosterListener;
use prose_roster::dtos::{Presence, PresenceEvent, RosterEvent, UserState};
use prose_roster::infra::roster::RosterNotification;
use prose_roster::test::roster_entry;
use prose_roster::{address, user_id};

use super::Fixture;

#[test]
fn test_routes_source_events() -> Result<()> {
    let mut fixture = Fixture::new([roster_entry("alice@x", "Alice", &[])]);
    fixture.drain_notifications();

    fixture
        .source
        .set_entry(roster_entry("bob@x", "Bob", &["Friends"]));
    fixture
        .source
        .emit(RosterEvent::EntriesAdded(vec!["bob@x".to_string()]));
    fixture
        .source
        .emit(RosterEvent::PresenceChanged(PresenceEvent {
            from: "bob@x/phone".to_string(),
            presence: Presence::available(),
        }));
    fixture
        .source
        .emit(RosterEvent::EntriesDeleted(vec!["alice@x".to_string()]));

    let users = fixture.service.users()?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, user_id!("bob@x"));
    assert_eq!(users[0].state, UserState::Available);

    let notifications = fixture.drain_notifications();
    assert_eq!(notifications.len(), 3);
    assert!(matches!(notifications[0], RosterNotification::Added(_)));
    assert_eq!(notifications[1], RosterNotification::Updated(users[0].clone()));
    assert_eq!(
        notifications[2],
        RosterNotification::Deleted(address!("alice@x"))
    );
    Ok(())
}

#[test]
fn test_stops_receiving_events_after_destroy() -> Result<()> {
    let mut fixture = Fixture::new([]);
    fixture.service.destroy()?;

    fixture
        .source
        .set_entry(roster_entry("bob@x", "Bob", &["Friends"]));
    fixture
        .source
        .emit(RosterEvent::EntriesAdded(vec!["bob@x".to_string()]));

    assert!(fixture.drain_notifications().is_empty());
    Ok(())
}

#[test]
fn test_ignores_events_for_released_service() -> Result<()> {
    let Fixture {
        source, service, ..
    } = Fixture::new([]);

    let handler = RosterEventHandler::new(Arc::downgrade(&service));
    service.destroy()?;
    handler.handle_roster_event(RosterEvent::EntriesAdded(vec!["bob@x".to_string()]));

    drop(service);
    handler.handle_roster_event(RosterEvent::EntriesDeleted(vec!["bob@x".to_string()]));

    assert_eq!(source.listener_count(), 0);
    Ok(())
}
