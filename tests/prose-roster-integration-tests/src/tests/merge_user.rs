// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::{predicate, Sequence};
use pretty_assertions::assert_eq;

use prose_roster::dtos::{Presence, PresenceEvent, User, UserState};
use prose_roster::infra::roster::RosterNotification;
use prose_roster::test::{roster_entry, MockRosterEventSink, MockRosterSource};
use prose_roster::{address, user, user_id, RosterConfig, RosterService};

use super::Fixture;

fn quiet_source() -> MockRosterSource {
    let mut source = MockRosterSource::new();
    source.expect_add_listener().return_const(());
    source
}

fn config() -> RosterConfig {
    RosterConfig {
        load_on_build: false,
        ..Default::default()
    }
}

#[test]
fn test_placeholder_is_superseded() -> Result<()> {
    let mut seq = Sequence::new();
    let mut sink = MockRosterEventSink::new();

    sink.expect_send_roster_added()
        .once()
        .in_sequence(&mut seq)
        .withf(|user| user.id == user_id!("bob@x") && user.state == UserState::Invalid)
        .return_const(());
    sink.expect_send_roster_deleted()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(address!("bob@x/phone")))
        .return_const(());
    sink.expect_send_roster_added()
        .once()
        .in_sequence(&mut seq)
        .withf(|user| user.id == user_id!("bob@x") && user.state == UserState::Available)
        .return_const(());

    let service = RosterService::builder()
        .set_roster_source(Arc::new(quiet_source()))
        .set_event_sink(Arc::new(sink))
        .set_config(config())
        .build();

    let placeholder = User::placeholder(&address!("bob@x/phone"));
    assert_eq!(service.merge_user(placeholder.clone())?, None);

    let resolved = user!("bob@x")
        .with_name("Bob")
        .with_state(UserState::Available);
    assert_eq!(service.merge_user(resolved.clone())?, Some(placeholder));

    let users = service.users()?;
    assert_eq!(users, vec![resolved]);
    assert_eq!(service.contact_list()?.len(), 1);
    Ok(())
}

#[test]
fn test_merging_over_real_record_keeps_one_record() -> Result<()> {
    let mut fixture = Fixture::new([roster_entry("alice@x", "Alice", &["Friends"])]);
    fixture.drain_notifications();

    let previous = fixture
        .service
        .merge_user(user!("Alice@x").with_name("Alice L."))?
        .expect("previous record");
    assert_eq!(previous.name, "Alice");

    let users = fixture.service.users()?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice L.");
    assert_eq!(
        fixture.drain_notifications(),
        vec![RosterNotification::Updated(users[0].clone())]
    );
    Ok(())
}

#[test]
fn test_placeholder_never_replaces_resolved_record() -> Result<()> {
    let mut fixture = Fixture::new([roster_entry("alice@x", "Alice", &["Friends"])]);
    let alice = fixture.service.users()?.remove(0);
    fixture.drain_notifications();

    let previous = fixture
        .service
        .merge_user(User::placeholder(&address!("alice@x/phone")))?;

    assert_eq!(previous, Some(alice.clone()));
    assert_eq!(fixture.service.users()?, vec![alice]);
    assert!(fixture.drain_notifications().is_empty());
    Ok(())
}

#[test]
fn test_merging_over_real_record_keeps_local_state() -> Result<()> {
    let mut fixture = Fixture::new([
        roster_entry("icq.x", "ICQ", &[]),
        roster_entry("1@icq.x", "One", &["Friends"]),
    ]);
    fixture.service.presence_changed(&PresenceEvent {
        from: "1@icq.x/phone".to_string(),
        presence: Presence::available(),
    })?;

    let mut update = user!("1@icq.x");
    update.contact = Some(serde_json::json!({ "phone": "1" }));
    fixture.service.update_user_contact(&update)?;

    fixture
        .source
        .set_entry(roster_entry("1@icq.x", "Uno", &["Friends"]));
    fixture.drain_notifications();

    let user = fixture.service.setup_user("1@icq.x", true)?;

    assert_eq!(user.name, "Uno");
    assert_eq!(user.contact, update.contact);
    assert_eq!(user.resource.as_deref(), Some("phone"));
    assert_eq!(
        user.transports.iter().cloned().collect::<Vec<_>>(),
        vec![user_id!("icq.x")]
    );
    assert_eq!(fixture.service.users()?[1], user);
    assert_eq!(
        fixture
            .service
            .get_contact("1@icq.x", false)?
            .and_then(|contact| contact.contact),
        update.contact
    );
    assert_eq!(
        fixture.drain_notifications(),
        vec![RosterNotification::Updated(user)]
    );
    Ok(())
}

#[test]
fn test_entries_added_supersedes_stored_placeholder() -> Result<()> {
    let mut fixture = Fixture::new([]);
    let placeholder = User::placeholder(&address!("carol@x"));
    fixture.service.merge_user(placeholder.clone())?;

    fixture
        .source
        .set_entry(roster_entry("carol@x", "Carol", &["Team"]));
    fixture.drain_notifications();

    fixture.service.entries_added(&["carol@x".to_string()])?;

    let users = fixture.service.users()?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Carol");
    assert!(!users[0].is_placeholder());
    assert_eq!(
        fixture.drain_notifications(),
        vec![
            RosterNotification::Deleted(address!("carol@x")),
            RosterNotification::Added(users[0].clone()),
        ]
    );
    Ok(())
}

#[test]
fn test_never_merges_self_record() -> Result<()> {
    let sink = MockRosterEventSink::new();

    let service = RosterService::builder()
        .set_roster_source(Arc::new(quiet_source()))
        .set_event_sink(Arc::new(sink))
        .set_user_me(user!("me@x"))
        .set_config(config())
        .build();

    assert_eq!(service.merge_user(user!("ME@x"))?, None);
    assert!(service.users()?.is_empty());
    Ok(())
}
