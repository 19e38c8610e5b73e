// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_roster::dtos::{TransportRole, User, UserId};
use prose_roster::test::roster_entry;
use prose_roster::user_id;

use super::Fixture;

fn affinities(users: &[User]) -> Vec<(UserId, Vec<UserId>)> {
    users
        .iter()
        .map(|user| (user.id.clone(), user.transports.iter().cloned().collect()))
        .collect()
}

#[test]
fn test_bulk_load_associates_peers_with_gateways() -> Result<()> {
    let fixture = Fixture::new([
        roster_entry("icq.x", "ICQ", &[]),
        roster_entry("12345@icq.x", "Legacy Friend", &["Friends"]),
        roster_entry("alice@x", "Alice", &["Friends"]),
    ]);

    let users = fixture.service.users()?;
    assert_eq!(users[0].transport_role, TransportRole::Gateway);
    assert_eq!(
        affinities(&users),
        vec![
            (user_id!("icq.x"), vec![]),
            (user_id!("12345@icq.x"), vec![user_id!("icq.x")]),
            (user_id!("alice@x"), vec![]),
        ]
    );

    let contact = fixture
        .service
        .get_contact("12345@icq.x", false)?
        .expect("contact");
    assert_eq!(contact.name, "Legacy Friend");
    Ok(())
}

#[test]
fn test_classification_is_idempotent() -> Result<()> {
    let fixture = Fixture::new([
        roster_entry("icq.x", "ICQ", &[]),
        roster_entry("msn.x", "MSN", &[]),
        roster_entry("1@icq.x", "One", &[]),
        roster_entry("2@msn.x", "Two", &[]),
    ]);

    let before = affinities(&fixture.service.users()?);

    assert_eq!(fixture.service.classify_transports()?, 0);
    assert_eq!(fixture.service.bulk_load()?, 4);

    assert_eq!(affinities(&fixture.service.users()?), before);
    Ok(())
}

#[test]
fn test_removed_gateway_is_dropped_from_affinities() -> Result<()> {
    let fixture = Fixture::new([
        roster_entry("icq.x", "ICQ", &[]),
        roster_entry("1@icq.x", "One", &[]),
    ]);

    fixture.source.remove_entry(&user_id!("icq.x"));
    fixture.service.entries_deleted(&["icq.x".to_string()])?;
    assert_eq!(fixture.service.bulk_load()?, 1);

    assert_eq!(
        affinities(&fixture.service.users()?),
        vec![(user_id!("1@icq.x"), vec![])]
    );
    assert_eq!(fixture.service.classify_transports()?, 0);
    Ok(())
}
