// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::roster::models::User;
use crate::domain::shared::models::UserOrResourceId;

/// Fire-and-forget notifications about roster changes.
///
/// Calls happen while the roster is locked, so implementations must not call back into the
/// roster synchronously.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RosterEventSink: Send + Sync {
    fn send_roster_added(&self, user: &User);
    fn send_roster_updated(&self, user: &User);
    fn send_roster_deleted(&self, id: &UserOrResourceId);
}
