// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use identity_resolver::{IdentityResolver, Resolution};
pub use roster_event_sink::RosterEventSink;
pub use roster_reconciler::{RosterReconciler, RosterState};
pub use roster_source::{RosterListener, RosterSource};
pub use self_identity::SelfIdentity;
pub use transport_classifier::TransportClassifier;

mod identity_resolver;
mod roster_event_sink;
mod roster_reconciler;
mod roster_source;
mod self_identity;
mod transport_classifier;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::roster_event_sink::MockRosterEventSink;
    pub use super::roster_source::{MockRosterListener, MockRosterSource};
}
