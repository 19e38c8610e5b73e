// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{Availability, Presence};

/// Presence-derived state of a roster user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserState {
    Available,
    Away,
    ExtendedAway,
    DoNotDisturb,
    #[default]
    Offline,
    /// Sentinel for placeholders synthesized for addresses the roster doesn't know.
    Invalid,
}

impl UserState {
    /// States that `merge_user` replaces with a freshly resolved record. `Invalid` is the only
    /// one; any transient state added later must be listed here explicitly.
    pub fn is_superseded_on_merge(&self) -> bool {
        matches!(self, UserState::Invalid)
    }

    pub fn is_invalid(&self) -> bool {
        *self == UserState::Invalid
    }
}

impl From<&Presence> for UserState {
    fn from(value: &Presence) -> Self {
        match value.availability {
            Availability::Available => UserState::Available,
            Availability::Away => UserState::Away,
            Availability::ExtendedAway => UserState::ExtendedAway,
            Availability::DoNotDisturb => UserState::DoNotDisturb,
            Availability::Unavailable => UserState::Offline,
        }
    }
}
