// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::services::{RosterConfig, RosterService, RosterServiceBuilder};
pub use domain::roster::models::RosterError;


pub mod app;
pub mod domain;
pub mod infra;

pub mod dtos {
    pub use crate::domain::roster::models::{
        Contact, GroupList, PresenceEvent, ResolutionMode, RosterEntry, RosterEvent,
        TransportRole, User, UserState,
    };
    pub use crate::domain::shared::models::{
        Availability, Presence, UserId, UserOrResourceId, UserResourceId,
    };
}
