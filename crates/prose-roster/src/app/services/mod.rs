// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use roster_config::RosterConfig;
pub use roster_service::RosterService;
pub use roster_service_builder::{RosterServiceBuilder, UndefinedEventSink, UndefinedRosterSource};

mod roster_config;
mod roster_service;
mod roster_service_builder;
