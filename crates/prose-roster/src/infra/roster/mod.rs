// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use channel_event_sink::{ChannelEventSink, RosterNotification};
pub use in_memory_roster_source::InMemoryRosterSource;

mod channel_event_sink;
mod in_memory_roster_source;
