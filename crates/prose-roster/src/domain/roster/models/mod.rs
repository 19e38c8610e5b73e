// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact::Contact;
pub use group_list::GroupList;
pub use resolution_mode::ResolutionMode;
pub use roster_entry::RosterEntry;
pub use roster_error::RosterError;
pub use roster_event::{PresenceEvent, RosterEvent};
pub use user::{TransportRole, User};
pub use user_state::UserState;

mod contact;
mod group_list;
mod resolution_mode;
mod roster_entry;
mod roster_error;
mod roster_event;
mod user;
mod user_state;
