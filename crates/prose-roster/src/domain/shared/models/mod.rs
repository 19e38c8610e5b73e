// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::{Availability, Presence};
pub use user_id::UserId;
pub use user_or_resource_id::UserOrResourceId;
pub use user_resource_id::UserResourceId;

mod availability;
mod user_id;
mod user_or_resource_id;
mod user_resource_id;
