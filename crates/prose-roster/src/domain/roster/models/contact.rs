// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

use super::{GroupList, User, UserState};

/// Address-book view of a [`User`], independent of resource detail.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: UserId,
    pub name: String,
    pub groups: GroupList,
    pub state: UserState,
    pub contact: Option<serde_json::Value>,
}

impl From<&User> for Contact {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            groups: user.groups.clone(),
            state: user.state,
            contact: user.contact.clone(),
        }
    }
}
