// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

use super::GroupList;

/// An item as stored on the remote roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: UserId,
    pub name: Option<String>,
    pub groups: GroupList,
}

impl RosterEntry {
    pub fn new(id: UserId, name: Option<String>, groups: GroupList) -> Self {
        Self {
            id,
            name,
            groups,
        }
    }

    /// The roster name, falling back to the login.
    pub fn display_name(&self) -> String {
        self.name
            .as_ref()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| self.id.to_string())
    }
}
