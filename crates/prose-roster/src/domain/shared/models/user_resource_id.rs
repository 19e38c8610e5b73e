// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use jid::FullJid;

use super::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Represents a roster login including the specific resource part (a "full" address).
pub struct UserResourceId(FullJid);

impl UserResourceId {
    pub fn to_user_id(&self) -> UserId {
        UserId::from(self.0.to_bare())
    }

    pub fn resource_str(&self) -> &str {
        self.0.resource_str()
    }
}

impl From<FullJid> for UserResourceId {
    fn from(value: FullJid) -> Self {
        UserResourceId(value)
    }
}

impl FromStr for UserResourceId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserResourceId(s.parse::<FullJid>()?))
    }
}

impl Display for UserResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
