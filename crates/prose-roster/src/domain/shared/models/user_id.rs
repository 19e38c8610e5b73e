// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::BareJid;
use serde::{Deserialize, Serialize};

use super::UserResourceId;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Represents a canonical roster login without resource specification.
///
/// The login is normalized on parsing, so case variants of the same login are equal.
pub struct UserId(BareJid);

impl UserId {
    pub fn with_resource(&self, res: impl AsRef<str>) -> Result<UserResourceId, jid::Error> {
        Ok(UserResourceId::from(
            self.0.with_resource_str(res.as_ref())?,
        ))
    }

    pub fn domain(&self) -> &str {
        self.0.domain_str()
    }

    /// Gateways are addressed by domain only, i.e. without a node part.
    pub fn is_domain_only(&self) -> bool {
        self.0.node_str().is_none()
    }

    pub fn is_same_domain(&self, other: &UserId) -> bool {
        self.domain() == other.domain()
    }
}

impl From<BareJid> for UserId {
    fn from(value: BareJid) -> Self {
        UserId(value)
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(s.parse::<BareJid>()?))
    }
}

impl AsRef<BareJid> for UserId {
    fn as_ref(&self) -> &BareJid {
        &self.0
    }
}

impl From<UserId> for BareJid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl PartialOrd for UserId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserId {
    fn cmp(&self, other: &Self) -> Ordering {
        let ord = self.0.node_str().cmp(&other.0.node_str());
        if ord != Ordering::Equal {
            return ord;
        }
        self.0.domain_str().cmp(other.0.domain_str())
    }
}
