// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered set of group names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupList(IndexSet<String>);

impl GroupList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The group new entries land in when none is specified.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn insert(&mut self, group: impl Into<String>) -> bool {
        self.0.insert(group.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for GroupList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for GroupList {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}
