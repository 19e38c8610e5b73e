// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq)]
pub struct RosterConfig {
    /// The group new entries are filed under if none is given and the roster has no groups.
    pub default_group: String,
    /// Whether to load all roster entries when the service is built.
    pub load_on_build: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_group: "Friends".to_string(),
            load_on_build: true,
        }
    }
}
