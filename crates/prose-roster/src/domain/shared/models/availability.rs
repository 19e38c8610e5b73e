// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Availability {
    Available,
    #[default]
    Unavailable,
    DoNotDisturb,
    Away,
    ExtendedAway,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Presence {
    pub priority: i8,
    pub availability: Availability,
    pub status: Option<String>,
}

impl Presence {
    pub fn available() -> Self {
        Self {
            availability: Availability::Available,
            ..Default::default()
        }
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
