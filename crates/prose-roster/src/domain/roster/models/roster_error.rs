// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("The roster has been destroyed")]
    Destroyed,
    #[error("Invalid address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: jid::Error,
    },
    #[error("Roster source rejected entry {login}: {reason}")]
    SourceRejected { login: String, reason: anyhow::Error },
}

impl RosterError {
    pub fn is_destroyed(&self) -> bool {
        matches!(self, RosterError::Destroyed)
    }
}
