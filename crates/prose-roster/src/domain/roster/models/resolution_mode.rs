// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// What to do when an address doesn't match any known record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Report absence.
    ExistingOnly,
    /// Build a detached user from the roster source (or a placeholder) without storing it.
    SetupIfMissing,
    /// Build a user from the roster source and store it if the source knows the address.
    AddIfMissing,
}
