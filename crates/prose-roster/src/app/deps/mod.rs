// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::roster::services::{RosterEventSink, RosterListener, RosterSource};

pub type DynRosterEventSink = Arc<dyn RosterEventSink>;
pub type DynRosterListener = Arc<dyn RosterListener>;
pub type DynRosterSource = Arc<dyn RosterSource>;
