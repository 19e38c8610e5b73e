// prose-core-client/prose-roster
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;

use crate::domain::roster::models::User;
use crate::domain::roster::repos::UserRepository;

/// Associates ordinary users with the gateways that serve them.
pub struct TransportClassifier;

impl TransportClassifier {
    /// Recomputes the gateway affinities of every user from the gateways currently in
    /// `users`. Returns the number of users whose affinities changed, so running it again
    /// without an intervening roster change returns 0.
    pub fn classify(users: &mut UserRepository) -> usize {
        let gateways = users
            .all_users()
            .filter(|user| user.is_transport())
            .cloned()
            .collect::<Vec<User>>();

        let mut changed = 0;
        for user in users.users_mut() {
            let transports = gateways
                .iter()
                .filter(|gateway| user.is_served_by(gateway))
                .map(|gateway| gateway.id.clone())
                .collect::<IndexSet<_>>();

            if transports != user.transports {
                user.transports = transports;
                changed += 1;
            }
        }

        if changed > 0 {
            users.refresh_contacts();
        }
        changed
    }
}
