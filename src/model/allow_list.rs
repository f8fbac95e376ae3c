//! Allow-list of role IDs that gate registration.

use std::collections::BTreeSet;

/// Fixed set of Discord role IDs whose holders may register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    roles: BTreeSet<u64>,
}

impl AllowList {
    pub fn new(roles: impl IntoIterator<Item = u64>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn contains(&self, role_id: u64) -> bool {
        self.roles.contains(&role_id)
    }

    /// Returns the allow-listed subset of a member's roles.
    ///
    /// Keeps the order the roles were given in and drops duplicates, so the
    /// stored role list mirrors what Discord reported for the member.
    ///
    /// # Arguments
    /// - `member_roles` - Role IDs currently held by the member
    ///
    /// # Returns
    /// - `Vec<u64>` - Allowed roles held, empty if none
    pub fn intersect(&self, member_roles: &[u64]) -> Vec<u64> {
        let mut allowed: Vec<u64> = Vec::new();
        for role in member_roles {
            if self.contains(*role) && !allowed.contains(role) {
                allowed.push(*role);
            }
        }
        allowed
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
