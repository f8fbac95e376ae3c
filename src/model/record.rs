//! Registry domain models.
//!
//! Provides the persisted `Record` and the ordered `Registry` that holds them, plus
//! the outcome type reported by role reconciliation. Field names of `Record` are the
//! on-disk JSON keys and must not change; other consumers read the same file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One registered member's VRChat mapping.
///
/// Serialized with keys in declaration order (`discord_id`, `vrchat_username`,
/// `roles`), followed by any other keys the stored object carried, in their
/// original order. `roles` is absent on records written before role tracking
/// existed and stays absent when such a record is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Discord user ID of the member, as a decimal string.
    pub discord_id: String,
    /// VRChat username supplied at registration. Not validated.
    pub vrchat_username: String,
    /// Allow-listed role IDs the member held when last observed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<u64>>,
    /// Keys written by other tools, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(member_id: u64, vrchat_username: impl Into<String>, roles: Vec<u64>) -> Self {
        Self {
            discord_id: member_id.to_string(),
            vrchat_username: vrchat_username.into(),
            roles: Some(roles),
            extra: Map::new(),
        }
    }

    /// Checks whether this record belongs to the given Discord user.
    pub fn is_member(&self, member_id: u64) -> bool {
        self.discord_id == member_id.to_string()
    }
}

/// One element of the stored array.
///
/// Elements that do not have the record shape (for example a numeric
/// `discord_id`) are kept verbatim so a save writes them back unchanged. They
/// never match a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum Entry {
    Record(Record),
    Opaque(Value),
}

impl Entry {
    fn as_record(&self) -> Option<&Record> {
        match self {
            Entry::Record(record) => Some(record),
            Entry::Opaque(_) => None,
        }
    }

    fn is_member(&self, member_id: u64) -> bool {
        self.as_record().is_some_and(|r| r.is_member(member_id))
    }
}

/// Ordered collection of records, persisted as a single JSON array.
///
/// Insertion order is kept. `discord_id` is unique within the registry; the
/// registry service checks this before every insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    #[cfg(test)]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            entries: records.into_iter().map(Entry::Record).collect(),
        }
    }

    pub fn find(&self, member_id: u64) -> Option<&Record> {
        self.records().find(|r| r.is_member(member_id))
    }

    pub fn find_mut(&mut self, member_id: u64) -> Option<&mut Record> {
        self.entries.iter_mut().find_map(|entry| match entry {
            Entry::Record(record) if record.is_member(member_id) => Some(record),
            _ => None,
        })
    }

    pub fn push(&mut self, record: Record) {
        self.entries.push(Entry::Record(record));
    }

    /// Removes every record of the member, returning the first one removed.
    pub fn remove(&mut self, member_id: u64) -> Option<Record> {
        let position = self.entries.iter().position(|e| e.is_member(member_id))?;
        let removed = self.entries.remove(position);
        self.entries.retain(|e| !e.is_member(member_id));
        match removed {
            Entry::Record(record) => Some(record),
            Entry::Opaque(_) => None,
        }
    }

    /// Records in stored order, skipping elements without the record shape.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().filter_map(Entry::as_record)
    }

    /// Number of stored elements without the record shape.
    pub fn opaque_len(&self) -> usize {
        self.entries.len() - self.records().count()
    }

    /// Number of stored elements, including those without the record shape.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of reconciling a member's stored roles against a role change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The member has no record; nothing was done.
    NotRegistered,
    /// The member's allowed roles did not change; nothing was written.
    Unchanged,
    /// The record's roles were replaced with the current allowed roles.
    Updated(Record),
    /// The member no longer holds any allowed role and the record was deleted.
    Removed(Record),
}
