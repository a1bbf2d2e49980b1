//! Always-non-empty list of subject entries

use crate::core::models::{EntryUpdate, Subject, SubjectEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered list of entries for one category
///
/// The list never becomes empty through its own operations: removing the last
/// entry or resetting leaves a single blank placeholder behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<SubjectEntry>,
}

impl Default for EntryCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryCollection {
    /// Create a collection holding one blank entry
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![SubjectEntry::empty()],
        }
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[SubjectEntry] {
        &self.entries
    }

    /// Entries that count toward calculations, in order
    #[must_use]
    pub fn valid_entries(&self) -> Vec<&SubjectEntry> {
        self.entries.iter().filter(|e| e.is_valid()).collect()
    }

    /// Number of entries, placeholders included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries (only after deserializing an empty list)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&SubjectEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut SubjectEntry, String> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| format!("No entry with id {id}"))
    }

    /// Append an entry and return its id
    pub fn add(&mut self, entry: SubjectEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Append a blank entry and return its id
    pub fn add_empty(&mut self) -> Uuid {
        self.add(SubjectEntry::empty())
    }

    /// Remove an entry, leaving a fresh placeholder if the list would become empty
    ///
    /// Unknown ids leave the collection untouched and return `None`.
    pub fn remove(&mut self, id: Uuid) -> Option<SubjectEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);
        self.repair();
        Some(removed)
    }

    /// Apply one field edit to an entry
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has the given id or the entry rejects the edit
    pub fn update(&mut self, id: Uuid, update: EntryUpdate) -> Result<&SubjectEntry, String> {
        let entry = self.get_mut(id)?;
        entry.apply(update)?;
        Ok(entry)
    }

    /// Point an entry at a catalog subject, copying its name and credits
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has the given id
    pub fn select_subject(&mut self, id: Uuid, subject: &Subject) -> Result<&SubjectEntry, String> {
        let entry = self.get_mut(id)?;
        entry.select_subject(subject);
        Ok(entry)
    }

    /// Turn an entry into an unnamed custom subject
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has the given id
    pub fn select_custom(&mut self, id: Uuid) -> Result<&SubjectEntry, String> {
        let entry = self.get_mut(id)?;
        entry.select_custom();
        Ok(entry)
    }

    /// Drop every entry and start over with one placeholder
    pub fn reset(&mut self) {
        self.entries = vec![SubjectEntry::empty()];
    }

    /// Restore the non-empty invariant
    pub(crate) fn repair(&mut self) {
        if self.entries.is_empty() {
            self.entries.push(SubjectEntry::empty());
        }
    }

    /// Entries whose id equals `query` or starts with it
    ///
    /// Both the hyphenated and the simple (hyphen-free) forms are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query holds no id characters
    pub fn matching(&self, query: &str) -> Result<Vec<&SubjectEntry>, String> {
        let query = query.trim().to_ascii_lowercase();
        if let Ok(id) = Uuid::parse_str(&query) {
            return Ok(self.get(id).into_iter().collect());
        }

        let needle = query.replace('-', "");
        if needle.is_empty() {
            return Err("Entry id must not be empty".to_string());
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&needle))
            .collect())
    }

    /// Resolve a full id or a unique prefix of one
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty, nothing matches or the prefix is ambiguous
    pub fn resolve_id(&self, query: &str) -> Result<Uuid, String> {
        match self.matching(query)?.as_slice() {
            [entry] => Ok(entry.id),
            [] => Err(format!("No entry matches '{}'", query.trim())),
            _ => Err(format!("Entry id '{}' is ambiguous", query.trim())),
        }
    }
}
