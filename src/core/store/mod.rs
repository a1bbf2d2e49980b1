//! Entry store: per-domain, per-category subject entries and their persistence
//!
//! State is kept as a keyed map from [`Domain`] to [`DomainData`], so switching
//! domains never touches the other domain's entries. The whole store is saved
//! as one JSON document:
//!
//! ```json
//! { "domain": "ds", "domains": { "ds": { "completed": [..], "ongoing": [..], "future": [..] }, "es": { .. } } }
//! ```

mod collection;

pub use collection::EntryCollection;

use crate::core::catalog;
use crate::core::models::{Domain, Subject, SubjectEntry, SubjectRef};
use crate::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

/// Which list an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Subjects with a final grade
    Completed,
    /// Subjects in progress, graded with an expected grade
    Ongoing,
    /// Subjects not yet taken
    Future,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Self; 3] = [Self::Completed, Self::Ongoing, Self::Future];

    /// Lowercase name used on the command line and in state files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Ongoing => "ongoing",
            Self::Future => "future",
        }
    }

    /// Heading used in listings and reports
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Completed => "Completed Subjects",
            Self::Ongoing => "Ongoing Subjects",
            Self::Future => "Future Subjects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" | "done" => Ok(Self::Completed),
            "ongoing" | "current" => Ok(Self::Ongoing),
            "future" | "planned" => Ok(Self::Future),
            _ => Err(format!(
                "Unknown category: '{s}' (expected completed, ongoing or future)"
            )),
        }
    }
}

/// The three entry lists of one domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainData {
    /// Graded subjects
    #[serde(default)]
    pub completed: EntryCollection,
    /// Subjects in progress
    #[serde(default)]
    pub ongoing: EntryCollection,
    /// Subjects not yet taken
    #[serde(default)]
    pub future: EntryCollection,
}

impl DomainData {
    /// Collection for a category
    #[must_use]
    pub const fn get(&self, category: Category) -> &EntryCollection {
        match category {
            Category::Completed => &self.completed,
            Category::Ongoing => &self.ongoing,
            Category::Future => &self.future,
        }
    }

    /// Mutable collection for a category
    pub fn get_mut(&mut self, category: Category) -> &mut EntryCollection {
        match category {
            Category::Completed => &mut self.completed,
            Category::Ongoing => &mut self.ongoing,
            Category::Future => &mut self.future,
        }
    }

    /// Reset all three lists
    pub fn reset(&mut self) {
        self.completed.reset();
        self.ongoing.reset();
        self.future.reset();
    }

    fn repair(&mut self) {
        self.completed.repair();
        self.ongoing.repair();
        self.future.repair();
    }
}

/// Application state: the active domain and every domain's entries
///
/// Every domain is present and no list is empty, whichever way the store was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredState")]
pub struct EntryStore {
    domain: Domain,
    domains: BTreeMap<Domain, DomainData>,
}

/// State document as written on disk, before repair
#[derive(Deserialize)]
struct StoredState {
    #[serde(default)]
    domain: Domain,
    #[serde(default)]
    domains: BTreeMap<Domain, DomainData>,
}

impl From<StoredState> for EntryStore {
    fn from(state: StoredState) -> Self {
        let mut store = Self {
            domain: state.domain,
            domains: state.domains,
        };
        store.repair();
        store
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    /// Fresh store: default domain active, one placeholder per list
    #[must_use]
    pub fn new() -> Self {
        Self::with_domain(Domain::default())
    }

    /// Fresh store with a given active domain
    #[must_use]
    pub fn with_domain(domain: Domain) -> Self {
        let mut store = Self {
            domain,
            domains: BTreeMap::new(),
        };
        store.repair();
        store
    }

    /// Active domain
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Make another domain active; both domains keep their entries
    pub fn switch_domain(&mut self, domain: Domain) {
        if domain != self.domain {
            debug!("Switching domain {} -> {}", self.domain, domain);
        }
        self.domain = domain;
    }

    /// Entries of any domain
    #[must_use]
    pub fn data_for(&self, domain: Domain) -> &DomainData {
        // every domain is inserted by `repair`
        &self.domains[&domain]
    }

    /// Entries of the active domain
    #[must_use]
    pub fn data(&self) -> &DomainData {
        self.data_for(self.domain)
    }

    /// Mutable entries of the active domain
    pub fn data_mut(&mut self) -> &mut DomainData {
        self.domains.entry(self.domain).or_default()
    }

    /// One list of the active domain
    #[must_use]
    pub fn collection(&self, category: Category) -> &EntryCollection {
        self.data().get(category)
    }

    /// One mutable list of the active domain
    pub fn collection_mut(&mut self, category: Category) -> &mut EntryCollection {
        self.data_mut().get_mut(category)
    }

    /// Reset the three lists of the active domain, leaving other domains alone
    pub fn reset_domain(&mut self) {
        self.data_mut().reset();
    }

    /// Catalog ids already used by any entry of the active domain
    #[must_use]
    pub fn used_subject_ids(&self) -> HashSet<&str> {
        Category::ALL
            .iter()
            .flat_map(|&category| self.collection(category).entries())
            .filter_map(|entry| entry.subject.catalog_id())
            .collect()
    }

    /// Find which list of the active domain holds an entry with this id prefix
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty, nothing matches or the prefix
    /// matches more than one entry, in one list or across lists
    pub fn locate(&self, query: &str) -> Result<(Category, &SubjectEntry), String> {
        let mut found = Vec::new();
        for category in Category::ALL {
            for entry in self.collection(category).matching(query)? {
                found.push((category, entry));
            }
        }
        match found.len() {
            1 => Ok(found.remove(0)),
            0 => Err(format!("No entry matches '{}'", query.trim())),
            _ => Err(format!("Entry id '{}' is ambiguous", query.trim())),
        }
    }

    /// Catalog subject of the active domain that an entry may switch to
    ///
    /// `current` is the entry being edited, if any; it may keep its own subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the catalog or another entry of
    /// the active domain already records that subject
    pub fn available_subject(
        &self,
        subject_id: &str,
        current: Option<Uuid>,
    ) -> Result<&'static Subject, String> {
        let domain = self.domain;
        let subject = catalog::find(domain, subject_id).ok_or_else(|| {
            format!("Unknown subject '{subject_id}' for domain {domain}; see `cgpa catalog`")
        })?;

        let taken = Category::ALL.iter().any(|&category| {
            self.collection(category).entries().iter().any(|e| {
                Some(e.id) != current && e.subject.catalog_id() == Some(subject.id)
            })
        });
        if taken {
            return Err(format!("{} ({}) is already recorded", subject.name, subject.id));
        }
        Ok(subject)
    }

    /// Entry that a new subject should go into
    ///
    /// A named subject (catalog or custom) fills the first blank placeholder of
    /// the list; anything else gets a fresh entry appended.
    pub fn entry_slot(&mut self, category: Category, named: bool) -> Uuid {
        let collection = self.collection_mut(category);
        if named {
            if let Some(placeholder) = collection
                .entries()
                .iter()
                .find(|e| e.subject == SubjectRef::Unselected)
            {
                return placeholder.id;
            }
        }
        collection.add_empty()
    }

    /// Restore structural invariants: every domain present, no empty list
    fn repair(&mut self) {
        for domain in Domain::ALL {
            self.domains.entry(domain).or_default().repair();
        }
    }

    /// Load a store from a JSON state file; empty or missing lists come back as placeholders
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid state document
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&contents)?;
        debug!("Loaded state from {}", path.display());
        Ok(store)
    }

    /// Load a store, falling back to a fresh one when the file is missing or unreadable
    #[must_use]
    pub fn load_or_default(path: &Path, domain: Domain) -> Self {
        if !path.exists() {
            debug!("No state file at {}, starting fresh", path.display());
            return Self::with_domain(domain);
        }
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                warn!("Ignoring unreadable state file {}: {}", path.display(), e);
                Self::with_domain(domain)
            }
        }
    }

    /// Write the store as pretty JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot be written
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!("Saved state to {}", path.display());
        Ok(())
    }
}
