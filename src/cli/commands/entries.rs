//! Entry command handlers: add, update, remove, reset and list

use super::{fail, load_store, save_store};
use cgpa_planner::cgpa::CgpaSummary;
use cgpa_planner::config::Config;
use cgpa_planner::grading::Grade;
use cgpa_planner::models::{EntryUpdate, Subject, DEFAULT_CREDITS};
use cgpa_planner::store::{Category, EntryCollection, EntryStore};
use cgpa_planner::{info, verbose, warn};
use std::io::{self, Write};
use uuid::Uuid;

/// Optional field values shared by `add` and `update`
#[derive(Debug, Default)]
pub struct EntryFields {
    /// Catalog subject id
    pub subject: Option<String>,
    /// Custom subject name
    pub custom: Option<String>,
    /// New display name
    pub name: Option<String>,
    /// Credits before clamping
    pub credits: Option<i64>,
    /// Grade
    pub grade: Option<Grade>,
}

impl EntryFields {
    const fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.custom.is_none()
            && self.name.is_none()
            && self.credits.is_none()
            && self.grade.is_none()
    }
}

/// Apply field edits to one entry of a collection
fn apply_fields(
    collection: &mut EntryCollection,
    id: Uuid,
    subject: Option<&Subject>,
    fields: EntryFields,
) -> Result<(), String> {
    if let Some(subject) = subject {
        collection.select_subject(id, subject)?;
    }
    if let Some(custom) = fields.custom {
        collection.select_custom(id)?;
        collection.update(id, EntryUpdate::Name(custom))?;
    }
    if let Some(name) = fields.name {
        collection.update(id, EntryUpdate::Name(name))?;
    }
    if let Some(credits) = fields.credits {
        collection.update(id, EntryUpdate::Credits(credits))?;
    }
    if let Some(grade) = fields.grade {
        collection.update(id, EntryUpdate::Grade(grade))?;
    }
    Ok(())
}

/// Add an entry, filling a blank placeholder first when one exists
pub fn add(category: Category, fields: EntryFields, config: &Config) {
    let mut store = load_store(config);

    let subject = fields
        .subject
        .as_deref()
        .map(|id| store.available_subject(id, None))
        .transpose()
        .unwrap_or_else(|e| fail(&e));
    if fields.custom.as_deref().is_some_and(|n| n.trim().is_empty()) {
        warn!("Custom subject name is blank; the entry will not count until it is named");
    }

    let id = store.entry_slot(category, subject.is_some() || fields.custom.is_some());
    if subject.is_none() && fields.custom.is_none() && fields.credits.is_none() {
        verbose!("Adding a blank entry with {DEFAULT_CREDITS} credits");
    }
    let collection = store.collection_mut(category);
    apply_fields(collection, id, subject, fields).unwrap_or_else(|e| fail(&e));

    let entry = describe(collection, id);
    save_store(&store, config);
    info!("Added entry {id} to {category}");
    println!("✓ Added to {category}: {entry}");
}

/// Edit an existing entry
pub fn update(category: Category, query: &str, fields: EntryFields, config: &Config) {
    if fields.is_empty() {
        fail("Nothing to update; pass --subject, --custom, --name, --credits or --grade");
    }

    let mut store = load_store(config);
    let id = store
        .collection(category)
        .resolve_id(query)
        .unwrap_or_else(|e| fail(&e));
    let subject = fields
        .subject
        .as_deref()
        .map(|subject_id| store.available_subject(subject_id, Some(id)))
        .transpose()
        .unwrap_or_else(|e| fail(&e));

    let collection = store.collection_mut(category);
    apply_fields(collection, id, subject, fields).unwrap_or_else(|e| fail(&e));

    let entry = describe(collection, id);
    save_store(&store, config);
    info!("Updated entry {id} in {category}");
    println!("✓ Updated {category}: {entry}");
}

/// Remove an entry; the last one is replaced by a blank placeholder
pub fn remove(category: Category, query: &str, config: &Config) {
    let mut store = load_store(config);
    let collection = store.collection_mut(category);
    let id = collection.resolve_id(query).unwrap_or_else(|e| fail(&e));

    let Some(removed) = collection.remove(id) else {
        fail(&format!("No entry with id {id}"));
    };

    save_store(&store, config);
    info!("Removed entry {id} from {category}");
    println!("✓ Removed from {category}: {}", removed.display_name());
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

/// Clear one list, or all lists of the active domain
pub fn reset(category: Option<Category>, assume_yes: bool, config: &Config) {
    let mut store = load_store(config);
    let domain = store.domain();
    let scope = category.map_or_else(
        || format!("all {domain} subjects"),
        |c| format!("{c} {domain} subjects"),
    );

    if !assume_yes && !confirm(&format!("Are you sure you want to clear {scope}?")) {
        println!("✗ Reset cancelled");
        return;
    }

    match category {
        Some(category) => store.collection_mut(category).reset(),
        None => store.reset_domain(),
    }
    save_store(&store, config);
    info!("Cleared {scope}");
    println!("✓ Cleared {scope}");
}

/// Print entries of one or all lists of the active domain
pub fn list(category: Option<Category>, config: &Config) {
    let store = load_store(config);
    let categories: Vec<Category> = category.map_or_else(|| Category::ALL.to_vec(), |c| vec![c]);

    println!("\n=== {} ===", store.domain().program_name());
    for category in categories {
        let collection = store.collection(category);
        let valid = collection.valid_entries();
        let summary = CgpaSummary::of(&valid);

        println!(
            "\n{} (CGPA {}, {} credits)",
            category.title(),
            summary.display_cgpa(),
            summary.credits
        );
        println!("  {:<8}  {:<50} {:>7}  {:<6}", "ID", "Subject", "Credits", "Grade");
        for entry in collection.entries() {
            let marker = if entry.is_valid() { " " } else { "!" };
            println!(
                "{marker} {:<8}  {:<50} {:>7}  {:<6}",
                entry.short_id(),
                entry.display_name(),
                entry.credits,
                entry.grade
            );
        }
    }
    verbose!("\nEntries marked ! are incomplete and do not count toward any CGPA");
}

fn describe(collection: &EntryCollection, id: Uuid) -> String {
    collection.get(id).map_or_else(String::new, |e| {
        format!(
            "[{}] {} ({} cr, {})",
            e.short_id(),
            e.display_name(),
            e.credits,
            e.grade
        )
    })
}
