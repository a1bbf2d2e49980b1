//! Integration tests for entry storage and persistence

use cgpa_planner::catalog;
use cgpa_planner::grading::Grade;
use cgpa_planner::models::{Domain, EntryUpdate, SubjectEntry, SubjectRef, MAX_CREDITS};
use cgpa_planner::store::{Category, EntryStore};
use std::fs;
use tempfile::TempDir;

fn state_path(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join("nested").join("state.json")
}

#[test]
fn fresh_store_has_one_placeholder_per_list() {
    let store = EntryStore::new();
    for domain in Domain::ALL {
        let data = store.data_for(domain);
        for category in Category::ALL {
            let collection = data.get(category);
            assert_eq!(collection.len(), 1);
            assert_eq!(collection.entries()[0].subject, SubjectRef::Unselected);
            assert!(collection.valid_entries().is_empty());
        }
    }
}

#[test]
fn save_and_reload_preserves_both_domains() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = state_path(&temp_dir);

    let mut store = EntryStore::new();
    let mlf = catalog::find(Domain::Ds, "ds-dd-1").unwrap();
    let ds_id = store
        .collection_mut(Category::Completed)
        .add(SubjectEntry::for_subject(mlf, Grade::A));

    store.switch_domain(Domain::Es);
    let es_id = store
        .collection_mut(Category::Future)
        .add(SubjectEntry::custom("Signals Lab", 2, Grade::B));

    store.save(&path).expect("Failed to save state");
    let loaded = EntryStore::load(&path).expect("Failed to load state");

    assert_eq!(loaded, store);
    assert_eq!(loaded.domain(), Domain::Es);
    assert!(loaded.collection(Category::Future).get(es_id).is_some());
    assert!(loaded
        .data_for(Domain::Ds)
        .get(Category::Completed)
        .get(ds_id)
        .is_some());
}

#[test]
fn load_repairs_empty_and_missing_lists() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("state.json");
    fs::write(
        &path,
        r#"{ "domain": "es", "domains": { "ds": { "completed": [] } } }"#,
    )
    .expect("Failed to write state");

    let store = EntryStore::load(&path).expect("Failed to load state");

    assert_eq!(store.domain(), Domain::Es);
    for domain in Domain::ALL {
        for category in Category::ALL {
            assert_eq!(store.data_for(domain).get(category).len(), 1);
        }
    }
}

#[test]
fn load_or_default_survives_missing_and_corrupt_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("state.json");

    let missing = EntryStore::load_or_default(&path, Domain::Es);
    assert_eq!(missing.domain(), Domain::Es);

    fs::write(&path, "{ not json").expect("Failed to write state");
    assert!(EntryStore::load(&path).is_err());
    let corrupt = EntryStore::load_or_default(&path, Domain::Ds);
    assert_eq!(corrupt.domain(), Domain::Ds);
    assert!(corrupt.collection(Category::Completed).valid_entries().is_empty());
}

#[test]
fn removing_every_entry_leaves_a_placeholder() {
    let mut store = EntryStore::new();
    let collection = store.collection_mut(Category::Ongoing);
    let added = collection.add(SubjectEntry::custom("Thesis", 8, Grade::S));
    let placeholder = collection.entries()[0].id;

    assert!(collection.remove(placeholder).is_some());
    assert!(collection.remove(added).is_some());

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.entries()[0].subject, SubjectRef::Unselected);
    assert!(collection.remove(added).is_none());
}

#[test]
fn updates_clamp_credits_and_track_validity() {
    let mut store = EntryStore::new();
    let collection = store.collection_mut(Category::Completed);
    let id = collection.add_empty();
    assert!(!collection.get(id).unwrap().is_valid());

    collection.select_custom(id).unwrap();
    assert!(!collection.get(id).unwrap().is_valid());

    collection
        .update(id, EntryUpdate::Name("Capstone".to_string()))
        .unwrap();
    let entry = collection.update(id, EntryUpdate::Credits(40)).unwrap();
    assert_eq!(entry.credits, MAX_CREDITS);
    assert!(entry.is_valid());

    assert!(collection
        .update(uuid::Uuid::new_v4(), EntryUpdate::Grade(Grade::U))
        .is_err());
}

#[test]
fn short_ids_resolve_within_the_active_domain() {
    let mut store = EntryStore::new();
    let id = store
        .collection_mut(Category::Future)
        .add(SubjectEntry::custom("Elective", 4, Grade::C));
    let short = store.collection(Category::Future).get(id).unwrap().short_id();

    assert_eq!(
        store.collection(Category::Future).resolve_id(&short),
        Ok(id)
    );
    let (category, entry) = store.locate(&short).unwrap();
    assert_eq!(category, Category::Future);
    assert_eq!(entry.id, id);

    store.switch_domain(Domain::Es);
    assert!(store.locate(&short).is_err());
}

#[test]
fn reset_domain_leaves_other_domain_alone() {
    let mut store = EntryStore::new();
    let subject = catalog::find(Domain::Ds, "ds-f-1").unwrap();
    store
        .collection_mut(Category::Completed)
        .add(SubjectEntry::for_subject(subject, Grade::S));

    store.switch_domain(Domain::Es);
    store
        .collection_mut(Category::Completed)
        .add(SubjectEntry::custom("Circuits", 4, Grade::B));
    store.reset_domain();

    assert_eq!(store.collection(Category::Completed).len(), 1);
    assert_eq!(
        store.data_for(Domain::Ds).get(Category::Completed).len(),
        2
    );
    store.switch_domain(Domain::Ds);
    assert!(store.used_subject_ids().contains("ds-f-1"));
}

#[test]
fn catalog_entries_refuse_name_and_credit_edits() {
    let mut store = EntryStore::new();
    let subject = catalog::find(Domain::Ds, "ds-f-1").unwrap();
    let collection = store.collection_mut(Category::Completed);
    let id = collection.add(SubjectEntry::for_subject(subject, Grade::B));

    assert!(collection
        .update(id, EntryUpdate::Name("Easy Maths".to_string()))
        .is_err());
    assert!(collection.update(id, EntryUpdate::Credits(1)).is_err());
    let entry = collection.update(id, EntryUpdate::Grade(Grade::S)).unwrap();
    assert_eq!(entry.subject_name, subject.name);
    assert_eq!(entry.credits, subject.credits);

    // switching to a custom subject unlocks both fields
    collection.select_custom(id).unwrap();
    let entry = collection.update(id, EntryUpdate::Credits(1)).unwrap();
    assert_eq!(entry.credits, 1);
}

#[test]
fn store_helpers_pick_slots_and_subjects() {
    let mut store = EntryStore::new();
    let placeholder = store.collection(Category::Completed).entries()[0].id;

    let slot = store.entry_slot(Category::Completed, true);
    assert_eq!(slot, placeholder);
    let subject = store.available_subject("ds-f-2", None).unwrap();
    store
        .collection_mut(Category::Completed)
        .select_subject(slot, subject)
        .unwrap();

    assert!(store.available_subject("ds-f-2", None).is_err());
    assert!(store.available_subject("ds-f-2", Some(slot)).is_ok());
    assert_ne!(store.entry_slot(Category::Completed, true), placeholder);
}

#[test]
fn deserialized_state_is_repaired_without_load() {
    let store: EntryStore = serde_json::from_str("{}").unwrap();
    assert_eq!(store.collection(Category::Completed).len(), 1);
    assert!(store.locate("-").is_err());
}
