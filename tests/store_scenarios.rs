//! End-to-end store behavior over a file-backed key-value store.
//!
//! Each test opens a store on a temp directory, mutates it, then reopens a
//! fresh store on the same directory to check what was written through.

use std::fs;
use std::path::Path;

use jot::io::kv::FileStore;
use jot::io::persistence::Persistence;
use jot::model::{FilterMode, Priority};
use jot::ops::notify::{Cue, Recorder};
use jot::ops::store::TaskStore;
use pretty_assertions::assert_eq;

fn open(dir: &Path) -> TaskStore {
    let kv = FileStore::open(dir).unwrap();
    TaskStore::open(Persistence::new(Box::new(kv)))
}

fn texts(tasks: &[&jot::model::Task]) -> Vec<String> {
    tasks.iter().map(|t| t.text.clone()).collect()
}

#[test]
fn filter_scenario_survives_reload() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut store = open(tmp.path());
    let a = store.create("A", Priority::Low).unwrap();
    store.create("B", Priority::High).unwrap();
    assert_eq!(texts(&store.projected_view(FilterMode::All)), vec!["A", "B"]);

    store.toggle_complete(a.id).unwrap();
    drop(store);

    let store = open(tmp.path());
    assert_eq!(texts(&store.projected_view(FilterMode::All)), vec!["A", "B"]);
    assert_eq!(texts(&store.projected_view(FilterMode::Completed)), vec!["A"]);
    assert_eq!(texts(&store.projected_view(FilterMode::Pending)), vec!["B"]);
    assert_eq!(store.get(a.id).unwrap().priority, Priority::Low);
}

#[test]
fn clear_all_reflected_in_persistence() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut store = open(tmp.path());
    for text in ["one", "two", "three"] {
        store.create(text, Priority::Medium).unwrap();
    }
    let pending = store.prepare_clear_all().unwrap();
    assert_eq!(pending.count(), 3);
    assert_eq!(store.confirm(pending).unwrap(), 3);
    assert!(store.is_empty());

    let reopened = open(tmp.path());
    assert!(reopened.is_empty());
    let raw = fs::read_to_string(tmp.path().join("todoList_tasks.json")).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn cancelled_clear_changes_nothing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut store = open(tmp.path());
    store.create("keep", Priority::Medium).unwrap();
    let pending = store.prepare_clear_all().unwrap();
    drop(pending);
    assert_eq!(open(tmp.path()).len(), 1);
}

#[test]
fn reorder_persists() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut store = open(tmp.path());
    let a = store.create("A", Priority::Medium).unwrap();
    let b = store.create("B", Priority::Medium).unwrap();
    assert!(store.reorder(b.id, a.id).unwrap());

    let store = open(tmp.path());
    assert_eq!(texts(&store.projected_view(FilterMode::All)), vec!["B", "A"]);
}

#[test]
fn ids_stay_unique_across_sessions() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut first = open(tmp.path());
    let a = first.create("first", Priority::Medium).unwrap();
    drop(first);

    let mut second = open(tmp.path());
    let b = second.create("second", Priority::Medium).unwrap();
    assert!(b.id.0 > a.id.0);
}

#[test]
fn preferences_persist_with_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut store = open(tmp.path());
    let prefs = store.preferences();
    assert!(!prefs.dark_mode);
    assert!(prefs.sound);

    assert!(store.toggle_dark_mode().unwrap());
    drop(store);

    let store = open(tmp.path());
    assert!(store.preferences().dark_mode);
    assert!(store.preferences().sound);
}

#[test]
fn garbage_preference_reads_false() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("todoList_soundEnabled.json"), "yes please").unwrap();
    assert!(!open(tmp.path()).preferences().sound);
}

#[test]
fn cues_follow_mutations_and_respect_mute() {
    let tmp = tempfile::TempDir::new().unwrap();
    let recorder = Recorder::new();
    let mut store = open(tmp.path()).with_notifier(Box::new(recorder.clone()));

    let a = store.create("a", Priority::Medium).unwrap();
    store.toggle_complete(a.id).unwrap();
    store.delete(a.id).unwrap();
    assert_eq!(recorder.take(), vec![Cue::Added, Cue::Completed, Cue::Deleted]);

    store.toggle_sound().unwrap();
    store.create("silent", Priority::Medium).unwrap();
    assert!(recorder.take().is_empty());
}

#[test]
fn corrupt_data_is_backed_up_and_replaced() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("todoList_tasks.json"), "[{\"id\": ").unwrap();

    let mut store = open(tmp.path());
    assert!(store.is_empty());
    assert!(tmp.path().join("todoList_tasks.corrupt.json").exists());

    store.create("fresh", Priority::Medium).unwrap();
    let store = open(tmp.path());
    assert_eq!(texts(&store.projected_view(FilterMode::All)), vec!["fresh"]);
}
