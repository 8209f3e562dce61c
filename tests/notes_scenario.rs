use notes_widget::{
    EditMode, KeyValueStore, MemoryStore, Note, NotesConfig, NotesController, PersistentList,
    SubmitOutcome,
};

fn open(store: &MemoryStore) -> NotesController<MemoryStore> {
    let config = NotesConfig::default();
    let mut controller = NotesController::new(PersistentList::new(
        store.clone(),
        config.storage_key,
        config.seed_notes,
    ));
    controller.load();
    controller
}

#[test]
fn add_edit_delete_walkthrough() {
    let store = MemoryStore::new();
    let mut controller = open(&store);
    assert_eq!(controller.notes().len(), 3);

    controller.set_title("X");
    controller.set_content("Y");
    assert!(matches!(controller.submit(), SubmitOutcome::Created(_)));
    assert_eq!(controller.notes().len(), 4);
    assert_eq!(controller.notes()[3].title, "X");

    let first = controller.notes()[0].id;
    assert!(controller.begin_edit(first));
    controller.set_content("Z");
    assert_eq!(controller.submit(), SubmitOutcome::Updated(first));
    assert_eq!(controller.notes().len(), 4);
    assert_eq!(controller.notes()[0].title, "Grocery List");
    assert_eq!(controller.notes()[0].content, "Z");
    assert_eq!(controller.mode(), EditMode::Creating);

    let second = controller.notes()[1].id;
    assert!(controller.delete(second));
    assert_eq!(controller.notes().len(), 3);
    assert!(controller.notes().iter().all(|note| note.id != second));
}

#[test]
fn collection_survives_reload() {
    let store = MemoryStore::new();
    let mut controller = open(&store);
    controller.set_title("persisted");
    controller.set_content("across reloads");
    controller.submit();
    controller.delete(1);
    let before: Vec<Note> = controller.notes().to_vec();

    let reloaded = open(&store);
    assert_eq!(reloaded.notes(), before.as_slice());
}

#[test]
fn stored_layout_is_a_json_array_under_notes() {
    let store = MemoryStore::new();
    let mut controller = open(&store);
    controller.delete(2);
    controller.delete(3);

    let raw = store.get("notes").unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"id":1,"title":"Grocery List","content":"Milk, Eggs, Bread, Apples"}]"#
    );
    assert_eq!(store.keys(), vec!["notes".to_string()]);
}

#[test]
fn corrupt_storage_starts_from_seed_and_is_overwritten() {
    let store = MemoryStore::with_entry("notes", "[{\"id\":");
    let mut controller = open(&store);
    assert_eq!(controller.notes(), NotesConfig::default().seed_notes.as_slice());

    controller.delete(1);
    let reloaded = open(&store);
    assert_eq!(reloaded.notes().len(), 2);
}
