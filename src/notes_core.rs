use serde::{Deserialize, Serialize};

use crate::persistent_list::PersistentList;
use crate::storage::KeyValueStore;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.title.trim().is_empty() {
            return Err(Rejection::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(Rejection::EmptyContent);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    EmptyTitle,
    EmptyContent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(u64),
    Updated(u64),
    TargetMissing(u64),
    Rejected(Rejection),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    pub fn next(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct NotesController<S> {
    notes: PersistentList<Vec<Note>, S>,
    draft: Draft,
    mode: EditMode,
    ids: IdAllocator,
    clock: fn() -> u64,
}

impl<S: KeyValueStore> NotesController<S> {
    pub fn new(notes: PersistentList<Vec<Note>, S>) -> Self {
        let mut controller = Self {
            notes,
            draft: Draft::default(),
            mode: EditMode::Creating,
            ids: IdAllocator::default(),
            clock: now_millis,
        };
        controller.observe_ids();
        controller
    }

    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn load(&mut self) {
        self.notes.load();
        self.observe_ids();
    }

    fn observe_ids(&mut self) {
        if let Some(max) = self.notes.read().iter().map(|note| note.id).max() {
            self.ids.observe(max);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.notes.is_ready()
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.read()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if let Err(rejection) = self.draft.validate() {
            return SubmitOutcome::Rejected(rejection);
        }

        match self.mode {
            EditMode::Creating => {
                let id = self.ids.next((self.clock)());
                let note = Note::new(id, self.draft.title.clone(), self.draft.content.clone());
                self.notes.write_with(|notes| {
                    let mut next = notes.clone();
                    next.push(note);
                    next
                });
                self.draft.clear();
                SubmitOutcome::Created(id)
            }
            EditMode::Editing(id) => {
                if !self.notes().iter().any(|note| note.id == id) {
                    self.mode = EditMode::Creating;
                    return SubmitOutcome::TargetMissing(id);
                }
                let replacement = Note::new(id, self.draft.title.clone(), self.draft.content.clone());
                self.notes.write_with(|notes| {
                    notes
                        .iter()
                        .map(|note| {
                            if note.id == id {
                                replacement.clone()
                            } else {
                                note.clone()
                            }
                        })
                        .collect()
                });
                self.draft.clear();
                self.mode = EditMode::Creating;
                SubmitOutcome::Updated(id)
            }
        }
    }

    pub fn begin_edit(&mut self, id: u64) -> bool {
        let Some(note) = self.notes().iter().find(|note| note.id == id) else {
            return false;
        };
        self.draft = Draft {
            title: note.title.clone(),
            content: note.content.clone(),
        };
        self.mode = EditMode::Editing(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.draft.clear();
            self.mode = EditMode::Creating;
        }
    }

    // Edit mode is kept even when the removed note is the one being edited.
    pub fn delete(&mut self, id: u64) -> bool {
        if !self.notes().iter().any(|note| note.id == id) {
            return false;
        }
        self.notes.write_with(|notes| {
            notes.iter().filter(|note| note.id != id).cloned().collect()
        });
        true
    }
}
