pub mod app;
pub mod config;
pub mod notes_core;
pub mod persistent_list;
pub mod storage;

pub use config::NotesConfig;
pub use notes_core::{Draft, EditMode, Note, NotesController, Rejection, SubmitOutcome};
pub use persistent_list::{CommitOutcome, LoadState, PersistentList};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStore, StorageError};
