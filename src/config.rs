use serde::{Deserialize, Serialize};

use crate::notes_core::Note;

pub const DEFAULT_STORAGE_KEY: &str = "notes";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NotesConfig {
    pub storage_key: String,
    pub seed_notes: Vec<Note>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_notes: vec![
                Note::new(1, "Grocery List", "Milk, Eggs, Bread, Apples"),
                Note::new(
                    2,
                    "Meeting Notes",
                    "Discuss new project timeline, assign tasks to team",
                ),
                Note::new(
                    3,
                    "Idea for App",
                    "Develop a note-taking app with a clean and minimalist design",
                ),
            ],
        }
    }
}
