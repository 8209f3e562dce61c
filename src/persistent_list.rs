use leptos::logging::{log, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitOutcome {
    pub persisted: bool,
}

// Writes update memory first; a failing store never rolls the value back.
#[derive(Debug)]
pub struct PersistentList<T, S> {
    store: S,
    key: String,
    value: T,
    state: LoadState,
}

impl<T, S> PersistentList<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(store: S, key: impl Into<String>, default: T) -> Self {
        Self {
            store,
            key: key.into(),
            value: default,
            state: LoadState::Uninitialized,
        }
    }

    pub fn initialize(store: S, key: impl Into<String>, default: T) -> Self {
        let mut list = Self::new(store, key, default);
        list.load();
        list
    }

    pub fn load(&mut self) {
        if self.state == LoadState::Ready {
            return;
        }
        match self.read_stored() {
            Ok(Some(value)) => {
                self.value = value;
                log!("loaded `{}` from storage", self.key);
            }
            Ok(None) => {}
            Err(err) => warn!("keeping default for `{}`: {err}", self.key),
        }
        self.state = LoadState::Ready;
    }

    fn read_stored(&self) -> Result<Option<T>, StorageError> {
        match self.store.get(&self.key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    pub fn read(&self) -> &T {
        &self.value
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn write(&mut self, value: T) -> CommitOutcome {
        self.value = value;
        self.commit()
    }

    pub fn write_with(&mut self, update: impl FnOnce(&T) -> T) -> CommitOutcome {
        let next = update(&self.value);
        self.write(next)
    }

    fn commit(&self) -> CommitOutcome {
        let result = serde_json::to_string(&self.value)
            .map_err(StorageError::from)
            .and_then(|raw| self.store.set(&self.key, &raw));
        match result {
            Ok(()) => CommitOutcome { persisted: true },
            Err(err) => {
                warn!("`{}` updated in memory only: {err}", self.key);
                CommitOutcome { persisted: false }
            }
        }
    }
}
