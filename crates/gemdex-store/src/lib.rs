use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("key-value store unavailable: {0}")]
    Unavailable(String),

    #[error("key '{key}' holds the wrong kind of value for this operation")]
    WrongType { key: String },
}

// Minimal client surface the cache layer relies on. Per-key operations are
// atomic; ranges come back in insertion order (front to back).
pub trait KeyValueStore {
    fn list_prepend(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn list_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError>;
    fn hash_get_all(&self, key: &str) -> Result<BTreeMap<String, String>, StoreError>;
}

#[derive(Debug, Clone)]
enum Entry {
    List(VecDeque<String>),
    Hash(BTreeMap<String, String>),
}

// In-process store client. Clones share the same backing state, like handles
// onto one connection; release() disconnects every handle.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<Option<HashMap<String, Entry>>>>,
}

impl MemoryStore {
    pub fn connect() -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(HashMap::new()))),
        }
    }

    pub fn release(&self) {
        if let Ok(mut state) = self.state.lock() {
            *state = None;
        }
    }

    pub fn list_append(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.guard()?;
        let entries = connected(&mut guard)?;
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::List(VecDeque::new()))
        {
            Entry::List(items) => {
                items.push_back(value.to_string());
                Ok(())
            }
            Entry::Hash(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    pub fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.guard()?;
        let entries = connected(&mut guard)?;
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Hash(BTreeMap::new()))
        {
            Entry::Hash(fields) => {
                fields.insert(field.to_string(), value.to_string());
                Ok(())
            }
            Entry::List(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, Option<HashMap<String, Entry>>>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn list_prepend(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.guard()?;
        let entries = connected(&mut guard)?;
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::List(VecDeque::new()))
        {
            Entry::List(items) => {
                items.push_front(value.to_string());
                Ok(())
            }
            Entry::Hash(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn list_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        let mut guard = self.guard()?;
        let entries = connected(&mut guard)?;
        let Some(entry) = entries.get(key) else {
            return Ok(Vec::new());
        };
        let Entry::List(items) = entry else {
            return Err(StoreError::WrongType {
                key: key.to_string(),
            });
        };

        // Redis index semantics: negative counts from the end, bounds are
        // inclusive, out-of-range indices clamp.
        let len = items.len() as i64;
        let start = if start < 0 { (len + start).max(0) } else { start };
        let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
        if len == 0 || start > stop || start >= len || stop < 0 {
            return Ok(Vec::new());
        }

        Ok(items
            .iter()
            .skip(start as usize)
            .take((stop - start + 1) as usize)
            .cloned()
            .collect())
    }

    fn hash_get_all(&self, key: &str) -> Result<BTreeMap<String, String>, StoreError> {
        let mut guard = self.guard()?;
        let entries = connected(&mut guard)?;
        match entries.get(key) {
            None => Ok(BTreeMap::new()),
            Some(Entry::Hash(fields)) => Ok(fields.clone()),
            Some(Entry::List(_)) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }
}

fn connected<'a>(
    guard: &'a mut MutexGuard<'_, Option<HashMap<String, Entry>>>,
) -> Result<&'a mut HashMap<String, Entry>, StoreError> {
    guard
        .as_mut()
        .ok_or_else(|| StoreError::Unavailable("store client released".to_string()))
}

#[cfg(test)]
mod tests;
