//! Key/string persistence: session snapshots and the title registry.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::info;

/// Registry key holding the ordered list of active session titles.
pub const TITLE_REGISTRY_KEY: &str = "battlegrid:titles";
/// Active sessions beyond this count evict the oldest.
pub const MAX_TITLES: usize = 5;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No value stored under the requested title.
    NotFound(String),
    /// A stored payload failed to parse.
    Corrupt(String),
    /// Underlying store I/O failure.
    Io(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotFound(title) => write!(f, "no session stored under '{}'", title),
            SessionError::Corrupt(reason) => {
                write!(f, "stored session data is unreadable: {}", reason)
            }
            SessionError::Io(reason) => write!(f, "session store failure: {}", reason),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err.to_string())
    }
}

/// Opaque key/string store the game persists matches through. Writes simply
/// overwrite; exactly one process writes a given store at a time.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
    fn delete(&mut self, key: &str) -> Result<(), SessionError>;
}

/// In-memory store for tests and throwaway games.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), SessionError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON file holding the whole key map. The file
/// is read and rewritten on every operation, which is plenty for one
/// interactive match at a time.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, String>, SessionError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&text).map_err(|e| SessionError::Corrupt(e.to_string()))
    }

    fn store(&self, entries: &HashMap<String, String>) -> Result<(), SessionError> {
        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn delete(&mut self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.load()?;
        entries.remove(key);
        self.store(&entries)
    }
}

/// Ordered list of active session titles, oldest first.
pub fn titles(store: &dyn SessionStore) -> Result<Vec<String>, SessionError> {
    match store.get(TITLE_REGISTRY_KEY)? {
        Some(text) => serde_json::from_str(&text).map_err(|e| SessionError::Corrupt(e.to_string())),
        None => Ok(Vec::new()),
    }
}

fn save_titles(store: &mut dyn SessionStore, titles: &[String]) -> Result<(), SessionError> {
    let text =
        serde_json::to_string(titles).map_err(|e| SessionError::Corrupt(e.to_string()))?;
    store.set(TITLE_REGISTRY_KEY, &text)
}

/// Register a session title, evicting the oldest (and its snapshot) when
/// the registry exceeds [`MAX_TITLES`].
pub fn register_title(store: &mut dyn SessionStore, title: &str) -> Result<(), SessionError> {
    let mut list = titles(store)?;
    list.retain(|t| t != title);
    list.push(title.to_string());
    while list.len() > MAX_TITLES {
        let evicted = list.remove(0);
        store.delete(&evicted)?;
        info!("evicted oldest session '{}'", evicted);
    }
    save_titles(store, &list)
}

/// Drop a finished or abandoned session title from the registry.
pub fn remove_title(store: &mut dyn SessionStore, title: &str) -> Result<(), SessionError> {
    let mut list = titles(store)?;
    list.retain(|t| t != title);
    save_titles(store, &list)
}

/// Load the snapshot stored under `title`; absence is `NotFound`.
pub fn load_snapshot(store: &dyn SessionStore, title: &str) -> Result<String, SessionError> {
    store
        .get(title)?
        .ok_or_else(|| SessionError::NotFound(title.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_store_round_trips_and_deletes() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), Ok(None));
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
        store.delete("k").unwrap();
        assert_eq!(store.get("k"), Ok(None));
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(
            load_snapshot(&store, "ghost"),
            Err(SessionError::NotFound("ghost".to_string()))
        );
    }

    #[test]
    fn registry_keeps_insertion_order() {
        let mut store = MemoryStore::new();
        register_title(&mut store, "first").unwrap();
        register_title(&mut store, "second").unwrap();
        assert_eq!(titles(&store), Ok(vec!["first".into(), "second".into()]));

        remove_title(&mut store, "first").unwrap();
        assert_eq!(titles(&store), Ok(vec!["second".to_string()]));
    }

    #[test]
    fn re_registering_moves_a_title_to_newest() {
        let mut store = MemoryStore::new();
        register_title(&mut store, "a").unwrap();
        register_title(&mut store, "b").unwrap();
        register_title(&mut store, "a").unwrap();
        assert_eq!(titles(&store), Ok(vec!["b".into(), "a".into()]));
    }

    #[test]
    fn sixth_title_evicts_the_oldest_and_its_snapshot() {
        let mut store = MemoryStore::new();
        for title in ["one", "two", "three", "four", "five"] {
            store.set(title, "snapshot").unwrap();
            register_title(&mut store, title).unwrap();
        }
        store.set("six", "snapshot").unwrap();
        register_title(&mut store, "six").unwrap();

        let list = titles(&store).unwrap();
        assert_eq!(list.len(), MAX_TITLES);
        assert_eq!(list.first().map(String::as_str), Some("two"));
        assert_eq!(list.last().map(String::as_str), Some("six"));
        assert_eq!(store.get("one"), Ok(None));
        assert_eq!(store.get("two"), Ok(Some("snapshot".to_string())));
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = std::env::temp_dir().join(format!(
            "battlegrid-store-test-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        {
            let mut store = FileStore::new(&path);
            store.set("match", "{\"x\":1}").unwrap();
        }
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("match"), Ok(Some("{\"x\":1}".to_string())));
        assert_eq!(reopened.get("other"), Ok(None));

        let _ = fs::remove_file(&path);
    }
}
