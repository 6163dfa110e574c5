//! Key-Value-Stores: In-Memory (Tests, Fallback) und JSON-Datei.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Fehler eines Key-Value-Stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store-Datei {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialisierung fehlgeschlagen: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store nicht verfügbar: {0}")]
    Unavailable(String),
}

/// Minimaler String-Key-Value-Store.
pub trait KeyValueStore {
    /// Liest einen Wert; `Ok(None)`, wenn der Schlüssel fehlt.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Schreibt einen Wert synchron.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store im Arbeitsspeicher. Klone teilen sich denselben Inhalt.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store, dessen Schreibzugriffe immer fehlschlagen (volles Kontingent).
    pub fn read_only() -> Self {
        Self {
            entries: Arc::default(),
            read_only: true,
        }
    }

    /// Anzahl gespeicherter Einträge.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// `true`, wenn nichts gespeichert ist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable("Store ist schreibgeschützt".into()));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store als JSON-Objekt in einer Datei; jeder Schreibzugriff schreibt die
/// ganze Datei neu.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Öffnet den Store. Eine fehlende Datei ergibt einen leeren Store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.flush() {
            // Cache nicht vom Dateiinhalt abweichen lassen
            match previous {
                Some(old) => self.entries.insert(key.to_owned(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
