//! Persistenz der Lernfortschritte: Key-Value-Stores und Repository.
//!
//! Schreibfehler werden geloggt und verschluckt; der In-Memory-Zustand
//! bleibt für die laufende Sitzung maßgeblich.

pub mod repository;
pub mod store;

pub use repository::ProgressRepository;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
