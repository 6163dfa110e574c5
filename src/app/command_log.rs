//! Begrenztes Command-Log mit Zeitstempeln (Diagnose, Tests).

use chrono::{DateTime, Utc};

use super::AppCommand;

/// Ein ausgeführter Command samt Ausführungszeitpunkt.
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    pub at: DateTime<Utc>,
    pub command: AppCommand,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Beim Überlauf wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand, at: DateTime<Utc>) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand {
            at,
            command: command.clone(),
        });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.last()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }
}
