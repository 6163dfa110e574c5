//! Regionsmenge (FIRs) und die aktivierte Teilmenge.

use indexmap::IndexSet;

/// Alle bekannten Regionen plus aktivierte Teilmenge.
///
/// Sichtbar sind genau die Wegpunkte aktivierter Regionen; eine leere
/// Aktivierung bedeutet keine sichtbaren Wegpunkte.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSet {
    all: IndexSet<String>,
    enabled: IndexSet<String>,
}

impl RegionSet {
    /// Leitet die Regionsmenge aus den Regionscodes der Wegpunkte ab (sortiert).
    /// Zu Beginn sind alle Regionen aktiviert.
    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut all: IndexSet<String> = codes.into_iter().map(str::to_owned).collect();
        all.sort();
        let enabled = all.clone();
        Self { all, enabled }
    }

    /// Übernimmt eine gespeicherte Aktivierung. Unbekannte Codes werden verworfen.
    pub fn restore_enabled(&mut self, stored: &[String]) {
        self.enabled = self
            .all
            .iter()
            .filter(|code| stored.contains(code))
            .cloned()
            .collect();
    }

    /// Alle bekannten Regionscodes in Anzeige-Reihenfolge.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.all.iter().map(String::as_str)
    }

    /// Anzahl bekannter Regionen.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// `true`, wenn keine Region bekannt ist.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Ist die Region aktiviert?
    pub fn is_enabled(&self, code: &str) -> bool {
        self.enabled.contains(code)
    }

    /// `true`, wenn keine Region aktiviert ist.
    pub fn none_enabled(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Aktiviert oder deaktiviert eine bekannte Region.
    ///
    /// Gibt `true` zurück, wenn sich die Aktivierung geändert hat.
    pub fn set_enabled(&mut self, code: &str, enabled: bool) -> bool {
        if !self.all.contains(code) {
            return false;
        }
        if enabled {
            let changed = self.enabled.insert(code.to_owned());
            self.enabled.sort_by(|a, b| self.all.get_index_of(a).cmp(&self.all.get_index_of(b)));
            changed
        } else {
            self.enabled.shift_remove(code)
        }
    }

    /// Aktiviert oder deaktiviert alle Regionen.
    pub fn set_all(&mut self, enabled: bool) -> bool {
        let before = self.enabled.len();
        if enabled {
            self.enabled = self.all.clone();
        } else {
            self.enabled.clear();
        }
        before != self.enabled.len()
    }

    /// Aktivierte Codes zum Persistieren.
    pub fn enabled_codes(&self) -> Vec<String> {
        self.enabled.iter().cloned().collect()
    }
}
