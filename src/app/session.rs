//! Quiz-Session: aktuelles Ziel, Fehlversuche, Reveal-Modus und Feedback-Pulse.
//!
//! Die Session kennt nur IDs; Statistiken und Auswahl liegen im Scheduler.

use chrono::{DateTime, TimeDelta, Utc};

use crate::shared::FeedbackKind;

/// Zustand der Quiz-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Kein Ziel (keine Region aktiv, keine sichtbaren Wegpunkte oder Ladefehler)
    Idle,
    /// Ziel wird abgefragt
    Prompting,
    /// Ziel blinkt nach wiederholten Fehlversuchen
    Revealing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RevealState {
    visible: bool,
    next_toggle: DateTime<Utc>,
}

/// Kurzlebiger Feedback-Puls an einem Wegpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackFlash {
    pub waypoint_id: String,
    pub kind: FeedbackKind,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl FeedbackFlash {
    /// Verbleibender Anteil der Anzeigedauer in `[0, 1]`.
    pub fn remaining(&self, now: DateTime<Utc>) -> f32 {
        let total = (self.expires_at - self.started_at).num_milliseconds();
        if total <= 0 {
            return 0.0;
        }
        let left = (self.expires_at - now).num_milliseconds();
        (left as f32 / total as f32).clamp(0.0, 1.0)
    }
}

/// Interaktions-Zustandsmaschine des Quiz.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    current_target: Option<String>,
    consecutive_wrong: u32,
    reveal: Option<RevealState>,
    flashes: Vec<FeedbackFlash>,
}

impl QuizSession {
    /// Erstellt eine Session im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.current_target, &self.reveal) {
            (None, _) => SessionPhase::Idle,
            (Some(_), Some(_)) => SessionPhase::Revealing,
            (Some(_), None) => SessionPhase::Prompting,
        }
    }

    /// ID des aktuell abgefragten Wegpunkts.
    pub fn current_target(&self) -> Option<&str> {
        self.current_target.as_deref()
    }

    /// Fehlversuche in Folge auf dem aktuellen Ziel.
    pub fn consecutive_wrong(&self) -> u32 {
        self.consecutive_wrong
    }

    pub fn is_revealing(&self) -> bool {
        self.current_target.is_some() && self.reveal.is_some()
    }

    /// Sichtbare Blink-Phase im Reveal-Modus.
    pub fn reveal_visible(&self) -> bool {
        self.reveal.is_some_and(|reveal| reveal.visible)
    }

    /// Setzt ein neues Ziel. Zähler und Reveal-Modus werden zurückgesetzt.
    pub fn set_target(&mut self, waypoint_id: String) {
        self.current_target = Some(waypoint_id);
        self.consecutive_wrong = 0;
        self.reveal = None;
    }

    /// Wechselt nach `Idle`. Laufende Feedback-Pulse dürfen auslaufen.
    pub fn clear_target(&mut self) {
        self.current_target = None;
        self.consecutive_wrong = 0;
        self.reveal = None;
    }

    /// Verbucht eine richtige Antwort und gibt die Fehlversuche davor zurück.
    pub fn register_correct(&mut self) -> u32 {
        let wrongs_before = self.consecutive_wrong;
        self.consecutive_wrong = 0;
        self.reveal = None;
        wrongs_before
    }

    /// Verbucht eine falsche Antwort.
    ///
    /// Gibt `true` zurück, wenn damit der Reveal-Modus beginnt.
    pub fn register_wrong(
        &mut self,
        reveal_after: u32,
        now: DateTime<Utc>,
        blink: TimeDelta,
    ) -> bool {
        self.consecutive_wrong += 1;
        if self.reveal.is_none() && self.consecutive_wrong >= reveal_after.max(1) {
            self.reveal = Some(RevealState {
                visible: true,
                next_toggle: now + blink,
            });
            return true;
        }
        false
    }

    /// Startet einen Feedback-Puls.
    pub fn push_flash(
        &mut self,
        waypoint_id: &str,
        kind: FeedbackKind,
        now: DateTime<Utc>,
        duration: TimeDelta,
    ) {
        self.flashes.retain(|flash| flash.waypoint_id != waypoint_id);
        self.flashes.push(FeedbackFlash {
            waypoint_id: waypoint_id.to_owned(),
            kind,
            started_at: now,
            expires_at: now + duration,
        });
    }

    /// Aktive Feedback-Pulse.
    pub fn flashes(&self) -> &[FeedbackFlash] {
        &self.flashes
    }

    /// Schreibt Blink-Phase und Puls-Ablauf bis `now` fort.
    ///
    /// Gibt `true` zurück, wenn sich etwas Sichtbares geändert hat.
    pub fn tick(&mut self, now: DateTime<Utc>, blink: TimeDelta) -> bool {
        let mut changed = false;

        if let Some(reveal) = self.reveal.as_mut() {
            if now >= reveal.next_toggle && blink > TimeDelta::zero() {
                let blink_ms = blink.num_milliseconds();
                let elapsed = (now - reveal.next_toggle).num_milliseconds();
                let toggles = elapsed / blink_ms + 1;
                if toggles % 2 == 1 {
                    reveal.visible = !reveal.visible;
                }
                reveal.next_toggle += TimeDelta::milliseconds(toggles * blink_ms);
                changed = true;
            }
        }

        let before = self.flashes.len();
        self.flashes.retain(|flash| flash.expires_at > now);
        changed |= self.flashes.len() != before;

        changed
    }

    /// Frühester anstehender Timer (Blinken oder Puls-Ablauf).
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        let reveal = self.reveal.map(|reveal| reveal.next_toggle);
        self.flashes
            .iter()
            .map(|flash| flash.expires_at)
            .chain(reveal)
            .min()
    }
}
