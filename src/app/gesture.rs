//! Gesten-Erkennung: rohe Pointer-Events → Pan, Zoom oder Tap-Intents.
//!
//! Ein Pointer unter der Drag-Schwelle wird beim Loslassen zum Tap
//! (sofern der Cooldown abgelaufen ist). Darüber wird gepannt. Zwei
//! Pointer zoomen per Pinch; das Mausrad zoomt exponentiell.

use chrono::{DateTime, TimeDelta, Utc};
use glam::DVec2;
use indexmap::IndexMap;

use super::AppIntent;
use crate::shared::TrainerOptions;

/// Geschlossene Menge roher Eingabe-Events (Screen-Pixel relativ zum Canvas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { id: u64, pos: DVec2 },
    PointerMove { id: u64, pos: DVec2 },
    PointerUp { id: u64, pos: DVec2 },
    Wheel { pos: DVec2, delta_y: f64 },
}

/// Schwellwerte der Gesten-Erkennung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub drag_threshold_px: f64,
    pub tap_cooldown: TimeDelta,
    pub wheel_zoom_k: f64,
}

impl GestureConfig {
    /// Übernimmt die Schwellwerte aus den Laufzeit-Optionen.
    pub fn from_options(options: &TrainerOptions) -> Self {
        Self {
            drag_threshold_px: options.drag_threshold_px,
            tap_cooldown: options.tap_cooldown(),
            wheel_zoom_k: options.wheel_zoom_k,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from_options(&TrainerOptions::default())
    }
}

#[derive(Debug, Clone, Copy)]
struct PointerTrack {
    start: DVec2,
    last: DVec2,
    /// Schwelle überschritten oder Teil eines Pinch: kein Tap mehr
    dragged: bool,
}

/// Zustandsmaschine über dem Pointer-Strom.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    /// Aktive Pointer in Reihenfolge des Aufsetzens
    pointers: IndexMap<u64, PointerTrack>,
    /// Letzte Pinch-Distanz (nur bei zwei oder mehr Pointern)
    pinch_distance: Option<f64>,
    last_tap_at: Option<DateTime<Utc>>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Anzahl aktuell gedrückter Pointer.
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// `true`, solange gepannt oder gepincht wird.
    pub fn is_dragging(&self) -> bool {
        self.pointers.values().any(|track| track.dragged)
    }

    /// Verarbeitet ein Event und liefert die resultierenden Intents.
    pub fn handle(&mut self, event: InputEvent, now: DateTime<Utc>) -> Vec<AppIntent> {
        if !event_is_finite(&event) {
            return Vec::new();
        }
        match event {
            InputEvent::PointerDown { id, pos } => self.pointer_down(id, pos),
            InputEvent::PointerMove { id, pos } => self.pointer_move(id, pos),
            InputEvent::PointerUp { id, pos } => self.pointer_up(id, pos, now),
            InputEvent::Wheel { pos, delta_y } => self.wheel(pos, delta_y),
        }
    }

    fn pointer_down(&mut self, id: u64, pos: DVec2) -> Vec<AppIntent> {
        self.pointers.insert(
            id,
            PointerTrack {
                start: pos,
                last: pos,
                dragged: false,
            },
        );
        if self.pointers.len() >= 2 {
            for track in self.pointers.values_mut() {
                track.dragged = true;
            }
            self.pinch_distance = self.pinch_pair().map(|(a, b)| a.distance(b));
        }
        Vec::new()
    }

    fn pointer_move(&mut self, id: u64, pos: DVec2) -> Vec<AppIntent> {
        let Some(track) = self.pointers.get_mut(&id) else {
            return Vec::new();
        };
        let previous = track.last;
        track.last = pos;

        if self.pointers.len() >= 2 {
            return self.pinch_move();
        }

        let track = match self.pointers.get_mut(&id) {
            Some(track) => track,
            None => return Vec::new(),
        };
        if !track.dragged {
            if track.start.distance(pos) <= self.config.drag_threshold_px {
                return Vec::new();
            }
            track.dragged = true;
            // Beim Überschreiten der Schwelle den bisherigen Weg nachholen
            return vec![AppIntent::CameraPan {
                delta: pos - track.start,
            }];
        }
        vec![AppIntent::CameraPan {
            delta: pos - previous,
        }]
    }

    fn pinch_move(&mut self) -> Vec<AppIntent> {
        let Some((a, b)) = self.pinch_pair() else {
            return Vec::new();
        };
        let distance = a.distance(b);
        let previous = self.pinch_distance.replace(distance);
        match previous {
            Some(previous) if previous > 0.0 && distance > 0.0 && previous != distance => {
                vec![AppIntent::CameraZoom {
                    factor: distance / previous,
                    anchor: (a + b) * 0.5,
                }]
            }
            _ => Vec::new(),
        }
    }

    fn pointer_up(&mut self, id: u64, pos: DVec2, now: DateTime<Utc>) -> Vec<AppIntent> {
        let Some(track) = self.pointers.shift_remove(&id) else {
            return Vec::new();
        };

        match self.pointers.len() {
            0 => {
                self.pinch_distance = None;
                if track.dragged || !self.cooldown_elapsed(now) {
                    return Vec::new();
                }
                self.last_tap_at = Some(now);
                vec![AppIntent::TapRequested { screen_pos: pos }]
            }
            1 => {
                // Zurück zum Ein-Finger-Pan am verbleibenden Finger
                self.pinch_distance = None;
                if let Some(remaining) = self.pointers.values_mut().next() {
                    remaining.start = remaining.last;
                    remaining.dragged = true;
                }
                Vec::new()
            }
            _ => {
                self.pinch_distance = self.pinch_pair().map(|(a, b)| a.distance(b));
                Vec::new()
            }
        }
    }

    fn wheel(&mut self, pos: DVec2, delta_y: f64) -> Vec<AppIntent> {
        if delta_y == 0.0 {
            return Vec::new();
        }
        vec![AppIntent::CameraZoom {
            factor: (-delta_y * self.config.wheel_zoom_k).exp(),
            anchor: pos,
        }]
    }

    /// Positionen der zwei zuletzt aufgesetzten Pointer.
    fn pinch_pair(&self) -> Option<(DVec2, DVec2)> {
        let count = self.pointers.len();
        if count < 2 {
            return None;
        }
        let (_, a) = self.pointers.get_index(count - 2)?;
        let (_, b) = self.pointers.get_index(count - 1)?;
        Some((a.last, b.last))
    }

    fn cooldown_elapsed(&self, now: DateTime<Utc>) -> bool {
        self.last_tap_at
            .is_none_or(|last| now - last >= self.config.tap_cooldown)
    }
}

fn event_is_finite(event: &InputEvent) -> bool {
    match event {
        InputEvent::PointerDown { pos, .. }
        | InputEvent::PointerMove { pos, .. }
        | InputEvent::PointerUp { pos, .. } => pos.is_finite(),
        InputEvent::Wheel { pos, delta_y } => pos.is_finite() && delta_y.is_finite(),
    }
}
