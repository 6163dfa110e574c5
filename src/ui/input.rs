//! Canvas-Input: egui-Events → `InputEvent` → Gesten-Erkennung → AppIntent.
//!
//! Die Maus nutzt Pointer-ID 0, Touch-IDs werden um 1 verschoben. Enthält
//! ein Frame Touch-Events, werden die daraus synthetisierten Maus-Events
//! desselben Frames verworfen.

use chrono::{DateTime, Utc};
use glam::DVec2;

use crate::app::{AppIntent, GestureConfig, GestureRecognizer, InputEvent};

/// Pointer-ID der Maus.
pub const MOUSE_POINTER_ID: u64 = 0;

fn to_canvas(pos: egui::Pos2, canvas: egui::Rect) -> DVec2 {
    DVec2::new((pos.x - canvas.min.x) as f64, (pos.y - canvas.min.y) as f64)
}

/// Übersetzt die rohen egui-Events eines Frames in `InputEvent`s.
///
/// Neue Pointer zählen nur, wenn sie innerhalb des Canvas aufsetzen.
/// Ein abgebrochener Touch wird wie ein Loslassen behandelt.
pub fn translate_events(events: &[egui::Event], canvas: egui::Rect) -> Vec<InputEvent> {
    let has_touch = events
        .iter()
        .any(|event| matches!(event, egui::Event::Touch { .. }));

    let mut translated = Vec::new();
    for event in events {
        match event {
            egui::Event::Touch { id, phase, pos, .. } => {
                let id = id.0.saturating_add(1);
                let pos_canvas = to_canvas(*pos, canvas);
                match phase {
                    egui::TouchPhase::Start => {
                        if canvas.contains(*pos) {
                            translated.push(InputEvent::PointerDown { id, pos: pos_canvas });
                        }
                    }
                    egui::TouchPhase::Move => {
                        translated.push(InputEvent::PointerMove { id, pos: pos_canvas })
                    }
                    egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                        translated.push(InputEvent::PointerUp { id, pos: pos_canvas })
                    }
                }
            }
            _ if has_touch => {}
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                let pos_canvas = to_canvas(*pos, canvas);
                if *pressed {
                    if canvas.contains(*pos) {
                        translated.push(InputEvent::PointerDown {
                            id: MOUSE_POINTER_ID,
                            pos: pos_canvas,
                        });
                    }
                } else {
                    translated.push(InputEvent::PointerUp {
                        id: MOUSE_POINTER_ID,
                        pos: pos_canvas,
                    });
                }
            }
            egui::Event::PointerMoved(pos) => translated.push(InputEvent::PointerMove {
                id: MOUSE_POINTER_ID,
                pos: to_canvas(*pos, canvas),
            }),
            _ => {}
        }
    }
    translated
}

/// Input-Zustand des Canvas (Gesten über Frames hinweg).
#[derive(Debug, Default)]
pub struct CanvasInput {
    gestures: GestureRecognizer,
}

impl CanvasInput {
    /// Erstellt den Input-Zustand mit den angegebenen Schwellwerten.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            gestures: GestureRecognizer::new(config),
        }
    }

    /// Sammelt alle Canvas-Intents dieses Frames.
    ///
    /// Das Mausrad wird nur ausgewertet, wenn der Zeiger über dem Canvas steht;
    /// egui liefert positive Werte beim Hochscrollen, daher das Vorzeichen.
    pub fn collect_canvas_intents(
        &mut self,
        ui: &egui::Ui,
        canvas: egui::Rect,
        now: DateTime<Utc>,
    ) -> Vec<AppIntent> {
        let (events, scroll_y, hover_pos) = ui.input(|i| {
            (
                i.events.clone(),
                i.smooth_scroll_delta.y,
                i.pointer.hover_pos(),
            )
        });

        let mut input_events = translate_events(&events, canvas);
        if let Some(hover) = hover_pos.filter(|pos| canvas.contains(*pos)) {
            if scroll_y != 0.0 {
                input_events.push(InputEvent::Wheel {
                    pos: to_canvas(hover, canvas),
                    delta_y: -scroll_y as f64,
                });
            }
        }

        input_events
            .into_iter()
            .flat_map(|event| self.gestures.handle(event, now))
            .collect()
    }

    /// `true`, solange eine Geste (Pan/Pinch) läuft.
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(400.0, 300.0))
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn touch(id: u64, phase: egui::TouchPhase, x: f32, y: f32) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(id),
            phase,
            pos: egui::pos2(x, y),
            force: None,
        }
    }

    #[test]
    fn mouse_positions_are_canvas_relative() {
        let events = translate_events(&[button(150.0, 80.0, true)], canvas());

        assert_eq!(
            events,
            vec![InputEvent::PointerDown {
                id: MOUSE_POINTER_ID,
                pos: DVec2::new(50.0, 30.0)
            }]
        );
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let events = translate_events(&[button(10.0, 10.0, true)], canvas());

        assert!(events.is_empty());
    }

    #[test]
    fn touch_frames_drop_synthesized_mouse_events() {
        let events = translate_events(
            &[
                touch(0, egui::TouchPhase::Start, 200.0, 100.0),
                button(200.0, 100.0, true),
                egui::Event::PointerMoved(egui::pos2(200.0, 100.0)),
            ],
            canvas(),
        );

        assert_eq!(
            events,
            vec![InputEvent::PointerDown {
                id: 1,
                pos: DVec2::new(100.0, 50.0)
            }]
        );
    }
}
