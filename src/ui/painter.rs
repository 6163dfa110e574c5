//! Zeichnet eine `RenderScene` mit dem egui-Painter.

use crate::shared::{FeedbackKind, MarkerStyle, RenderScene};

fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

fn color_with_alpha(rgba: [f32; 4], alpha: f32) -> egui::Color32 {
    color([rgba[0], rgba[1], rgba[2], rgba[3] * alpha.clamp(0.0, 1.0)])
}

/// Zeichnet Boundaries, Wegpunkte und Feedback-Pulse in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let origin = rect.min.to_vec2();
    let to_pos = |p: [f32; 2]| egui::pos2(p[0], p[1]) + origin;
    let style = &scene.style;

    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(16, 20, 28));

    let stroke = egui::Stroke::new(style.boundary_stroke_px, color(style.boundary_color));
    for polyline in &scene.boundaries {
        let mut points: Vec<egui::Pos2> = polyline.points.iter().map(|&p| to_pos(p)).collect();
        if polyline.closed {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        painter.add(egui::Shape::line(points, stroke));
    }

    let radius = style.waypoint_radius_px;
    for marker in &scene.markers {
        let center = to_pos(marker.position);
        match marker.style {
            MarkerStyle::Normal => {
                painter.circle_filled(center, radius, color(style.waypoint_color));
            }
            MarkerStyle::RevealedTarget => {
                painter.circle_filled(center, radius * 1.5, color(style.target_color));
                painter.circle_stroke(
                    center,
                    radius * 3.0,
                    egui::Stroke::new(2.0, color(style.target_color)),
                );
            }
        }
    }

    for flash in &scene.flashes {
        let base = match flash.kind {
            FeedbackKind::Success => style.success_color,
            FeedbackKind::Failure => style.failure_color,
        };
        let center = to_pos(flash.position);
        // Ring wächst, während er ausblendet
        let grow = 1.0 + (1.0 - flash.remaining) * 2.0;
        painter.circle_stroke(
            center,
            radius * 2.0 * grow,
            egui::Stroke::new(3.0, color_with_alpha(base, flash.remaining)),
        );
    }

    if !scene.has_content() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Keine Daten geladen",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
    }
}
