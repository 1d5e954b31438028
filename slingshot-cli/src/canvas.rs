//! Mapping between world coordinates and screen pixels

use eframe::egui;
use slingshot_core::{DVec2, Playfield};

/// Uniform scale that fits the playfield inside a screen rect,
/// centred with letterboxing on the longer axis
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub rect: egui::Rect,
    origin: egui::Pos2,
    scale: f32,
}

impl Canvas {
    pub fn fit(available: egui::Rect, playfield: &Playfield) -> Self {
        let width = playfield.width as f32;
        let height = playfield.height as f32;
        let scale = (available.width() / width).min(available.height() / height);
        let size = egui::vec2(width * scale, height * scale);
        let rect = egui::Rect::from_center_size(available.center(), size);
        Self {
            rect,
            origin: rect.min,
            scale,
        }
    }

    pub fn to_screen(&self, point: DVec2) -> egui::Pos2 {
        self.origin + egui::vec2(point.x as f32 * self.scale, point.y as f32 * self.scale)
    }

    pub fn to_world(&self, pos: egui::Pos2) -> DVec2 {
        let rel = pos - self.origin;
        DVec2::new((rel.x / self.scale) as f64, (rel.y / self.scale) as f64)
    }

    /// World length to screen length
    pub fn length(&self, world: f64) -> f32 {
        world as f32 * self.scale
    }
}
