use std::time::Instant;

use super::*;
use eframe::egui::{self, Align2, Color32, FontId, Id, LayerId, Order};

/// How far a sparkle drifts upwards over its lifetime, in points.
const SPARKLE_RISE: f32 = 60.0;

impl EguiApp {
    pub(super) fn render_celebration(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(celebration) = self.controller.ui.decorations.celebration.as_ref() else {
            return;
        };
        let screen = ctx.viewport_rect();
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("celebration")));
        for sparkle in &celebration.sparkles {
            let Some(progress) = sparkle.progress(celebration.started, now) else {
                continue;
            };
            let pos = egui::pos2(
                screen.left() + sparkle.x * screen.width(),
                screen.top() + sparkle.y * screen.height() - SPARKLE_RISE * progress,
            );
            let alpha = 1.0 - progress;
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                sparkle.glyph,
                FontId::proportional(20.0 + 12.0 * progress),
                Color32::WHITE.gamma_multiply(alpha),
            );
        }
    }
}
