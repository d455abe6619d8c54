//! egui renderer for the prediction form.

mod celebration;
mod clear_prompt;
mod form_panel;
mod hotkeys;
mod result_panel;
mod status_bar;
pub mod style;

use std::time::{Duration, Instant};

use crate::egui_app::controller::{EguiController, FormMessage};
use eframe::egui::{self, Frame, Margin};

/// Repaint cadence while something is animating or a request is in flight.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    /// Input that had keyboard focus at the end of the last frame.
    focused_input: Option<&'static str>,
    /// Messages produced while rendering; dispatched once the frame is drawn.
    pending: Vec<FormMessage>,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
            focused_input: None,
            pending: Vec::new(),
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Turn a change of focused input into blur/focus messages.
    fn track_focus(&mut self, focused: Option<&'static str>) {
        if focused == self.focused_input {
            return;
        }
        if let Some(previous) = self.focused_input {
            self.pending.push(FormMessage::BlurInput(previous));
        }
        if let Some(current) = focused {
            self.pending.push(FormMessage::FocusInput(current));
        }
        self.focused_input = focused;
    }

    fn dispatch_pending(&mut self) {
        for message in std::mem::take(&mut self.pending) {
            self.controller.dispatch(message);
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        let now = Instant::now();

        self.handle_hotkeys(ctx);
        self.render_status(ctx);
        let palette = style::palette();
        let focused = egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.panel)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let focused = self.render_form(ui, now);
                        self.render_result(ui, now);
                        focused
                    })
                    .inner
            })
            .inner;
        self.track_focus(focused);
        self.render_clear_prompt(ctx);
        self.render_celebration(ctx, now);

        self.dispatch_pending();
        if self.controller.needs_repaint(Instant::now()) {
            ctx.request_repaint_after(ANIMATION_FRAME);
        }
    }
}
