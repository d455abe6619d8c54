use std::time::Instant;

use super::style;
use super::*;
use crate::egui_app::state::{RevealStage, UiState};
use crate::prediction::ModelKind;
use crate::prediction::fields::{COMMON_FIELDS, CommonField, InputKind};
use eframe::egui::{self, Id, Order, Rect, RichText, Stroke, StrokeKind};

const LABEL_WIDTH: f32 = 170.0;
const INPUT_WIDTH: f32 = 240.0;
const MODEL_PLACEHOLDER: &str = "-- Select a model --";
const CHOICE_PLACEHOLDER: &str = "Select...";

/// Per-frame bookkeeping while walking the form.
struct FormPass<'a> {
    state: &'a UiState,
    now: Instant,
    messages: &'a mut Vec<FormMessage>,
    focused: Option<&'static str>,
    tooltip_anchor: Option<Rect>,
}

impl FormPass<'_> {
    fn track(&mut self, key: &'static str, response: &egui::Response, focused: bool) {
        if focused {
            self.focused = Some(key);
        }
        if self.state.decorations.tooltip.is_some_and(|tip| tip.field == key) {
            self.tooltip_anchor = Some(response.rect);
        }
    }
}

impl EguiApp {
    /// Draw the selector and the visible groups; returns the focused input.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui, now: Instant) -> Option<&'static str> {
        let mut pass = FormPass {
            state: &self.controller.ui,
            now,
            messages: &mut self.pending,
            focused: None,
            tooltip_anchor: None,
        };
        let palette = style::palette();
        ui.heading(RichText::new("Video performance prediction").color(palette.text));
        ui.add_space(8.0);
        render_model_selector(ui, &mut pass);

        let visible = pass.state.form.visible;
        if visible.common {
            ui.add_space(12.0);
            with_reveal(ui, &mut pass, RevealStage::Common, render_common_group);
        }
        if let Some(model) = visible.model {
            ui.add_space(12.0);
            with_reveal(ui, &mut pass, RevealStage::ModelGroup, |ui, pass| {
                render_model_group(ui, pass, model)
            });
        }
        if visible.submit {
            ui.add_space(12.0);
            let enabled = self.controller.can_submit();
            let in_flight = self.controller.is_prediction_in_flight();
            with_reveal(ui, &mut pass, RevealStage::Submit, |ui, pass| {
                ui.horizontal(|ui| {
                    let label = if in_flight { "Predicting..." } else { "Get prediction" };
                    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                        pass.messages.push(FormMessage::Submit);
                    }
                    if in_flight {
                        ui.add(egui::Spinner::new());
                    }
                });
            });
        }
        render_tooltip(ui.ctx(), &pass);
        pass.focused
    }
}

fn with_reveal(
    ui: &mut egui::Ui,
    pass: &mut FormPass<'_>,
    stage: RevealStage,
    add_contents: impl FnOnce(&mut egui::Ui, &mut FormPass<'_>),
) {
    let opacity = pass
        .state
        .decorations
        .reveal
        .map_or(1.0, |reveal| reveal.opacity(stage, pass.now));
    ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        add_contents(ui, pass);
    });
}

fn render_model_selector(ui: &mut egui::Ui, pass: &mut FormPass<'_>) {
    let current = pass.state.form.selected_model;
    let mut selection = current;
    ui.horizontal(|ui| {
        ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Model"));
        let selected_text = current.map_or(MODEL_PLACEHOLDER, ModelKind::label);
        egui::ComboBox::from_id_salt("model_select")
            .selected_text(selected_text)
            .width(INPUT_WIDTH)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selection, None, MODEL_PLACEHOLDER);
                for model in ModelKind::ALL {
                    ui.selectable_value(&mut selection, Some(model), model.label());
                }
            });
    });
    if selection != current {
        pass.messages.push(FormMessage::SelectModel(selection));
    }
}

fn render_common_group(ui: &mut egui::Ui, pass: &mut FormPass<'_>) {
    group_frame(ui, "Video details", |ui| {
        for field in &COMMON_FIELDS {
            render_common_field(ui, pass, field);
        }
    });
}

fn render_common_field(ui: &mut egui::Ui, pass: &mut FormPass<'_>, field: &'static CommonField) {
    let value = pass.state.form.field_value(field.name).to_owned();
    ui.horizontal(|ui| {
        ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(field.label));
        let edited = match field.kind {
            InputKind::Choice(options) => choice_input(ui, pass, field, options, &value),
            InputKind::Number | InputKind::Text => {
                text_input(ui, pass, field.name, field.hint, value)
            }
        };
        if let Some(value) = edited {
            pass.messages.push(FormMessage::EditField {
                name: field.name,
                value,
            });
        }
    });
}

fn render_model_group(ui: &mut egui::Ui, pass: &mut FormPass<'_>, model: ModelKind) {
    group_frame(ui, model.label(), |ui| {
        for &(field, id) in model.controls() {
            let value = pass.state.form.control_value(id).to_owned();
            ui.horizontal(|ui| {
                ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(field.label()));
                if let Some(value) = text_input(ui, pass, id, "e.g. 0", value) {
                    pass.messages.push(FormMessage::EditControl { id, value });
                }
            });
        }
    });
}

/// Single-line input; returns the new value when it was edited this frame.
fn text_input(
    ui: &mut egui::Ui,
    pass: &mut FormPass<'_>,
    key: &'static str,
    hint: &str,
    mut value: String,
) -> Option<String> {
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .id_salt(key)
            .hint_text(hint)
            .desired_width(INPUT_WIDTH),
    );
    paint_highlight(ui, pass, key, &response);
    pass.track(key, &response, response.has_focus());
    response.changed().then_some(value)
}

fn choice_input(
    ui: &mut egui::Ui,
    pass: &mut FormPass<'_>,
    field: &'static CommonField,
    options: &'static [(&'static str, &'static str)],
    current: &str,
) -> Option<String> {
    let mut selected = current.to_owned();
    let selected_text = options
        .iter()
        .find(|(value, _)| *value == current)
        .map_or(CHOICE_PLACEHOLDER, |(_, label)| *label);
    let inner = egui::ComboBox::from_id_salt(field.name)
        .selected_text(selected_text)
        .width(INPUT_WIDTH)
        .show_ui(ui, |ui| {
            for (value, label) in options {
                ui.selectable_value(&mut selected, (*value).to_owned(), *label);
            }
        });
    let open = inner.inner.is_some();
    paint_highlight(ui, pass, field.name, &inner.response);
    pass.track(field.name, &inner.response, open || inner.response.has_focus());
    (selected != current).then_some(selected)
}

fn paint_highlight(ui: &egui::Ui, pass: &FormPass<'_>, key: &str, response: &egui::Response) {
    if let Some(highlight) = pass.state.decorations.highlight(key, pass.now) {
        ui.painter().rect_stroke(
            response.rect.expand(1.0),
            3.0,
            style::highlight_stroke(highlight),
            StrokeKind::Outside,
        );
    }
}

fn group_frame(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    let palette = style::palette();
    style::group_frame().show(ui, |ui| {
        ui.label(RichText::new(title).color(palette.accent).strong());
        ui.add_space(6.0);
        add_contents(ui);
    });
}

fn render_tooltip(ctx: &egui::Context, pass: &FormPass<'_>) {
    let (Some(tooltip), Some(anchor)) = (pass.state.decorations.tooltip, pass.tooltip_anchor)
    else {
        return;
    };
    let opacity = if pass.state.decorations.settings.animations {
        tooltip.opacity(pass.now)
    } else {
        1.0
    };
    if opacity <= 0.0 {
        return;
    }
    let palette = style::palette();
    egui::Area::new(Id::new("field_tooltip"))
        .order(Order::Tooltip)
        .fixed_pos(anchor.left_bottom() + egui::vec2(0.0, 6.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.multiply_opacity(opacity);
            egui::Frame::new()
                .fill(palette.input)
                .stroke(Stroke::new(1.0, palette.accent))
                .inner_margin(egui::Margin::symmetric(8, 6))
                .show(ui, |ui| {
                    ui.set_max_width(INPUT_WIDTH + LABEL_WIDTH);
                    ui.label(RichText::new(tooltip.text).color(palette.text));
                });
        });
}
