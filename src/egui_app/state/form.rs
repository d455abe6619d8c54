use std::collections::BTreeMap;

use crate::prediction::fields::{self, COMMON_FIELDS, MODEL_FIELD};
use crate::prediction::{FormValues, ModelKind};

/// Which parts of the form are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleGroups {
    /// Shared field group.
    pub common: bool,
    /// The one per-model group on screen, if any.
    pub model: Option<ModelKind>,
    /// Submit control.
    pub submit: bool,
}

impl VisibleGroups {
    /// Visibility for a model selection; empty hides everything.
    pub fn for_selection(selection: Option<ModelKind>) -> Self {
        Self {
            common: selection.is_some(),
            model: selection,
            submit: selection.is_some(),
        }
    }

    pub fn shows_model(&self, model: ModelKind) -> bool {
        self.model == Some(model)
    }
}

/// Entered values plus the current model selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub selected_model: Option<ModelKind>,
    pub visible: VisibleGroups,
    /// Shared field values keyed by field name.
    values: BTreeMap<&'static str, String>,
    /// Model control values keyed by control id.
    controls: BTreeMap<&'static str, String>,
}

impl FormState {
    pub fn field_value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn control_value(&self, id: &str) -> &str {
        self.controls.get(id).map(String::as_str).unwrap_or_default()
    }

    /// Value of a common field or a model control.
    pub fn input_value(&self, key: &str) -> &str {
        if fields::common_field(key).is_some() {
            self.field_value(key)
        } else {
            self.control_value(key)
        }
    }

    /// Store a shared field value; unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let Some(field) = fields::common_field(name) else {
            return false;
        };
        self.values.insert(field.name, value);
        true
    }

    /// Store a model control value; unknown ids are ignored.
    pub fn set_control(&mut self, id: &str, value: String) -> bool {
        let Some(id) = fields::control_id(id) else {
            return false;
        };
        self.controls.insert(id, value);
        true
    }

    pub fn reset_values(&mut self) {
        self.values.clear();
        self.controls.clear();
    }

    /// Capture the form the way it is submitted: selector and shared fields
    /// as named entries in form order, model inputs by control id.
    pub fn snapshot(&self) -> FormValues {
        let mut values = FormValues::new();
        values.push_field(
            MODEL_FIELD,
            self.selected_model.map(ModelKind::as_str).unwrap_or_default(),
        );
        for field in &COMMON_FIELDS {
            values.push_field(field.name, self.field_value(field.name));
        }
        for (id, value) in &self.controls {
            values.set_control(*id, value.as_str());
        }
        values
    }
}
