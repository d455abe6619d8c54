//! Collects form values into a validated prediction payload.

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use super::fields::{MODEL_FIELD, REQUIRED_FIELDS, is_text_field};
use super::model::ModelKind;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single payload value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Text(value) if value.is_empty())
    }
}

// Integral numbers go out as JSON integers (`10`, not `10.0`).
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*value as i64)
            }
            Self::Number(value) => serializer.serialize_f64(*value),
        }
    }
}

/// JSON body sent to `/predict`, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionRequest {
    fields: BTreeMap<String, FieldValue>,
}

impl PredictionRequest {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn insert(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_string(), value);
    }
}

/// Snapshot of the form at submission time.
///
/// `fields` are the named inputs in document order (the selector included);
/// `controls` are model-specific inputs addressed by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    fields: Vec<(String, String)>,
    controls: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_field(name, value);
        self
    }

    pub fn with_control(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_control(id, value);
        self
    }

    pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn set_control(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.controls.insert(id.into(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn control(&self, id: &str) -> Option<&str> {
        self.controls.get(id).map(String::as_str)
    }
}

/// Local, pre-network failure to build a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Select a model before submitting")]
    NoModelSelected,
    #[error("Please fill in all required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
}

/// Build the payload for `selection` from the submitted form values.
pub fn build_request(
    selection: Option<ModelKind>,
    form: &FormValues,
) -> Result<PredictionRequest, ValidationError> {
    let model = selection.ok_or(ValidationError::NoModelSelected)?;
    let mut request = PredictionRequest::default();

    for (name, raw) in form.fields() {
        if name == MODEL_FIELD {
            continue;
        }
        let value = if is_text_field(name) {
            FieldValue::Text(raw.to_lowercase())
        } else {
            FieldValue::Number(parse_lenient_number(raw))
        };
        request.insert(name, value);
    }

    for (field, control_id) in model.controls() {
        let name = field.field_name();
        if request.contains(name) {
            continue;
        }
        let raw = form.control(control_id).unwrap_or_default();
        request.insert(name, FieldValue::Number(parse_lenient_number(raw)));
    }

    let missing = REQUIRED_FIELDS
        .into_iter()
        .filter(|name| request.get(name).is_none_or(FieldValue::is_empty))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { missing });
    }
    Ok(request)
}

/// Parse the leading number of `raw`, falling back to 0.
///
/// Leading whitespace and trailing garbage are ignored (`" 12abc"` is 12).
/// Empty, non-numeric and non-finite input all yield 0.
pub fn parse_lenient_number(raw: &str) -> f64 {
    let prefix = numeric_prefix(raw.trim_start());
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;
    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        mantissa_digits += frac_digits;
        end += 1 + frac_digits;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn common_values(model: ModelKind) -> FormValues {
        FormValues::new()
            .with_field("model", model.as_str())
            .with_field("video_age_days", "10")
            .with_field("title_length_words", "8")
            .with_field("title_sentiment", "Positive")
            .with_field("category_id", "5")
            .with_field("like_count", "120")
            .with_field("region", "US")
            .with_field("subscriber_count", "5000")
    }

    #[test]
    fn model1_request_matches_expected_payload() {
        let form = common_values(ModelKind::Model1)
            .with_control("viewCount1", "10000")
            .with_control("likeViewRatio1", "1.2");
        let request = build_request(Some(ModelKind::Model1), &form).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "video_age_days": 10,
                "title_length_words": 8,
                "title_sentiment": "positive",
                "category_id": 5,
                "like_count": 120,
                "region": "us",
                "subscriber_count": 5000,
                "view_count": 10000,
                "like_view_ratio_percent": 1.2
            })
        );
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        let form = common_values(ModelKind::Model3).with_control("viewCount3", "2.50");
        let request = build_request(Some(ModelKind::Model3), &form).unwrap();
        let body = serde_json::to_string(&request).unwrap();
        assert!(body.contains(r#""like_count":120"#));
        assert!(body.contains(r#""view_count":2.5"#));
        assert!(body.contains(r#""comment_count":0"#));
    }

    #[test]
    fn unparseable_numbers_default_to_zero() {
        for raw in ["", "abc", "-", ".", "e5", "  ", "NaN", "inf", "1e999"] {
            let form = common_values(ModelKind::Model4).with_field("like_count", raw);
            let request = build_request(Some(ModelKind::Model4), &form).unwrap();
            assert_eq!(
                request.get("like_count"),
                Some(&FieldValue::Number(0.0)),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn lenient_parse_reads_leading_number() {
        assert_eq!(parse_lenient_number(" 12abc"), 12.0);
        assert_eq!(parse_lenient_number("3.5.1"), 3.5);
        assert_eq!(parse_lenient_number("-4"), -4.0);
        assert_eq!(parse_lenient_number("+.5"), 0.5);
        assert_eq!(parse_lenient_number("7."), 7.0);
        assert_eq!(parse_lenient_number("1e3x"), 1000.0);
        assert_eq!(parse_lenient_number("2e"), 2.0);
        assert_eq!(parse_lenient_number("2E-1"), 0.2);
        assert_eq!(parse_lenient_number("-0").to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn text_fields_are_lowercased_and_model_is_skipped() {
        let form = common_values(ModelKind::Model2).with_field("region", "GB");
        let request = build_request(Some(ModelKind::Model2), &form).unwrap();
        assert_eq!(request.get("region").and_then(FieldValue::as_text), Some("gb"));
        assert_eq!(
            request.get("title_sentiment").and_then(FieldValue::as_text),
            Some("positive")
        );
        assert!(!request.contains("model"));
    }

    #[test]
    fn submitted_generic_field_wins_over_model_control() {
        let form = common_values(ModelKind::Model2)
            .with_field("view_count", "77")
            .with_control("viewCount2", "99")
            .with_control("commentCount2", "4");
        let request = build_request(Some(ModelKind::Model2), &form).unwrap();
        assert_eq!(request.get("view_count"), Some(&FieldValue::Number(77.0)));
        assert_eq!(request.get("comment_count"), Some(&FieldValue::Number(4.0)));
        assert_eq!(
            request.get("like_view_ratio_percent"),
            Some(&FieldValue::Number(0.0))
        );
    }

    #[test]
    fn only_the_selected_models_controls_are_read() {
        let form = common_values(ModelKind::Model3)
            .with_control("viewCount1", "1")
            .with_control("viewCount3", "3")
            .with_control("likeViewRatio1", "9");
        let request = build_request(Some(ModelKind::Model3), &form).unwrap();
        assert_eq!(request.get("view_count"), Some(&FieldValue::Number(3.0)));
        assert!(!request.contains("like_view_ratio_percent"));
        assert_eq!(request.len(), 9);
    }

    #[test]
    fn omitted_required_fields_are_reported_in_order() {
        for model in ModelKind::ALL {
            let form = FormValues::new()
                .with_field("model", model.as_str())
                .with_field("title_length_words", "8")
                .with_field("title_sentiment", "Neutral")
                .with_field("like_count", "1")
                .with_field("region", "");
            let err = build_request(Some(model), &form).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingFields {
                    missing: vec!["video_age_days", "category_id", "region", "subscriber_count"],
                }
            );
            assert_eq!(
                err.to_string(),
                "Please fill in all required fields: video_age_days, category_id, region, subscriber_count"
            );
        }
    }

    #[test]
    fn later_duplicate_field_overwrites_earlier() {
        let form = common_values(ModelKind::Model1).with_field("like_count", "5");
        let request = build_request(Some(ModelKind::Model1), &form).unwrap();
        assert_eq!(request.get("like_count"), Some(&FieldValue::Number(5.0)));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let form = common_values(ModelKind::Model1);
        assert_eq!(
            build_request(None, &form),
            Err(ValidationError::NoModelSelected)
        );
    }
}
