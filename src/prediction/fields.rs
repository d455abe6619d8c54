//! Static catalog of the form's inputs.

use super::model::ModelKind;

/// Name of the model selector; it is submitted with the form but never sent.
pub const MODEL_FIELD: &str = "model";

/// Fields every request must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "video_age_days",
    "title_length_words",
    "title_sentiment",
    "category_id",
    "like_count",
    "region",
    "subscriber_count",
];

/// How an input is edited and how its raw value is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Number,
    Text,
    /// Fixed `(value, label)` options.
    Choice(&'static [(&'static str, &'static str)]),
}

/// An input of the shared field group.
#[derive(Clone, Copy, Debug)]
pub struct CommonField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub hint: &'static str,
}

const SENTIMENTS: &[(&str, &str)] = &[
    ("Positive", "Positive"),
    ("Neutral", "Neutral"),
    ("Negative", "Negative"),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("1", "Film & Animation"),
    ("2", "Autos & Vehicles"),
    ("10", "Music"),
    ("15", "Pets & Animals"),
    ("17", "Sports"),
    ("19", "Travel & Events"),
    ("20", "Gaming"),
    ("22", "People & Blogs"),
    ("23", "Comedy"),
    ("24", "Entertainment"),
    ("25", "News & Politics"),
    ("26", "Howto & Style"),
    ("27", "Education"),
    ("28", "Science & Technology"),
];

/// Shared fields in form order.
pub const COMMON_FIELDS: [CommonField; 7] = [
    CommonField {
        name: "video_age_days",
        label: "Video age (days)",
        kind: InputKind::Number,
        hint: "e.g. 10",
    },
    CommonField {
        name: "title_length_words",
        label: "Title length (words)",
        kind: InputKind::Number,
        hint: "e.g. 8",
    },
    CommonField {
        name: "title_sentiment",
        label: "Title sentiment",
        kind: InputKind::Choice(SENTIMENTS),
        hint: "Select sentiment",
    },
    CommonField {
        name: "category_id",
        label: "Category",
        kind: InputKind::Choice(CATEGORIES),
        hint: "Select category",
    },
    CommonField {
        name: "like_count",
        label: "Like count",
        kind: InputKind::Number,
        hint: "e.g. 120",
    },
    CommonField {
        name: "region",
        label: "Region",
        kind: InputKind::Text,
        hint: "e.g. US",
    },
    CommonField {
        name: "subscriber_count",
        label: "Subscriber count",
        kind: InputKind::Number,
        hint: "e.g. 5000",
    },
];

/// Fields whose values are sent as lower-cased strings instead of numbers.
pub fn is_text_field(name: &str) -> bool {
    matches!(name, "region" | "title_sentiment")
}

pub fn common_field(name: &str) -> Option<&'static CommonField> {
    COMMON_FIELDS.iter().find(|field| field.name == name)
}

/// Resolve a control identifier to the static one in the catalog.
pub fn control_id(id: &str) -> Option<&'static str> {
    ModelKind::ALL
        .into_iter()
        .flat_map(|model| model.controls().iter())
        .map(|(_, control)| *control)
        .find(|control| *control == id)
}

/// Input kind for a common field name or a model control id.
pub fn input_kind(key: &str) -> Option<InputKind> {
    if let Some(field) = common_field(key) {
        return Some(field.kind);
    }
    control_id(key).map(|_| InputKind::Number)
}

/// Help text shown while a field has focus.
pub fn help_text(name: &str) -> Option<&'static str> {
    match name {
        "video_age_days" => Some(
            "Enter the number of days since the video was published. Newer videos typically have different performance patterns.",
        ),
        "title_length_words" => Some(
            "Count the words in your video title. Optimal length varies by content type and audience.",
        ),
        "category_id" => {
            Some("Select the primary category that best describes your video content.")
        }
        "like_count" => Some("Current number of likes. This helps calculate engagement ratios."),
        "subscriber_count" => Some(
            "Total channel subscribers. Larger channels often have different trending patterns.",
        ),
        _ => None,
    }
}
