use std::fmt;
use std::str::FromStr;

/// Optional request fields that some models read from their own controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionalField {
    ViewCount,
    CommentCount,
    LikeViewRatio,
}

impl OptionalField {
    /// Key used for this field in the request payload.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::ViewCount => "view_count",
            Self::CommentCount => "comment_count",
            Self::LikeViewRatio => "like_view_ratio_percent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ViewCount => "View count",
            Self::CommentCount => "Comment count",
            Self::LikeViewRatio => "Like/view ratio (%)",
        }
    }
}

/// One of the fixed prediction configurations served by `/predict`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    Model1,
    Model2,
    Model3,
    Model4,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [Self::Model1, Self::Model2, Self::Model3, Self::Model4];

    /// Wire identifier, also used as the `model` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model1 => "model1",
            Self::Model2 => "model2",
            Self::Model3 => "model3",
            Self::Model4 => "model4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Model1 => "View Count Predictor",
            Self::Model2 => "Subscriber Predictor",
            Self::Model3 => "Popularity Class",
            Self::Model4 => "Trending Status",
        }
    }

    /// Short description shown next to a successful prediction.
    pub fn description(self) -> &'static str {
        match self {
            Self::Model1 => {
                "Random Forest Regressor using 10 features including derived engagement metrics to predict view count."
            }
            Self::Model2 => {
                "Advanced Random Forest Regressor with 26 features including comprehensive engagement analysis to predict subscriber count."
            }
            Self::Model3 => {
                "Random Forest Classifier using 8 core features to classify video popularity into Low, Medium, or High categories."
            }
            Self::Model4 => {
                "Random Forest Classifier with 14 features including engagement metrics to determine trending success probability."
            }
        }
    }

    /// Model-specific controls, as `(field, control id)` pairs in form order.
    pub fn controls(self) -> &'static [(OptionalField, &'static str)] {
        use OptionalField::*;
        match self {
            Self::Model1 => &[(ViewCount, "viewCount1"), (LikeViewRatio, "likeViewRatio1")],
            Self::Model2 => &[
                (ViewCount, "viewCount2"),
                (CommentCount, "commentCount2"),
                (LikeViewRatio, "likeViewRatio2"),
            ],
            Self::Model3 => &[(ViewCount, "viewCount3"), (CommentCount, "commentCount3")],
            Self::Model4 => &[(ViewCount, "viewCount4"), (CommentCount, "commentCount4")],
        }
    }

    /// Identifier of the control this model reads `field` from, if it uses one.
    pub fn control_id(self, field: OptionalField) -> Option<&'static str> {
        self.controls()
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, id)| *id)
    }

    /// Parse a selector value where the empty string means "no model".
    pub fn parse_selection(value: &str) -> Result<Option<Self>, UnknownModel> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a selector value names no known model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown model: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for ModelKind {
    type Err = UnknownModel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == value)
            .ok_or_else(|| UnknownModel(value.to_string()))
    }
}
