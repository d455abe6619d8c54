//! Cosmetic state: reveal fades, tooltips, field highlights and sparkles.
//!
//! Nothing here is read by request building or dispatch; the renderer only
//! consults it to decide how things look.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::DecorationSettings;
use crate::prediction::fields::InputKind;

pub const REVEAL_DURATION: Duration = Duration::from_millis(500);
pub const REVEAL_STAGGER: Duration = Duration::from_millis(200);
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(100);
pub const TOOLTIP_FADE: Duration = Duration::from_millis(300);
pub const VALID_FLASH: Duration = Duration::from_secs(2);
pub const ERROR_FLASH: Duration = Duration::from_secs(5);
pub const SPARKLE_COUNT: usize = 6;
pub const SPARKLE_STAGGER: Duration = Duration::from_millis(200);
pub const SPARKLE_LIFETIME: Duration = Duration::from_secs(2);

const SPARKLE_GLYPHS: [&str; 5] = ["✨", "🎉", "⭐", "💫", "🌟"];
const CELEBRATION_MARKERS: [&str; 4] = ["Views:", "Subscribers:", "successful", "high"];

/// Parts of the form that fade in one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStage {
    Common,
    ModelGroup,
    Submit,
}

impl RevealStage {
    fn delay(self) -> Duration {
        match self {
            Self::Common => Duration::ZERO,
            Self::ModelGroup => REVEAL_STAGGER,
            Self::Submit => REVEAL_STAGGER * 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub started: Instant,
}

impl Reveal {
    pub fn opacity(&self, stage: RevealStage, now: Instant) -> f32 {
        let start = self.started + stage.delay();
        fraction(now.saturating_duration_since(start), REVEAL_DURATION)
    }

    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= REVEAL_STAGGER * 2 + REVEAL_DURATION
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub field: &'static str,
    pub text: &'static str,
    pub shown_at: Instant,
}

impl Tooltip {
    pub fn opacity(&self, now: Instant) -> f32 {
        let start = self.shown_at + TOOLTIP_DELAY;
        fraction(now.saturating_duration_since(start), TOOLTIP_FADE)
    }
}

/// Outcome of the last blur check of an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFlag {
    /// Shown as valid until the flash expires.
    Valid { until: Instant },
    /// Stays flagged until an edit makes the input valid.
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldHighlight {
    Valid,
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub glyph: &'static str,
    /// Horizontal position as a fraction of the viewport width.
    pub x: f32,
    /// Vertical position as a fraction of the viewport height.
    pub y: f32,
    pub delay: Duration,
}

impl Sparkle {
    /// Progress through this sparkle's life, `None` before it appears or after it ends.
    pub fn progress(&self, started: Instant, now: Instant) -> Option<f32> {
        let appear = started + self.delay;
        if now < appear {
            return None;
        }
        let age = now - appear;
        (age < SPARKLE_LIFETIME).then(|| fraction(age, SPARKLE_LIFETIME))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Celebration {
    pub started: Instant,
    pub sparkles: Vec<Sparkle>,
}

impl Celebration {
    pub fn new(started: Instant, rng: &mut impl Rng) -> Self {
        let sparkles = (0..SPARKLE_COUNT)
            .map(|index| Sparkle {
                glyph: SPARKLE_GLYPHS[rng.random_range(0..SPARKLE_GLYPHS.len())],
                x: rng.random::<f32>(),
                y: rng.random::<f32>(),
                delay: SPARKLE_STAGGER * index as u32,
            })
            .collect();
        Self { started, sparkles }
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.sparkles
            .iter()
            .all(|sparkle| now >= self.started + sparkle.delay + SPARKLE_LIFETIME)
    }
}

/// Whether a successful prediction text deserves a celebration.
pub fn celebrates(prediction: &str) -> bool {
    CELEBRATION_MARKERS
        .iter()
        .any(|marker| prediction.contains(marker))
}

/// Inline validity of a required input: non-empty, and numeric when it is a number.
pub fn input_is_valid(kind: InputKind, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    match kind {
        InputKind::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
        InputKind::Text | InputKind::Choice(_) => true,
    }
}

/// All decoration state owned by the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationState {
    pub settings: DecorationSettings,
    pub reveal: Option<Reveal>,
    /// The single tooltip on screen, if any.
    pub tooltip: Option<Tooltip>,
    pub field_flags: HashMap<&'static str, FieldFlag>,
    pub celebration: Option<Celebration>,
    pub error_flash_until: Option<Instant>,
}

impl DecorationState {
    pub fn new(settings: DecorationSettings) -> Self {
        Self {
            settings,
            reveal: None,
            tooltip: None,
            field_flags: HashMap::new(),
            celebration: None,
            error_flash_until: None,
        }
    }

    /// Drop every transient effect, keeping the settings.
    pub fn clear(&mut self) {
        *self = Self::new(self.settings);
    }

    pub fn highlight(&self, key: &str, now: Instant) -> Option<FieldHighlight> {
        match self.field_flags.get(key)? {
            FieldFlag::Valid { until } if now < *until => Some(FieldHighlight::Valid),
            FieldFlag::Valid { .. } => None,
            FieldFlag::Invalid => Some(FieldHighlight::Invalid),
        }
    }

    pub fn error_flash_active(&self, now: Instant) -> bool {
        self.error_flash_until.is_some_and(|until| now < until)
    }

    /// True while anything time-based still changes on screen.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveal.is_some_and(|reveal| !reveal.finished(now))
            || self
                .tooltip
                .is_some_and(|tooltip| tooltip.opacity(now) < 1.0)
            || self
                .celebration
                .as_ref()
                .is_some_and(|celebration| !celebration.finished(now))
            || self.error_flash_active(now)
            || self
                .field_flags
                .values()
                .any(|flag| matches!(flag, FieldFlag::Valid { until } if now < *until))
    }

    /// Forget effects whose time is up.
    pub fn prune(&mut self, now: Instant) {
        if self.reveal.is_some_and(|reveal| reveal.finished(now)) {
            self.reveal = None;
        }
        if self
            .celebration
            .as_ref()
            .is_some_and(|celebration| celebration.finished(now))
        {
            self.celebration = None;
        }
        if !self.error_flash_active(now) {
            self.error_flash_until = None;
        }
        self.field_flags
            .retain(|_, flag| !matches!(flag, FieldFlag::Valid { until } if now >= *until));
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn reveal_stages_are_staggered() {
        let start = Instant::now();
        let reveal = Reveal { started: start };
        let at = start + Duration::from_millis(300);
        assert!((reveal.opacity(RevealStage::Common, at) - 0.6).abs() < 1e-3);
        assert!((reveal.opacity(RevealStage::ModelGroup, at) - 0.2).abs() < 1e-3);
        assert_eq!(reveal.opacity(RevealStage::Submit, at), 0.0);
        assert!(!reveal.finished(at));
        assert!(reveal.finished(start + Duration::from_millis(900)));
    }

    #[test]
    fn celebration_spawns_staggered_sparkles_in_viewport() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let celebration = Celebration::new(start, &mut rng);
        assert_eq!(celebration.sparkles.len(), SPARKLE_COUNT);
        for (index, sparkle) in celebration.sparkles.iter().enumerate() {
            assert_eq!(sparkle.delay, SPARKLE_STAGGER * index as u32);
            assert!((0.0..1.0).contains(&sparkle.x));
            assert!((0.0..1.0).contains(&sparkle.y));
        }
        let last = celebration.sparkles[SPARKLE_COUNT - 1];
        assert_eq!(last.progress(start, start), None);
        assert!(last.progress(start, start + Duration::from_millis(1500)).is_some());
        assert!(!celebration.finished(start + Duration::from_millis(2900)));
        assert!(celebration.finished(start + Duration::from_millis(3000)));
    }

    #[test]
    fn celebration_markers() {
        assert!(celebrates("Views: 42,000"));
        assert!(celebrates("Subscribers: 1,200"));
        assert!(celebrates("Class: high"));
        assert!(!celebrates("Class: High"));
        assert!(!celebrates("Status: 0"));
    }

    #[test]
    fn input_validity_requires_content_and_numbers() {
        assert!(input_is_valid(InputKind::Number, " 12.5 "));
        assert!(!input_is_valid(InputKind::Number, "12abc"));
        assert!(!input_is_valid(InputKind::Number, "inf"));
        assert!(!input_is_valid(InputKind::Text, "   "));
        assert!(input_is_valid(InputKind::Text, "us"));
    }

    #[test]
    fn valid_highlight_expires_but_invalid_persists() {
        let now = Instant::now();
        let mut state = DecorationState::new(DecorationSettings::default());
        state
            .field_flags
            .insert("like_count", FieldFlag::Valid { until: now + VALID_FLASH });
        state.field_flags.insert("region", FieldFlag::Invalid);
        assert_eq!(state.highlight("like_count", now), Some(FieldHighlight::Valid));
        let later = now + VALID_FLASH;
        assert_eq!(state.highlight("like_count", later), None);
        assert_eq!(state.highlight("region", later), Some(FieldHighlight::Invalid));
        state.prune(later);
        assert!(!state.field_flags.contains_key("like_count"));
        assert!(state.field_flags.contains_key("region"));
    }
}
