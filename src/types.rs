//! Core data types for detection, style classification, and published results.
//!
//! Expression, style, and occasion labels are closed enums rather than
//! string-keyed maps so downstream matching stays exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounding region of a detected subject, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Facial expression labels produced by the face model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Neutral,
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgusted,
    Surprised,
}

impl Expression {
    /// The lower-case label used on the model wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Neutral => "neutral",
            Expression::Happy => "happy",
            Expression::Sad => "sad",
            Expression::Angry => "angry",
            Expression::Fearful => "fearful",
            Expression::Disgusted => "disgusted",
            Expression::Surprised => "surprised",
        }
    }

    /// Parse a model label; unknown labels map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "neutral" => Some(Expression::Neutral),
            "happy" => Some(Expression::Happy),
            "sad" => Some(Expression::Sad),
            "angry" => Some(Expression::Angry),
            "fearful" => Some(Expression::Fearful),
            "disgusted" => Some(Expression::Disgusted),
            "surprised" => Some(Expression::Surprised),
            _ => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender label estimated by the face model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    /// Capitalized form used in human-facing guidance text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

/// One subject's raw perceptual reading for a single analysis cycle.
///
/// Immutable once produced; discarded when a new cycle starts or the subject
/// leaves the frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Bounding region in frame pixels
    pub region: BoundingBox,

    /// Detector confidence for this subject, in [0, 1]
    pub score: f32,

    /// Estimated age in years
    pub age: u32,

    /// Estimated gender label
    pub gender: Gender,

    /// Confidence of the gender estimate, in [0, 1]
    pub gender_confidence: f32,

    /// Expression intensities in [0, 1], one entry per recognized expression
    pub expressions: Vec<(Expression, f32)>,
}

impl Detection {
    /// The strongest expression reading, `(Neutral, 0.0)` when none were reported.
    pub fn dominant_expression(&self) -> (Expression, f32) {
        let mut best = (Expression::Neutral, 0.0);
        for &(expression, intensity) in &self.expressions {
            if intensity > best.1 {
                best = (expression, intensity);
            }
        }
        best
    }
}

/// A label with its classification score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel<T> {
    pub label: T,
    /// Score in [0, 1]
    pub score: f32,
}

/// Clothing style categories for zero-shot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
    CasualStreetwear,
    FormalBusiness,
    SportyAthletic,
    TrendyFashionForward,
    ClassicMinimalist,
    BohemianArtistic,
    LuxuryDesigner,
    OutdoorRugged,
}

impl StyleCategory {
    /// Every category, in the order the classifier is prompted.
    pub const ALL: [StyleCategory; 8] = [
        StyleCategory::CasualStreetwear,
        StyleCategory::FormalBusiness,
        StyleCategory::SportyAthletic,
        StyleCategory::TrendyFashionForward,
        StyleCategory::ClassicMinimalist,
        StyleCategory::BohemianArtistic,
        StyleCategory::LuxuryDesigner,
        StyleCategory::OutdoorRugged,
    ];

    /// Human-facing display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StyleCategory::CasualStreetwear => "Casual / Streetwear",
            StyleCategory::FormalBusiness => "Formal / Business",
            StyleCategory::SportyAthletic => "Sporty / Athletic",
            StyleCategory::TrendyFashionForward => "Trendy / Fashion-Forward",
            StyleCategory::ClassicMinimalist => "Classic / Minimalist",
            StyleCategory::BohemianArtistic => "Bohemian / Artistic",
            StyleCategory::LuxuryDesigner => "Luxury / Designer",
            StyleCategory::OutdoorRugged => "Outdoor / Rugged",
        }
    }

    /// Zero-shot prompt phrase submitted to the style classifier.
    pub fn prompt(&self) -> &'static str {
        match self {
            StyleCategory::CasualStreetwear => "a person wearing casual streetwear",
            StyleCategory::FormalBusiness => "a person wearing formal business attire",
            StyleCategory::SportyAthletic => "a person wearing sporty athletic clothes",
            StyleCategory::TrendyFashionForward => "a person wearing trendy fashion-forward clothes",
            StyleCategory::ClassicMinimalist => "a person wearing classic minimalist style",
            StyleCategory::BohemianArtistic => "a person wearing bohemian or artistic clothes",
            StyleCategory::LuxuryDesigner => "a person wearing luxury or designer clothes",
            StyleCategory::OutdoorRugged => "a person wearing outdoor rugged clothes",
        }
    }

    /// Reverse lookup from a classifier result label to the category.
    pub fn from_prompt(prompt: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.prompt() == prompt)
    }
}

/// Dressing occasion categories for zero-shot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccasionCategory {
    OfficeWork,
    CasualWeekend,
    DateNightOut,
    ExerciseSport,
    OutdoorAdventure,
    FormalEvent,
    Travel,
}

impl OccasionCategory {
    /// Every category, in the order the classifier is prompted.
    pub const ALL: [OccasionCategory; 7] = [
        OccasionCategory::OfficeWork,
        OccasionCategory::CasualWeekend,
        OccasionCategory::DateNightOut,
        OccasionCategory::ExerciseSport,
        OccasionCategory::OutdoorAdventure,
        OccasionCategory::FormalEvent,
        OccasionCategory::Travel,
    ];

    /// Human-facing display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            OccasionCategory::OfficeWork => "Office / Work",
            OccasionCategory::CasualWeekend => "Casual Weekend",
            OccasionCategory::DateNightOut => "Date / Night Out",
            OccasionCategory::ExerciseSport => "Exercise / Sport",
            OccasionCategory::OutdoorAdventure => "Outdoor Adventure",
            OccasionCategory::FormalEvent => "Formal Event",
            OccasionCategory::Travel => "Travel",
        }
    }

    /// Zero-shot prompt phrase submitted to the style classifier.
    pub fn prompt(&self) -> &'static str {
        match self {
            OccasionCategory::OfficeWork => "a person dressed for a day at the office",
            OccasionCategory::CasualWeekend => "a person dressed for a casual weekend outing",
            OccasionCategory::DateNightOut => "a person dressed for a date or night out",
            OccasionCategory::ExerciseSport => "a person dressed for exercise or sport",
            OccasionCategory::OutdoorAdventure => "a person dressed for an outdoor adventure",
            OccasionCategory::FormalEvent => "a person dressed for a formal event or wedding",
            OccasionCategory::Travel => "a person dressed for travel",
        }
    }

    /// Reverse lookup from a classifier result label to the category.
    pub fn from_prompt(prompt: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.prompt() == prompt)
    }
}

/// Style and occasion scores for one analyzed subject.
///
/// Both lists are sorted by score descending and truncated (top-4 styles,
/// top-3 occasions by default). Produced at most once per continuous subject
/// presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleClassification {
    pub styles: Vec<ScoredLabel<StyleCategory>>,
    pub occasions: Vec<ScoredLabel<OccasionCategory>>,
}

impl StyleClassification {
    /// The best-scoring style, if any label matched.
    pub fn top_style(&self) -> Option<ScoredLabel<StyleCategory>> {
        self.styles.first().copied()
    }

    /// The best-scoring occasion, if any label matched.
    pub fn top_occasion(&self) -> Option<ScoredLabel<OccasionCategory>> {
        self.occasions.first().copied()
    }
}

/// Staff-facing guidance derived from a completed analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    /// Top style match, if classification produced one
    pub style_profile: Option<ScoredLabel<StyleCategory>>,

    /// Top occasion match, if classification produced one
    pub occasion: Option<ScoredLabel<OccasionCategory>>,

    /// Product groups worth showing for the top style
    pub product_suggestions: Vec<String>,

    /// How to approach the customer, keyed off the dominant expression
    pub approach_tip: String,

    /// Age/gender framing for the conversation
    pub demographic_hint: String,
}

/// The published result of one analysis cycle.
///
/// Published in two phases: `DetectedOnly` as soon as detection completes,
/// upgraded to `FullyAnalyzed` once style classification finishes. "No
/// subject present" is represented as `None` at the publication site, never
/// as a zeroed variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum AnalysisResult {
    /// Demographics and expression are available; style data is still pending
    DetectedOnly { detection: Detection },

    /// The full two-stage analysis finished for this subject
    FullyAnalyzed {
        detection: Detection,
        classification: StyleClassification,
        suggestions: Suggestions,
    },
}

impl AnalysisResult {
    /// The detection this result was built from.
    pub fn detection(&self) -> &Detection {
        match self {
            AnalysisResult::DetectedOnly { detection } => detection,
            AnalysisResult::FullyAnalyzed { detection, .. } => detection,
        }
    }

    /// The style classification, `None` while still pending.
    pub fn classification(&self) -> Option<&StyleClassification> {
        match self {
            AnalysisResult::DetectedOnly { .. } => None,
            AnalysisResult::FullyAnalyzed { classification, .. } => Some(classification),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_detection() -> Detection {
        Detection {
            region: BoundingBox {
                x: 100.0,
                y: 80.0,
                width: 120.0,
                height: 150.0,
            },
            score: 0.92,
            age: 27,
            gender: Gender::Female,
            gender_confidence: 0.88,
            expressions: vec![
                (Expression::Neutral, 0.1),
                (Expression::Happy, 0.85),
                (Expression::Surprised, 0.05),
            ],
        }
    }

    #[test]
    fn test_dominant_expression_is_argmax() {
        let detection = sample_detection();
        let (expression, intensity) = detection.dominant_expression();
        assert_eq!(expression, Expression::Happy);
        assert!((intensity - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_dominant_expression_defaults_to_neutral() {
        let mut detection = sample_detection();
        detection.expressions.clear();
        assert_eq!(
            detection.dominant_expression(),
            (Expression::Neutral, 0.0)
        );
    }

    #[test]
    fn test_expression_label_roundtrip() {
        for expression in [
            Expression::Neutral,
            Expression::Happy,
            Expression::Sad,
            Expression::Angry,
            Expression::Fearful,
            Expression::Disgusted,
            Expression::Surprised,
        ] {
            assert_eq!(Expression::from_label(expression.as_str()), Some(expression));
        }
        assert_eq!(Expression::from_label("smirking"), None);
    }

    #[test]
    fn test_style_prompt_reverse_lookup() {
        for category in StyleCategory::ALL {
            assert_eq!(StyleCategory::from_prompt(category.prompt()), Some(category));
        }
        assert_eq!(StyleCategory::from_prompt("a person wearing a spacesuit"), None);
    }

    #[test]
    fn test_occasion_prompt_reverse_lookup() {
        for category in OccasionCategory::ALL {
            assert_eq!(
                OccasionCategory::from_prompt(category.prompt()),
                Some(category)
            );
        }
    }

    #[test]
    fn test_analysis_result_phase_accessors() {
        let detection = sample_detection();
        let partial = AnalysisResult::DetectedOnly {
            detection: detection.clone(),
        };
        assert!(partial.classification().is_none());
        assert_eq!(partial.detection().age, 27);

        let json = serde_json::to_string(&partial).unwrap();
        assert!(json.contains("\"phase\":\"detected_only\""));
    }
}
