use serde::{Deserialize, Serialize};

/// Identifier wrapper for completed assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

impl AssessmentId {
    pub fn generate() -> Self {
        Self(format!("EG-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlasticUseFrequency {
    High,
    Moderate,
    Low,
    Minimal,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessedFoodFrequency {
    Daily,
    SeveralTimesWeek,
    Occasionally,
    Rarely,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    TapUnfiltered,
    TapFiltered,
    Bottled,
    Well,
    ReverseOsmosis,
    #[serde(other)]
    Unrecognized,
}

/// Shared four-step scale used for both diet and sleep quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(other)]
    Unrecognized,
}

impl QualityRating {
    pub const fn needs_attention(self) -> bool {
        matches!(self, QualityRating::Fair | QualityRating::Poor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    Daily,
    Regular,
    Occasional,
    Rarely,
    #[serde(other)]
    Unrecognized,
}

impl ExerciseFrequency {
    pub const fn needs_attention(self) -> bool {
        matches!(self, ExerciseFrequency::Occasional | ExerciseFrequency::Rarely)
    }
}

/// Lifestyle and environment answers that drive the exposure score.
///
/// Every field is optional on the wire. Missing values and strings outside the known
/// vocabulary both decode successfully and contribute nothing to the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExposureProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plastic_use_frequency: Option<PlasticUseFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_food_frequency: Option<ProcessedFoodFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_source: Option<WaterSource>,
    pub occupational_exposure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_quality: Option<QualityRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<QualityRating>,
    /// Whole number from 0 to 10. Fractional or negative values are rejected as malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<ExerciseFrequency>,
}

/// Raw questionnaire as submitted by the EndoGuard intake form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssessmentForm {
    #[serde(flatten)]
    pub profile: ExposureProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
    /// Whole number from 0 to 10, defaulting to 5 when absent. The questionnaire only
    /// offers integer steps, so `7.5` is rejected as malformed rather than rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom_severity: Option<u8>,
}

/// Submitted symptom labels, kept in submission order.
///
/// Membership checks are exact and case-sensitive. Labels outside every vocabulary are
/// carried along but never match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomSet(Vec<String>);

impl SymptomSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|submitted| submitted == label)
    }

    /// Number of distinct vocabulary entries present in the set.
    pub fn matches(&self, vocabulary: &[&str]) -> usize {
        vocabulary
            .iter()
            .filter(|label| self.contains(label))
            .count()
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for SymptomSet {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

/// Hormonal systems used to group symptoms and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HormoneSystem {
    Thyroid,
    Reproductive,
    Adrenal,
    Metabolic,
}

impl HormoneSystem {
    /// Evaluation order for system detection.
    pub const ALL: [HormoneSystem; 4] = [
        HormoneSystem::Thyroid,
        HormoneSystem::Reproductive,
        HormoneSystem::Adrenal,
        HormoneSystem::Metabolic,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HormoneSystem::Thyroid => "Thyroid",
            HormoneSystem::Reproductive => "Reproductive",
            HormoneSystem::Adrenal => "Adrenal",
            HormoneSystem::Metabolic => "Metabolic",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|system| system.label() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Presentation priority for a recommendation. Lower rank sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Products,
    Lifestyle,
    Diet,
    Supplements,
}

impl RecommendationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationCategory::Products => "products",
            RecommendationCategory::Lifestyle => "lifestyle",
            RecommendationCategory::Diet => "diet",
            RecommendationCategory::Supplements => "supplements",
        }
    }
}

/// Actionable advice surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub text: &'static str,
    pub rationale: &'static str,
}
