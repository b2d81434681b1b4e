//! Point tables, thresholds, and symptom vocabularies behind every EndoGuard score.
//!
//! All values are process-wide constants. Known enum values are mapped exhaustively;
//! `Unrecognized` covers legacy or garbage strings and always maps to zero.

use super::domain::{
    ExerciseFrequency, HormoneSystem, PlasticUseFrequency, ProcessedFoodFrequency, QualityRating,
    WaterSource,
};

pub const MIN_RISK_SCORE: i32 = 0;
pub const MAX_RISK_SCORE: i32 = 100;

pub const OCCUPATIONAL_EXPOSURE_POINTS: i32 = 20;
pub const HIGH_STRESS_POINTS: i32 = 15;
pub const HIGH_STRESS_LEVEL: u8 = 7;

/// Per-category contributions at or above these values surface a risk factor.
pub const PLASTIC_FACTOR_THRESHOLD: i32 = 15;
pub const PROCESSED_FOOD_FACTOR_THRESHOLD: i32 = 12;
pub const WATER_FACTOR_THRESHOLD: i32 = 10;

pub const SYSTEM_MATCH_THRESHOLD: usize = 2;
pub const TEST_PANEL_MATCH_THRESHOLD: usize = 2;

pub const PRODUCT_SWAP_SCORE: u8 = 50;
pub const DETOX_SUPPORT_SCORE: u8 = 40;

pub const HIGH_EXPOSURE_SCORE: u8 = 60;
pub const MODERATE_EXPOSURE_SCORE: u8 = 30;
pub const HIGH_SYMPTOM_SEVERITY: u8 = 8;
pub const MODERATE_SYMPTOM_SEVERITY: u8 = 5;

pub const DEFAULT_SYMPTOM_SEVERITY: u8 = 5;
/// Upper bound for both `stressLevel` and `symptomSeverity`.
pub const MAX_SCALE_VALUE: u8 = 10;

impl PlasticUseFrequency {
    pub const fn points(self) -> i32 {
        match self {
            PlasticUseFrequency::High => 25,
            PlasticUseFrequency::Moderate => 15,
            PlasticUseFrequency::Low => 5,
            PlasticUseFrequency::Minimal => 0,
            PlasticUseFrequency::Unrecognized => 0,
        }
    }
}

impl ProcessedFoodFrequency {
    pub const fn points(self) -> i32 {
        match self {
            ProcessedFoodFrequency::Daily => 20,
            ProcessedFoodFrequency::SeveralTimesWeek => 12,
            ProcessedFoodFrequency::Occasionally => 5,
            ProcessedFoodFrequency::Rarely => 0,
            ProcessedFoodFrequency::Unrecognized => 0,
        }
    }
}

impl WaterSource {
    pub const fn points(self) -> i32 {
        match self {
            WaterSource::TapUnfiltered => 15,
            WaterSource::TapFiltered => 5,
            WaterSource::Bottled => 10,
            WaterSource::Well => 8,
            WaterSource::ReverseOsmosis => 0,
            WaterSource::Unrecognized => 0,
        }
    }
}

impl QualityRating {
    pub const fn diet_points(self) -> i32 {
        match self {
            QualityRating::Excellent => -5,
            QualityRating::Good => 0,
            QualityRating::Fair => 10,
            QualityRating::Poor => 20,
            QualityRating::Unrecognized => 0,
        }
    }

    pub const fn sleep_points(self) -> i32 {
        match self {
            QualityRating::Excellent => -5,
            QualityRating::Good => 0,
            QualityRating::Fair => 10,
            QualityRating::Poor => 15,
            QualityRating::Unrecognized => 0,
        }
    }
}

impl ExerciseFrequency {
    pub const fn points(self) -> i32 {
        match self {
            ExerciseFrequency::Daily => -5,
            ExerciseFrequency::Regular => 0,
            ExerciseFrequency::Occasional => 10,
            ExerciseFrequency::Rarely => 15,
            ExerciseFrequency::Unrecognized => 0,
        }
    }
}

pub const THYROID_SYMPTOMS: [&str; 6] = [
    "Unexplained weight gain or loss",
    "Fatigue or low energy",
    "Hair loss or thinning",
    "Cold intolerance",
    "Dry skin",
    "Brain fog or difficulty concentrating",
];

pub const REPRODUCTIVE_SYMPTOMS: [&str; 6] = [
    "Irregular menstrual cycles",
    "Heavy or painful periods",
    "PMS symptoms",
    "Low libido",
    "Fertility issues",
    "Hot flashes or night sweats",
];

pub const ADRENAL_SYMPTOMS: [&str; 6] = [
    "Chronic stress or anxiety",
    "Difficulty waking up",
    "Afternoon energy crashes",
    "Salt cravings",
    "Difficulty handling stress",
    "Mood swings",
];

pub const METABOLIC_SYMPTOMS: [&str; 6] = [
    "Blood sugar imbalances",
    "Increased belly fat",
    "Sugar cravings",
    "Difficulty losing weight",
    "Insulin resistance",
    "PCOS symptoms",
];

impl HormoneSystem {
    pub const fn symptom_vocabulary(self) -> &'static [&'static str] {
        match self {
            HormoneSystem::Thyroid => &THYROID_SYMPTOMS,
            HormoneSystem::Reproductive => &REPRODUCTIVE_SYMPTOMS,
            HormoneSystem::Adrenal => &ADRENAL_SYMPTOMS,
            HormoneSystem::Metabolic => &METABOLIC_SYMPTOMS,
        }
    }
}
