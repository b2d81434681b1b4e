use serde::Serialize;

use super::domain::{ExposureProfile, RiskLevel};
use super::tables::{
    HIGH_EXPOSURE_SCORE, HIGH_STRESS_LEVEL, HIGH_STRESS_POINTS, MAX_RISK_SCORE, MIN_RISK_SCORE,
    MODERATE_EXPOSURE_SCORE, OCCUPATIONAL_EXPOSURE_POINTS, PLASTIC_FACTOR_THRESHOLD,
    PROCESSED_FOOD_FACTOR_THRESHOLD, WATER_FACTOR_THRESHOLD,
};

/// Named, explained driver of exposure risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub factor: &'static str,
    pub impact: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureRiskResult {
    pub risk_score: u8,
    /// Derived from the exposure score alone; see `OverallRisk` for the blended level.
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
}

pub const HIGH_PLASTIC_USE: RiskFactor = RiskFactor {
    factor: "High plastic use",
    impact: "BPA and phthalates leach from plastics and can mimic estrogen in the body",
    recommendation: "Switch to glass or stainless steel containers and never heat food in plastic",
};

pub const FREQUENT_PROCESSED_FOOD: RiskFactor = RiskFactor {
    factor: "Frequent processed food consumption",
    impact: "Food packaging and additives are a major dietary source of phthalates and other EDCs",
    recommendation: "Prioritize fresh, whole foods and cook at home more often",
};

pub const WATER_CONTAMINATION: RiskFactor = RiskFactor {
    factor: "Water source contamination risk",
    impact: "Unfiltered and bottled water can carry PFAS, atrazine, and plastic leachates",
    recommendation: "Install a certified carbon block or reverse osmosis filter",
};

pub const OCCUPATIONAL_EXPOSURE: RiskFactor = RiskFactor {
    factor: "Occupational chemical exposure",
    impact: "Workplace chemicals can substantially raise your daily endocrine disruptor load",
    recommendation: "Use protective equipment at work and change clothes before coming home",
};

pub const HIGH_STRESS: RiskFactor = RiskFactor {
    factor: "High stress levels",
    impact: "Chronic stress elevates cortisol and amplifies the effects of hormone disruptors",
    recommendation: "Practice daily stress reduction such as meditation, breathwork, or yoga",
};

/// Additive point tally over the lifestyle questionnaire.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExposureRiskScorer;

impl ExposureRiskScorer {
    pub fn score(&self, profile: &ExposureProfile) -> ExposureRiskResult {
        let mut total = 0;
        let mut risk_factors = Vec::new();

        let plastic = profile
            .plastic_use_frequency
            .map_or(0, |frequency| frequency.points());
        total += plastic;
        if plastic >= PLASTIC_FACTOR_THRESHOLD {
            risk_factors.push(HIGH_PLASTIC_USE);
        }

        let processed_food = profile
            .processed_food_frequency
            .map_or(0, |frequency| frequency.points());
        total += processed_food;
        if processed_food >= PROCESSED_FOOD_FACTOR_THRESHOLD {
            risk_factors.push(FREQUENT_PROCESSED_FOOD);
        }

        let water = profile.water_source.map_or(0, |source| source.points());
        total += water;
        if water >= WATER_FACTOR_THRESHOLD {
            risk_factors.push(WATER_CONTAMINATION);
        }

        if profile.occupational_exposure {
            total += OCCUPATIONAL_EXPOSURE_POINTS;
            risk_factors.push(OCCUPATIONAL_EXPOSURE);
        }

        // Diet, sleep, and exercise move the score but never surface a factor.
        total += profile
            .diet_quality
            .map_or(0, |quality| quality.diet_points());
        total += profile
            .sleep_quality
            .map_or(0, |quality| quality.sleep_points());

        if profile
            .stress_level
            .is_some_and(|level| level >= HIGH_STRESS_LEVEL)
        {
            total += HIGH_STRESS_POINTS;
            risk_factors.push(HIGH_STRESS);
        }

        total += profile
            .exercise_frequency
            .map_or(0, |frequency| frequency.points());

        let risk_score = total.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE) as u8;

        ExposureRiskResult {
            risk_score,
            risk_level: exposure_risk_level(risk_score),
            risk_factors,
        }
    }
}

pub(crate) fn exposure_risk_level(risk_score: u8) -> RiskLevel {
    if risk_score >= HIGH_EXPOSURE_SCORE {
        RiskLevel::High
    } else if risk_score >= MODERATE_EXPOSURE_SCORE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
