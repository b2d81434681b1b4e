use super::domain::{ExposureProfile, Priority, Recommendation, RecommendationCategory};
use super::exposure::ExposureRiskResult;
use super::symptoms::SymptomAnalysisResult;
use super::tables::{DETOX_SUPPORT_SCORE, PRODUCT_SWAP_SCORE};

const PRODUCT_SWAP: Recommendation = Recommendation {
    category: RecommendationCategory::Products,
    priority: Priority::Urgent,
    text: "Replace plastic food containers, non-stick cookware, and fragranced personal care products",
    rationale: "Your exposure score is high; swapping the products you touch every day is the fastest way to cut your EDC load",
};

const SLEEP_HYGIENE: Recommendation = Recommendation {
    category: RecommendationCategory::Lifestyle,
    priority: Priority::High,
    text: "Aim for 7-9 hours of sleep in a dark, cool room on a consistent schedule",
    rationale: "Poor sleep disrupts cortisol, insulin, and reproductive hormone rhythms",
};

const MOVEMENT: Recommendation = Recommendation {
    category: RecommendationCategory::Lifestyle,
    priority: Priority::Medium,
    text: "Work up to 150 minutes of moderate exercise per week",
    rationale: "Regular movement improves insulin sensitivity and supports elimination of stored toxins",
};

const WHOLE_FOOD_DIET: Recommendation = Recommendation {
    category: RecommendationCategory::Diet,
    priority: Priority::High,
    text: "Shift toward organic, whole-food meals and cut back on packaged foods",
    rationale: "Diet quality drives both EDC intake and the nutrients your body needs to clear them",
};

const DETOX_SUPPORT: Recommendation = Recommendation {
    category: RecommendationCategory::Supplements,
    priority: Priority::Medium,
    text: "Ask your provider about liver detox support such as milk thistle, NAC, or DIM",
    rationale: "An elevated exposure score suggests a higher chemical load for your liver to process",
};

/// Merges symptom-driven advice with exposure and lifestyle triggers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Returns the merged list already sorted by priority.
    pub fn build_recommendations(
        &self,
        profile: &ExposureProfile,
        exposure: &ExposureRiskResult,
        symptoms: &SymptomAnalysisResult,
    ) -> Vec<Recommendation> {
        let mut recommendations = symptoms.recommendations.clone();

        if exposure.risk_score >= PRODUCT_SWAP_SCORE {
            recommendations.push(PRODUCT_SWAP);
        }

        if profile
            .sleep_quality
            .is_some_and(|quality| quality.needs_attention())
        {
            recommendations.push(SLEEP_HYGIENE);
        }

        if profile
            .exercise_frequency
            .is_some_and(|frequency| frequency.needs_attention())
        {
            recommendations.push(MOVEMENT);
        }

        if profile
            .diet_quality
            .is_some_and(|quality| quality.needs_attention())
        {
            recommendations.push(WHOLE_FOOD_DIET);
        }

        if exposure.risk_score >= DETOX_SUPPORT_SCORE {
            recommendations.push(DETOX_SUPPORT);
        }

        sort_by_priority(&mut recommendations);
        recommendations
    }
}

/// Stable sort by priority rank; equal priorities keep insertion order.
pub fn sort_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
}
