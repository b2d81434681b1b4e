use serde::Serialize;

use super::domain::{
    HormoneSystem, Priority, Recommendation, RecommendationCategory, SymptomSet,
};
use super::tables::SYSTEM_MATCH_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysisResult {
    pub systems_affected: Vec<HormoneSystem>,
    pub recommendations: Vec<Recommendation>,
    pub symptom_count: usize,
    pub symptom_severity: u8,
}

/// Maps reported symptoms onto the four hormone systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymptomAnalyzer;

impl SymptomAnalyzer {
    /// `severity` is carried through untouched; detection relies on label counts only.
    pub fn analyze(&self, symptoms: &SymptomSet, severity: u8) -> SymptomAnalysisResult {
        let mut systems_affected = Vec::new();
        let mut recommendations = Vec::new();

        for system in HormoneSystem::ALL {
            if symptoms.matches(system.symptom_vocabulary()) >= SYSTEM_MATCH_THRESHOLD {
                systems_affected.push(system);
                recommendations.push(system_recommendation(system));
            }
        }

        SymptomAnalysisResult {
            systems_affected,
            recommendations,
            symptom_count: symptoms.len(),
            symptom_severity: severity,
        }
    }
}

fn system_recommendation(system: HormoneSystem) -> Recommendation {
    match system {
        HormoneSystem::Thyroid => Recommendation {
            category: RecommendationCategory::Supplements,
            priority: Priority::High,
            text: "Support thyroid function with selenium, zinc, and iodine-rich foods",
            rationale: "Your symptoms suggest thyroid involvement; these nutrients are cofactors for thyroid hormone production and conversion",
        },
        HormoneSystem::Reproductive => Recommendation {
            category: RecommendationCategory::Diet,
            priority: Priority::High,
            text: "Add cruciferous vegetables and 25-35g of fiber daily to support estrogen metabolism",
            rationale: "Reproductive symptoms are commonly linked to estrogen-mimicking chemicals, and fiber helps clear excess estrogen",
        },
        HormoneSystem::Adrenal => Recommendation {
            category: RecommendationCategory::Lifestyle,
            priority: Priority::High,
            text: "Build a daily stress-recovery routine and keep a consistent sleep-wake schedule",
            rationale: "Your symptoms point to HPA-axis strain; regular recovery practices help normalize cortisol rhythms",
        },
        HormoneSystem::Metabolic => Recommendation {
            category: RecommendationCategory::Diet,
            priority: Priority::High,
            text: "Balance blood sugar by pairing carbohydrates with protein, healthy fat, and fiber",
            rationale: "Metabolic symptoms suggest insulin resistance, which BPA and other EDCs can worsen",
        },
    }
}
