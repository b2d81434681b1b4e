use super::common::*;
use crate::assessment::domain::{
    ExerciseFrequency, ExposureProfile, Priority, QualityRating, RecommendationCategory,
    RiskLevel,
};
use crate::assessment::engine::{sort_by_priority, RecommendationEngine};
use crate::assessment::exposure::ExposureRiskResult;
use crate::assessment::symptoms::SymptomAnalyzer;

fn exposure(score: u8) -> ExposureRiskResult {
    ExposureRiskResult {
        risk_score: score,
        risk_level: RiskLevel::Low,
        risk_factors: Vec::new(),
    }
}

#[test]
fn neutral_inputs_produce_no_recommendations() {
    let analysis = SymptomAnalyzer.analyze(&symptoms(&[]), 5);

    let recommendations =
        RecommendationEngine.build_recommendations(&neutral_profile(), &exposure(10), &analysis);

    assert!(recommendations.is_empty());
}

#[test]
fn exposure_thresholds_trigger_product_and_detox_advice() {
    let analysis = SymptomAnalyzer.analyze(&symptoms(&[]), 5);

    let at_forty =
        RecommendationEngine.build_recommendations(&neutral_profile(), &exposure(40), &analysis);
    assert_eq!(at_forty.len(), 1);
    assert_eq!(at_forty[0].category, RecommendationCategory::Supplements);
    assert_eq!(at_forty[0].priority, Priority::Medium);

    let at_fifty =
        RecommendationEngine.build_recommendations(&neutral_profile(), &exposure(50), &analysis);
    let categories: Vec<_> = at_fifty.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            RecommendationCategory::Products,
            RecommendationCategory::Supplements
        ]
    );
    assert_eq!(at_fifty[0].priority, Priority::Urgent);
}

#[test]
fn fair_and_poor_lifestyle_answers_trigger_advice() {
    let analysis = SymptomAnalyzer.analyze(&symptoms(&[]), 5);
    let profile = ExposureProfile {
        sleep_quality: Some(QualityRating::Fair),
        exercise_frequency: Some(ExerciseFrequency::Occasional),
        diet_quality: Some(QualityRating::Poor),
        ..neutral_profile()
    };

    let recommendations =
        RecommendationEngine.build_recommendations(&profile, &exposure(0), &analysis);

    let summary: Vec<_> = recommendations
        .iter()
        .map(|r| (r.category, r.priority))
        .collect();
    assert_eq!(
        summary,
        vec![
            (RecommendationCategory::Lifestyle, Priority::High),
            (RecommendationCategory::Diet, Priority::High),
            (RecommendationCategory::Lifestyle, Priority::Medium),
        ]
    );
}

#[test]
fn mixed_priorities_sort_stably() {
    let analysis = SymptomAnalyzer.analyze(&symptoms(&["Dry skin", "Cold intolerance"]), 5);

    let recommendations = RecommendationEngine.build_recommendations(
        &worst_case_profile(),
        &exposure(100),
        &analysis,
    );

    let order: Vec<_> = recommendations
        .iter()
        .map(|r| (r.priority, r.category))
        .collect();
    assert_eq!(
        order,
        vec![
            (Priority::Urgent, RecommendationCategory::Products),
            (Priority::High, RecommendationCategory::Supplements),
            (Priority::High, RecommendationCategory::Lifestyle),
            (Priority::High, RecommendationCategory::Diet),
            (Priority::Medium, RecommendationCategory::Lifestyle),
            (Priority::Medium, RecommendationCategory::Supplements),
        ]
    );
}

#[test]
fn sorting_is_idempotent() {
    let analysis = SymptomAnalyzer.analyze(&symptoms(&["Dry skin", "Cold intolerance"]), 5);
    let recommendations = RecommendationEngine.build_recommendations(
        &worst_case_profile(),
        &exposure(100),
        &analysis,
    );

    let mut resorted = recommendations.clone();
    sort_by_priority(&mut resorted);

    assert_eq!(resorted, recommendations);
}
