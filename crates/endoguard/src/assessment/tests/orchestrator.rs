use super::common::*;
use crate::assessment::domain::{
    ExposureProfile, HormoneSystem, PlasticUseFrequency, Priority, RiskLevel,
};
use crate::assessment::intake::InvalidInputError;

#[test]
fn high_risk_scenario_matches_expected_summary() {
    let assessment = orchestrator()
        .assess_at(high_risk_form(), fixed_id("e2e"), completed_at())
        .expect("assessment succeeds");

    assert_eq!(assessment.edc_exposure.risk_score, 100);
    assert_eq!(assessment.edc_exposure.risk_level, RiskLevel::High);
    assert_eq!(
        assessment.hormone_health.systems_affected,
        vec![HormoneSystem::Thyroid]
    );
    assert_eq!(assessment.hormone_health.symptom_count, 2);
    assert_eq!(assessment.hormone_health.symptom_severity, 9);
    assert_eq!(assessment.overall_risk.level, RiskLevel::High);
    assert_eq!(assessment.overall_risk.score, 95);
    assert_eq!(assessment.recommendations[0].priority, Priority::Urgent);

    let panels: Vec<_> = assessment
        .test_recommendations
        .iter()
        .map(|group| group.key)
        .collect();
    assert_eq!(panels, vec!["thyroid_dysfunction"]);
}

#[test]
fn identical_inputs_produce_identical_assessments_apart_from_id() {
    let orchestrator = orchestrator();

    let first = orchestrator
        .assess_at(high_risk_form(), fixed_id("a"), completed_at())
        .expect("first run");
    let mut second = orchestrator
        .assess_at(high_risk_form(), fixed_id("b"), completed_at())
        .expect("second run");

    assert_ne!(first.assessment_id, second.assessment_id);
    second.assessment_id = first.assessment_id.clone();
    assert_eq!(first, second);
}

#[test]
fn exposure_and_overall_levels_can_disagree() {
    let assessment = orchestrator()
        .assess_at(form(neutral_profile(), &[], Some(9)), fixed_id("diverge"), completed_at())
        .expect("assessment succeeds");

    assert_eq!(assessment.edc_exposure.risk_level, RiskLevel::Low);
    assert_eq!(assessment.overall_risk.level, RiskLevel::High);
    assert_eq!(assessment.overall_risk.score, 45);
}

#[test]
fn missing_severity_defaults_to_moderate_overall_risk() {
    let mut submission = form(neutral_profile(), &[], None);
    submission.symptoms = None;

    let assessment = orchestrator()
        .assess_at(submission, fixed_id("defaults"), completed_at())
        .expect("assessment succeeds");

    assert_eq!(assessment.hormone_health.symptom_count, 0);
    assert_eq!(assessment.hormone_health.symptom_severity, 5);
    assert_eq!(assessment.overall_risk.level, RiskLevel::Moderate);
    assert_eq!(assessment.overall_risk.score, 25);
    assert!(assessment.recommendations.is_empty());
    assert!(assessment.test_recommendations.is_empty());
}

#[test]
fn primary_concerns_are_capped_at_three() {
    let submission = form(
        neutral_profile(),
        &[
            "Dry skin",
            "Cold intolerance",
            "PMS symptoms",
            "Low libido",
            "Salt cravings",
            "Mood swings",
            "Sugar cravings",
            "Insulin resistance",
        ],
        Some(6),
    );

    let assessment = orchestrator()
        .assess_at(submission, fixed_id("concerns"), completed_at())
        .expect("assessment succeeds");

    assert_eq!(assessment.hormone_health.systems_affected.len(), 4);
    assert_eq!(
        assessment.hormone_health.primary_concerns,
        vec![
            HormoneSystem::Thyroid,
            HormoneSystem::Reproductive,
            HormoneSystem::Adrenal,
        ]
    );
}

#[test]
fn next_steps_reference_panels_and_risk_factors() {
    let assessment = orchestrator()
        .assess_at(high_risk_form(), fixed_id("steps"), completed_at())
        .expect("assessment succeeds");

    let steps = &assessment.next_steps;
    assert_eq!(steps.len(), 4);
    assert_eq!(
        steps.iter().map(|step| step.step).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert!(steps[1].description.contains("Thyroid Dysfunction"));
    assert!(steps[2].description.starts_with("High plastic use"));
}

#[test]
fn out_of_range_input_fails_fast() {
    let profile = ExposureProfile {
        plastic_use_frequency: Some(PlasticUseFrequency::High),
        stress_level: Some(12),
        ..ExposureProfile::default()
    };

    let result = orchestrator().assess_at(form(profile, &[], None), fixed_id("bad"), completed_at());

    assert!(matches!(result, Err(InvalidInputError::OutOfRange { .. })));
}

#[test]
fn serialized_assessment_uses_wire_names() {
    let assessment = orchestrator()
        .assess_at(high_risk_form(), fixed_id("wire"), completed_at())
        .expect("assessment succeeds");

    let value = serde_json::to_value(&assessment).expect("serializes");

    assert_eq!(value["assessmentId"], "EG-test-wire");
    assert_eq!(value["completedAt"], "2025-10-01T14:30:00Z");
    assert_eq!(value["edcExposure"]["riskScore"], 100);
    assert_eq!(value["edcExposure"]["riskLevel"], "HIGH");
    assert_eq!(value["hormoneHealth"]["systemsAffected"][0], "Thyroid");
    assert_eq!(value["overallRisk"]["level"], "HIGH");
    assert_eq!(value["overallRisk"]["score"], 95);
    assert_eq!(value["recommendations"][0]["priority"], "urgent");
    assert_eq!(value["recommendations"][0]["category"], "products");
    assert_eq!(value["testRecommendations"][0]["name"], "Thyroid Dysfunction");
    assert_eq!(value["nextSteps"][0]["step"], 1);
}

#[test]
fn generated_ids_are_prefixed_and_unique() {
    let orchestrator = orchestrator();

    let first = orchestrator.assess(high_risk_form()).expect("first");
    let second = orchestrator.assess(high_risk_form()).expect("second");

    assert!(first.assessment_id.as_str().starts_with("EG-"));
    assert_ne!(first.assessment_id, second.assessment_id);
}
