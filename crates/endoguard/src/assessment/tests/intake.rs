use serde_json::json;

use super::common::*;
use crate::assessment::domain::{AssessmentForm, PlasticUseFrequency, QualityRating, WaterSource};
use crate::assessment::intake::{IntakeGuard, InvalidInputError};

#[test]
fn camel_case_form_decodes() {
    let form = AssessmentForm::from_json(json!({
        "plasticUseFrequency": "high",
        "processedFoodFrequency": "several_times_week",
        "waterSource": "reverse_osmosis",
        "occupationalExposure": true,
        "dietQuality": "fair",
        "sleepQuality": "good",
        "stressLevel": 7,
        "exerciseFrequency": "daily",
        "symptoms": ["Dry skin"],
        "symptomSeverity": 3
    }))
    .expect("form decodes");

    assert_eq!(
        form.profile.plastic_use_frequency,
        Some(PlasticUseFrequency::High)
    );
    assert_eq!(form.profile.water_source, Some(WaterSource::ReverseOsmosis));
    assert_eq!(form.profile.diet_quality, Some(QualityRating::Fair));
    assert!(form.profile.occupational_exposure);
    assert_eq!(form.profile.stress_level, Some(7));
    assert_eq!(form.symptom_severity, Some(3));
}

#[test]
fn unknown_enum_strings_decode_as_unrecognized() {
    let form = AssessmentForm::from_json(json!({
        "plasticUseFrequency": "extreme",
        "waterSource": "spring",
    }))
    .expect("legacy values still decode");

    assert_eq!(
        form.profile.plastic_use_frequency,
        Some(PlasticUseFrequency::Unrecognized)
    );
    assert_eq!(form.profile.water_source, Some(WaterSource::Unrecognized));
}

#[test]
fn malformed_shapes_are_rejected() {
    let cases = [
        json!({ "symptoms": "Dry skin" }),
        json!({ "occupationalExposure": "yes" }),
        json!({ "stressLevel": -1 }),
        json!({ "symptomSeverity": 6.5 }),
        json!(["not", "an", "object"]),
        json!(null),
    ];

    for case in cases {
        match AssessmentForm::from_json(case.clone()) {
            Err(InvalidInputError::Malformed { .. }) => {}
            other => panic!("expected malformed error for {case}, got {other:?}"),
        }
    }
}

#[test]
fn invalid_json_bytes_are_rejected() {
    match AssessmentForm::from_slice(b"{\"plasticUseFrequency\":") {
        Err(InvalidInputError::Malformed { message }) => assert!(!message.is_empty()),
        other => panic!("expected malformed error, got {other:?}"),
    }
}

#[test]
fn defaults_fill_missing_symptoms_and_severity() {
    let normalized = IntakeGuard
        .normalize(AssessmentForm::default())
        .expect("empty form normalizes");

    assert!(normalized.symptoms.is_empty());
    assert_eq!(normalized.symptom_severity, 5);
}

#[test]
fn explicit_zero_severity_is_kept() {
    let normalized = IntakeGuard
        .normalize(form(neutral_profile(), &[], Some(0)))
        .expect("normalizes");

    assert_eq!(normalized.symptom_severity, 0);
}

#[test]
fn scale_values_above_ten_are_out_of_range() {
    let mut stressed = form(neutral_profile(), &[], Some(5));
    stressed.profile.stress_level = Some(11);

    match IntakeGuard.normalize(stressed) {
        Err(InvalidInputError::OutOfRange { field, value, .. }) => {
            assert_eq!(field, "stressLevel");
            assert_eq!(value, 11);
        }
        other => panic!("expected out of range, got {other:?}"),
    }

    match IntakeGuard.normalize(form(neutral_profile(), &[], Some(42))) {
        Err(err @ InvalidInputError::OutOfRange { .. }) => {
            assert!(err.to_string().contains("symptomSeverity"));
        }
        other => panic!("expected out of range, got {other:?}"),
    }
}
