use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::domain::{
    AssessmentForm, AssessmentId, ExerciseFrequency, ExposureProfile, PlasticUseFrequency,
    ProcessedFoodFrequency, QualityRating, SymptomSet, WaterSource,
};
use crate::assessment::orchestrator::AssessmentOrchestrator;
use crate::assessment::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use crate::assessment::service::AssessmentService;
use crate::assessment::assessment_router;

/// Profile where every category contributes zero points.
pub(super) fn neutral_profile() -> ExposureProfile {
    ExposureProfile {
        plastic_use_frequency: Some(PlasticUseFrequency::Minimal),
        processed_food_frequency: Some(ProcessedFoodFrequency::Rarely),
        water_source: Some(WaterSource::ReverseOsmosis),
        occupational_exposure: false,
        diet_quality: Some(QualityRating::Good),
        sleep_quality: Some(QualityRating::Good),
        stress_level: Some(3),
        exercise_frequency: Some(ExerciseFrequency::Regular),
    }
}

/// Profile that maxes out every category.
pub(super) fn worst_case_profile() -> ExposureProfile {
    ExposureProfile {
        plastic_use_frequency: Some(PlasticUseFrequency::High),
        processed_food_frequency: Some(ProcessedFoodFrequency::Daily),
        water_source: Some(WaterSource::TapUnfiltered),
        occupational_exposure: true,
        diet_quality: Some(QualityRating::Poor),
        sleep_quality: Some(QualityRating::Poor),
        stress_level: Some(8),
        exercise_frequency: Some(ExerciseFrequency::Rarely),
    }
}

pub(super) fn symptoms(labels: &[&str]) -> SymptomSet {
    SymptomSet::new(labels.iter().copied())
}

pub(super) fn form(profile: ExposureProfile, labels: &[&str], severity: Option<u8>) -> AssessmentForm {
    AssessmentForm {
        profile,
        symptoms: Some(labels.iter().map(|label| label.to_string()).collect()),
        symptom_severity: severity,
    }
}

/// The worst-case profile with two thyroid symptoms at severity 9.
pub(super) fn high_risk_form() -> AssessmentForm {
    form(
        worst_case_profile(),
        &["Unexplained weight gain or loss", "Fatigue or low energy"],
        Some(9),
    )
}

pub(super) fn completed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 14, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn fixed_id(suffix: &str) -> AssessmentId {
    AssessmentId(format!("EG-test-{suffix}"))
}

pub(super) fn orchestrator() -> AssessmentOrchestrator {
    AssessmentOrchestrator::default()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
    order: Arc<Mutex<Vec<AssessmentId>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(record.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id().clone(), record.clone());
        self.order.lock().expect("lock").push(record.id().clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let records = self.records.lock().expect("lock");
        let order = self.order.lock().expect("lock");
        Ok(order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|id| records.get(id).cloned())
            .collect())
    }
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("lock").len()
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
