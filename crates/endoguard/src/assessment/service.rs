use std::sync::Arc;

use tracing::{debug, info, warn};

use super::catalog::TestRecommendationGroup;
use super::domain::{AssessmentForm, AssessmentId, HormoneSystem, SymptomSet};
use super::intake::InvalidInputError;
use super::orchestrator::{Assessment, AssessmentOrchestrator};
use super::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};

/// Facade composing the pure orchestrator with optional persistence.
pub struct AssessmentService<R> {
    orchestrator: Arc<AssessmentOrchestrator>,
    repository: Arc<R>,
    persist: bool,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_orchestrator(AssessmentOrchestrator::default(), repository)
    }

    pub fn with_orchestrator(orchestrator: AssessmentOrchestrator, repository: Arc<R>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            repository,
            persist: true,
        }
    }

    /// Skip storing completed assessments.
    pub fn without_persistence(mut self) -> Self {
        self.persist = false;
        self
    }

    /// Score a submission and, when persistence is on, store the result.
    pub fn submit(&self, form: AssessmentForm) -> Result<Assessment, AssessmentServiceError> {
        let assessment = match self.orchestrator.assess(form.clone()) {
            Ok(assessment) => assessment,
            Err(err) => {
                warn!(error = %err, "assessment rejected");
                return Err(err.into());
            }
        };

        info!(
            assessment_id = %assessment.assessment_id,
            exposure_score = assessment.edc_exposure.risk_score,
            overall_level = assessment.overall_risk.level.label(),
            systems_affected = assessment.hormone_health.systems_affected.len(),
            "assessment completed"
        );

        if self.persist {
            let record = AssessmentRecord {
                assessment,
                submitted_form: form,
            };
            let stored = self.repository.insert(record)?;
            debug!(assessment_id = %stored.id(), "assessment stored");
            return Ok(stored.assessment);
        }

        Ok(assessment)
    }

    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.recent(limit)?)
    }

    pub fn recommended_tests(
        &self,
        symptoms: &SymptomSet,
        systems_affected: &[HormoneSystem],
    ) -> Vec<TestRecommendationGroup> {
        self.orchestrator
            .catalog()
            .recommended_tests(symptoms, systems_affected)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Input(#[from] InvalidInputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
