//! EndoGuard endocrine-disruptor assessment pipeline.
//!
//! Scoring is a pure function of the submitted form: exposure points are tallied from
//! static tables, symptoms are matched against fixed vocabularies, and both feed the
//! recommendation merge and lab-panel lookup. Persistence and HTTP live at the edges in
//! `repository`, `service`, and `router`.

pub mod catalog;
pub mod domain;
pub(crate) mod engine;
pub mod exposure;
pub mod intake;
pub mod orchestrator;
pub mod repository;
pub mod router;
pub mod service;
pub(crate) mod symptoms;
pub mod tables;

#[cfg(test)]
mod tests;

pub use catalog::{LabTest, TestPriority, TestRecommendationCatalog, TestRecommendationGroup};
pub use domain::{
    AssessmentForm, AssessmentId, ExerciseFrequency, ExposureProfile, HormoneSystem,
    PlasticUseFrequency, Priority, ProcessedFoodFrequency, QualityRating, Recommendation,
    RecommendationCategory, RiskLevel, SymptomSet, WaterSource,
};
pub use engine::{sort_by_priority, RecommendationEngine};
pub use exposure::{ExposureRiskResult, ExposureRiskScorer, RiskFactor};
pub use intake::{IntakeGuard, InvalidInputError, NormalizedForm};
pub use orchestrator::{
    Assessment, AssessmentOrchestrator, HormoneHealthSummary, OverallRisk, StepEntry,
};
pub use repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
pub use symptoms::{SymptomAnalysisResult, SymptomAnalyzer};
