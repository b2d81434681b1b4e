use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::{TestRecommendationCatalog, TestRecommendationGroup};
use super::domain::{AssessmentForm, AssessmentId, HormoneSystem, Recommendation, RiskLevel};
use super::engine::RecommendationEngine;
use super::exposure::{ExposureRiskResult, ExposureRiskScorer, RiskFactor};
use super::intake::{IntakeGuard, InvalidInputError};
use super::symptoms::{SymptomAnalysisResult, SymptomAnalyzer};
use super::tables::{
    HIGH_EXPOSURE_SCORE, HIGH_SYMPTOM_SEVERITY, MODERATE_EXPOSURE_SCORE,
    MODERATE_SYMPTOM_SEVERITY,
};

const PRIMARY_CONCERN_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HormoneHealthSummary {
    pub symptom_count: usize,
    pub symptom_severity: u8,
    pub systems_affected: Vec<HormoneSystem>,
    pub primary_concerns: Vec<HormoneSystem>,
}

/// Blend of exposure score and symptom severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallRisk {
    pub level: RiskLevel,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepEntry {
    pub step: u8,
    pub title: &'static str,
    pub description: String,
    pub timeframe: &'static str,
}

/// Complete result of one EndoGuard assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub assessment_id: AssessmentId,
    pub completed_at: DateTime<Utc>,
    pub edc_exposure: ExposureRiskResult,
    pub hormone_health: HormoneHealthSummary,
    pub overall_risk: OverallRisk,
    pub recommendations: Vec<Recommendation>,
    pub test_recommendations: Vec<TestRecommendationGroup>,
    pub next_steps: Vec<StepEntry>,
}

/// Runs intake, scoring, symptom analysis, recommendations, and lab lookup in sequence.
#[derive(Debug, Clone, Default)]
pub struct AssessmentOrchestrator {
    guard: IntakeGuard,
    scorer: ExposureRiskScorer,
    analyzer: SymptomAnalyzer,
    engine: RecommendationEngine,
    catalog: TestRecommendationCatalog,
}

impl AssessmentOrchestrator {
    pub fn new(catalog: TestRecommendationCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &TestRecommendationCatalog {
        &self.catalog
    }

    pub fn assess(&self, form: AssessmentForm) -> Result<Assessment, InvalidInputError> {
        self.assess_at(form, AssessmentId::generate(), Utc::now())
    }

    /// Deterministic variant of [`assess`](Self::assess) with caller-supplied identity.
    pub fn assess_at(
        &self,
        form: AssessmentForm,
        assessment_id: AssessmentId,
        completed_at: DateTime<Utc>,
    ) -> Result<Assessment, InvalidInputError> {
        let form = self.guard.normalize(form)?;

        let exposure = self.scorer.score(&form.profile);
        let symptoms = self
            .analyzer
            .analyze(&form.symptoms, form.symptom_severity);
        let recommendations =
            self.engine
                .build_recommendations(&form.profile, &exposure, &symptoms);
        let test_recommendations = self
            .catalog
            .recommended_tests(&form.symptoms, &symptoms.systems_affected);

        let overall_risk = overall_risk(exposure.risk_score, symptoms.symptom_severity);
        let next_steps = next_steps(&exposure.risk_factors, &test_recommendations);

        Ok(Assessment {
            assessment_id,
            completed_at,
            edc_exposure: exposure,
            hormone_health: hormone_health(symptoms),
            overall_risk,
            recommendations,
            test_recommendations,
            next_steps,
        })
    }
}

fn hormone_health(symptoms: SymptomAnalysisResult) -> HormoneHealthSummary {
    let primary_concerns = symptoms
        .systems_affected
        .iter()
        .take(PRIMARY_CONCERN_LIMIT)
        .copied()
        .collect();

    HormoneHealthSummary {
        symptom_count: symptoms.symptom_count,
        symptom_severity: symptoms.symptom_severity,
        systems_affected: symptoms.systems_affected,
        primary_concerns,
    }
}

/// Level uses different thresholds than `ExposureRiskResult::risk_level`, so the two can
/// disagree for the same submission.
pub(crate) fn overall_risk(exposure_score: u8, symptom_severity: u8) -> OverallRisk {
    let combined = u16::from(exposure_score) + u16::from(symptom_severity) * 10;
    // half-up rounding of combined / 2
    let score = ((combined + 1) / 2).min(u16::from(u8::MAX)) as u8;

    let level = if exposure_score >= HIGH_EXPOSURE_SCORE || symptom_severity >= HIGH_SYMPTOM_SEVERITY
    {
        RiskLevel::High
    } else if exposure_score >= MODERATE_EXPOSURE_SCORE
        || symptom_severity >= MODERATE_SYMPTOM_SEVERITY
    {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    OverallRisk { level, score }
}

fn next_steps(
    risk_factors: &[RiskFactor],
    test_recommendations: &[TestRecommendationGroup],
) -> Vec<StepEntry> {
    let mut steps = vec![StepEntry {
        step: 0,
        title: "Review your personalized recommendations",
        description: "Start with the urgent and high priority items; they offer the largest benefit for the least effort.".to_string(),
        timeframe: "This week",
    }];

    if let Some(panel) = test_recommendations.first() {
        steps.push(StepEntry {
            step: 0,
            title: "Discuss lab testing with your provider",
            description: format!(
                "Bring the suggested {} panel to your next appointment to confirm what your symptoms suggest.",
                panel.name
            ),
            timeframe: "Within 2 weeks",
        });
    }

    if let Some(factor) = risk_factors.first() {
        steps.push(StepEntry {
            step: 0,
            title: "Reduce your biggest exposure source",
            description: format!("{}: {}.", factor.factor, factor.recommendation),
            timeframe: "Within 30 days",
        });
    }

    steps.push(StepEntry {
        step: 0,
        title: "Reassess your progress",
        description: "Retake the EndoGuard assessment to see how your exposure score and symptoms have changed.".to_string(),
        timeframe: "In 90 days",
    });

    for (index, step) in steps.iter_mut().enumerate() {
        step.step = index as u8 + 1;
    }

    steps
}
