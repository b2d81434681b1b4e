use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentForm, AssessmentId, HormoneSystem, SymptomSet};
use super::intake::InvalidInputError;
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing the EndoGuard assessment endpoints.
///
/// Every rejected body, whether it fails to decode or carries an out-of-range value such as
/// a fractional or above-10 `symptomSeverity`, comes back as 400 with the
/// `{ "error": "invalid_input", "message": .. }` envelope.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/endoguard/assess", post(assess_handler::<R>))
        .route(
            "/api/endoguard/assessments/:assessment_id",
            get(fetch_handler::<R>),
        )
        .route(
            "/api/endoguard/test-recommendations",
            post(test_recommendations_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TestRecommendationRequest {
    pub(crate) symptoms: Vec<String>,
    /// Unknown system names are ignored.
    pub(crate) systems_affected: Vec<String>,
}

impl TestRecommendationRequest {
    fn from_slice(raw: &[u8]) -> Result<Self, InvalidInputError> {
        serde_json::from_slice(raw).map_err(|err| InvalidInputError::Malformed {
            message: err.to_string(),
        })
    }
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    body: Bytes,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let outcome = AssessmentForm::from_slice(&body)
        .map_err(AssessmentServiceError::from)
        .and_then(|form| service.submit(form));

    match outcome {
        Ok(assessment) => {
            let payload = json!({ "success": true, "assessment": assessment });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.get(&AssessmentId(assessment_id)) {
        Ok(record) => {
            let payload = json!({ "success": true, "assessment": record.assessment });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn test_recommendations_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    body: Bytes,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let request = match TestRecommendationRequest::from_slice(&body) {
        Ok(request) => request,
        Err(err) => return error_response(err.into()),
    };

    let systems: Vec<HormoneSystem> = request
        .systems_affected
        .iter()
        .filter_map(|label| HormoneSystem::from_label(label))
        .collect();
    let symptoms = SymptomSet::from(request.symptoms);

    let groups = service.recommended_tests(&symptoms, &systems);
    let payload = json!({ "success": true, "testRecommendations": groups });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn error_response(err: AssessmentServiceError) -> Response {
    let (status, kind) = match &err {
        AssessmentServiceError::Input(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "not_found")
        }
        AssessmentServiceError::Repository(RepositoryError::Conflict) => {
            (StatusCode::CONFLICT, "conflict")
        }
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "storage_unavailable")
        }
    };

    let payload = json!({
        "error": kind,
        "message": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
