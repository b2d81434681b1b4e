use serde_json::Value;

use super::domain::{AssessmentForm, ExposureProfile, SymptomSet};
use super::tables::{DEFAULT_SYMPTOM_SEVERITY, MAX_SCALE_VALUE};

/// Raised when a submission does not have the shape the scoring pipeline needs.
///
/// Unknown enum strings are not errors; they decode and score zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("malformed assessment form: {message}")]
    Malformed { message: String },
    #[error("{field} must be between 0 and {max} (found {value})")]
    OutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
}

impl AssessmentForm {
    pub fn from_json(value: Value) -> Result<Self, InvalidInputError> {
        if !value.is_object() {
            return Err(InvalidInputError::Malformed {
                message: "expected a JSON object".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|err| InvalidInputError::Malformed {
            message: err.to_string(),
        })
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self, InvalidInputError> {
        let value = serde_json::from_slice::<Value>(raw).map_err(|err| {
            InvalidInputError::Malformed {
                message: err.to_string(),
            }
        })?;
        Self::from_json(value)
    }
}

/// Submission after defaults have been filled in and ranges checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedForm {
    pub profile: ExposureProfile,
    pub symptoms: SymptomSet,
    pub symptom_severity: u8,
}

/// Turns a raw form into a `NormalizedForm`.
///
/// Missing `symptoms` become an empty set and missing `symptomSeverity` becomes 5. An
/// explicit severity of 0 is kept as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn normalize(&self, form: AssessmentForm) -> Result<NormalizedForm, InvalidInputError> {
        let AssessmentForm {
            profile,
            symptoms,
            symptom_severity,
        } = form;

        if let Some(level) = profile.stress_level {
            check_scale("stressLevel", level)?;
        }

        let symptom_severity = symptom_severity.unwrap_or(DEFAULT_SYMPTOM_SEVERITY);
        check_scale("symptomSeverity", symptom_severity)?;

        Ok(NormalizedForm {
            profile,
            symptoms: symptoms.map(SymptomSet::from).unwrap_or_default(),
            symptom_severity,
        })
    }
}

fn check_scale(field: &'static str, value: u8) -> Result<(), InvalidInputError> {
    if value > MAX_SCALE_VALUE {
        return Err(InvalidInputError::OutOfRange {
            field,
            value,
            max: MAX_SCALE_VALUE,
        });
    }
    Ok(())
}
