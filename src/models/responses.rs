use serde::{Deserialize, Serialize};
use crate::models::domain::{ResultRecord, ScoreBreakdown};

/// Response for the assessment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub assessment_id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub max_score: u32,
    pub result: ResultRecord,
    pub breakdown: ScoreBreakdown,
    pub disclaimer: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}
