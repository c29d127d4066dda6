use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::questionnaire::RESULT_DISCLAIMER;
use crate::core::{assess_with_breakdown, questionnaire, MAX_SCORE};
use crate::models::{
    AnswerRecord, AssessmentRequest, AssessmentResponse, ErrorResponse, FieldError,
    HealthResponse, InputError,
};

/// Configure all assessment-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/questionnaire", web::get().to(get_questionnaire))
        .route("/assessments", web::post().to(create_assessment));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Questionnaire schema endpoint
///
/// GET /api/v1/questionnaire
async fn get_questionnaire() -> impl Responder {
    HttpResponse::Ok().json(questionnaire())
}

/// Score a questionnaire submission
///
/// POST /api/v1/assessments
///
/// Request body:
/// ```json
/// {
///   "age": 29,
///   "sex": "female",
///   "dietPattern": "vegan",
///   "fruitVegServings": 1,
///   "dairyIntake": "rare",
///   "redMeatFrequency": "rare",
///   "oilyFishFrequency": "rare",
///   "sunExposure": "low",
///   "fatigue": "often",
///   "hairSkin": "frequentIssues",
///   "digestion": "oftenOff",
///   "supplements": "none"
/// }
/// ```
async fn create_assessment(req: web::Json<AssessmentRequest>) -> impl Responder {
    let answers = match AnswerRecord::try_from(&*req) {
        Ok(answers) => answers,
        Err(first) => {
            tracing::info!(
                "Rejected assessment request: {} (field_errors={:?})",
                first,
                req.validate().err()
            );
            return HttpResponse::BadRequest().json(validation_error_response(&first, &req));
        }
    };

    let assessment = assess_with_breakdown(&answers);

    tracing::debug!(
        "Assessment breakdown: raw_total={}, contributions={:?}",
        assessment.breakdown.raw_total,
        assessment.breakdown.contributions
    );

    let response = AssessmentResponse {
        assessment_id: uuid::Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
        max_score: MAX_SCORE,
        result: assessment.result,
        breakdown: assessment.breakdown,
        disclaimer: RESULT_DISCLAIMER.to_string(),
    };

    tracing::info!(
        "Assessment {} scored {} ({}) with {} nutrient flags and {} tips",
        response.assessment_id,
        response.result.score,
        response.result.zone.level.as_str(),
        response.result.flags.nutrient_flags.len(),
        response.result.tips.len()
    );

    HttpResponse::Ok().json(response)
}

/// Lead with the first problem in questionnaire order, list them all in details
fn validation_error_response(first: &InputError, req: &AssessmentRequest) -> ErrorResponse {
    let details = req
        .problems()
        .iter()
        .map(|problem| FieldError {
            field: problem.field().to_string(),
            code: problem.code().to_string(),
            message: problem.to_string(),
        })
        .collect();

    input_error_response(first, details)
}

fn input_error_response(error: &InputError, details: Vec<FieldError>) -> ErrorResponse {
    ErrorResponse {
        error: error.code().to_string(),
        message: error.to_string(),
        status_code: 400,
        details,
    }
}
