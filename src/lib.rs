//! Nutrient Attention - micronutrient attention questionnaire scoring
//!
//! Converts self-reported diet and lifestyle answers into an attention score,
//! a coarse risk tier, nutrient flags and practical tips. Informational only;
//! nothing here is a diagnosis.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{assess, assess_with_breakdown, classify, compute_score, Assessment, MAX_SCORE};
pub use models::{AnswerRecord, AssessmentRequest, InputError, ResultRecord, RiskLevel, RiskZone};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(classify(MAX_SCORE).level, RiskLevel::VeryHigh);
    }
}
