// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnswerRecord, DairyIntake, DietPattern, Digestion, FactorContribution, Fatigue, FlagSummary,
    HairSkin, OilyFishFrequency, RedMeatFrequency, ResultRecord, RiskLevel, RiskZone,
    ScoreBreakdown, Sex, SunExposure, Supplements, TipAnswers, Choice, UnknownChoice,
};
pub use requests::{AssessmentRequest, InputError, NumericInput};
pub use responses::{AssessmentResponse, ErrorResponse, FieldError, HealthResponse};
