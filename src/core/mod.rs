// Core algorithm exports
pub mod flags;
pub mod interpretation;
pub mod pipeline;
pub mod questionnaire;
pub mod scoring;
pub mod tips;
pub mod zones;

#[cfg(test)]
pub(crate) mod fixtures;

pub use flags::build_flags;
pub use interpretation::interpret;
pub use pipeline::{assess, assess_with_breakdown, Assessment};
pub use questionnaire::{questionnaire, Questionnaire};
pub use scoring::{compute_score, score_breakdown, MAX_SCORE};
pub use tips::build_tips;
pub use zones::{classify, risk_level};
