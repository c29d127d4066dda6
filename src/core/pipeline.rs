use crate::core::{
    flags::build_flags,
    interpretation::interpret,
    scoring::score_breakdown,
    tips::build_tips,
    zones::classify,
};
use crate::models::{AnswerRecord, ResultRecord, ScoreBreakdown, TipAnswers};

/// Result of the assessment together with how its score was reached
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub result: ResultRecord,
    pub breakdown: ScoreBreakdown,
}

/// Run the full scoring pipeline for one submission
///
/// # Pipeline Stages
/// 1. Score (clamped to 40)
/// 2. Risk zone from the clamped score
/// 3. Interpretation for the zone
/// 4. Nutrient flags and summary lines
/// 5. Tips for the zone and answers
///
/// Pure and deterministic: the same answers always give the same record.
pub fn assess(answers: &AnswerRecord) -> ResultRecord {
    assess_with_breakdown(answers).result
}

/// Run the pipeline and keep the per-factor score breakdown
pub fn assess_with_breakdown(answers: &AnswerRecord) -> Assessment {
    let breakdown = score_breakdown(answers);
    let zone = classify(breakdown.score);
    let interpretation = interpret(zone.level).to_string();
    let flags = build_flags(answers);
    let tips = build_tips(&zone, TipAnswers::from(answers));

    Assessment {
        result: ResultRecord {
            score: breakdown.score,
            zone,
            interpretation,
            flags,
            tips,
            inputs: *answers,
        },
        breakdown,
    }
}
