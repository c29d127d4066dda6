use crate::models::{RiskLevel, RiskZone};

/// Upper bound (inclusive) of each tier below `VeryHigh`
const LOW_MAX: u32 = 9;
const MODERATE_MAX: u32 = 17;
const HIGH_MAX: u32 = 27;

/// Map a score to its risk tier
///
/// Boundaries are inclusive on the upper end:
/// 0-9 low, 10-17 moderate, 18-27 high, 28+ very high.
#[inline]
pub fn risk_level(score: u32) -> RiskLevel {
    match score {
        s if s <= LOW_MAX => RiskLevel::Low,
        s if s <= MODERATE_MAX => RiskLevel::Moderate,
        s if s <= HIGH_MAX => RiskLevel::High,
        _ => RiskLevel::VeryHigh,
    }
}

/// Classify a score into a zone with its display label and description
pub fn classify(score: u32) -> RiskZone {
    let level = risk_level(score);
    RiskZone {
        level,
        label: zone_label(level).to_string(),
        description: zone_description(level).to_string(),
    }
}

pub fn zone_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Lower Attention Needed",
        RiskLevel::Moderate => "Some Attention Helpful",
        RiskLevel::High => "Higher Attention Suggested",
        RiskLevel::VeryHigh => "Strong Attention Suggested",
    }
}

pub fn zone_description(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "From a diet-pattern perspective, your routine doesn’t raise strong red flags for micronutrient gaps."
        }
        RiskLevel::Moderate => {
            "There are a few areas where your intake or lifestyle could make certain vitamins or minerals worth keeping an eye on."
        }
        RiskLevel::High => {
            "Several factors (diet pattern, low intake of certain foods, limited sun, or symptoms) suggest that micronutrient coverage might be patchy."
        }
        RiskLevel::VeryHigh => {
            "Multiple elements point toward a higher chance of micronutrient gaps. This doesn’t mean something is wrong, but it does make a check-in with food variety and possibly labs more relevant."
        }
    }
}
