use crate::models::RiskLevel;

/// Explanatory paragraph for a risk tier
pub fn interpret(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => concat!(
            "Your inputs look generally supportive of micronutrient coverage. That doesn’t guarantee ‘perfect’ levels, ",
            "but your overall pattern seems reasonably nutrient-friendly."
        ),
        RiskLevel::Moderate => concat!(
            "You’re in a middle zone: some habits protect your micronutrient status, while others may create gaps over time. ",
            "A few targeted tweaks can usually shift things in a better-supported direction."
        ),
        RiskLevel::High => concat!(
            "Your mix of diet pattern, food choices, lifestyle, and/or symptoms suggests several micronutrient ‘watch points’. ",
            "It may be worth being more intentional with nutrient-dense foods and discussing testing with a health professional."
        ),
        RiskLevel::VeryHigh => concat!(
            "You’ve flagged quite a few potential risk factors for micronutrient gaps. This tool can’t diagnose anything, ",
            "but it is nudging you to consider more formal assessment (like blood work) and support from a qualified clinician."
        ),
    }
}
