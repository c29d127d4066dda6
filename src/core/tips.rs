use crate::models::{
    DairyIntake, DietPattern, OilyFishFrequency, RedMeatFrequency, RiskLevel, RiskZone,
    SunExposure, Supplements, TipAnswers,
};

/// Closing guidance appended to every tip list
pub const GENERAL_TIPS: [&str; 3] = [
    "Food and symptoms alone can’t confirm deficiencies. Lab tests and a conversation with a qualified professional are the gold standard.",
    "If you have a medical condition, take medications, or are pregnant/breastfeeding, always get personalised advice before changing supplements.",
    "This tool is educational and not a diagnostic test. Use it as a starting point to ask better questions, not as a final answer.",
];

/// Used only for a low zone where no answer triggered a tip
pub const MAINTAIN_TIP: &str = "Since your attention score is on the lower side, focus on maintaining a varied, mostly whole-food eating pattern and checking in with a health professional periodically as part of routine care.";

/// Build practical suggestions for the given zone and answers
///
/// Order: answer-triggered tips, then the low-zone fallback when nothing
/// triggered, then the three general sentences.
pub fn build_tips(zone: &RiskZone, answers: TipAnswers) -> Vec<String> {
    let mut tips: Vec<&'static str> = Vec::new();

    if answers.fruit_veg_servings <= 3.0 {
        tips.push("Gently work toward at least 4–5 servings of fruit and veg per day by adding one extra serving to a meal or snack.");
    }

    if matches!(answers.diet_pattern, DietPattern::Vegetarian | DietPattern::Vegan) {
        tips.push("Include regular B12 sources (fortified plant milks, nutritional yeast, or a supplement) and mix in legumes, nuts, seeds, and tofu/tempeh for iron, zinc, and protein.");
    }

    if answers.diet_pattern == DietPattern::Vegan {
        tips.push("Check that your plant milks and yogurts are fortified with calcium and vitamin D, and consider iodine sources (like iodised salt, seaweed in moderate amounts, or professional guidance).");
    }

    if answers.dairy_intake == DairyIntake::Rare {
        tips.push("If dairy isn’t a fit for you, look for fortified non-dairy milks/yogurts and calcium-rich foods like tofu set with calcium, leafy greens, or canned fish with bones (if eaten).");
    }

    if answers.oily_fish_frequency == OilyFishFrequency::Rare {
        tips.push("If you eat animal products, consider adding oily fish (e.g. salmon, sardines, mackerel) 1–2 times per week, or discuss omega-3 supplementation with a professional if you don’t.");
    }

    if answers.sun_exposure == SunExposure::Low {
        tips.push("With limited sun exposure, it’s common for vitamin D to be low. Talk with your healthcare provider about whether vitamin D testing or supplementation makes sense for you.");
    }

    if answers.red_meat_frequency == RedMeatFrequency::Rare {
        tips.push("For iron, think in terms of beans, lentils, chickpeas, tofu, seeds, and dark leafy greens, ideally paired with vitamin C–rich foods (like citrus or peppers) to help absorption.");
    }

    if answers.supplements == Supplements::None && zone.level.is_elevated() {
        tips.push("If getting a wide variety of nutrient-dense foods is hard right now, you can ask a clinician whether a basic multivitamin/mineral might be appropriate for you.");
    }

    if zone.level == RiskLevel::Low && tips.is_empty() {
        tips.push(MAINTAIN_TIP);
    }

    tips.iter()
        .chain(GENERAL_TIPS.iter())
        .map(|tip| tip.to_string())
        .collect()
}
