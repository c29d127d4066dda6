//! Answer records shared by the core unit tests

use crate::models::{
    AnswerRecord, DairyIntake, DietPattern, Digestion, Fatigue, HairSkin, OilyFishFrequency,
    RedMeatFrequency, Sex, SunExposure, Supplements,
};

/// Every factor at its zero-point answer
pub fn baseline_answers() -> AnswerRecord {
    AnswerRecord {
        age: 35,
        sex: Sex::Male,
        diet_pattern: DietPattern::Omnivore,
        fruit_veg_servings: 5.0,
        dairy_intake: DairyIntake::Daily,
        red_meat_frequency: RedMeatFrequency::Often,
        oily_fish_frequency: OilyFishFrequency::WeeklyPlus,
        sun_exposure: SunExposure::High,
        fatigue: Fatigue::Rare,
        hair_skin: HairSkin::Fine,
        digestion: Digestion::Fine,
        supplements: Supplements::Targeted,
    }
}

/// Every factor at its highest-point answer, including the female 16-50 term
pub fn worst_case_answers() -> AnswerRecord {
    AnswerRecord {
        age: 29,
        sex: Sex::Female,
        diet_pattern: DietPattern::Vegan,
        fruit_veg_servings: 1.0,
        dairy_intake: DairyIntake::Rare,
        red_meat_frequency: RedMeatFrequency::Rare,
        oily_fish_frequency: OilyFishFrequency::Rare,
        sun_exposure: SunExposure::Low,
        fatigue: Fatigue::Often,
        hair_skin: HairSkin::FrequentIssues,
        digestion: Digestion::OftenOff,
        supplements: Supplements::None,
    }
}
