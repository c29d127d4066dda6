use crate::models::{
    AnswerRecord, DairyIntake, DietPattern, Digestion, FactorContribution, Fatigue, HairSkin,
    OilyFishFrequency, RedMeatFrequency, ScoreBreakdown, SunExposure, Supplements,
};

/// Ceiling applied to the reported attention score
pub const MAX_SCORE: u32 = 40;

/// Points for the female 16-50 (menstruating age range) context
const AGE_SEX_POINTS: u32 = 2;

/// Calculate the attention score (0-40) for a set of answers
///
/// Scoring formula (each factor independent):
/// score = min(
///     diet (0/4/7) + fruit_veg (6/3/0) + dairy (5/2/0) +
///     red_meat (4/2/0) + oily_fish (5/2/0) + sun (4/1/0) +
///     fatigue (4/2/0) + hair_skin (3/1/0) + digestion (3/1/0) +
///     supplements (4/1/0) + female_16_to_50 (2),
///     40
/// )
///
/// The raw sum can reach 47; anything above 40 is reported as 40.
pub fn compute_score(answers: &AnswerRecord) -> u32 {
    score_breakdown(answers).score
}

/// Calculate the score together with each factor's contribution
pub fn score_breakdown(answers: &AnswerRecord) -> ScoreBreakdown {
    let age_sex_points = if answers.in_menstruating_age_range() {
        AGE_SEX_POINTS
    } else {
        0
    };

    let contributions = vec![
        contribution("dietPattern", answers.diet_pattern.as_str(), diet_points(answers.diet_pattern)),
        contribution(
            "fruitVegServings",
            &answers.fruit_veg_servings.to_string(),
            fruit_veg_points(answers.fruit_veg_servings),
        ),
        contribution("dairyIntake", answers.dairy_intake.as_str(), dairy_points(answers.dairy_intake)),
        contribution(
            "redMeatFrequency",
            answers.red_meat_frequency.as_str(),
            red_meat_points(answers.red_meat_frequency),
        ),
        contribution(
            "oilyFishFrequency",
            answers.oily_fish_frequency.as_str(),
            oily_fish_points(answers.oily_fish_frequency),
        ),
        contribution("sunExposure", answers.sun_exposure.as_str(), sun_points(answers.sun_exposure)),
        contribution("fatigue", answers.fatigue.as_str(), fatigue_points(answers.fatigue)),
        contribution("hairSkin", answers.hair_skin.as_str(), hair_skin_points(answers.hair_skin)),
        contribution("digestion", answers.digestion.as_str(), digestion_points(answers.digestion)),
        contribution("supplements", answers.supplements.as_str(), supplement_points(answers.supplements)),
        contribution(
            "ageSexContext",
            &format!("{}, {}", answers.sex, answers.age),
            age_sex_points,
        ),
    ];

    let raw_total = contributions.iter().map(|c| c.points).sum::<u32>();

    ScoreBreakdown {
        contributions,
        raw_total,
        score: raw_total.min(MAX_SCORE),
    }
}

fn contribution(factor: &str, answer: &str, points: u32) -> FactorContribution {
    FactorContribution {
        factor: factor.to_string(),
        answer: answer.to_string(),
        points,
    }
}

/// B12, iron, zinc and omega-3 context
#[inline]
fn diet_points(diet: DietPattern) -> u32 {
    match diet {
        DietPattern::Omnivore => 0,
        DietPattern::Vegetarian => 4,
        DietPattern::Vegan => 7,
    }
}

/// Vitamin C, folate, potassium and carotenoids
#[inline]
fn fruit_veg_points(servings: f64) -> u32 {
    if servings <= 1.0 {
        6
    } else if servings <= 3.0 {
        3
    } else {
        0
    }
}

/// Calcium, iodine and vitamin D from dairy or fortified alternatives
#[inline]
fn dairy_points(dairy: DairyIntake) -> u32 {
    match dairy {
        DairyIntake::Rare => 5,
        DairyIntake::Some => 2,
        DairyIntake::Daily => 0,
    }
}

#[inline]
fn red_meat_points(red_meat: RedMeatFrequency) -> u32 {
    match red_meat {
        RedMeatFrequency::Rare => 4,
        RedMeatFrequency::Weekly => 2,
        RedMeatFrequency::Often => 0,
    }
}

#[inline]
fn oily_fish_points(oily_fish: OilyFishFrequency) -> u32 {
    match oily_fish {
        OilyFishFrequency::Rare => 5,
        OilyFishFrequency::Sometimes => 2,
        OilyFishFrequency::WeeklyPlus => 0,
    }
}

#[inline]
fn sun_points(sun: SunExposure) -> u32 {
    match sun {
        SunExposure::Low => 4,
        SunExposure::Moderate => 1,
        SunExposure::High => 0,
    }
}

#[inline]
fn fatigue_points(fatigue: Fatigue) -> u32 {
    match fatigue {
        Fatigue::Often => 4,
        Fatigue::Sometimes => 2,
        Fatigue::Rare => 0,
    }
}

#[inline]
fn hair_skin_points(hair_skin: HairSkin) -> u32 {
    match hair_skin {
        HairSkin::FrequentIssues => 3,
        HairSkin::SomeIssues => 1,
        HairSkin::Fine => 0,
    }
}

#[inline]
fn digestion_points(digestion: Digestion) -> u32 {
    match digestion {
        Digestion::OftenOff => 3,
        Digestion::SometimesOff => 1,
        Digestion::Fine => 0,
    }
}

#[inline]
fn supplement_points(supplements: Supplements) -> u32 {
    match supplements {
        Supplements::None => 4,
        Supplements::Multivitamin => 1,
        Supplements::Targeted => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{baseline_answers, worst_case_answers};
    use crate::models::Sex;

    #[test]
    fn test_baseline_scores_zero() {
        assert_eq!(compute_score(&baseline_answers()), 0);
    }

    #[test]
    fn test_worst_case_is_clamped_to_forty() {
        let breakdown = score_breakdown(&worst_case_answers());

        assert_eq!(breakdown.raw_total, 47);
        assert_eq!(breakdown.score, MAX_SCORE);
        assert_eq!(compute_score(&worst_case_answers()), 40);
    }

    #[test]
    fn test_breakdown_lists_every_factor_in_order() {
        let breakdown = score_breakdown(&worst_case_answers());
        let factors: Vec<&str> = breakdown
            .contributions
            .iter()
            .map(|c| c.factor.as_str())
            .collect();

        assert_eq!(
            factors,
            vec![
                "dietPattern",
                "fruitVegServings",
                "dairyIntake",
                "redMeatFrequency",
                "oilyFishFrequency",
                "sunExposure",
                "fatigue",
                "hairSkin",
                "digestion",
                "supplements",
                "ageSexContext",
            ]
        );

        let points: Vec<u32> = breakdown.contributions.iter().map(|c| c.points).collect();
        assert_eq!(points, vec![7, 6, 5, 4, 5, 4, 4, 3, 3, 4, 2]);
        assert_eq!(breakdown.contributions[0].answer, "vegan");
        assert_eq!(breakdown.contributions[10].answer, "female, 29");
    }

    #[test]
    fn test_fruit_veg_thresholds() {
        assert_eq!(fruit_veg_points(0.0), 6);
        assert_eq!(fruit_veg_points(1.0), 6);
        assert_eq!(fruit_veg_points(1.5), 3);
        assert_eq!(fruit_veg_points(3.0), 3);
        // Between 3 and 4 already counts as the top band
        assert_eq!(fruit_veg_points(3.5), 0);
        assert_eq!(fruit_veg_points(4.0), 0);
        assert_eq!(fruit_veg_points(15.0), 0);
    }

    #[test]
    fn test_age_sex_cross_term() {
        let mut answers = baseline_answers();
        answers.sex = Sex::Female;

        answers.age = 16;
        assert_eq!(compute_score(&answers), 2);
        answers.age = 50;
        assert_eq!(compute_score(&answers), 2);
        answers.age = 51;
        assert_eq!(compute_score(&answers), 0);

        answers.age = 30;
        answers.sex = Sex::Other;
        assert_eq!(compute_score(&answers), 0);
    }

    #[test]
    fn test_diet_weights() {
        let mut answers = baseline_answers();

        answers.diet_pattern = DietPattern::Vegetarian;
        assert_eq!(compute_score(&answers), 4);

        answers.diet_pattern = DietPattern::Vegan;
        assert_eq!(compute_score(&answers), 7);
    }

    #[test]
    fn test_middle_answers() {
        let mut answers = baseline_answers();
        answers.fruit_veg_servings = 2.0;
        answers.dairy_intake = DairyIntake::Some;
        answers.red_meat_frequency = RedMeatFrequency::Weekly;
        answers.oily_fish_frequency = OilyFishFrequency::Sometimes;
        answers.sun_exposure = SunExposure::Moderate;
        answers.fatigue = Fatigue::Sometimes;
        answers.hair_skin = HairSkin::SomeIssues;
        answers.digestion = Digestion::SometimesOff;
        answers.supplements = Supplements::Multivitamin;

        // 3 + 2 + 2 + 2 + 1 + 2 + 1 + 1 + 1
        assert_eq!(compute_score(&answers), 15);
    }
}
