use crate::models::{
    AnswerRecord, DairyIntake, DietPattern, Digestion, Fatigue, FlagSummary, HairSkin,
    OilyFishFrequency, RedMeatFrequency, SunExposure, Supplements,
};

const FLAGS_HEADER: &str =
    "Based on your answers, nutrients that might deserve a little extra attention include:";
const NO_FLAGS_HEADER: &str =
    "Your answers don’t strongly spotlight a specific nutrient gap, but that doesn’t guarantee that everything is perfect.";
const FLAGS_DISCLAIMER: &str =
    "This doesn’t mean you’re deficient in any of these; it just highlights where food variety or professional review could be useful.";

/// Build the nutrient flags and the narrative lines around them
///
/// Nutrient flags accumulate in a fixed order (diet pattern, fruit/veg,
/// dairy, red meat, oily fish, sun, age/sex). Summary lines are assembled as
/// header, symptom sentence (if any), supplement sentence, then the
/// disclaimer when at least one nutrient was flagged.
pub fn build_flags(answers: &AnswerRecord) -> FlagSummary {
    let nutrient_flags = nutrient_flags(answers);

    let mut summary_lines = Vec::with_capacity(4);

    summary_lines.push(
        if nutrient_flags.is_empty() {
            NO_FLAGS_HEADER
        } else {
            FLAGS_HEADER
        }
        .to_string(),
    );

    if let Some(line) = symptom_line(answers) {
        summary_lines.push(line);
    }

    summary_lines.push(supplement_line(answers.supplements).to_string());

    if !nutrient_flags.is_empty() {
        summary_lines.push(FLAGS_DISCLAIMER.to_string());
    }

    FlagSummary {
        summary_lines,
        nutrient_flags,
    }
}

fn nutrient_flags(answers: &AnswerRecord) -> Vec<String> {
    let mut flags: Vec<&'static str> = Vec::new();

    if answers.is_plant_based() {
        flags.push("Vitamin B12 (especially if you don’t use fortified foods or supplements)");
        flags.push("Iron and zinc (depending on legumes, nuts, seeds, and fortified foods)");
    }
    if answers.diet_pattern == DietPattern::Vegan {
        flags.push("Calcium and iodine (if dairy is excluded and alternatives aren’t fortified)");
    }

    if answers.fruit_veg_servings <= 1.0 {
        flags.push("Vitamin C, folate, potassium, and a variety of plant antioxidants");
    } else if answers.fruit_veg_servings <= 3.0 {
        flags.push(
            "Plant diversity (extra servings of colorful veg/fruit could broaden micronutrient coverage)",
        );
    }

    if answers.dairy_intake == DairyIntake::Rare {
        flags.push("Calcium and iodine (if you don’t regularly use fortified milks or other sources)");
    }

    if answers.red_meat_frequency == RedMeatFrequency::Rare {
        flags.push(
            "Iron (and possibly B12), especially if you also don’t eat many legumes or fortified foods",
        );
    }

    if answers.oily_fish_frequency == OilyFishFrequency::Rare {
        flags.push(
            "Long-chain omega-3 fats (EPA/DHA), which mainly come from oily fish or supplements",
        );
    }

    if answers.sun_exposure == SunExposure::Low {
        flags.push(
            "Vitamin D, because low sun time plus modern indoor life can make it harder to maintain levels",
        );
    }

    if answers.in_menstruating_age_range() {
        flags.push(
            "Iron, due to ongoing menstrual losses (particularly if intake is on the lower side)",
        );
    }

    flags.into_iter().map(String::from).collect()
}

/// Sentence naming the non-baseline symptoms, if there are any
fn symptom_line(answers: &AnswerRecord) -> Option<String> {
    let mut symptoms = Vec::new();
    if answers.fatigue != Fatigue::Rare {
        symptoms.push("fatigue");
    }
    if answers.hair_skin != HairSkin::Fine {
        symptoms.push("hair/skin/nail changes");
    }
    if answers.digestion != Digestion::Fine {
        symptoms.push("digestive shifts");
    }

    if symptoms.is_empty() {
        return None;
    }

    Some(format!(
        "You reported {}. These can *sometimes* overlap with micronutrient issues, but they are very non-specific and can come from many causes.",
        symptoms.join(", ")
    ))
}

fn supplement_line(supplements: Supplements) -> &'static str {
    match supplements {
        Supplements::None => {
            "You’re not currently using micronutrient supplements, so most of your intake needs to come from food variety."
        }
        Supplements::Multivitamin => {
            "You use a general multivitamin, which may help cover some gaps, but food pattern still matters a lot."
        }
        Supplements::Targeted => {
            "You use targeted supplements, which may support specific nutrients depending on the product and dosing."
        }
    }
}
