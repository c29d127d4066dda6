//! Static description of the questionnaire so a UI can render the form
//! without duplicating option literals.

use serde::Serialize;

use crate::core::scoring::MAX_SCORE;
use crate::models::requests::{MAX_SERVINGS, MIN_AGE, MIN_SERVINGS};
use crate::models::{
    Choice, DairyIntake, DietPattern, Digestion, Fatigue, HairSkin, OilyFishFrequency,
    RedMeatFrequency, Sex, SunExposure, Supplements,
};

pub const TITLE: &str = "Micronutrient Attention Flagger";

pub const INTRO: &str = "A quick look at patterns that might deserve extra attention for vitamins and minerals. Informational only and not a diagnosis or blood test.";

/// Shown under every result
pub const RESULT_DISCLAIMER: &str = "This helper looks at typical diet patterns and broad symptoms. It does not use lab results and cannot diagnose deficiencies, medical conditions, or mental health issues. If you’re worried about your energy, hair/skin changes, digestion, or nutrient status, please talk with a doctor, registered dietitian, or other qualified health professional. They can interpret your history and, if needed, arrange appropriate testing.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub title: &'static str,
    pub intro: &'static str,
    pub max_score: u32,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Request field name
    pub id: &'static str,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QuestionKind {
    Number {
        min: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        placeholder: &'static str,
    },
    Choice {
        options: Vec<ChoiceOption>,
        default: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The twelve questions in form order
pub fn questionnaire() -> Questionnaire {
    let questions = vec![
        Question {
            id: "age",
            prompt: "Age (years)",
            hint: None,
            kind: QuestionKind::Number {
                min: f64::from(MIN_AGE),
                max: None,
                placeholder: "e.g. 29",
            },
        },
        choice_question::<Sex>("sex", "Sex"),
        choice_question::<DietPattern>(
            "dietPattern",
            "Which best describes your usual eating pattern?",
        ),
        Question {
            id: "fruitVegServings",
            prompt: "On a typical day, how many servings of fruit + vegetables do you eat?",
            hint: Some("One serving is about a small piece of fruit, ½ cup cooked veg, or 1 cup leafy greens."),
            kind: QuestionKind::Number {
                min: MIN_SERVINGS,
                max: Some(MAX_SERVINGS),
                placeholder: "e.g. 3",
            },
        },
        choice_question::<DairyIntake>(
            "dairyIntake",
            "How often do you have dairy or fortified milk/yogurt alternatives?",
        ),
        choice_question::<RedMeatFrequency>(
            "redMeatFrequency",
            "How often do you eat red meat or other iron-rich animal foods?",
        ),
        choice_question::<OilyFishFrequency>(
            "oilyFishFrequency",
            "How often do you eat oily fish (like salmon, mackerel, sardines)?",
        ),
        choice_question::<SunExposure>("sunExposure", "Typical sun exposure most weeks"),
        choice_question::<Fatigue>("fatigue", "How often do you notice low energy or fatigue?"),
        choice_question::<HairSkin>("hairSkin", "Hair, skin, and nails over the last few months"),
        choice_question::<Digestion>("digestion", "Digestion pattern"),
        choice_question::<Supplements>(
            "supplements",
            "Do you regularly take any vitamin or mineral supplements?",
        ),
    ];

    Questionnaire {
        title: TITLE,
        intro: INTRO,
        max_score: MAX_SCORE,
        questions,
    }
}

fn choice_question<T: Choice>(id: &'static str, prompt: &'static str) -> Question {
    let options = T::options()
        .iter()
        .map(|option| ChoiceOption {
            value: option.as_str(),
            label: option.label(),
        })
        .collect();

    Question {
        id,
        prompt,
        hint: None,
        kind: QuestionKind::Choice {
            options,
            default: T::default().as_str(),
        },
    }
}
