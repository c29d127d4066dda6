use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::domain::{
    AnswerRecord, Choice, DairyIntake, DietPattern, Digestion, Fatigue, HairSkin, OilyFishFrequency,
    RedMeatFrequency, Sex, SunExposure, Supplements,
};

pub const MIN_AGE: u16 = 16;
pub const MIN_SERVINGS: f64 = 0.0;
pub const MAX_SERVINGS: f64 = 15.0;

/// Reasons a submission cannot be scored
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter a valid age (16+).")]
    InvalidAge,

    #[error("Please enter a realistic daily number of fruit + veg servings (0–15).")]
    InvalidServings,

    #[error("Please choose an option for {field}.")]
    MissingChoice { field: &'static str },

    #[error("'{value}' is not a valid option for {field}.")]
    InvalidChoice { field: &'static str, value: String },
}

impl InputError {
    /// Request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            InputError::InvalidAge => "age",
            InputError::InvalidServings => "fruitVegServings",
            InputError::MissingChoice { field } | InputError::InvalidChoice { field, .. } => field,
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            InputError::InvalidAge => "invalid_age",
            InputError::InvalidServings => "invalid_servings",
            InputError::MissingChoice { .. } => "missing_choice",
            InputError::InvalidChoice { .. } => "invalid_choice",
        }
    }

    fn to_validation_error(&self) -> ValidationError {
        let mut error = ValidationError::new(self.code());
        error.message = Some(Cow::Owned(self.to_string()));
        if let InputError::InvalidChoice { value, .. } = self {
            error.add_param(Cow::Borrowed("value"), value);
        }
        error
    }
}

/// Number as typed into a form: either a JSON number or its text
///
/// Any other JSON type is kept as `Other` so it fails the field's own check
/// instead of the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumericInput {
    /// Finite numeric value, if there is one. Blank text counts as missing.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            NumericInput::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

/// Raw questionnaire submission
///
/// Every field is optional at this level so that missing answers surface as
/// validation errors rather than JSON errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    #[serde(default)]
    pub age: Option<NumericInput>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub diet_pattern: Option<String>,
    #[serde(default)]
    pub fruit_veg_servings: Option<NumericInput>,
    #[serde(default)]
    pub dairy_intake: Option<String>,
    #[serde(default)]
    pub red_meat_frequency: Option<String>,
    #[serde(default)]
    pub oily_fish_frequency: Option<String>,
    #[serde(default)]
    pub sun_exposure: Option<String>,
    #[serde(default)]
    pub fatigue: Option<String>,
    #[serde(default)]
    pub hair_skin: Option<String>,
    #[serde(default)]
    pub digestion: Option<String>,
    #[serde(default)]
    pub supplements: Option<String>,
}

impl AssessmentRequest {
    fn parse_age(&self) -> Result<u16, InputError> {
        let age = self
            .age
            .as_ref()
            .and_then(NumericInput::value)
            .ok_or(InputError::InvalidAge)?;

        if age.fract() != 0.0 || age < f64::from(MIN_AGE) || age > f64::from(u16::MAX) {
            return Err(InputError::InvalidAge);
        }
        Ok(age as u16)
    }

    fn parse_servings(&self) -> Result<f64, InputError> {
        let servings = self
            .fruit_veg_servings
            .as_ref()
            .and_then(NumericInput::value)
            .ok_or(InputError::InvalidServings)?;

        if !(MIN_SERVINGS..=MAX_SERVINGS).contains(&servings) {
            return Err(InputError::InvalidServings);
        }
        // Normalise -0.0 so the echoed inputs serialize cleanly
        Ok(servings + 0.0)
    }

    /// Every problem with the submission, in questionnaire order
    pub fn problems(&self) -> Vec<InputError> {
        let checks = [
            self.parse_age().err(),
            choice::<Sex>(&self.sex, "sex").err(),
            choice::<DietPattern>(&self.diet_pattern, "dietPattern").err(),
            self.parse_servings().err(),
            choice::<DairyIntake>(&self.dairy_intake, "dairyIntake").err(),
            choice::<RedMeatFrequency>(&self.red_meat_frequency, "redMeatFrequency").err(),
            choice::<OilyFishFrequency>(&self.oily_fish_frequency, "oilyFishFrequency").err(),
            choice::<SunExposure>(&self.sun_exposure, "sunExposure").err(),
            choice::<Fatigue>(&self.fatigue, "fatigue").err(),
            choice::<HairSkin>(&self.hair_skin, "hairSkin").err(),
            choice::<Digestion>(&self.digestion, "digestion").err(),
            choice::<Supplements>(&self.supplements, "supplements").err(),
        ];
        checks.into_iter().flatten().collect()
    }
}

fn choice<T>(raw: &Option<String>, field: &'static str) -> Result<T, InputError>
where
    T: Choice,
{
    let raw = raw.as_deref().ok_or(InputError::MissingChoice { field })?;
    raw.parse().map_err(|_| InputError::InvalidChoice {
        field,
        value: raw.to_string(),
    })
}

impl Validate for AssessmentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for problem in &problems {
            errors.add(problem.field(), problem.to_validation_error());
        }
        Err(errors)
    }
}

impl TryFrom<&AssessmentRequest> for AnswerRecord {
    type Error = InputError;

    /// Fields are checked in questionnaire order; the first failure wins
    fn try_from(req: &AssessmentRequest) -> Result<Self, Self::Error> {
        Ok(AnswerRecord {
            age: req.parse_age()?,
            sex: choice(&req.sex, "sex")?,
            diet_pattern: choice(&req.diet_pattern, "dietPattern")?,
            fruit_veg_servings: req.parse_servings()?,
            dairy_intake: choice(&req.dairy_intake, "dairyIntake")?,
            red_meat_frequency: choice(&req.red_meat_frequency, "redMeatFrequency")?,
            oily_fish_frequency: choice(&req.oily_fish_frequency, "oilyFishFrequency")?,
            sun_exposure: choice(&req.sun_exposure, "sunExposure")?,
            fatigue: choice(&req.fatigue, "fatigue")?,
            hair_skin: choice(&req.hair_skin, "hairSkin")?,
            digestion: choice(&req.digestion, "digestion")?,
            supplements: choice(&req.supplements, "supplements")?,
        })
    }
}

impl From<&AnswerRecord> for AssessmentRequest {
    fn from(answers: &AnswerRecord) -> Self {
        Self {
            age: Some(NumericInput::Number(f64::from(answers.age))),
            sex: Some(answers.sex.to_string()),
            diet_pattern: Some(answers.diet_pattern.to_string()),
            fruit_veg_servings: Some(NumericInput::Number(answers.fruit_veg_servings)),
            dairy_intake: Some(answers.dairy_intake.to_string()),
            red_meat_frequency: Some(answers.red_meat_frequency.to_string()),
            oily_fish_frequency: Some(answers.oily_fish_frequency.to_string()),
            sun_exposure: Some(answers.sun_exposure.to_string()),
            fatigue: Some(answers.fatigue.to_string()),
            hair_skin: Some(answers.hair_skin.to_string()),
            digestion: Some(answers.digestion.to_string()),
            supplements: Some(answers.supplements.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> AssessmentRequest {
        AssessmentRequest {
            age: Some("29".into()),
            sex: Some("female".to_string()),
            diet_pattern: Some("omnivore".to_string()),
            fruit_veg_servings: Some(NumericInput::Number(3.0)),
            dairy_intake: Some("daily".to_string()),
            red_meat_frequency: Some("weekly".to_string()),
            oily_fish_frequency: Some("weeklyPlus".to_string()),
            sun_exposure: Some("moderate".to_string()),
            fatigue: Some("sometimes".to_string()),
            hair_skin: Some("someIssues".to_string()),
            digestion: Some("sometimesOff".to_string()),
            supplements: Some("none".to_string()),
        }
    }

    #[test]
    fn test_complete_request_converts() {
        let req = complete_request();
        assert!(req.validate().is_ok());

        let answers = AnswerRecord::try_from(&req).unwrap();
        assert_eq!(answers.age, 29);
        assert_eq!(answers.fruit_veg_servings, 3.0);
        assert_eq!(answers.oily_fish_frequency, OilyFishFrequency::WeeklyPlus);
    }

    #[test]
    fn test_age_rules() {
        for bad in ["", "  ", "abc", "15", "0", "-20", "29.5"] {
            let mut req = complete_request();
            req.age = Some(bad.into());
            assert_eq!(AnswerRecord::try_from(&req).unwrap_err(), InputError::InvalidAge, "age {:?}", bad);
        }

        let mut req = complete_request();
        req.age = None;
        assert_eq!(AnswerRecord::try_from(&req).unwrap_err(), InputError::InvalidAge);

        req.age = Some(NumericInput::Number(16.0));
        assert_eq!(AnswerRecord::try_from(&req).unwrap().age, 16);
    }

    #[test]
    fn test_servings_rules() {
        for bad in ["", "lots", "-1", "15.5", "NaN", "inf"] {
            let mut req = complete_request();
            req.fruit_veg_servings = Some(bad.into());
            assert_eq!(
                AnswerRecord::try_from(&req).unwrap_err(),
                InputError::InvalidServings,
                "servings {:?}",
                bad
            );
        }

        for good in [0.0, 2.5, 15.0] {
            let mut req = complete_request();
            req.fruit_veg_servings = Some(NumericInput::Number(good));
            assert_eq!(AnswerRecord::try_from(&req).unwrap().fruit_veg_servings, good);
        }
    }

    #[test]
    fn test_unknown_literal_is_rejected_not_defaulted() {
        let mut req = complete_request();
        req.sun_exposure = Some("extreme".to_string());

        assert_eq!(
            AnswerRecord::try_from(&req).unwrap_err(),
            InputError::InvalidChoice {
                field: "sunExposure",
                value: "extreme".to_string()
            }
        );
    }

    #[test]
    fn test_missing_choice() {
        let mut req = complete_request();
        req.supplements = None;

        let err = AnswerRecord::try_from(&req).unwrap_err();
        assert_eq!(err, InputError::MissingChoice { field: "supplements" });
        assert_eq!(err.field(), "supplements");
    }

    #[test]
    fn test_age_error_reported_before_servings() {
        let mut req = complete_request();
        req.age = Some("12".into());
        req.fruit_veg_servings = Some("40".into());

        assert_eq!(AnswerRecord::try_from(&req).unwrap_err(), InputError::InvalidAge);
        assert_eq!(
            req.problems(),
            vec![InputError::InvalidAge, InputError::InvalidServings]
        );
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InputError::InvalidAge.to_string(), "Please enter a valid age (16+).");
        assert_eq!(
            InputError::InvalidServings.to_string(),
            "Please enter a realistic daily number of fruit + veg servings (0–15)."
        );
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_strings() {
        let json = r#"{
            "age": 42,
            "sex": "male",
            "dietPattern": "vegetarian",
            "fruitVegServings": "4",
            "dairyIntake": "some",
            "redMeatFrequency": "rare",
            "oilyFishFrequency": "sometimes",
            "sunExposure": "high",
            "fatigue": "rare",
            "hairSkin": "fine",
            "digestion": "fine",
            "supplements": "targeted"
        }"#;

        let req: AssessmentRequest = serde_json::from_str(json).unwrap();
        let answers = AnswerRecord::try_from(&req).unwrap();
        assert_eq!(answers.age, 42);
        assert_eq!(answers.fruit_veg_servings, 4.0);
        assert_eq!(answers.diet_pattern, DietPattern::Vegetarian);
    }

    #[test]
    fn test_non_numeric_json_types_fail_their_own_field() {
        let json = r#"{"age": true, "fruitVegServings": [2]}"#;

        let req: AssessmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.age, Some(NumericInput::Other(serde_json::json!(true))));

        let problems = req.problems();
        assert_eq!(problems[0], InputError::InvalidAge);
        assert_eq!(problems[3], InputError::InvalidServings);
        assert_eq!(AnswerRecord::try_from(&req), Err(InputError::InvalidAge));
    }

    #[test]
    fn test_request_from_answers_round_trips() {
        let answers = AnswerRecord::try_from(&complete_request()).unwrap();
        let rebuilt = AssessmentRequest::from(&answers);
        assert_eq!(AnswerRecord::try_from(&rebuilt).unwrap(), answers);
    }
}
