use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Literal that is not one of a choice's options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized option '{0}'")]
pub struct UnknownChoice(pub String);

/// A single-select questionnaire answer
pub trait Choice: Copy + Default + FromStr<Err = UnknownChoice> + 'static {
    /// Every option, in questionnaire order
    fn options() -> &'static [Self];
    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

/// Declares a questionnaire choice: wire literal, option label and the
/// form's initial selection for every variant.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default = $default:ident) {
            $( $variant:ident => $literal:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in questionnaire order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Wire literal
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $literal, )+
                }
            }

            /// Option text as shown on the questionnaire
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl Choice for $name {
            fn options() -> &'static [Self] {
                $name::ALL
            }

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn label(&self) -> &'static str {
                $name::label(self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $literal => Ok($name::$variant), )+
                    other => Err(UnknownChoice(other.to_string())),
                }
            }
        }
    };
}

choice_enum! {
    Sex (default = Female) {
        Female => "female", "Female";
        Male => "male", "Male";
        Other => "other", "Other / Prefer not to say";
    }
}

choice_enum! {
    /// Usual eating pattern
    DietPattern (default = Omnivore) {
        Omnivore => "omnivore", "Omnivore (includes meat/fish and plant foods)";
        Vegetarian => "vegetarian", "Vegetarian (no meat/fish, but includes eggs/dairy)";
        Vegan => "vegan", "Vegan (no animal products)";
    }
}

choice_enum! {
    /// Dairy or fortified milk/yogurt alternatives
    DairyIntake (default = Daily) {
        Daily => "daily", "Most days (1–2+ servings)";
        Some => "some", "Sometimes (a few times per week)";
        Rare => "rare", "Rarely / almost never";
    }
}

choice_enum! {
    /// Red meat or other iron-rich animal foods
    RedMeatFrequency (default = Weekly) {
        Often => "often", "Most days";
        Weekly => "weekly", "About 1–3 times per week";
        Rare => "rare", "Rarely / never";
    }
}

choice_enum! {
    OilyFishFrequency (default = WeeklyPlus) {
        WeeklyPlus => "weeklyPlus", "About once a week or more";
        Sometimes => "sometimes", "Occasionally (1–3 times per month)";
        Rare => "rare", "Rarely / never";
    }
}

choice_enum! {
    /// Typical sun exposure most weeks
    SunExposure (default = Moderate) {
        Low => "low", "Mostly indoors / minimal direct sun";
        Moderate => "moderate", "Some regular outdoor time in daylight";
        High => "high", "Frequent outdoor time with decent skin exposure";
    }
}

choice_enum! {
    Fatigue (default = Sometimes) {
        Rare => "rare", "Rarely";
        Sometimes => "sometimes", "Sometimes";
        Often => "often", "Often / most days";
    }
}

choice_enum! {
    /// Hair, skin and nails over the last few months
    HairSkin (default = SomeIssues) {
        Fine => "fine", "Mostly as usual";
        SomeIssues => "someIssues", "Some changes (e.g. more dryness, breakage, or brittleness)";
        FrequentIssues => "frequentIssues", "Frequent or noticeable changes that concern you";
    }
}

choice_enum! {
    Digestion (default = SometimesOff) {
        Fine => "fine", "Mostly steady / as usual";
        SometimesOff => "sometimesOff", "Sometimes off (bloating, constipation, loose stools, etc.)";
        OftenOff => "oftenOff", "Often off or noticeably changed";
    }
}

choice_enum! {
    /// Regular vitamin or mineral supplement use
    Supplements (default = None) {
        None => "none", "No regular supplements";
        Multivitamin => "multivitamin", "A general multivitamin/mineral most days";
        Targeted => "targeted", "Targeted supplements (e.g. iron, D, B12, etc.)";
    }
}

/// A validated set of questionnaire answers
///
/// Built once per submission; the scoring pipeline trusts every field to be
/// within its domain (age >= 16, servings within 0-15).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub age: u16,
    pub sex: Sex,
    pub diet_pattern: DietPattern,
    pub fruit_veg_servings: f64,
    pub dairy_intake: DairyIntake,
    pub red_meat_frequency: RedMeatFrequency,
    pub oily_fish_frequency: OilyFishFrequency,
    pub sun_exposure: SunExposure,
    pub fatigue: Fatigue,
    pub hair_skin: HairSkin,
    pub digestion: Digestion,
    pub supplements: Supplements,
}

impl AnswerRecord {
    /// Female respondents aged 16-50 get extra iron attention
    pub fn in_menstruating_age_range(&self) -> bool {
        self.sex == Sex::Female && (16..=50).contains(&self.age)
    }

    pub fn is_plant_based(&self) -> bool {
        matches!(self.diet_pattern, DietPattern::Vegetarian | DietPattern::Vegan)
    }
}

/// The answers the tips builder reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipAnswers {
    pub diet_pattern: DietPattern,
    pub fruit_veg_servings: f64,
    pub dairy_intake: DairyIntake,
    pub red_meat_frequency: RedMeatFrequency,
    pub oily_fish_frequency: OilyFishFrequency,
    pub sun_exposure: SunExposure,
    pub supplements: Supplements,
}

impl From<&AnswerRecord> for TipAnswers {
    fn from(answers: &AnswerRecord) -> Self {
        Self {
            diet_pattern: answers.diet_pattern,
            fruit_veg_servings: answers.fruit_veg_servings,
            dairy_intake: answers.dairy_intake,
            red_meat_frequency: answers.red_meat_frequency,
            oily_fish_frequency: answers.oily_fish_frequency,
            sun_exposure: answers.sun_exposure,
            supplements: answers.supplements,
        }
    }
}

/// Coarse attention tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "veryHigh",
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::VeryHigh)
    }
}

/// Risk tier with its display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskZone {
    pub level: RiskLevel,
    pub label: String,
    pub description: String,
}

/// Narrative summary plus the nutrient categories worth a closer look
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagSummary {
    pub summary_lines: Vec<String>,
    pub nutrient_flags: Vec<String>,
}

/// Outcome of one questionnaire submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub score: u32,
    pub zone: RiskZone,
    pub interpretation: String,
    pub flags: FlagSummary,
    pub tips: Vec<String>,
    pub inputs: AnswerRecord,
}

/// Points a single factor added to the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: String,
    pub answer: String,
    pub points: u32,
}

/// Per-factor view of how a score was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub contributions: Vec<FactorContribution>,
    /// Sum before the ceiling is applied (can reach 47)
    pub raw_total: u32,
    pub score: u32,
}
