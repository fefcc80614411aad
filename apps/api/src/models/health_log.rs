use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Food intake observed for the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealLevel {
    VeryLow,
    Low,
    Normal,
    High,
}

/// Water intake observed for the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaterLevel {
    VeryLow,
    Low,
    Normal,
    High,
}

/// Bowel observation. `None` means no bowel movement was seen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoolState {
    Normal,
    Hard,
    Diarrhea,
    Bloody,
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorTag {
    Normal,
    Sleepy,
    LowActivity,
    HighActivity,
    Aggressive,
    Hiding,
    Vocal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SymptomTag {
    Vomiting,
    Coughing,
    BreathingIssue,
    Limping,
    Discharge,
    Itching,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VomitColor {
    ClearFoam,
    YellowBile,
    BrownFood,
    RedPink,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VomitContent {
    Hairball,
    FoodPieces,
    FoamLiquid,
    ForeignObject,
    Other,
}

/// One health-log entry, created by a single submission and immutable after.
///
/// `vomit_color`/`vomit_content` only carry meaning when `Vomiting` is tagged;
/// they are accepted either way rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthLogEntry {
    pub date: NaiveDate,
    pub meal_level: MealLevel,
    pub water_level: WaterLevel,
    pub stool_state: StoolState,
    #[serde(default)]
    pub behavior_tags: Vec<BehaviorTag>,
    #[serde(default)]
    pub symptom_tags: Vec<SymptomTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vomit_color: Option<VomitColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vomit_content: Option<VomitContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl HealthLogEntry {
    pub fn low_meal(&self) -> bool {
        matches!(self.meal_level, MealLevel::VeryLow | MealLevel::Low)
    }

    pub fn low_water(&self) -> bool {
        matches!(self.water_level, WaterLevel::VeryLow | WaterLevel::Low)
    }

    pub fn abnormal_stool(&self) -> bool {
        matches!(
            self.stool_state,
            StoolState::Diarrhea | StoolState::Bloody | StoolState::None
        )
    }

    /// Withdrawn behavior: less movement, more sleep, or more hiding.
    pub fn lethargic(&self) -> bool {
        self.behavior_tags.iter().any(|t| {
            matches!(
                t,
                BehaviorTag::LowActivity | BehaviorTag::Sleepy | BehaviorTag::Hiding
            )
        })
    }

    pub fn vomited(&self) -> bool {
        self.symptom_tags.contains(&SymptomTag::Vomiting)
    }

    pub fn blood_tinged_vomit(&self) -> bool {
        self.vomit_color == Some(VomitColor::RedPink)
    }
}
