//! Care-state recommendations — a coarse read of the latest record mapped to
//! product-type suggestions. Deliberately shallow: one entry, fixed
//! precedence, no inference.

pub mod handlers;

use serde::Serialize;

use crate::models::health_log::{HealthLogEntry, StoolState};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CareState {
    GutSensitive,
    LowHydration,
    LowAppetite,
    Balanced,
    /// No records yet; baseline suggestions only.
    InsufficientData,
}

/// Classifies the latest entry. Precedence: gut > hydration > appetite.
pub fn classify(latest: Option<&HealthLogEntry>) -> CareState {
    let Some(entry) = latest else {
        return CareState::InsufficientData;
    };

    if matches!(entry.stool_state, StoolState::Diarrhea | StoolState::Bloody) {
        CareState::GutSensitive
    } else if entry.low_water() {
        CareState::LowHydration
    } else if entry.low_meal() {
        CareState::LowAppetite
    } else {
        CareState::Balanced
    }
}

pub fn describe(state: CareState) -> &'static str {
    match state {
        CareState::GutSensitive => "Gut looks sensitive right now",
        CareState::LowHydration => "Water intake looks low",
        CareState::LowAppetite => "Appetite may be reduced",
        CareState::Balanced => "Looking good overall",
        CareState::InsufficientData => "Not enough records for an estimate",
    }
}

pub fn suggestions(state: CareState) -> &'static [&'static str] {
    match state {
        CareState::GutSensitive => &[
            "A gentle, easily digestible diet",
            "Probiotic or gut-support treats",
            "Avoid switching food abruptly; transition slowly",
        ],
        CareState::LowHydration => &[
            "High-moisture wet food",
            "Broth or lickable treats that encourage drinking",
            "A fountain-style water dispenser can also help",
        ],
        CareState::LowAppetite => &[
            "Strong-smelling wet food and lickable treats, small amounts but often",
            "Also check the feeding spot for noise and other stressors",
        ],
        CareState::Balanced | CareState::InsufficientData => &[
            "A balanced diet matched to age and neuter status",
            "Skip calorie-dense treats to keep weight in check",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health_log::{MealLevel, WaterLevel};
    use chrono::NaiveDate;

    fn entry() -> HealthLogEntry {
        HealthLogEntry {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            meal_level: MealLevel::Normal,
            water_level: WaterLevel::Normal,
            stool_state: StoolState::Normal,
            behavior_tags: vec![],
            symptom_tags: vec![],
            vomit_color: None,
            vomit_content: None,
            memo: None,
        }
    }

    #[test]
    fn test_no_records_is_insufficient_data() {
        assert_eq!(classify(None), CareState::InsufficientData);
    }

    #[test]
    fn test_healthy_entry_is_balanced() {
        assert_eq!(classify(Some(&entry())), CareState::Balanced);
    }

    #[test]
    fn test_gut_takes_precedence_over_everything() {
        let mut e = entry();
        e.stool_state = StoolState::Diarrhea;
        e.water_level = WaterLevel::VeryLow;
        e.meal_level = MealLevel::VeryLow;
        assert_eq!(classify(Some(&e)), CareState::GutSensitive);
    }

    #[test]
    fn test_hydration_beats_appetite() {
        let mut e = entry();
        e.water_level = WaterLevel::Low;
        e.meal_level = MealLevel::Low;
        assert_eq!(classify(Some(&e)), CareState::LowHydration);
    }

    #[test]
    fn test_hard_stool_does_not_flag_gut() {
        let mut e = entry();
        e.stool_state = StoolState::Hard;
        assert_eq!(classify(Some(&e)), CareState::Balanced);
    }

    #[test]
    fn test_every_state_has_suggestions() {
        for state in [
            CareState::GutSensitive,
            CareState::LowHydration,
            CareState::LowAppetite,
            CareState::Balanced,
            CareState::InsufficientData,
        ] {
            assert!(!suggestions(state).is_empty());
        }
    }
}
