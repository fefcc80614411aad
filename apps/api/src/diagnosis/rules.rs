//! The rule table. Each rule counts matching entries in the window and fires
//! when the count reaches its threshold. Rules are independent and reported
//! in declaration order.

use serde::{Deserialize, Serialize};

use crate::models::health_log::HealthLogEntry;

/// How many of the most recent entries the engine examines.
pub const WINDOW_SIZE: usize = 7;

/// A pattern needs to repeat on at least this many entries to fire,
/// except where a rule declares its own (lower) threshold.
const REPEAT_THRESHOLD: usize = 2;

/// One triggered rule: an observed pattern plus a recommended action.
/// Computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisFinding {
    pub warning: String,
    pub tip: String,
}

struct Rule {
    matches: fn(&HealthLogEntry) -> bool,
    threshold: usize,
    warning: &'static str,
    tip: &'static str,
}

// Thresholds are absolute: a 3-entry window uses the same ≥2 bar as a full
// 7-entry one. Blood-tinged vomit is the lone ≥1 rule; a single suspected
// occurrence already warrants urgent care.
const RULES: &[Rule] = &[
    Rule {
        matches: HealthLogEntry::low_meal,
        threshold: REPEAT_THRESHOLD,
        warning: "Reduced appetite has come up on several recent days.",
        tip: "Appetite loss can be an early sign of many conditions. If your cat eats \
              almost nothing for more than 24 hours, a vet consultation is recommended.",
    },
    Rule {
        matches: HealthLogEntry::low_water,
        threshold: REPEAT_THRESHOLD,
        warning: "Water intake has been low on repeated days.",
        tip: "To help prevent urinary and kidney problems, try a drinking fountain, \
              wet food, or broth-style treats.",
    },
    Rule {
        matches: HealthLogEntry::abnormal_stool,
        threshold: REPEAT_THRESHOLD,
        warning: "Abnormal stool (diarrhea, blood, or no bowel movement) has been \
                  recorded more than once.",
        tip: "If this continues for 3 days or more, take a photo of the stool and \
              bring it to a vet visit.",
    },
    Rule {
        matches: HealthLogEntry::lethargic,
        threshold: REPEAT_THRESHOLD,
        warning: "Lethargy or increased hiding has repeated over recent days.",
        tip: "Reduced activity together with appetite loss needs closer attention.",
    },
    Rule {
        matches: HealthLogEntry::vomited,
        threshold: REPEAT_THRESHOLD,
        warning: "Vomiting has been recorded several times within the past week.",
        tip: "Causes vary from hairballs to food and gut issues. Keeping note of the \
              contents and frequency helps the vet.",
    },
    Rule {
        matches: HealthLogEntry::blood_tinged_vomit,
        threshold: 1,
        warning: "Red or pink vomit has been recorded. This can indicate blood and \
                  may need immediate veterinary attention.",
        tip: "A single occurrence of suspected blood is reason enough to contact a \
              clinic right away.",
    },
];

/// Evaluates the window against every rule. Pure; the same window always
/// yields the same ordered output. An empty window yields no findings —
/// callers are expected to guard with `is_empty` and render their own
/// "insufficient data" message.
pub fn evaluate(window: &[HealthLogEntry]) -> Vec<DiagnosisFinding> {
    RULES
        .iter()
        .filter(|rule| {
            let count = window.iter().filter(|e| (rule.matches)(e)).count();
            count >= rule.threshold
        })
        .map(|rule| DiagnosisFinding {
            warning: rule.warning.to_string(),
            tip: rule.tip.to_string(),
        })
        .collect()
}
