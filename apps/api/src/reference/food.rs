use serde::Serialize;

/// Whether a food may be offered at all.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedingVerdict {
    /// Fine under the conditions in `guidance`.
    Allowed,
    /// Never, in any amount or form.
    Forbidden,
}

#[derive(Debug, Serialize)]
pub struct FoodEntry {
    pub name: &'static str,
    pub verdict: FeedingVerdict,
    /// Feeding conditions; absent for forbidden foods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<&'static str>,
    pub caution: &'static str,
}

/// Exact-name lookup after trimming and case folding. No fuzzy matching;
/// unknown names are simply `None`, never an error.
pub fn lookup(name: &str) -> Option<&'static FoodEntry> {
    let name = name.trim();
    FOOD_TABLE
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
}

pub const FOOD_TABLE: &[FoodEntry] = &[
    FoodEntry {
        name: "chicken breast",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("Fine boiled, in small amounts"),
        caution: "Serve plain, with no seasoning or salt.",
    },
    FoodEntry {
        name: "beef",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("Well-cooked lean cuts as an occasional treat"),
        caution: "Skip seasoned or fatty cuts.",
    },
    FoodEntry {
        name: "pork",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("Only thoroughly cooked lean meat, in very small amounts"),
        caution: "Fatty cuts, seasoning, and fried preparations are hard on digestion.",
    },
    FoodEntry {
        name: "salmon",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("Cooked salmon at treat level"),
        caution: "Raw, smoked, or seasoned salmon is off the table.",
    },
    FoodEntry {
        name: "apple",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("A little flesh with seeds and core removed"),
        caution: "Seeds and core contain toxic compounds; always remove them.",
    },
    FoodEntry {
        name: "watermelon",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("A little flesh with seeds and rind removed"),
        caution: "Contains fructose, so keep it infrequent and small.",
    },
    FoodEntry {
        name: "sweet potato",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("Well-cooked, in small amounts"),
        caution: "High in sugar; take care with overweight or diabetic cats.",
    },
    FoodEntry {
        name: "milk",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("Only lactose-free milk made for cats, in small amounts"),
        caution: "Regular milk can cause diarrhea because of the lactose.",
    },
    FoodEntry {
        name: "yogurt",
        verdict: FeedingVerdict::Allowed,
        guidance: Some("Plain unsweetened yogurt, a very small amount"),
        caution: "Anything with sugar, flavoring, or xylitol is forbidden.",
    },
    FoodEntry {
        name: "chocolate",
        verdict: FeedingVerdict::Forbidden,
        guidance: None,
        caution: "Theobromine in cacao is toxic; even a small amount is dangerous.",
    },
    FoodEntry {
        name: "onion",
        verdict: FeedingVerdict::Forbidden,
        guidance: None,
        caution: "Destroys red blood cells and causes anemia; forbidden in any form.",
    },
    FoodEntry {
        name: "garlic",
        verdict: FeedingVerdict::Forbidden,
        guidance: None,
        caution: "Similar toxicity to onion; even tiny amounts are forbidden.",
    },
    FoodEntry {
        name: "grapes",
        verdict: FeedingVerdict::Forbidden,
        guidance: None,
        caution: "Linked to kidney damage with no confirmed cause; completely off limits.",
    },
    FoodEntry {
        name: "raisins",
        verdict: FeedingVerdict::Forbidden,
        guidance: None,
        caution: "Same kidney-damage risk as grapes.",
    },
    FoodEntry {
        name: "coffee",
        verdict: FeedingVerdict::Forbidden,
        guidance: None,
        caution: "Caffeine is toxic; an amount small for a human is dangerous for a cat.",
    },
    FoodEntry {
        name: "alcohol",
        verdict: FeedingVerdict::Forbidden,
        guidance: None,
        caution: "Even a trace amount is dangerous. Never.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        assert!(lookup("  Chicken Breast ").is_some());
        assert!(lookup("CHOCOLATE").is_some());
    }

    #[test]
    fn test_lookup_is_exact_not_fuzzy() {
        assert!(lookup("chicken").is_none());
        assert!(lookup("chocolates").is_none());
    }

    #[test]
    fn test_unknown_food_is_none() {
        assert!(lookup("durian").is_none());
    }

    #[test]
    fn test_forbidden_entries_carry_no_guidance() {
        for food in FOOD_TABLE {
            match food.verdict {
                FeedingVerdict::Allowed => assert!(food.guidance.is_some(), "{}", food.name),
                FeedingVerdict::Forbidden => assert!(food.guidance.is_none(), "{}", food.name),
            }
        }
    }

    #[test]
    fn test_table_covers_both_verdicts() {
        assert_eq!(FOOD_TABLE.len(), 16);
        assert!(FOOD_TABLE
            .iter()
            .any(|f| f.verdict == FeedingVerdict::Allowed));
        assert!(FOOD_TABLE
            .iter()
            .any(|f| f.verdict == FeedingVerdict::Forbidden));
    }
}
