use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GuideTopic {
    pub slug: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub fn find(slug: &str) -> Option<&'static GuideTopic> {
    GUIDE_TOPICS.iter().find(|t| t.slug == slug)
}

pub const GUIDE_TOPICS: &[GuideTopic] = &[
    GuideTopic {
        slug: "basics",
        title: "Basics for first-time owners",
        lines: &[
            "When you first live together, set up a safe hiding place and a quiet environment before anything else.",
            "Avoid moving the food, water, and litter locations around.",
            "Keeping the litter box, water, and food bowls spaced apart helps your cat feel settled.",
            "Sudden environment changes (moving, construction noise, a new family member) are stressful and can show up as behavior changes.",
            "For the first few days, wait for your cat to approach you instead of picking them up to play.",
        ],
    },
    GuideTopic {
        slug: "medication",
        title: "Giving medication",
        lines: &[
            "Where possible, use cat-specific prescriptions and pill-hiding treats.",
            "Rather than pushing a pill deep into the throat, place it at the back of the tongue and check that it is swallowed with the head tilted slightly down.",
            "Mix powdered medicine into a tiny bit of a favorite wet food or treat, watch the reaction, then increase gradually.",
            "A small treat right after the dose links the experience with something positive.",
        ],
    },
    GuideTopic {
        slug: "introductions",
        title: "Isolation and introductions",
        lines: &[
            "When bringing in a new cat, keep rooms separated for at least a few days so the cats adjust to each other's smell and sound first.",
            "Let them share scent through a closed door, then build up face-to-face time in short sessions.",
            "Both the resident cat and the newcomer need a safe space of their own.",
            "Use treats during the first meetings so the cats associate each other with something good.",
        ],
    },
    GuideTopic {
        slug: "bathing",
        title: "Bathing",
        lines: &[
            "Bathe only when needed (soiling, skin problems), keep it short, and use a non-slip surface.",
            "Always use a cat-specific shampoo and keep water and foam out of the eyes and ears.",
            "Keep the shower stream weak and the noise down.",
            "Dry completely with a towel and dryer afterwards; staying damp can lead to colds and skin problems.",
        ],
    },
    GuideTopic {
        slug: "claw_care",
        title: "Claw care",
        lines: &[
            "Start with one toe at a time, trimming only a tiny bit, with treats and praise along the way.",
            "Touch the paws casually day to day so handling them becomes normal.",
            "Avoid the pink quick where the blood vessel runs; trim only the sharp tip.",
            "Spread the job over several sittings instead of doing every claw at once.",
        ],
    },
    GuideTopic {
        slug: "senior_cats",
        title: "Caring for senior cats",
        lines: &[
            "Check small changes often: how much they eat, litter habits, movement, jumping ability.",
            "Joint pain and kidney and thyroid disease all become more common with age, so regular checkups matter.",
            "Provide resting spots low to the ground and steps to reduce jumping.",
            "Keep playing regularly, but favor gentle games over vigorous ones.",
        ],
    },
    GuideTopic {
        slug: "post_neutering",
        title: "After neutering surgery",
        lines: &[
            "Use a recovery collar so the incision cannot be licked or bitten.",
            "Contact the clinic immediately if the incision reddens, swells, or keeps bleeding or discharging.",
            "Appetite and activity may dip for a day or two; if it lasts longer, get advice.",
            "Metabolism drops after neutering, so adjust food portions and exercise to avoid weight gain.",
        ],
    },
    GuideTopic {
        slug: "weight_management",
        title: "Diet and weight management",
        lines: &[
            "Rather than simply cutting portions, transition slowly onto a lower-calorie diet food.",
            "Splitting the daily ration into two or three meals helps reduce gorging and vomiting.",
            "Keep treats under 10% of daily calories and add activity with hunting-style play.",
            "Rapid weight loss can trigger serious problems like hepatic lipidosis; lose weight slowly.",
        ],
    },
    GuideTopic {
        slug: "disease_signs",
        title: "Signs of common diseases",
        lines: &[
            "Bladder and urinary tract: frequent trips to the litter box, small urine volumes, sometimes blood in the urine.",
            "Gut problems: prolonged diarrhea, repeated vomiting, appetite loss, and weight loss together.",
            "Mouth problems: drooling, bad breath, trouble chewing hard food, chewing on one side only.",
            "Respiratory problems: coughing, panting, or fast breathing at rest deserve close attention.",
        ],
    },
];
