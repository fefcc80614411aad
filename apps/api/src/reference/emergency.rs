use serde::Serialize;

/// How fast the situation needs a professional.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Watch closely, escalate if it persists.
    Monitor,
    /// Contact a clinic promptly.
    Urgent,
    /// Life-threatening; go to an emergency clinic now.
    Critical,
}

#[derive(Debug, Serialize)]
pub struct EmergencySymptom {
    pub slug: &'static str,
    pub title: &'static str,
    pub urgency: Urgency,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct EmergencySituation {
    pub slug: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
    /// Symptom-level triage; only the health situation carries these.
    pub symptoms: &'static [EmergencySymptom],
}

pub fn find(slug: &str) -> Option<&'static EmergencySituation> {
    EMERGENCY_SITUATIONS.iter().find(|s| s.slug == slug)
}

pub const EMERGENCY_SITUATIONS: &[EmergencySituation] = &[
    EmergencySituation {
        slug: "health",
        title: "Health emergencies",
        lines: &[],
        symptoms: &[
            EmergencySymptom {
                slug: "repeated_vomiting",
                title: "Repeated vomiting",
                urgency: Urgency::Monitor,
                lines: &[
                    "Put food and water away for a while, and note how often the vomiting happens, at what intervals, and what comes up.",
                    "If it keeps repeating for more than a day, contact a 24-hour clinic.",
                ],
            },
            EmergencySymptom {
                slug: "persistent_diarrhea",
                title: "Persistent diarrhea or bloody stool",
                urgency: Urgency::Monitor,
                lines: &[
                    "Never give anti-diarrheal medicine made for humans.",
                    "Record the color, shape, and frequency of the stool, and keep photos; they help at the clinic.",
                ],
            },
            EmergencySymptom {
                slug: "breathing_difficulty",
                title: "Difficulty breathing",
                urgency: Urgency::Critical,
                lines: &[
                    "Open-mouth panting, or a blue tint to the tongue or gums, is a life-threatening emergency. Go to an emergency clinic immediately.",
                ],
            },
            EmergencySymptom {
                slug: "sudden_lethargy",
                title: "Sudden lethargy",
                urgency: Urgency::Urgent,
                lines: &[
                    "Check body temperature (not unusually hot or cold), breathing rate, and gum color.",
                    "A cat that will neither eat nor move needs a clinic consultation right away.",
                ],
            },
            EmergencySymptom {
                slug: "trauma_bleeding",
                title: "Trauma or bleeding",
                urgency: Urgency::Urgent,
                lines: &[
                    "Press gently on the wound with clean gauze or cloth to slow the bleeding.",
                    "Heavy bleeding or limping calls for an immediate clinic visit.",
                ],
            },
        ],
    },
    EmergencySituation {
        slug: "cpr",
        title: "CPR basics",
        lines: &[
            "First check for consciousness, breathing, and a pulse.",
            "CPR should only be considered when breathing and pulse are both absent.",
            "For a small cat, compress the chest with one hand or two fingers at roughly 100 to 120 compressions per minute.",
            "In a real emergency, staying on the phone with a 24-hour clinic is the safest guide.",
        ],
        symptoms: &[],
    },
    EmergencySituation {
        slug: "disaster",
        title: "Fire, earthquake, and other disasters",
        lines: &[
            "Keep the carrier somewhere visible and let your cat get used to spending time inside it.",
            "In a fire, rather than searching too long, crate whichever cat is closest and evacuate quickly.",
            "In an earthquake, move away from windows and objects that could fall, and stay low with your cat.",
            "After evacuating, set up a hiding spot, water, and a litter box quickly to reduce stress.",
        ],
        symptoms: &[],
    },
    EmergencySituation {
        slug: "missing",
        title: "A missing or escaped cat",
        lines: &[
            "Right after a cat goes missing, quietly walk the area within about 50 meters of home, calling a familiar name.",
            "Focus on good hiding spots: under cars, below stairs, in flower beds.",
            "Place used blankets, litter, or food bowls near home so the scent can guide the cat back.",
            "Share the place, time, and description through neighborhood groups, social media, and flyers.",
            "Contact nearby shelters and clinics to ask whether a similar cat has been brought in.",
        ],
        symptoms: &[],
    },
];
