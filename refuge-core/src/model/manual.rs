use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SafetyGuide {
    pub title: String,
    pub content: String,
}

/// offline reference material: helpline numbers and disaster protocols.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SafetyManual {
    pub contacts: Vec<EmergencyContact>,
    pub guides: Vec<SafetyGuide>,
}

impl SafetyManual {
    pub fn find_contact(&self, name: &str) -> Option<&EmergencyContact> {
        self.contacts
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

fn contact(name: &str, number: &str) -> EmergencyContact {
    EmergencyContact {
        name: name.to_string(),
        number: number.to_string(),
    }
}

fn guide(title: &str, content: &str) -> SafetyGuide {
    SafetyGuide {
        title: title.to_string(),
        content: content.to_string(),
    }
}

/// the manual bundled with the application, used until a safety packet has
/// been downloaded.
impl Default for SafetyManual {
    fn default() -> Self {
        Self {
            contacts: vec![
                contact("National Emergency", "112"),
                contact("Ambulance", "102"),
                contact("Fire Brigade", "101"),
                contact("Disaster Management", "108"),
            ],
            guides: vec![
                guide(
                    "Earthquake Safety",
                    "DROP, COVER, and HOLD ON. Stay away from glass, windows, outside doors and walls. Do not use elevators.",
                ),
                guide(
                    "Flood Protocol",
                    "Turn off gas, power, and water. Move to higher ground immediately. Do not walk through moving water. Six inches of moving water can make you fall.",
                ),
                guide(
                    "Fire Evacuation",
                    "Stay low to the floor to avoid smoke. Touch doorknobs with the back of your hand before opening. If hot, do not open. Use stairs, not elevators.",
                ),
                guide(
                    "Basic First Aid (CPR)",
                    "1. Push hard and fast in the center of the chest.\n2. Give rescue breaths if trained.\n3. Continue until help arrives.",
                ),
            ],
        }
    }
}
