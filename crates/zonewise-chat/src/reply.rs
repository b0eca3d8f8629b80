//! Canned reply texts and safety-tip tables.
//!
//! Every reply is fixed text, optionally naming the resolved zone or risk
//! factor. The tip lists are data for the presentation collaborator to
//! render next to the matching reply; the engine never includes them in
//! message content.

use zonewise_core::types::{Intent, RiskFactor};

/// First message of a fresh session, after the intake form.
pub fn welcome(name: &str) -> String {
    format!("Hi {name}, welcome to the Zonewise city risk assistant.")
}

/// Reply to any utterance containing a greeting phrase.
pub fn greeting(name: &str) -> String {
    format!(
        "Hello {name}! I'm the Zonewise risk assistant. You can ask me about \
         accidents, floods, crime, air quality, heat, population, or overall risk."
    )
}

/// Reply naming the resolved zone for a dataset-backed intent.
pub fn zone_reply(intent: Intent, zone: &str) -> String {
    match intent {
        Intent::Flood => format!("Flood data for {zone}."),
        Intent::Accident => format!("Accident cases in {zone}."),
        Intent::Crime => format!("Crimes reported in {zone}."),
        Intent::Pollution => format!("Air quality in {zone}."),
        Intent::Heat => format!("Heat impact in {zone}."),
        Intent::Population => format!("Population of {zone}."),
        Intent::Greeting | Intent::Risk | Intent::Unknown => help(),
    }
}

/// Reply when no zone could be resolved from the utterance.
pub fn invalid_zone() -> String {
    "Please mention a valid zone.".to_string()
}

/// Reply for a factor-qualified risk query.
pub fn risk_factor_reply(factor: RiskFactor) -> String {
    format!("Risk factor: {factor}.")
}

/// Reply for an overall risk query; risk is reported across all zones.
pub fn risk_overall_reply() -> String {
    "Overall risk factors for all zones.".to_string()
}

/// Fallback for utterances matching no greeting and no keyword rule.
pub fn help() -> String {
    "Try asking about accidents, air pollution, crime, heat, flood, population, or risk."
        .to_string()
}

// =============================================================================
// Safety tips
// =============================================================================

/// Precaution list rendered alongside a dataset reply.
pub fn safety_tips(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Flood => &[
            "Avoid walking or driving through flood waters.",
            "Relocate to higher ground in case of warnings.",
            "Stay updated through official alerts.",
            "Boil drinking water to avoid infections.",
            "Keep emergency contacts and supplies ready.",
        ],
        Intent::Accident => &[
            "Follow all traffic signals and speed limits.",
            "Wear a helmet or seatbelt at all times.",
            "Avoid using mobile phones while driving.",
            "Stay alert in crowded intersections.",
        ],
        Intent::Crime => &[
            "Avoid isolated areas, especially at night.",
            "Always lock your doors and windows.",
            "Report any suspicious activity to the police.",
            "Avoid sharing personal information with strangers.",
        ],
        Intent::Pollution => &[
            "Wear a mask when outdoors.",
            "Avoid outdoor exercise during peak hours.",
            "Use air purifiers at home.",
            "Check AQI levels before planning activities.",
        ],
        Intent::Heat => &[
            "Stay hydrated and drink plenty of water.",
            "Avoid outdoor activities during noon.",
            "Wear light and breathable clothes.",
            "Apply sunscreen to protect from sunburn.",
        ],
        Intent::Population => &[
            "Plan your commute to avoid peak-hour traffic.",
            "Stay aware of your surroundings in crowded places.",
            "Keep belongings safe to avoid theft.",
        ],
        Intent::Risk => &[
            "Stay informed using official sources.",
            "Avoid high-risk areas during alerts.",
            "Follow safety protocols.",
            "Ensure emergency contacts are accessible.",
        ],
        Intent::Greeting | Intent::Unknown => &[],
    }
}

/// Precaution list for a factor-qualified risk reply.
pub fn factor_tips(factor: RiskFactor) -> &'static [&'static str] {
    match factor {
        RiskFactor::Accident => &[
            "Follow traffic rules strictly.",
            "Avoid rash driving.",
            "Be alert in accident-prone zones.",
        ],
        RiskFactor::AirPollution => &[
            "Use masks when pollution is high.",
            "Avoid peak traffic hours.",
            "Use air purifiers indoors.",
        ],
        RiskFactor::Flood => &[
            "Do not walk through flood water.",
            "Shift to safer zones during heavy rain.",
            "Boil drinking water.",
        ],
        RiskFactor::Heat => &[
            "Stay hydrated and avoid direct sunlight.",
            "Use sunscreen and wear cotton clothes.",
            "Avoid outdoor activities at noon.",
        ],
        RiskFactor::Crime => &[
            "Avoid lonely roads at night.",
            "Be alert and avoid confrontation.",
            "Use safety apps for emergencies.",
        ],
        RiskFactor::Population => &[
            "Avoid crowded public transport.",
            "Travel during off-peak hours.",
            "Be aware of theft in crowds.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_replies_name_the_zone() {
        for intent in [
            Intent::Flood,
            Intent::Accident,
            Intent::Crime,
            Intent::Pollution,
            Intent::Heat,
            Intent::Population,
        ] {
            let text = zone_reply(intent, "Adyar");
            assert!(text.contains("Adyar"), "{intent}: {text}");
        }
    }

    #[test]
    fn test_risk_factor_reply_names_factor() {
        assert_eq!(
            risk_factor_reply(RiskFactor::AirPollution),
            "Risk factor: Air Pollution."
        );
    }

    #[test]
    fn test_greeting_is_personalized() {
        assert!(greeting("Priya").contains("Priya"));
        assert!(welcome("Priya").contains("Priya"));
    }

    #[test]
    fn test_tips_exist_for_every_keyword_intent() {
        for intent in [
            Intent::Flood,
            Intent::Accident,
            Intent::Crime,
            Intent::Pollution,
            Intent::Heat,
            Intent::Population,
            Intent::Risk,
        ] {
            assert!(!safety_tips(intent).is_empty(), "{intent}");
        }
        assert!(safety_tips(Intent::Unknown).is_empty());
    }

    #[test]
    fn test_tips_exist_for_every_factor() {
        for factor in [
            RiskFactor::Accident,
            RiskFactor::AirPollution,
            RiskFactor::Flood,
            RiskFactor::Heat,
            RiskFactor::Crime,
            RiskFactor::Population,
        ] {
            assert!(!factor_tips(factor).is_empty());
        }
    }
}
