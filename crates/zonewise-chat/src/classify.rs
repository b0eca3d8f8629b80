//! Intent classification: ordered keyword rules over lowercased utterances.
//!
//! All matching is case-insensitive substring containment. The rule order
//! is load-bearing: greeting phrases win absolutely, a factor-qualified
//! risk mention ("risk of flood") wins next, then the dataset keywords are
//! tried in a fixed priority (flood/rain, accident, crime, pollution/air,
//! heat/temperature, population) ahead of the catch-all risk check and the
//! final unknown fallback.

use zonewise_core::types::{Intent, RiskFactor};

/// Phrases that make an utterance a greeting regardless of anything else
/// it contains.
const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "hai",
    "yo",
    "sup",
    "heya",
    "hiya",
    "wassup",
    "what's up",
    "good morning",
    "good afternoon",
    "good evening",
    "morning",
    "evening",
    "afternoon",
];

/// Dataset keyword rules in dispatch priority order.
const KEYWORD_RULES: &[(&[&str], Intent)] = &[
    (&["flood", "rain"], Intent::Flood),
    (&["accident"], Intent::Accident),
    (&["crime"], Intent::Crime),
    (&["pollution", "air"], Intent::Pollution),
    (&["heat", "temperature"], Intent::Heat),
    (&["population"], Intent::Population),
];

/// Risk factor keywords in sub-classification priority order.
const RISK_FACTOR_RULES: &[(&str, RiskFactor)] = &[
    ("accident", RiskFactor::Accident),
    ("pollution", RiskFactor::AirPollution),
    ("flood", RiskFactor::Flood),
    ("heat", RiskFactor::Heat),
    ("crime", RiskFactor::Crime),
    ("population", RiskFactor::Population),
];

/// The outcome of classifying one utterance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// Set only for factor-qualified risk queries.
    pub factor: Option<RiskFactor>,
}

impl Classification {
    fn of(intent: Intent) -> Self {
        Self {
            intent,
            factor: None,
        }
    }
}

/// Whether the utterance contains any greeting phrase.
pub fn is_greeting(utterance: &str) -> bool {
    let lower = utterance.to_lowercase();
    GREETINGS.iter().any(|phrase| lower.contains(phrase))
}

/// Classify an utterance into an intent, plus a risk factor where one is
/// named after the word "risk" ("what is the risk of flood").
///
/// A dataset keyword standing on its own ("any flood updates") keeps its
/// dataset intent even when "risk" also appears later in the utterance
/// ("air pollution and population risk" is a pollution query).
pub fn classify(utterance: &str) -> Classification {
    let lower = utterance.to_lowercase();

    if GREETINGS.iter().any(|phrase| lower.contains(phrase)) {
        return Classification::of(Intent::Greeting);
    }

    // "risk of <factor>": the factor keyword qualifies the risk mention
    // instead of dispatching to its own dataset.
    if let Some(at) = lower.find("risk") {
        if let Some(factor) = match_factor(&lower[at..]) {
            return Classification {
                intent: Intent::Risk,
                factor: Some(factor),
            };
        }
    }

    for (keywords, intent) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return Classification::of(*intent);
        }
    }

    if lower.contains("risk") {
        return Classification::of(Intent::Risk);
    }

    Classification::of(Intent::Unknown)
}

/// First factor keyword contained in `text`, by sub-classification priority.
fn match_factor(text: &str) -> Option<RiskFactor> {
    RISK_FACTOR_RULES
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, factor)| *factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Greetings ----

    #[test]
    fn test_plain_greeting() {
        assert_eq!(classify("hello").intent, Intent::Greeting);
        assert_eq!(classify("good morning").intent, Intent::Greeting);
        assert_eq!(classify("HEY THERE").intent, Intent::Greeting);
    }

    #[test]
    fn test_greeting_beats_dataset_keyword() {
        let c = classify("hello, any flood updates?");
        assert_eq!(c.intent, Intent::Greeting);
        assert_eq!(c.factor, None);
    }

    #[test]
    fn test_greeting_beats_risk() {
        assert_eq!(classify("hey, tell me the risk").intent, Intent::Greeting);
    }

    #[test]
    fn test_is_greeting_helper() {
        assert!(is_greeting("hiya"));
        assert!(!is_greeting("flood levels please"));
    }

    // ---- Dataset keywords ----

    #[test]
    fn test_flood_keywords() {
        assert_eq!(classify("flood levels please").intent, Intent::Flood);
        assert_eq!(classify("was there rain damage").intent, Intent::Flood);
    }

    #[test]
    fn test_accident_keyword() {
        assert_eq!(classify("accident count near egmore").intent, Intent::Accident);
    }

    #[test]
    fn test_crime_keyword() {
        assert_eq!(classify("crime numbers for velachery").intent, Intent::Crime);
    }

    #[test]
    fn test_pollution_keywords() {
        assert_eq!(classify("pollution levels in adyar").intent, Intent::Pollution);
        assert_eq!(classify("how bad is the air in guindy").intent, Intent::Pollution);
    }

    #[test]
    fn test_heat_keywords() {
        assert_eq!(classify("heatstroke cases in perambur").intent, Intent::Heat);
        assert_eq!(classify("temperature impact near koyambedu").intent, Intent::Heat);
    }

    #[test]
    fn test_population_keyword() {
        assert_eq!(classify("population of t nagar").intent, Intent::Population);
    }

    // ---- Dispatch priority ----

    #[test]
    fn test_flood_checked_before_accident() {
        assert_eq!(classify("accident during flood").intent, Intent::Flood);
    }

    #[test]
    fn test_pollution_checked_before_population_and_risk() {
        let c = classify("air pollution and population risk");
        assert_eq!(c.intent, Intent::Pollution);
        assert_eq!(c.factor, None);
    }

    // ---- Risk ----

    #[test]
    fn test_risk_of_factor() {
        let c = classify("what is the risk of flood");
        assert_eq!(c.intent, Intent::Risk);
        assert_eq!(c.factor, Some(RiskFactor::Flood));
    }

    #[test]
    fn test_risk_overall() {
        let c = classify("show me the risk");
        assert_eq!(c.intent, Intent::Risk);
        assert_eq!(c.factor, None);
    }

    #[test]
    fn test_risk_of_each_factor() {
        let cases = [
            ("risk of accident", RiskFactor::Accident),
            ("risk of air pollution", RiskFactor::AirPollution),
            ("risk of flood", RiskFactor::Flood),
            ("risk of heat", RiskFactor::Heat),
            ("risk of crime", RiskFactor::Crime),
            ("risk of population", RiskFactor::Population),
        ];
        for (utterance, factor) in cases {
            let c = classify(utterance);
            assert_eq!(c.intent, Intent::Risk, "{}", utterance);
            assert_eq!(c.factor, Some(factor), "{}", utterance);
        }
    }

    #[test]
    fn test_risk_factor_priority_order() {
        // Both pollution and flood follow "risk"; pollution outranks flood
        // in the factor table.
        let c = classify("risk of flood and pollution");
        assert_eq!(c.factor, Some(RiskFactor::AirPollution));
    }

    #[test]
    fn test_dataset_keyword_before_risk_keeps_dataset_intent() {
        // The factor keyword precedes "risk", so it dispatches as its own
        // dataset query.
        assert_eq!(classify("flood risk").intent, Intent::Flood);
        assert_eq!(classify("crime risk in adyar").intent, Intent::Crime);
    }

    // ---- Unknown ----

    #[test]
    fn test_unknown_fallback() {
        let c = classify("tell me about the metro timetable");
        assert_eq!(c.intent, Intent::Unknown);
        assert_eq!(c.factor, None);
    }

    #[test]
    fn test_empty_utterance_is_unknown() {
        assert_eq!(classify("").intent, Intent::Unknown);
    }
}
