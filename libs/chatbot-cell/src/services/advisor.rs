//! Keyword lookup behind the symptom checker.
//!
//! Rules are evaluated in declaration order and the first rule with a keyword
//! contained in the lower-cased input wins, so "fever and headache" gets the
//! fever advice.

use crate::models::{SymptomAdvice, Urgency};

#[derive(Debug, Clone, Copy)]
pub struct SymptomRule {
    pub keywords: &'static [&'static str],
    pub recommendation: &'static str,
    pub urgency: Urgency,
}

pub const DEFAULT_RECOMMENDATION: &str =
    "Based on your symptoms, home care may be appropriate. However, if symptoms worsen, please contact a doctor.";

pub const SYMPTOM_RULES: &[SymptomRule] = &[
    SymptomRule {
        keywords: &["chest pain", "difficulty breathing", "severe bleeding"],
        recommendation: "You should visit the emergency department immediately. These symptoms may indicate a serious condition.",
        urgency: Urgency::High,
    },
    SymptomRule {
        keywords: &["fever"],
        recommendation: "Take Paracetamol (500mg) every 6 hours as needed for fever. Stay hydrated and rest. If fever persists beyond 48 hours, see a doctor.",
        urgency: Urgency::Medium,
    },
    SymptomRule {
        keywords: &["headache"],
        recommendation: "You can take Panadol (500mg) or Ibuprofen for headache relief. Ensure you stay hydrated and rest in a quiet, dark room.",
        urgency: Urgency::Low,
    },
    SymptomRule {
        keywords: &["cough"],
        recommendation: "Drink warm water with honey and lemon. You can also take a cough syrup like Benylin. If cough lasts more than 3 days, consult a doctor.",
        urgency: Urgency::Medium,
    },
    SymptomRule {
        keywords: &["sore throat"],
        recommendation: "Gargle with warm salt water and drink warm fluids. Lozenges can help relieve discomfort.",
        urgency: Urgency::Low,
    },
    SymptomRule {
        keywords: &["stomach pain"],
        recommendation: "Avoid spicy foods and take an antacid like Gaviscon. If pain persists or is severe, see a doctor.",
        urgency: Urgency::Medium,
    },
    SymptomRule {
        keywords: &["nausea"],
        recommendation: "Drink clear fluids like ginger tea or oral rehydration solutions. Avoid heavy meals.",
        urgency: Urgency::Low,
    },
    SymptomRule {
        keywords: &["diarrhea"],
        recommendation: "Stay hydrated with oral rehydration salts. Avoid dairy and oily foods. If it lasts over 2 days, see a doctor.",
        urgency: Urgency::Medium,
    },
];

impl SymptomRule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

pub fn advise(symptoms: &str) -> SymptomAdvice {
    let text = symptoms.to_lowercase();

    match SYMPTOM_RULES.iter().find(|rule| rule.matches(&text)) {
        Some(rule) => SymptomAdvice {
            recommendation: rule.recommendation.to_string(),
            urgency: rule.urgency,
        },
        None => SymptomAdvice {
            recommendation: DEFAULT_RECOMMENDATION.to_string(),
            urgency: Urgency::Low,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chest_pain_is_urgent_in_any_case() {
        let lower = advise("sharp chest pain since morning");
        let mixed = advise("Sharp Chest Pain since morning");
        assert_eq!(lower.urgency, Urgency::High);
        assert_eq!(lower, mixed);
        assert!(lower.recommendation.starts_with("You should visit the emergency department"));
    }

    #[test]
    fn every_emergency_keyword_matches() {
        for text in ["DIFFICULTY BREATHING", "severe bleeding from a cut"] {
            assert_eq!(advise(text).urgency, Urgency::High);
        }
    }

    #[test]
    fn earlier_rule_wins() {
        let advice = advise("I have a headache and a fever");
        assert_eq!(advice.recommendation, SYMPTOM_RULES[1].recommendation);
        assert_eq!(advice.urgency, Urgency::Medium);
    }

    #[test]
    fn single_keyword_rules() {
        assert_eq!(advise("bad headache").urgency, Urgency::Low);
        assert_eq!(advise("dry cough").urgency, Urgency::Medium);
        assert_eq!(advise("sore throat").urgency, Urgency::Low);
        assert_eq!(advise("stomach pain after lunch").urgency, Urgency::Medium);
        assert_eq!(advise("nausea").urgency, Urgency::Low);
        assert_eq!(advise("diarrhea").urgency, Urgency::Medium);
    }

    #[test]
    fn unmatched_text_gets_default_advice() {
        for text in ["my knee hurts", ""] {
            let advice = advise(text);
            assert_eq!(advice.recommendation, DEFAULT_RECOMMENDATION);
            assert_eq!(advice.urgency, Urgency::Low);
        }
    }

    #[test]
    fn urgency_serializes_lowercase() {
        let value = serde_json::to_value(advise("fever")).unwrap();
        assert_eq!(value["urgency"], "medium");
    }
}
