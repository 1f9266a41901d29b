//! Upgrades a [`RawGuidance`] into a fully populated, safety-checked
//! [`Guidance`]. Total: every input, however malformed, yields a valid record.
//!
//! Resolution order:
//! 1. defaults
//! 2. present raw fields override them
//! 3. type coercion (scalar → one-element list, unknown enum → default)
//! 4. urgent-advice escalation for high severity or emergency care

use serde_json::Value;

use crate::models::enums::parse_lenient;
use crate::models::{CareSetting, Guidance, RawGuidance};

pub const URGENT_PREFIX: &str = "URGENT: ";
pub const EMERGENCY_CARE_SENTENCE: &str =
    "Seek emergency care or call emergency services immediately if symptoms worsen.";

/// String form of a scalar JSON value. Arrays and objects have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_field(raw: &Option<Value>, default: String) -> String {
    raw.as_ref().and_then(scalar_text).unwrap_or(default)
}

/// Like [`text_field`], but blank text keeps the default.
fn required_text_field(raw: &Option<Value>, default: String) -> String {
    raw.as_ref()
        .and_then(scalar_text)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default)
}

fn list_field(raw: &Option<Value>, default: Vec<String>) -> Vec<String> {
    match raw {
        None => default,
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).map(|s| vec![s]).unwrap_or(default),
    }
}

/// Like [`list_field`], but blank items are dropped and an empty result
/// keeps the default.
fn required_list_field(raw: &Option<Value>, default: Vec<String>) -> Vec<String> {
    let list: Vec<String> = list_field(raw, Vec::new())
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
    if list.is_empty() {
        default
    } else {
        list
    }
}

fn enum_field<T: std::str::FromStr>(raw: &Option<Value>, default: T) -> T {
    raw.as_ref()
        .and_then(Value::as_str)
        .and_then(parse_lenient::<T>)
        .unwrap_or(default)
}

fn mentions_urgency(advice: &str) -> bool {
    let lower = advice.to_lowercase();
    lower.contains("emergency") || lower.contains("urgent")
}

/// Make sure urgent cases carry urgent advice. Returns whether the advice
/// was rewritten.
pub fn apply_safety_escalation(guidance: &mut Guidance) -> bool {
    let urgent_case = guidance.severity_level.is_urgent()
        || guidance.recommended_care_setting == CareSetting::EmergencyDepartment;

    if !urgent_case || mentions_urgency(&guidance.urgency_advice) {
        return false;
    }

    guidance.urgency_advice = format!(
        "{URGENT_PREFIX}{} {EMERGENCY_CARE_SENTENCE}",
        guidance.urgency_advice
    );
    tracing::info!(
        severity = %guidance.severity_level,
        care_setting = %guidance.recommended_care_setting,
        "Urgency advice escalated"
    );
    true
}

/// Merge raw model output over the defaults and apply the safety rule.
pub fn normalize(raw: &RawGuidance) -> Guidance {
    let defaults = Guidance::default();

    let mut guidance = Guidance {
        symptom_summary: text_field(&raw.symptom_summary, defaults.symptom_summary),
        possible_body_systems: required_list_field(
            &raw.possible_body_systems,
            defaults.possible_body_systems,
        ),
        severity_level: enum_field(&raw.severity_level, defaults.severity_level),
        recommended_care_setting: enum_field(
            &raw.recommended_care_setting,
            defaults.recommended_care_setting,
        ),
        recommended_specialties: required_list_field(
            &raw.recommended_specialties,
            defaults.recommended_specialties,
        ),
        urgency_advice: required_text_field(&raw.urgency_advice, defaults.urgency_advice),
        suggested_next_steps: list_field(&raw.suggested_next_steps, defaults.suggested_next_steps),
        red_flag_symptoms_to_watch: list_field(
            &raw.red_flag_symptoms_to_watch,
            defaults.red_flag_symptoms_to_watch,
        ),
        clarifying_questions: match &raw.clarifying_questions {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        },
        self_care_tips: list_field(&raw.self_care_tips, defaults.self_care_tips),
        disclaimer: required_text_field(&raw.disclaimer, defaults.disclaimer),
    };

    apply_safety_escalation(&mut guidance);
    guidance
}
