use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::enums::{AgeRange, CareSetting, Gender, SeverityLevel};

pub const DEFAULT_SYMPTOM_SUMMARY: &str = "Unable to process symptoms at this time.";
pub const DEFAULT_BODY_SYSTEM: &str = "general";
pub const DEFAULT_SPECIALTY: &str = "General Physician";
pub const DEFAULT_URGENCY_ADVICE: &str =
    "Please consult a qualified healthcare provider for proper evaluation.";
pub const DEFAULT_NEXT_STEPS: &[&str] = &[
    "Schedule an appointment with a healthcare provider",
    "Keep track of symptom changes",
    "Avoid self-medication",
];
pub const DEFAULT_RED_FLAGS: &[&str] = &[
    "Severe pain",
    "Difficulty breathing",
    "Loss of consciousness",
];
pub const DEFAULT_SELF_CARE_TIPS: &[&str] = &["Rest", "Stay hydrated", "Monitor your symptoms"];
pub const DEFAULT_DISCLAIMER: &str =
    "This is NOT a medical diagnosis. Always consult a qualified healthcare provider.";

/// Symptom check submitted by a user. Wire format matches the web client
/// (`text`, `ageRange`, `chronicConditions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceRequest {
    #[serde(rename = "text", default)]
    pub free_text: String,
    #[serde(default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chronic_conditions: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Explicit `null` reads as an empty list, like an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GuidanceRequest {
    pub fn new(free_text: impl Into<String>) -> Self {
        Self {
            free_text: free_text.into(),
            age_range: None,
            gender: None,
            chronic_conditions: Vec::new(),
            city: None,
        }
    }
}

/// Unvalidated guidance object parsed from the model's text output.
///
/// Every field is optional and untyped; JSON `null` reads as absent and
/// unknown keys are ignored. Only `guidance::normalize` turns this into
/// a [`Guidance`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGuidance {
    #[serde(default)]
    pub symptom_summary: Option<Value>,
    #[serde(default)]
    pub possible_body_systems: Option<Value>,
    #[serde(default)]
    pub severity_level: Option<Value>,
    #[serde(default)]
    pub recommended_care_setting: Option<Value>,
    #[serde(default)]
    pub recommended_specialties: Option<Value>,
    #[serde(default)]
    pub urgency_advice: Option<Value>,
    #[serde(default)]
    pub suggested_next_steps: Option<Value>,
    #[serde(default)]
    pub red_flag_symptoms_to_watch: Option<Value>,
    #[serde(default)]
    pub clarifying_questions: Option<Value>,
    #[serde(default)]
    pub self_care_tips: Option<Value>,
    #[serde(default)]
    pub disclaimer: Option<Value>,
}

/// Normalized triage guidance. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub symptom_summary: String,
    pub possible_body_systems: Vec<String>,
    pub severity_level: SeverityLevel,
    pub recommended_care_setting: CareSetting,
    pub recommended_specialties: Vec<String>,
    pub urgency_advice: String,
    pub suggested_next_steps: Vec<String>,
    pub red_flag_symptoms_to_watch: Vec<String>,
    pub clarifying_questions: Vec<String>,
    pub self_care_tips: Vec<String>,
    pub disclaimer: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Guidance {
    fn default() -> Self {
        Self {
            symptom_summary: DEFAULT_SYMPTOM_SUMMARY.to_string(),
            possible_body_systems: vec![DEFAULT_BODY_SYSTEM.to_string()],
            severity_level: SeverityLevel::Medium,
            recommended_care_setting: CareSetting::OutpatientClinic,
            recommended_specialties: vec![DEFAULT_SPECIALTY.to_string()],
            urgency_advice: DEFAULT_URGENCY_ADVICE.to_string(),
            suggested_next_steps: owned(DEFAULT_NEXT_STEPS),
            red_flag_symptoms_to_watch: owned(DEFAULT_RED_FLAGS),
            clarifying_questions: Vec::new(),
            self_care_tips: owned(DEFAULT_SELF_CARE_TIPS),
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        }
    }
}

impl Guidance {
    /// First recommended specialty, used to look up matching hospitals.
    pub fn primary_specialty(&self) -> Option<&str> {
        self.recommended_specialties.first().map(String::as_str)
    }
}

impl From<&Guidance> for RawGuidance {
    fn from(g: &Guidance) -> Self {
        Self {
            symptom_summary: Some(Value::from(g.symptom_summary.clone())),
            possible_body_systems: Some(Value::from(g.possible_body_systems.clone())),
            severity_level: Some(Value::from(g.severity_level.as_str())),
            recommended_care_setting: Some(Value::from(g.recommended_care_setting.as_str())),
            recommended_specialties: Some(Value::from(g.recommended_specialties.clone())),
            urgency_advice: Some(Value::from(g.urgency_advice.clone())),
            suggested_next_steps: Some(Value::from(g.suggested_next_steps.clone())),
            red_flag_symptoms_to_watch: Some(Value::from(g.red_flag_symptoms_to_watch.clone())),
            clarifying_questions: Some(Value::from(g.clarifying_questions.clone())),
            self_care_tips: Some(Value::from(g.self_care_tips.clone())),
            disclaimer: Some(Value::from(g.disclaimer.clone())),
        }
    }
}
