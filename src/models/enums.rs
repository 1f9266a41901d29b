use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The wire form (serde) and the `as_str` form are the same literal.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SeverityLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
    Emergency => "emergency",
});

str_enum!(CareSetting {
    SelfCare => "self-care",
    OutpatientClinic => "outpatient-clinic",
    UrgentCareSameDay => "urgent-care-same-day",
    EmergencyDepartment => "emergency-department",
});

str_enum!(AgeRange {
    Under12 => "<12",
    Teen => "12-18",
    Adult => "18-40",
    MiddleAge => "40-60",
    Over60 => ">60",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

impl SeverityLevel {
    /// Severity that triggers the urgent-advice guardrail.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::High | Self::Emergency)
    }
}

/// Tolerant parse for values written by a language model:
/// case, surrounding whitespace, and `_`/space instead of `-` are accepted.
pub fn parse_lenient<T: std::str::FromStr>(value: &str) -> Option<T> {
    let canonical: String = value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect();
    canonical.parse().ok()
}
