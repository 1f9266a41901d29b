//! Department matching between a hospital's listed departments and the
//! specialty a user (or the model) asked for.
//!
//! Three rules, in order: exact match, substring containment in either
//! direction, then the alias table. Comparison is on lower-cased, trimmed
//! text. There is no typo tolerance.

/// Canonical department key → synonym substrings.
static DEPARTMENT_ALIASES: &[(&str, &[&str])] = &[
    (
        "general physician",
        &["general practice", "family medicine", "primary care"],
    ),
    ("cardiology", &["cardiac", "heart"]),
    ("dermatology", &["skin", "dermatologist"]),
    ("orthopedics", &["orthopedic", "bone", "joint"]),
    ("neurology", &["neurological", "brain", "nervous system"]),
    ("psychiatry", &["mental health", "psychiatric", "psychology"]),
    ("gynecology", &["gyn", "women health", "obstetrics"]),
    ("pediatrics", &["pediatric", "children", "child"]),
    ("ent", &["ear nose throat", "otolaryngology"]),
    ("emergency medicine", &["emergency", "er", "accident"]),
];

fn normalize(department: &str) -> String {
    department.trim().to_lowercase()
}

/// `key` is a canonical department and `other` contains one of its synonyms.
fn alias_hit(key: &str, other: &str) -> bool {
    DEPARTMENT_ALIASES
        .iter()
        .any(|(canonical, synonyms)| *canonical == key && synonyms.iter().any(|s| other.contains(s)))
}

/// Whether a hospital department satisfies the requested department.
///
/// The result does not depend on argument order.
pub fn matches(hospital_department: &str, requested_department: &str) -> bool {
    let hospital = normalize(hospital_department);
    let requested = normalize(requested_department);

    if hospital == requested {
        return true;
    }

    if hospital.contains(&requested) || requested.contains(&hospital) {
        return true;
    }

    alias_hit(&hospital, &requested) || alias_hit(&requested, &hospital)
}
