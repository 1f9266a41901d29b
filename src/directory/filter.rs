//! Hospital filtering by city and department, with city-only fallback.

use crate::models::{AppliedFilters, Hospital, HospitalListing};

use super::matcher::matches;

/// Treat blank query values as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn same_city(hospital: &Hospital, city: &str) -> bool {
    hospital.city.trim().to_lowercase() == city.to_lowercase()
}

fn offers(hospital: &Hospital, department: &str) -> bool {
    hospital.departments.iter().any(|d| matches(d, department))
}

/// Filter hospitals by city (exact, case-insensitive) and department
/// (see [`matches`]). Input order is preserved.
///
/// When the department filter leaves nothing and a city was given, the
/// department filter is dropped and every hospital in the city is returned.
/// No other widening happens.
pub fn filter_hospitals<'a>(
    hospitals: &'a [Hospital],
    city: Option<&str>,
    department: Option<&str>,
) -> Vec<&'a Hospital> {
    let city = present(city);
    let department = present(department);

    let in_city: Vec<&Hospital> = match city {
        Some(city) => hospitals.iter().filter(|h| same_city(h, city)).collect(),
        None => hospitals.iter().collect(),
    };

    let Some(department) = department else {
        return in_city;
    };

    let by_department: Vec<&Hospital> = in_city
        .iter()
        .copied()
        .filter(|h| offers(h, department))
        .collect();

    if by_department.is_empty() && city.is_some() {
        tracing::debug!(
            department,
            city_matches = in_city.len(),
            "No department match, falling back to city-only results"
        );
        return in_city;
    }

    by_department
}

/// Filter and package the result with the applied filter values.
pub fn list_hospitals(
    hospitals: &[Hospital],
    city: Option<&str>,
    department: Option<&str>,
) -> HospitalListing {
    let selected = filter_hospitals(hospitals, city, department)
        .into_iter()
        .cloned()
        .collect();
    let applied = AppliedFilters {
        city: present(city).map(str::to_string),
        department: present(department).map(str::to_string),
    };
    HospitalListing::new(selected, applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospital(id: u32, city: &str, departments: &[&str]) -> Hospital {
        Hospital {
            id,
            name: format!("Hospital {id}"),
            address: format!("{id} Main Road, {city}"),
            phone: "+91 00 0000 0000".into(),
            maps_url: format!("https://maps.example/{id}"),
            city: city.into(),
            departments: departments.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn ids(hospitals: &[&Hospital]) -> Vec<u32> {
        hospitals.iter().map(|h| h.id).collect()
    }

    fn sample() -> Vec<Hospital> {
        vec![
            hospital(1, "Pune", &["Cardiology", "General Physician"]),
            hospital(2, "Mumbai", &["Neurology", "ENT"]),
            hospital(3, "Pune", &["Dermatology"]),
            hospital(4, "Delhi", &["Cardiology", "Pediatrics"]),
            hospital(5, "mumbai", &["Heart Institute", "Orthopedics"]),
        ]
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let all = sample();
        assert_eq!(ids(&filter_hospitals(&all, None, None)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn city_is_case_insensitive_and_exact() {
        let all = sample();
        assert_eq!(ids(&filter_hospitals(&all, Some("MUMBAI"), None)), vec![2, 5]);
        assert!(filter_hospitals(&all, Some("Mum"), None).is_empty());
    }

    #[test]
    fn unmatched_city_returns_empty() {
        let all = sample();
        assert!(filter_hospitals(&all, Some("Nowhere"), None).is_empty());
    }

    #[test]
    fn department_uses_matcher() {
        let all = sample();
        assert_eq!(ids(&filter_hospitals(&all, None, Some("heart"))), vec![1, 4, 5]);
        assert_eq!(ids(&filter_hospitals(&all, None, Some("Physician"))), vec![1]);
    }

    #[test]
    fn city_and_department_combine() {
        let all = sample();
        assert_eq!(
            ids(&filter_hospitals(&all, Some("Mumbai"), Some("Cardiology"))),
            vec![5]
        );
    }

    #[test]
    fn department_miss_with_city_falls_back_to_city() {
        let pune = vec![hospital(1, "Pune", &["Cardiology"])];
        assert_eq!(ids(&filter_hospitals(&pune, Some("Pune"), Some("Neurology"))), vec![1]);

        let all = sample();
        assert_eq!(
            ids(&filter_hospitals(&all, Some("Pune"), Some("Oncology"))),
            vec![1, 3]
        );
    }

    #[test]
    fn department_miss_without_city_stays_empty() {
        let all = sample();
        assert!(filter_hospitals(&all, None, Some("Oncology")).is_empty());
    }

    #[test]
    fn fallback_to_unknown_city_stays_empty() {
        let all = sample();
        assert!(filter_hospitals(&all, Some("Nowhere"), Some("Oncology")).is_empty());
    }

    #[test]
    fn blank_values_are_ignored() {
        let all = sample();
        assert_eq!(filter_hospitals(&all, Some("  "), Some("")).len(), 5);
    }

    #[test]
    fn listing_carries_filters_and_count() {
        let all = sample();
        let listing = list_hospitals(&all, Some(" Pune "), Some("Cardiology"));
        assert_eq!(listing.count, listing.hospitals.len());
        assert_eq!(listing.count, 1);
        assert_eq!(listing.applied_filters.city.as_deref(), Some("Pune"));
        assert_eq!(listing.applied_filters.department.as_deref(), Some("Cardiology"));

        let unfiltered = list_hospitals(&all, None, Some(" "));
        assert_eq!(unfiltered.count, 5);
        assert_eq!(unfiltered.applied_filters, AppliedFilters::default());
    }
}
