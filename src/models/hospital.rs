use serde::{Deserialize, Serialize};

/// A hospital from the static directory. Wire format uses the dataset's
/// camelCase keys (`mapsUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub maps_url: String,
    pub city: String,
    pub departments: Vec<String>,
}

/// Filter values that were applied to a hospital listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub city: Option<String>,
    pub department: Option<String>,
}

/// Result of a hospital lookup, with the metadata the UI displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalListing {
    pub hospitals: Vec<Hospital>,
    #[serde(rename = "filters")]
    pub applied_filters: AppliedFilters,
    pub count: usize,
}

impl HospitalListing {
    pub fn new(hospitals: Vec<Hospital>, applied_filters: AppliedFilters) -> Self {
        let count = hospitals.len();
        Self {
            hospitals,
            applied_filters,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hospital_reads_dataset_keys() {
        let hospital: Hospital = serde_json::from_value(json!({
            "id": 7,
            "name": "Ruby Hall Clinic",
            "address": "40 Sassoon Road, Pune",
            "phone": "+91 20 6645 5100",
            "mapsUrl": "https://maps.google.com/?q=Ruby+Hall+Clinic+Pune",
            "city": "Pune",
            "departments": ["Cardiology", "Neurology"]
        }))
        .unwrap();
        assert_eq!(hospital.id, 7);
        assert!(hospital.maps_url.contains("Ruby"));
        assert_eq!(hospital.departments.len(), 2);
    }

    #[test]
    fn listing_count_tracks_hospitals() {
        let listing = HospitalListing::new(Vec::new(), AppliedFilters::default());
        assert_eq!(listing.count, 0);
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["filters"], json!({"city": null, "department": null}));
    }
}
