use serde_json::{Map, Value};
use std::fmt;

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Demo,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Live => f.write_str("Live API"),
            Source::Demo => f.write_str("Demo"),
        }
    }
}

#[derive(Debug)]
pub struct Lookup {
    pub record: VehicleRecord,
    pub source: Source,
}

/// Fields every rendered record shows, whether or not the service sent them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    RegistrationNumber,
    Owner,
    RegistrationDate,
    VehicleClass,
    FuelType,
    MakerModel,
    EngineNumber,
    ChassisNumber,
    InsuranceExpiry,
    FitnessUpto,
    RcStatus,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::RegistrationNumber,
        Field::Owner,
        Field::RegistrationDate,
        Field::VehicleClass,
        Field::FuelType,
        Field::MakerModel,
        Field::EngineNumber,
        Field::ChassisNumber,
        Field::InsuranceExpiry,
        Field::FitnessUpto,
        Field::RcStatus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::RegistrationNumber => "Registration No",
            Field::Owner => "Owner Name",
            Field::RegistrationDate => "Registration Date",
            Field::VehicleClass => "Vehicle Class",
            Field::FuelType => "Fuel Type",
            Field::MakerModel => "Model",
            Field::EngineNumber => "Engine No",
            Field::ChassisNumber => "Chassis No",
            Field::InsuranceExpiry => "Insurance Upto",
            Field::FitnessUpto => "Fitness Upto",
            Field::RcStatus => "RC Status",
        }
    }

    /// Source keys in priority order.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Field::RegistrationNumber => {
                &["license_plate", "registration_number", "rc_number", "plate"]
            }
            Field::Owner => &["owner_name", "owner"],
            Field::RegistrationDate => &["registration_date", "reg_date"],
            Field::VehicleClass => &["class", "vehicle_class"],
            Field::FuelType => &["fuel_type", "fuel"],
            Field::MakerModel => &["maker_model", "brand_model", "model"],
            Field::EngineNumber => &["engine_number", "engine_no"],
            Field::ChassisNumber => &["chassis_number", "chassis_no"],
            Field::InsuranceExpiry => &["insurance_expiry", "insurance_upto"],
            Field::FitnessUpto => &["fit_up_to", "fitness_upto"],
            Field::RcStatus => &["rc_status"],
        }
    }

    pub fn is_source_key(key: &str) -> bool {
        Field::ALL.iter().any(|f| f.keys().contains(&key))
    }
}

// Bookkeeping columns some providers include alongside the vehicle data.
const IGNORED_KEYS: &[&str] = &[
    "id",
    "createdAt",
    "updatedAt",
    "vehicleId",
    "source",
    "latest_by",
];

const MISSING_VALUES: &[&str] = &["", "null", "NA", "Not Available"];

const EXTRA_LABELS: &[(&str, &str)] = &[
    ("father_name", "Father's Name"),
    ("brand_name", "Make"),
    ("insurance_company", "Insurance Co"),
    ("insurance_policy", "Policy No"),
    ("color", "Colour"),
    ("norms", "Emission Norms"),
    ("seating_capacity", "Seating"),
    ("cubic_capacity", "Engine CC"),
    ("pucc_upto", "PUCC Upto"),
    ("pucc_number", "PUCC No"),
    ("noc_details", "NOC Details"),
    ("is_financed", "Financed"),
    ("national_permit_number", "National Permit No"),
    ("permit_number", "Permit No"),
];

/// Canonical view of one registration, whatever shape the service used.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    canonical: Vec<(Field, Option<String>)>,
    extra: Vec<(String, String)>,
}

impl VehicleRecord {
    pub fn from_map(map: &Map<String, Value>) -> VehicleRecord {
        let canonical = Field::ALL
            .iter()
            .map(|&field| {
                let value = field
                    .keys()
                    .iter()
                    .find_map(|key| map.get(*key).and_then(value_text));
                (field, value)
            })
            .collect();
        let extra = map
            .iter()
            .filter(|(key, _)| {
                !Field::is_source_key(key) && !IGNORED_KEYS.contains(&key.as_str())
            })
            .filter_map(|(key, value)| value_text(value).map(|text| (key.clone(), text)))
            .collect();
        VehicleRecord { canonical, extra }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.canonical
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Canonical fields first, in display order, then any extra fields.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let canonical = self.canonical.iter().map(|(field, value)| Row {
            label: field.label().to_string(),
            value: value.as_deref(),
            is_plate: *field == Field::RegistrationNumber,
        });
        let extra = self.extra.iter().map(|(key, value)| Row {
            label: extra_label(key),
            value: Some(value.as_str()),
            is_plate: false,
        });
        canonical.chain(extra).collect()
    }
}

#[derive(Debug, PartialEq)]
pub struct Row<'a> {
    pub label: String,
    pub value: Option<&'a str>,
    pub is_plate: bool,
}

fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    if MISSING_VALUES.contains(&text.as_str()) {
        None
    } else {
        Some(text)
    }
}

fn extra_label(key: &str) -> String {
    if let Some((_, label)) = EXTRA_LABELS.iter().find(|(k, _)| *k == key) {
        return label.to_string();
    }
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> VehicleRecord {
        match value {
            Value::Object(map) => VehicleRecord::from_map(&map),
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn first_matching_key_wins() {
        let r = record(json!({"owner": "Second", "owner_name": "First"}));
        assert_eq!(r.get(Field::Owner), Some("First"));
    }

    #[test]
    fn placeholder_values_count_as_missing() {
        let r = record(json!({
            "owner_name": "NA",
            "owner": "Real Owner",
            "fuel_type": null,
            "rc_status": "  ",
            "class": "Not Available",
        }));
        assert_eq!(r.get(Field::Owner), Some("Real Owner"));
        assert_eq!(r.get(Field::FuelType), None);
        assert_eq!(r.get(Field::RcStatus), None);
        assert_eq!(r.get(Field::VehicleClass), None);
    }

    #[test]
    fn extras_skip_bookkeeping_and_canonical_keys() {
        let r = record(json!({
            "id": 42,
            "createdAt": "2024-01-01",
            "owner": "X",
            "plate": "MH02FB2727",
            "insurance_company": "ACME",
            "owner_count": 2,
            "tax_upto": "",
        }));
        let labels: Vec<String> = r
            .rows()
            .into_iter()
            .skip(Field::ALL.len())
            .map(|row| row.label)
            .collect();
        assert_eq!(labels, vec!["Insurance Co", "Owner Count"]);
    }

    #[test]
    fn non_string_values_render_as_json_text() {
        let r = record(json!({"owner": "X", "is_financed": true, "seating_capacity": 5}));
        let rows = r.rows();
        assert!(rows.iter().any(|row| row.label == "Financed" && row.value == Some("true")));
        assert!(rows.iter().any(|row| row.label == "Seating" && row.value == Some("5")));
    }

    #[test]
    fn extra_labels_fall_back_to_title_case() {
        assert_eq!(extra_label("permit_valid_upto"), "Permit Valid Upto");
        assert_eq!(extra_label("_note"), "Note");
        assert_eq!(extra_label("BODY_TYPE"), "Body Type");
        assert_eq!(extra_label("color"), "Colour");
    }

    #[test]
    fn rows_list_every_canonical_field() {
        let r = record(json!({"license_plate": "MH02FB2727"}));
        let rows = r.rows();
        assert_eq!(rows.len(), Field::ALL.len());
        assert!(rows[0].is_plate);
        assert_eq!(rows[0].value, Some("MH02FB2727"));
        assert!(rows[1..].iter().all(|row| row.value.is_none()));
    }
}
