use crate::plate::Plate;
use crate::types::{Field, VehicleRecord};
use serde_json::{Map, Value};

const DEMO_NOTE: &str = "This is demo data - API not used.";

struct DemoVehicle {
    plate: &'static str,
    owner_name: &'static str,
    registration_date: &'static str,
    class: &'static str,
    fuel_type: &'static str,
    engine_number: &'static str,
    chassis_number: &'static str,
    maker_model: &'static str,
    insurance_expiry: &'static str,
    fit_up_to: &'static str,
}

impl DemoVehicle {
    /// Flat response body for this vehicle, registered under `plate`.
    fn to_map(&self, plate: &str) -> Map<String, Value> {
        [
            ("license_plate", plate),
            ("owner_name", self.owner_name),
            ("registration_date", self.registration_date),
            ("class", self.class),
            ("fuel_type", self.fuel_type),
            ("engine_number", self.engine_number),
            ("chassis_number", self.chassis_number),
            ("maker_model", self.maker_model),
            ("insurance_expiry", self.insurance_expiry),
            ("fit_up_to", self.fit_up_to),
            ("rc_status", "Active"),
            ("_note", DEMO_NOTE),
        ]
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(*value)))
        .collect()
    }
}

const DEMO_VEHICLES: &[DemoVehicle] = &[
    DemoVehicle {
        plate: "MH02FB2727",
        owner_name: "R***** K***",
        registration_date: "14-03-2017",
        class: "Motor Car",
        fuel_type: "Diesel",
        engine_number: "2GDA118734",
        chassis_number: "MBJKB3FS10021",
        maker_model: "Toyota Innova Crysta",
        insurance_expiry: "13-03-2025",
        fit_up_to: "13-03-2032",
    },
    DemoVehicle {
        plate: "PB65AM0008",
        owner_name: "G****** S****",
        registration_date: "02-11-2019",
        class: "Motor Car",
        fuel_type: "Petrol",
        engine_number: "G4FGKU58213",
        chassis_number: "MALC381CLKM04",
        maker_model: "Hyundai Creta",
        insurance_expiry: "01-11-2025",
        fit_up_to: "01-11-2034",
    },
    DemoVehicle {
        plate: "DL3CA0001",
        owner_name: "A**** M*****",
        registration_date: "21-06-2021",
        class: "M-Cycle/Scooter",
        fuel_type: "Electric",
        engine_number: "MTR450X0917",
        chassis_number: "MF3ATH45XMA01",
        maker_model: "Ather 450X",
        insurance_expiry: "20-06-2026",
        fit_up_to: "20-06-2036",
    },
];

// Stands in for plates missing from the table; the requested plate is
// filled in at lookup time.
const PLACEHOLDER: DemoVehicle = DemoVehicle {
    plate: "",
    owner_name: "DEMO OWNER",
    registration_date: "01-01-2020",
    class: "Motor Car",
    fuel_type: "Petrol",
    engine_number: "DEMO12345",
    chassis_number: "DEMO67890",
    maker_model: "Maruti Suzuki Swift",
    insurance_expiry: "31-12-2024",
    fit_up_to: "31-12-2025",
};

/// Offline substitute for a live lookup. Plates missing from the table get
/// the generic placeholder record.
pub fn lookup(plate: &Plate) -> VehicleRecord {
    let vehicle = DEMO_VEHICLES
        .iter()
        .find(|v| v.plate == plate.as_str())
        .unwrap_or(&PLACEHOLDER);
    VehicleRecord::from_map(&vehicle.to_map(plate.as_str()))
}
