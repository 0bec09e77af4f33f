use crate::error::LookupError;
use crate::types::{Field, VehicleRecord};
use log::debug;
use serde_json::{Map, Value};

/// Sub-keys under which providers nest the vehicle fields, checked in order.
const NESTED_KEYS: &[&str] = &["response", "data"];

/// The shapes a lookup response body can take.
#[derive(Debug, PartialEq)]
pub enum LookupResponse {
    /// `{"status": "success", "response": {...}}` or `{"data": {...}}`.
    Nested(Map<String, Value>),
    /// Vehicle fields at the top level.
    Flat(Map<String, Value>),
    /// The provider reported an error.
    Failed(String),
    Unknown(Value),
}

impl LookupResponse {
    pub fn classify(value: Value) -> LookupResponse {
        let mut map = match value {
            Value::Object(map) => map,
            other => return LookupResponse::Unknown(other),
        };

        let error = map
            .get("error")
            .filter(|e| !matches!(e, Value::Null | Value::Bool(false)));
        if let Some(error) = error {
            return LookupResponse::Failed(describe(error));
        }

        // `response` is only trusted under a successful status; `data` always.
        let status_ok = match map.get("status") {
            None => true,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("success"),
            Some(_) => false,
        };
        for key in NESTED_KEYS {
            if *key == "response" && !status_ok {
                continue;
            }
            if !matches!(map.get(*key), Some(Value::Object(inner)) if has_record_keys(inner)) {
                continue;
            }
            if let Some(Value::Object(inner)) = map.remove(*key) {
                return LookupResponse::Nested(inner);
            }
        }

        if has_record_keys(&map) {
            return LookupResponse::Flat(map);
        }
        if !status_ok {
            if let Some(status) = map.get("status") {
                let message = map.get("message").unwrap_or(status);
                return LookupResponse::Failed(describe(message));
            }
        }
        LookupResponse::Unknown(Value::Object(map))
    }
}

fn has_record_keys(map: &Map<String, Value>) -> bool {
    map.keys().any(|key| Field::is_source_key(key))
}

pub fn normalize(response: LookupResponse) -> Result<VehicleRecord, LookupError> {
    match response {
        LookupResponse::Nested(map) | LookupResponse::Flat(map) => {
            Ok(VehicleRecord::from_map(&map))
        }
        LookupResponse::Failed(message) => Err(LookupError::Api(message)),
        LookupResponse::Unknown(raw) => {
            debug!("Unrecognized response body: {}", raw);
            Err(LookupError::UnknownFormat)
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owner_of(body: Value) -> Option<String> {
        normalize(LookupResponse::classify(body))
            .ok()
            .and_then(|r| r.get(Field::Owner).map(str::to_string))
    }

    #[test]
    fn flat_response() {
        let body = json!({"owner": "X", "fuel_type": "Diesel"});
        assert!(matches!(LookupResponse::classify(body.clone()), LookupResponse::Flat(_)));
        assert_eq!(owner_of(body), Some("X".to_string()));
    }

    #[test]
    fn nested_under_data() {
        let body = json!({"data": {"owner": "X", "fuel_type": "Diesel"}});
        assert!(matches!(LookupResponse::classify(body.clone()), LookupResponse::Nested(_)));
        assert_eq!(owner_of(body), Some("X".to_string()));
    }

    #[test]
    fn nested_under_response_with_status() {
        let body = json!({
            "status": "success",
            "response": {"license_plate": "MH02FB2727", "owner_name": "X"}
        });
        assert_eq!(owner_of(body), Some("X".to_string()));
    }

    #[test]
    fn nested_key_takes_priority_over_top_level() {
        let body = json!({"owner": "Outer", "data": {"owner": "Inner"}});
        assert_eq!(owner_of(body), Some("Inner".to_string()));
    }

    #[test]
    fn scalar_data_key_is_not_nested() {
        let body = json!({"data": "nothing here", "owner_name": "X"});
        assert_eq!(owner_of(body), Some("X".to_string()));
    }

    #[test]
    fn error_field_fails() {
        let response = LookupResponse::classify(json!({"error": "quota exceeded"}));
        assert_eq!(response, LookupResponse::Failed("quota exceeded".to_string()));
        assert!(matches!(normalize(response), Err(LookupError::Api(_))));
    }

    #[test]
    fn null_error_field_is_ignored() {
        let body = json!({"error": null, "data": {"owner": "X"}});
        assert_eq!(owner_of(body), Some("X".to_string()));
    }

    #[test]
    fn unsuccessful_status_fails_with_message() {
        let response = LookupResponse::classify(json!({
            "status": "failed",
            "message": "Record not found",
            "response": {}
        }));
        assert_eq!(response, LookupResponse::Failed("Record not found".to_string()));
    }

    #[test]
    fn record_status_field_does_not_veto_flat_body() {
        let body = json!({"owner_name": "X", "status": "ACTIVE"});
        assert!(matches!(LookupResponse::classify(body.clone()), LookupResponse::Flat(_)));
        assert_eq!(owner_of(body), Some("X".to_string()));
    }

    #[test]
    fn non_string_status_does_not_veto_data() {
        let body = json!({"status": true, "data": {"owner": "X"}});
        assert_eq!(owner_of(body), Some("X".to_string()));
    }

    #[test]
    fn response_needs_successful_status() {
        let body = json!({"status": "pending", "response": {"owner_name": "X"}});
        assert_eq!(LookupResponse::classify(body), LookupResponse::Failed("pending".to_string()));
    }

    #[test]
    fn empty_nested_record_is_unknown() {
        for body in vec![
            json!({"status": "success", "response": {}}),
            json!({"data": {"message": "Record not found"}}),
        ] {
            let response = LookupResponse::classify(body);
            assert!(matches!(response, LookupResponse::Unknown(_)));
            assert!(normalize(response).is_err());
        }
    }

    #[test]
    fn unknown_shapes() {
        for body in vec![json!({"hello": "world"}), json!([1, 2, 3]), json!("text")] {
            let response = LookupResponse::classify(body);
            assert!(matches!(response, LookupResponse::Unknown(_)));
            assert!(matches!(normalize(response), Err(LookupError::UnknownFormat)));
        }
    }
}
