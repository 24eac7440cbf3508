//! Single-line JSON log records on stderr, picked up by CloudWatch.

use serde_json::{json, Value};

const COMPONENT: &str = "bucket_owners_handler";

pub fn log_info(event: &str, details: Value) {
    eprintln!("{}", log_record(None, event, details));
}

pub fn log_warn(event: &str, details: Value) {
    eprintln!("{}", log_record(Some("warn"), event, details));
}

pub fn log_error(event: &str, details: Value) {
    eprintln!("{}", log_record(Some("error"), event, details));
}

fn log_record(level: Option<&str>, event: &str, details: Value) -> Value {
    let mut record = json!({
        "component": COMPONENT,
        "event": event,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "details": details,
    });
    if let (Some(level), Some(fields)) = (level, record.as_object_mut()) {
        fields.insert("level".to_string(), Value::from(level));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_records_omit_level() {
        let record = log_record(None, "buckets_listed", json!({"bucket_count": 3}));
        assert_eq!(record["component"], "bucket_owners_handler");
        assert_eq!(record["event"], "buckets_listed");
        assert_eq!(record["details"]["bucket_count"], 3);
        assert!(record.get("level").is_none());
        assert!(record["timestamp"].as_str().is_some());
    }

    #[test]
    fn error_records_carry_level() {
        let record = log_record(Some("error"), "bucket_listing_failed", json!({}));
        assert_eq!(record["level"], "error");
    }
}
