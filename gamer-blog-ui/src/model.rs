//! Diary Entry Model
//!
//! The only domain record of the app. Entries are immutable once saved:
//! there is a create path and a delete path, no edit path.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A saved post
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Opaque unique id assigned by the store
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation time, RFC 3339 in UTC
    pub date: String,
    /// Inline image as a data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// An entry that has not been stored yet
#[derive(Clone, Debug, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub date: String,
    pub photo: Option<String>,
    pub quote: Option<String>,
    pub location: Option<GeoPoint>,
}

impl NewEntry {
    /// Attach the id the store picked
    pub fn with_id(self, id: String) -> DiaryEntry {
        DiaryEntry {
            id,
            title: self.title,
            content: self.content,
            date: self.date,
            photo: self.photo,
            quote: self.quote,
            location: self.location,
        }
    }
}

/// Latitude/longitude pair in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current time in the format stored in [`DiaryEntry::date`]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(location: Option<GeoPoint>) -> DiaryEntry {
        NewEntry {
            title: "Review".to_string(),
            content: "Great game".to_string(),
            date: "2024-05-01T12:00:00.000Z".to_string(),
            photo: None,
            quote: None,
            location,
        }
        .with_id("abc".to_string())
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let json = serde_json::to_value(entry(None)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("location"));
        assert!(!obj.contains_key("photo"));
        assert!(!obj.contains_key("quote"));
        assert_eq!(obj["id"], "abc");
    }

    #[test]
    fn test_location_serialized_when_present() {
        let json = serde_json::to_value(entry(Some(GeoPoint {
            latitude: 40.4168,
            longitude: -3.7038,
        })))
        .unwrap();
        assert_eq!(json["location"]["latitude"], 40.4168);
    }

    #[test]
    fn test_reads_records_without_optional_fields() {
        let raw = r#"{"id":"1","title":"t","content":"c","date":"2024-01-01T00:00:00.000Z"}"#;
        let parsed: DiaryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.location, None);
        assert_eq!(parsed.photo, None);
    }

    #[test]
    fn test_now_timestamp_is_rfc3339_utc() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
