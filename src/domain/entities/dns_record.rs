//! DNS record entities as exchanged with the provider.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::fmt;

/// Address record types this service manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordType {
    /// IPv4 address record.
    #[serde(rename = "A")]
    A,
    /// IPv6 address record.
    #[serde(rename = "AAAA")]
    Aaaa,
}

impl RecordType {
    /// Returns the wire name of the record type (`"A"` or `"AAAA"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by the provider's retrieve endpoint.
///
/// `record_type` is kept as a raw string because the provider returns every
/// record of the zone (MX, TXT, CNAME, ...), not only address records.
/// `name` is the fully-qualified name, e.g. `home.example.com`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    /// The provider reports TTL as a string; plain numbers are accepted too.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub ttl: Option<u32>,
}

impl DnsRecord {
    /// Creates a new DnsRecord instance.
    pub fn new(
        id: impl Into<String>,
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        ttl: Option<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            ttl,
        }
    }

    /// Returns true if this record has the given type and fully-qualified name.
    pub fn matches(&self, record_type: RecordType, name: &str) -> bool {
        self.record_type == record_type.as_str() && self.name == name
    }
}

/// Record fields sent to the provider on create and edit.
///
/// `name` is the subdomain label only; the provider joins it with the
/// registrable domain in the request path. An empty label targets the apex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub content: String,
    pub ttl: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_type_wire_names() {
        assert_eq!(RecordType::A.as_str(), "A");
        assert_eq!(RecordType::Aaaa.as_str(), "AAAA");
        assert_eq!(RecordType::Aaaa.to_string(), "AAAA");
        assert_eq!(serde_json::to_value(RecordType::Aaaa).unwrap(), json!("AAAA"));
    }

    #[test]
    fn test_dns_record_from_provider_json() {
        let record: DnsRecord = serde_json::from_value(json!({
            "id": "106926659",
            "name": "www.example.com",
            "type": "A",
            "content": "1.1.1.1",
            "ttl": "600",
            "prio": "0",
            "notes": ""
        }))
        .unwrap();

        assert_eq!(record.id, "106926659");
        assert_eq!(record.record_type, "A");
        assert_eq!(record.name, "www.example.com");
        assert_eq!(record.content, "1.1.1.1");
        assert_eq!(record.ttl, Some(600));
    }

    #[test]
    fn test_dns_record_numeric_and_missing_ttl() {
        let numeric: DnsRecord = serde_json::from_value(json!({
            "id": "1", "name": "example.com", "type": "MX", "content": "mx.example.com", "ttl": 3600
        }))
        .unwrap();
        assert_eq!(numeric.ttl, Some(3600));

        let missing: DnsRecord = serde_json::from_value(json!({
            "id": "2", "name": "example.com", "type": "TXT", "content": "v=spf1 -all"
        }))
        .unwrap();
        assert_eq!(missing.ttl, None);
    }

    #[test]
    fn test_dns_record_matches_type_and_name() {
        let record = DnsRecord::new("7", "AAAA", "home.example.com", "::1", Some(600));

        assert!(record.matches(RecordType::Aaaa, "home.example.com"));
        assert!(!record.matches(RecordType::A, "home.example.com"));
        assert!(!record.matches(RecordType::Aaaa, "example.com"));
    }

    #[test]
    fn test_record_payload_serialization() {
        let payload = RecordPayload {
            name: "home".to_string(),
            record_type: RecordType::A,
            content: "203.0.113.7".to_string(),
            ttl: 600,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "home", "type": "A", "content": "203.0.113.7", "ttl": 600 })
        );
    }
}
