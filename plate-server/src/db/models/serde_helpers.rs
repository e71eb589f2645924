//! Common serde helpers for SurrealDB documents
//!
//! 记录 ID 对外只暴露纯键 (key)：
//! - 序列化: `order:⟨abc⟩` → `"abc"`
//! - 反序列化: SurrealDB 原生 RecordId

use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// Bare key of a record id, without table prefix or ⟨⟩ escaping
pub fn record_key(id: &RecordId) -> String {
    let raw = id.to_string();
    let key = raw.split_once(':').map_or(raw.as_str(), |(_, key)| key);
    key.trim_start_matches(['⟨', '`'])
        .trim_end_matches(['⟩', '`'])
        .to_string()
}

/// Option<RecordId> serialized as the bare key string
pub mod option_record_key {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&record_key(id)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RecordId>::deserialize(d)
    }
}

/// DateTime<Utc> stored as fixed-width RFC 3339 (micros) string
pub mod timestamp {
    use super::*;
    use crate::utils::time::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};

    pub fn serialize<S>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Doc {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "option_record_key"
        )]
        id: Option<RecordId>,
        name: &'static str,
    }

    #[test]
    fn test_record_key_strips_table() {
        let id = RecordId::from_table_key("order", "67e5504410b1426f9247bb680e5fe0c8");
        assert_eq!(record_key(&id), "67e5504410b1426f9247bb680e5fe0c8");
    }

    #[test]
    fn test_record_key_strips_escaping() {
        // all-digit keys are rendered escaped by SurrealDB
        let id = RecordId::from_table_key("order", "12345678901234567890123456789012");
        assert_eq!(record_key(&id), "12345678901234567890123456789012");
    }

    #[test]
    fn test_id_serialized_as_bare_key() {
        let doc = Doc {
            id: Some(RecordId::from_table_key("restaurant", "abc123")),
            name: "Green Bowl",
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], "abc123");
    }

    #[test]
    fn test_missing_id_is_omitted() {
        let doc = Doc {
            id: None,
            name: "Green Bowl",
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("id").is_none());
    }
}
