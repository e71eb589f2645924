//! 记录键 (record key)
//!
//! 存储层在插入时分配键：UUID v4 的 simple 形式 (32 位小写十六进制)。
//! 路径中的 id 必须能解析为 UUID，连字符形式会被规范化为 simple 形式。

use uuid::Uuid;

use crate::utils::{AppError, AppResult};

/// Generate a fresh record key
pub fn new_record_key() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Parse a client-supplied id into a record key
///
/// `resource` only shapes the error message ("Invalid order ID: ...").
pub fn parse_record_key(resource: &str, raw: &str) -> AppResult<String> {
    Uuid::try_parse(raw)
        .map(|id| id.simple().to_string())
        .map_err(|_| AppError::invalid_identifier(format!("Invalid {resource} ID: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_key_is_simple_uuid() {
        let key = new_record_key();
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(key, new_record_key());
    }

    #[test]
    fn test_parse_accepts_simple_and_hyphenated() {
        let key = new_record_key();
        assert_eq!(parse_record_key("order", &key).unwrap(), key);

        let hyphenated = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert_eq!(
            parse_record_key("order", hyphenated).unwrap(),
            "67e5504410b1426f9247bb680e5fe0c8"
        );
    }

    #[test]
    fn test_parse_normalizes_case() {
        assert_eq!(
            parse_record_key("order", "67E5504410B1426F9247BB680E5FE0C8").unwrap(),
            "67e5504410b1426f9247bb680e5fe0c8"
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", "abc", "not-a-valid-id", "507f1f77bcf86cd799439011", "order:abc"] {
            let err = parse_record_key("reservation", raw).unwrap_err();
            assert!(matches!(err, AppError::InvalidIdentifier(_)), "{raw}");
        }
        let err = parse_record_key("restaurant", "xyz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid restaurant ID: xyz");
    }
}
