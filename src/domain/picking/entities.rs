//! Picking Context - Entities

use serde::Serialize;
use serde_json::Value;

/// 最近扫描记录默认条数
pub const DEFAULT_RECENT_SCANS: i64 = 25;

/// 拣货会话
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PickingSession {
    pub session_id: i64,
    pub user_id: i64,
    /// ISO-8601 字符串，或存储过程未返回时为 null
    pub started_at: Value,
    pub status: String,
}

impl PickingSession {
    pub const DEFAULT_STATUS: &'static str = "Active";
}

/// 单条扫描记录
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanItem {
    pub scan_id: i64,
    pub barcode_or_serial: String,
    pub qty: i64,
    pub scanned_at: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_serializes_with_client_field_names() {
        let session = PickingSession {
            session_id: 12,
            user_id: 5,
            started_at: json!("2025-11-01T10:00:00"),
            status: PickingSession::DEFAULT_STATUS.to_string(),
        };

        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({
                "SessionId": 12,
                "UserId": 5,
                "StartedAt": "2025-11-01T10:00:00",
                "Status": "Active",
            })
        );
    }

    #[test]
    fn test_scan_item_keeps_null_timestamp() {
        let item = ScanItem {
            scan_id: 1,
            barcode_or_serial: "ABC".to_string(),
            qty: 2,
            scanned_at: Value::Null,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["BarcodeOrSerial"], "ABC");
        assert!(value["ScannedAt"].is_null());
    }
}
