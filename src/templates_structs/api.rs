use serde::{Deserialize, Serialize};

use crate::models::audit::AuditEntry;

/// Wire shape of one audit record.
#[derive(Serialize, Debug, Clone)]
pub struct ApiAuditItem {
    pub time: String,
    pub table: String,
    pub id: String,
    pub user: String,
    pub action: String,
}

impl From<AuditEntry> for ApiAuditItem {
    fn from(e: AuditEntry) -> Self {
        ApiAuditItem {
            time: e.time,
            table: e.table_name,
            id: e.record_id,
            user: e.user_ident,
            action: e.action,
        }
    }
}

/// One page of results plus pagination metadata. `pageNumber` is zero-based.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    pub content: Vec<T>,
    pub number_of_elements: i64,
    pub page_number: i64,
    pub pages: i64,
    pub page_size: i64,
    pub total_elements: i64,
}

/// Change event pushed by a catalog service. `time` is RFC 3339; omitted means
/// "now". `table` and `action` are validated against the known sets.
#[derive(Deserialize, Debug)]
pub struct ApiAuditRequest {
    pub time: Option<String>,
    pub table: String,
    pub action: String,
    pub id: String,
    pub user: String,
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
