//! Wire-contract tests for the audit API types: field names, casing, and the
//! zero-based page numbering consumers depend on.

mod common;

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use common::*;
use endringslogg::models::audit::{self, Action};
use endringslogg::models::object_type::ObjectType;
use endringslogg::templates_structs::{ApiAuditItem, PageResponse};

#[test]
fn test_page_response_wire_shape() {
    let (_dir, conn) = setup_test_db();
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    for i in 0..45 {
        record_at(
            &conn,
            base + Duration::minutes(i),
            ObjectType::Team,
            Action::Create,
            &format!("rec-{i}"),
            "A123456",
        );
    }

    // Zero-based page index 2 == model page 3
    let page_index = 2;
    let page_data = audit::find_paginated(&conn, page_index + 1, 20, None).expect("fetch");
    let content: Vec<ApiAuditItem> = page_data
        .entries
        .into_iter()
        .map(ApiAuditItem::from)
        .collect();
    let response = PageResponse {
        number_of_elements: content.len() as i64,
        content,
        page_number: page_index,
        pages: page_data.total_pages,
        page_size: page_data.per_page,
        total_elements: page_data.total_count,
    };

    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["pageNumber"], json!(2));
    assert_eq!(value["pages"], json!(3));
    assert_eq!(value["pageSize"], json!(20));
    assert_eq!(value["totalElements"], json!(45));
    assert_eq!(value["numberOfElements"], json!(5));
    assert_eq!(value["content"].as_array().map(|a| a.len()), Some(5));
}

#[test]
fn test_audit_item_wire_fields() {
    let (_dir, conn) = setup_test_db();
    let time = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    record_at(
        &conn,
        time,
        ObjectType::ProductArea,
        Action::Delete,
        "f00dfeed-0000-4000-8000-000000000001",
        "B654321 - Ola Nordmann",
    );

    let page = audit::find_paginated(&conn, 1, 20, None).expect("fetch");
    let item = ApiAuditItem::from(page.entries[0].clone());
    let value = serde_json::to_value(&item).expect("serialize");

    assert_eq!(value["time"], json!("2024-06-01T12:00:00Z"));
    assert_eq!(value["table"], json!("ProductArea"));
    assert_eq!(value["id"], json!("f00dfeed-0000-4000-8000-000000000001"));
    assert_eq!(value["user"], json!("B654321 - Ola Nordmann"));
    assert_eq!(value["action"], json!("DELETE"));
}

#[test]
fn test_action_and_object_type_casing() {
    assert_eq!(
        serde_json::to_string(&Action::Create).expect("serialize"),
        "\"CREATE\""
    );
    assert_eq!(
        serde_json::to_string(&ObjectType::ProductArea).expect("serialize"),
        "\"ProductArea\""
    );
    let parsed: Action = serde_json::from_str("\"UPDATE\"").expect("deserialize");
    assert_eq!(parsed, Action::Update);
}
