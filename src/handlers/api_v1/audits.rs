use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::auth::csrf::constant_time_eq;
use crate::auth::session::is_admin;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::handlers::api_v1::ApiKey;
use crate::models::audit::{self, Action, NewAuditEntry};
use crate::models::object_type::ObjectType;
use crate::templates_structs::{ApiAuditItem, ApiAuditRequest, ApiErrorResponse, PageResponse};

#[derive(Deserialize)]
pub struct AuditQuery {
    /// Zero-based page index.
    page: Option<i64>,
    limit: Option<i64>,
    table: Option<String>,
}

fn has_valid_key(req: &HttpRequest, key: &ApiKey) -> bool {
    let Some(expected) = key.0.as_deref() else {
        return false;
    };
    req.headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(|got| constant_time_eq(got, expected))
        .unwrap_or(false)
}

fn bad_request(error: &str, details: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiErrorResponse {
        error: error.to_string(),
        details: Some(details),
    })
}

/// GET /api/v1/audits - one page of audit records, newest first.
/// Query params: page (zero-based, default 0), limit (default 20, max 100),
/// table (optional ObjectType name). Callers: the admin panel (session) and
/// catalog services (API key).
pub async fn list(
    pool: web::Data<DbPool>,
    session: Session,
    key: web::Data<ApiKey>,
    req: HttpRequest,
    query: web::Query<AuditQuery>,
) -> Result<HttpResponse, AppError> {
    if !is_admin(&session) && !has_valid_key(&req, &key) {
        return Ok(HttpResponse::Unauthorized().json(ApiErrorResponse {
            error: "Unauthorized".to_string(),
            details: None,
        }));
    }

    let page_index = query.page.unwrap_or(0).max(0);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let table = match query.table.as_deref().filter(|t| !t.is_empty()) {
        Some(t) => match t.parse::<ObjectType>() {
            Ok(ot) => Some(ot),
            Err(e) => return Ok(bad_request("Invalid table filter", e)),
        },
        None => None,
    };

    let conn = pool.get()?;
    let page_data = audit::find_paginated(&conn, page_index + 1, limit, table)?;

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
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/v1/audits - record one change event. API key only.
pub async fn create(
    pool: web::Data<DbPool>,
    key: web::Data<ApiKey>,
    req: HttpRequest,
    payload: web::Json<ApiAuditRequest>,
) -> Result<HttpResponse, AppError> {
    if !has_valid_key(&req, &key) {
        return Ok(HttpResponse::Unauthorized().json(ApiErrorResponse {
            error: "Unauthorized".to_string(),
            details: None,
        }));
    }

    let table = match payload.table.parse::<ObjectType>() {
        Ok(t) => t,
        Err(e) => return Ok(bad_request("Invalid table", e)),
    };
    let action = match payload.action.parse::<Action>() {
        Ok(a) => a,
        Err(e) => return Ok(bad_request("Invalid action", e)),
    };
    let time = match payload.time.as_deref() {
        Some(t) => match DateTime::parse_from_rfc3339(t) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(e) => return Ok(bad_request("Invalid time", e.to_string())),
        },
        None => Utc::now(),
    };
    if payload.id.trim().is_empty() || payload.user.trim().is_empty() {
        return Ok(bad_request(
            "Missing field",
            "id and user must be non-empty".to_string(),
        ));
    }

    let entry = NewAuditEntry {
        time,
        table_name: table,
        action,
        record_id: payload.id.trim().to_string(),
        user_ident: payload.user.trim().to_string(),
    };

    let conn = pool.get()?;
    let id = audit::record(&conn, &entry)?;
    log::debug!("Recorded {} on {} ({})", action, table, entry.record_id);

    Ok(HttpResponse::Created().json(serde_json::json!({ "id": id })))
}
