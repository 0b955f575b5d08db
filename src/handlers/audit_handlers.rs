use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::auth::session::require_admin;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::audit::view::RecentTableState;
use crate::models::audit::{self, AuditEntry};
use crate::models::object_type::ObjectType;
use crate::models::relative_time;
use crate::templates_structs::{
    AuditListTemplate, LimitOption, NavLink, PageContext, PageLink, RecentRow, TableOption,
};

const LIMIT_CHOICES: [i64; 4] = [10, 20, 50, 100];

#[derive(Deserialize)]
pub struct AuditListQuery {
    page: Option<i64>,
    limit: Option<i64>,
    table: Option<String>,
    show: Option<String>,
}

/// GET /admin/audit - the recent-changes table.
pub async fn list(
    pool: web::Data<DbPool>,
    session: Session,
    query: web::Query<AuditListQuery>,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    let ctx = PageContext::build(&session)?;

    let show = query.show.as_deref() != Some("false");

    // Rebuild the view state from the query string through the reducers.
    let mut state = RecentTableState::default();
    if let Some(limit) = query.limit {
        state.set_limit(limit);
    }
    let table = query
        .table
        .as_deref()
        .filter(|t| !t.is_empty())
        .and_then(|t| t.parse::<ObjectType>().ok());
    state.set_table(table);
    if let Some(page) = query.page {
        state.page = page.max(1);
    }

    if !show {
        // Hidden: no audit queries, no table markup.
        let tmpl = AuditListTemplate {
            ctx,
            show: false,
            toggle_href: href(&state, true),
            rows: vec![],
            table_options: table_options(state.table),
            limit_options: limit_options(state.limit),
            total_count: 0,
            pager: vec![],
            prev: NavLink {
                href: String::new(),
                enabled: false,
            },
            next: NavLink {
                href: String::new(),
                enabled: false,
            },
        };
        return render(tmpl);
    }

    let conn = pool.get()?;
    let mut page_data = audit::find_paginated(&conn, state.page, state.limit, state.table)?;

    // A stale URL can point past the last page, e.g. after the limit grew or
    // the filter shrank the result set. Snap back and refetch.
    if page_data.total_count > 0 && page_data.total_pages < state.page {
        state.correct_overflow(page_data.total_count);
        page_data = audit::find_paginated(&conn, state.page, state.limit, state.table)?;
    }

    let now = Utc::now();
    let rows = page_data.entries.iter().map(|e| to_row(e, now)).collect();

    let pager = build_pager(&state, page_data.total_pages);
    let prev = NavLink {
        href: href(
            &RecentTableState {
                page: state.page - 1,
                ..state.clone()
            },
            true,
        ),
        enabled: state.page > 1,
    };
    let next = NavLink {
        href: href(
            &RecentTableState {
                page: state.page + 1,
                ..state.clone()
            },
            true,
        ),
        enabled: state.page < page_data.total_pages,
    };

    let tmpl = AuditListTemplate {
        ctx,
        show: true,
        toggle_href: href(&state, false),
        rows,
        table_options: table_options(state.table),
        limit_options: limit_options(state.limit),
        total_count: page_data.total_count,
        pager,
        prev,
        next,
    };
    render(tmpl)
}

fn to_row(entry: &AuditEntry, now: DateTime<Utc>) -> RecentRow {
    let age = DateTime::parse_from_rfc3339(&entry.time)
        .map(|t| relative_time::age_words(t.with_timezone(&Utc), now))
        .unwrap_or_else(|_| entry.time.clone());
    RecentRow {
        age,
        table_name: entry.table_name.clone(),
        record_id: entry.record_id.clone(),
        user_ident: entry.user_ident.clone(),
    }
}

fn href(state: &RecentTableState, show: bool) -> String {
    let mut s = format!("/admin/audit?page={}&limit={}", state.page, state.limit);
    if let Some(t) = state.table {
        s.push_str("&table=");
        s.push_str(t.as_str());
    }
    if !show {
        s.push_str("&show=false");
    }
    s
}

fn table_options(selected: Option<ObjectType>) -> Vec<TableOption> {
    ObjectType::ALL
        .iter()
        .map(|ot| TableOption {
            value: ot.as_str(),
            selected: Some(*ot) == selected,
        })
        .collect()
}

fn limit_options(selected: i64) -> Vec<LimitOption> {
    LIMIT_CHOICES
        .iter()
        .map(|&value| LimitOption {
            value,
            selected: value == selected,
        })
        .collect()
}

/// Numbered links, one sibling page on each side of the current page.
fn build_pager(state: &RecentTableState, total_pages: i64) -> Vec<PageLink> {
    let first = (state.page - 1).max(1);
    let last = (state.page + 1).min(total_pages);
    (first..=last)
        .map(|number| PageLink {
            number,
            href: href(
                &RecentTableState {
                    page: number,
                    ..state.clone()
                },
                true,
            ),
            current: number == state.page,
        })
        .collect()
}
