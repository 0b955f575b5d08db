//! View-state tests against real data — the paging rules of the recent-changes
//! table exercised together with the audit model.

mod common;

use chrono::{Duration, TimeZone, Utc};

use common::*;
use endringslogg::models::audit::view::{RecentTableState, total_pages};
use endringslogg::models::audit::{self, Action};
use endringslogg::models::object_type::ObjectType;

fn seed_entries(conn: &rusqlite::Connection, n: i64, table: ObjectType) {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    for i in 0..n {
        record_at(
            conn,
            base + Duration::minutes(i),
            table,
            Action::Update,
            &format!("{table}-{i}"),
            "A123456",
        );
    }
}

#[test]
fn test_page_requests_bounded_by_fetched_page_count() {
    let (_dir, conn) = setup_test_db();
    seed_entries(&conn, 45, ObjectType::Team);

    let mut state = RecentTableState::default();
    let page = audit::find_paginated(&conn, state.page, state.limit, state.table).expect("fetch");
    assert_eq!(page.total_pages, 3);

    state.request_page(4, page.total_pages);
    assert_eq!(state.page, 1, "page 4 of 3 must be rejected");

    state.request_page(3, page.total_pages);
    assert_eq!(state.page, 3, "page 3 of 3 must be accepted");

    let page3 = audit::find_paginated(&conn, state.page, state.limit, state.table).expect("fetch");
    assert_eq!(page3.entries.len(), 5);
}

#[test]
fn test_limit_growth_snaps_page_to_new_last_page() {
    let (_dir, conn) = setup_test_db();
    seed_entries(&conn, 45, ObjectType::Team);

    let mut state = RecentTableState {
        page: 3,
        limit: 20,
        table: None,
    };

    state.set_limit(50);
    let total = audit::count(&conn).expect("count");
    state.correct_overflow(total);
    assert_eq!(state.page, 1);

    let page = audit::find_paginated(&conn, state.page, state.limit, state.table).expect("fetch");
    assert_eq!(page.entries.len(), 45);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_filter_change_resets_page_and_requeries() {
    let (_dir, conn) = setup_test_db();
    seed_entries(&conn, 45, ObjectType::Team);
    seed_entries(&conn, 2, ObjectType::Cluster);

    let mut state = RecentTableState {
        page: 3,
        limit: 20,
        table: None,
    };

    state.set_table(Some(ObjectType::Cluster));
    assert_eq!(state.page, 1);

    let page = audit::find_paginated(&conn, state.page, state.limit, state.table).expect("fetch");
    assert_eq!(page.total_count, 2);
    assert!(page.entries.iter().all(|e| e.table_name == "Cluster"));
}

#[test]
fn test_total_pages_matches_model_metadata() {
    let (_dir, conn) = setup_test_db();
    seed_entries(&conn, 21, ObjectType::Resource);

    for limit in [1, 5, 20, 50] {
        let page = audit::find_paginated(&conn, 1, limit, None).expect("fetch");
        assert_eq!(page.total_pages, total_pages(21, limit));
    }
}
