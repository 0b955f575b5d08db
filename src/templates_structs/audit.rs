use askama::Template;

use super::PageContext;

/// One rendered table row. `age` is the humanized duration; the template
/// renders it as "{age} siden".
pub struct RecentRow {
    pub age: String,
    pub table_name: String,
    pub record_id: String,
    pub user_ident: String,
}

/// Option in the table-name filter dropdown.
pub struct TableOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Option in the page-size dropdown.
pub struct LimitOption {
    pub value: i64,
    pub selected: bool,
}

/// Numbered pager link.
pub struct PageLink {
    pub number: i64,
    pub href: String,
    pub current: bool,
}

/// Forrige/Neste pager link; rendered inert when disabled.
pub struct NavLink {
    pub href: String,
    pub enabled: bool,
}

#[derive(Template)]
#[template(path = "audit/list.html")]
pub struct AuditListTemplate {
    pub ctx: PageContext,
    pub show: bool,
    pub toggle_href: String,
    pub rows: Vec<RecentRow>,
    pub table_options: Vec<TableOption>,
    pub limit_options: Vec<LimitOption>,
    pub total_count: i64,
    pub pager: Vec<PageLink>,
    pub prev: NavLink,
    pub next: NavLink,
}
