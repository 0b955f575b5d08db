// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_username, take_flash};
use crate::errors::AppError;

pub const APP_NAME: &str = "Endringslogg";

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.username`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub username: String,
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let username = get_username(session)
            .map_err(|e| AppError::Session(format!("Failed to get username: {}", e)))?;
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        Ok(PageContext {
            username,
            app_name: APP_NAME.to_string(),
            flash,
            csrf_token,
        })
    }
}

mod api;
mod audit;
mod common;

pub use self::api::{ApiAuditItem, ApiAuditRequest, ApiErrorResponse, PageResponse};
pub use self::audit::{AuditListTemplate, LimitOption, NavLink, PageLink, RecentRow, TableOption};
pub use self::common::LoginTemplate;
