pub mod api_v1;
pub mod audit_handlers;
pub mod auth_handlers;
