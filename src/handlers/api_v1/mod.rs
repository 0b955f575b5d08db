pub mod audits;

/// Shared key for service-to-service calls, from the API_KEY env var.
/// `None` means ingestion is disabled; key checks fail closed.
#[derive(Clone)]
pub struct ApiKey(pub Option<String>);
