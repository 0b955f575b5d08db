use std::time::Duration;

use chrono::Utc;

use crate::db::DbPool;
use crate::models::audit;

const SWEEP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Background retention sweep: deletes audit entries older than
/// `retention_days`. The first tick fires immediately, so stale entries are
/// cleared on startup as well.
pub fn spawn_sweeper(pool: DbPool, retention_days: i64) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let conn = match pool.get() {
                Ok(c) => c,
                Err(e) => {
                    log::error!("Sweeper: failed to get DB connection: {}", e);
                    continue;
                }
            };
            let cutoff = Utc::now() - chrono::Duration::days(retention_days);
            match audit::delete_older_than(&conn, cutoff) {
                Ok(0) => {}
                Ok(n) => log::info!("Retention sweep removed {} audit entries", n),
                Err(e) => log::error!("Retention sweep failed: {}", e),
            }
        }
    });
}
