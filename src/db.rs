use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_path: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_path).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Create the default admin account on first start (empty users table only).
pub fn seed_admin(pool: &DbPool, password_hash: &str) {
    let conn = pool.get().expect("Failed to get DB connection for seeding");
    let user_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .expect("Failed to count users");
    if user_count > 0 {
        return;
    }
    conn.execute(
        "INSERT INTO users (username, password_hash, display_name, is_admin) \
         VALUES ('admin', ?1, 'Administrator', 1)",
        params![password_hash],
    )
    .expect("Failed to seed admin user");
    log::info!("Seeded default admin user");
}
