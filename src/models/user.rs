use rusqlite::{Connection, OptionalExtension, params};

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub is_admin: bool,
}

pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub is_admin: bool,
}

pub fn create(conn: &Connection, user: &NewUser) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (username, password_hash, display_name, is_admin) \
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user.username,
            user.password_hash,
            user.display_name,
            user.is_admin as i64,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_username(conn: &Connection, username: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        "SELECT id, username, password_hash, display_name, is_admin \
         FROM users WHERE username = ?1",
        params![username],
        |row| {
            Ok(User {
                id: row.get("id")?,
                username: row.get("username")?,
                password_hash: row.get("password_hash")?,
                display_name: row.get("display_name")?,
                is_admin: row.get::<_, i64>("is_admin")? != 0,
            })
        },
    )
    .optional()
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
}
