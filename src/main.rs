use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use endringslogg::handlers::api_v1::ApiKey;
use endringslogg::{auth, db, handlers, sweeper};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    // Initialize database
    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/endringslogg.db".to_string());
    let pool = db::init_pool(&database_path);
    db::run_migrations(&pool);

    // Seed the admin account on first start
    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    let admin_hash =
        auth::password::hash_password(&admin_password).expect("Failed to hash admin password");
    db::seed_admin(&pool, &admin_hash);

    // Shared key for the ingestion API
    let api_key = ApiKey(std::env::var("API_KEY").ok());
    if api_key.0.is_none() {
        log::warn!("No API_KEY set — audit ingestion is disabled");
    }

    // Retention sweep for old audit entries
    let retention_days: i64 = std::env::var("AUDIT_RETENTION_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(365);
    sweeper::spawn_sweeper(pool.clone(), retention_days);

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{}", bind_addr);

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(api_key.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            // Service API (key-authenticated per handler)
            .service(
                web::scope("/api/v1")
                    .route("/audits", web::get().to(handlers::api_v1::audits::list))
                    .route("/audits", web::post().to(handlers::api_v1::audits::create)),
            )
            // Root redirect
            .route(
                "/",
                web::get().to(|| async {
                    actix_web::HttpResponse::SeeOther()
                        .insert_header(("Location", "/admin/audit"))
                        .finish()
                }),
            )
            // Protected routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(
                        auth::middleware::require_auth,
                    ))
                    .route("/admin/audit", web::get().to(handlers::audit_handlers::list))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout)),
            )
    })
    .bind(&bind_addr)?
    .run()
    .await
}
