use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::{csrf, password};
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::user;
use crate::templates_structs::{APP_NAME, LoginTemplate};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already logged in, go straight to the audit table
    if session.get::<i64>("user_id").unwrap_or(None).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/audit"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: None,
        app_name: APP_NAME.to_string(),
        csrf_token,
    };
    render(tmpl)
}

pub async fn login_submit(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let conn = pool.get()?;
    let found = user::find_by_username(&conn, &form.username)?;

    if let Some(u) = found {
        if password::verify_password(&form.password, &u.password_hash).unwrap_or(false) {
            session.renew();
            session
                .insert("user_id", u.id)
                .map_err(|e| AppError::Session(e.to_string()))?;
            session
                .insert("username", &u.username)
                .map_err(|e| AppError::Session(e.to_string()))?;
            session
                .insert("is_admin", u.is_admin)
                .map_err(|e| AppError::Session(e.to_string()))?;

            log::info!("User {} logged in", u.username);
            return Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/admin/audit"))
                .finish());
        }
    }

    log::warn!("Failed login attempt for {}", form.username);
    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: Some("Feil brukernavn eller passord".to_string()),
        app_name: APP_NAME.to_string(),
        csrf_token,
    };
    render(tmpl)
}

pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
