use actix_web::{error, web, HttpRequest, HttpResponse, Result};

use crate::database::{self, model::club::Club, model::student::Student};
use crate::error::SignupError;
use crate::form::{club::ClubSignupData, student::StudentSignupData};
use crate::security::PasswordHasher;

/// Register every route on the given service config.
///
/// Each signup router is mounted twice: under its primary prefix and under its
/// `/api/auth/...` alias.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(student_scope("/api/students"))
        .service(student_scope("/api/auth/student"))
        .service(club_scope("/api/clubs"))
        .service(club_scope("/api/auth/club"))
        .default_service(web::route().to(default_handler));
}

fn student_scope(prefix: &str) -> actix_web::Scope {
    web::scope(prefix).route("/signup", web::post().to(student_signup))
}

fn club_scope(prefix: &str) -> actix_web::Scope {
    web::scope(prefix).route("/signup", web::post().to(club_signup))
}

/// Malformed bodies answer with the same `{message}` shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let message = match &err {
            error::JsonPayloadError::ContentType => "Request body must be JSON".to_string(),
            error::JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
            other => format!("Invalid request body: {other}"),
        };

        SignupError::Validation(message).into()
    })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running",
    }))
}

async fn student_signup(
    pool: web::Data<database::Pool>,
    hasher: web::Data<PasswordHasher>,
    form: web::Json<StudentSignupData>,
) -> Result<HttpResponse, SignupError> {
    let new_student = form.into_inner().validate()?;

    let student = web::block(move || -> Result<Student, SignupError> {
        let mut conn = pool.get()?;

        if database::action::student::get_student_by_email(&mut conn, &new_student.email)?
            .is_some()
        {
            return Err(SignupError::DuplicateEmail);
        }

        let hash = hasher.hash(&new_student.password)?;

        Ok(database::action::student::insert_new_student(
            &mut conn,
            &new_student,
            &hash,
        )?)
    })
    .await??;

    log::info!("registered student {}", student.id);

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Student registered successfully",
        "id": student.id,
        "student": student.to_json(),
    })))
}

async fn club_signup(
    pool: web::Data<database::Pool>,
    hasher: web::Data<PasswordHasher>,
    form: web::Json<ClubSignupData>,
) -> Result<HttpResponse, SignupError> {
    let new_club = form.into_inner().validate()?;

    let club = web::block(move || -> Result<Club, SignupError> {
        let mut conn = pool.get()?;

        if database::action::club::get_club_by_email(&mut conn, &new_club.email)?.is_some() {
            return Err(SignupError::DuplicateEmail);
        }

        let hash = hasher.hash(&new_club.password)?;

        Ok(database::action::club::insert_new_club(
            &mut conn, &new_club, &hash,
        )?)
    })
    .await??;

    log::info!("registered club {}", club.id);

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Club registered successfully",
        "id": club.id,
        "club": club.to_json(),
    })))
}

async fn default_handler() -> Result<HttpResponse, SignupError> {
    Err(SignupError::NotFound)
}
