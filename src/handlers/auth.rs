use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::non_empty;
use crate::models::user::User;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<Json<Value>> {
    // Validation order is part of the contract: presence, match, length.
    let (Some(full_name), Some(email), Some(password), Some(confirm_password)) = (
        non_empty(&body.full_name),
        non_empty(&body.email),
        non_empty(&body.password),
        non_empty(&body.confirm_password),
    ) else {
        return Err(AppError::Validation("All fields are required".into()));
    };

    if password != confirm_password {
        return Err(AppError::Validation("Passwords do not match".into()));
    }

    if password.chars().count() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }

    let email = email.to_lowercase();

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(&email)
        .fetch_one(&state.db)
        .await?;

    if existing > 0 {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let pwd_hash = hash_password(password)?;
    let today = Utc::now().date_naive();

    let inserted = sqlx::query(
        r#"
        INSERT INTO users (full_name, email, password, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(full_name)
    .bind(&email)
    .bind(&pwd_hash)
    .bind(today)
    .execute(&state.db)
    .await;

    // Two registrations racing past the count check still hit the UNIQUE
    // constraint; surface that as the same client error.
    if let Err(e) = inserted {
        if is_unique_violation(&e) {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        return Err(e.into());
    }

    Ok(Json(json!({
        "message": "Account created successfully 🌱",
    })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    let (Some(email), Some(password)) = (non_empty(&body.email), non_empty(&body.password)) else {
        return Err(AppError::Validation("Email and password required".into()));
    };

    let email = email.to_lowercase();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(password, &user.password)? {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(json!({
        "message": "Login successful 💚",
        "user": {
            "id": user.id,
            "full_name": user.full_name,
            "email": email,
        },
    })))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().map(|db| db.kind()),
        Some(sqlx::error::ErrorKind::UniqueViolation)
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_util::{post_json, test_app};

    fn register_body() -> serde_json::Value {
        json!({
            "full_name": "Ada Lovelace",
            "email": "Ada@Example.com",
            "password": "analytical-engine",
            "confirm_password": "analytical-engine",
        })
    }

    #[tokio::test]
    async fn register_validates_in_order() {
        let (app, _ctx) = test_app().await;

        let (status, body) = post_json(&app, "/register", json!({ "email": "a@b.com" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "All fields are required");

        let mut mismatched = register_body();
        mismatched["confirm_password"] = json!("something else");
        // Mismatch wins over any later check, even with a short password.
        mismatched["password"] = json!("short");
        let (status, body) = post_json(&app, "/register", mismatched).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Passwords do not match");

        let mut short = register_body();
        short["password"] = json!("seven77");
        short["confirm_password"] = json!("seven77");
        let (status, body) = post_json(&app, "/register", short).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Password must be at least 8 characters");
    }

    #[tokio::test]
    async fn register_then_login_ignores_email_casing() {
        let (app, _ctx) = test_app().await;

        let (status, body) = post_json(&app, "/register", register_body()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Account created successfully 🌱");

        let (status, body) = post_json(
            &app,
            "/login",
            json!({ "email": "ada@example.COM", "password": "analytical-engine" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful 💚");
        assert_eq!(body["user"]["full_name"], "Ada Lovelace");
        assert_eq!(body["user"]["email"], "ada@example.com");
        assert!(body["user"]["id"].is_i64());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_regardless_of_casing() {
        let (app, _ctx) = test_app().await;

        let (status, _) = post_json(&app, "/register", register_body()).await;
        assert_eq!(status, StatusCode::OK);

        let mut again = register_body();
        again["email"] = json!("ADA@EXAMPLE.COM");
        let (status, body) = post_json(&app, "/register", again).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email already registered");
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let (app, _ctx) = test_app().await;

        post_json(&app, "/register", register_body()).await;

        let (status_wrong_pwd, body_wrong_pwd) = post_json(
            &app,
            "/login",
            json!({ "email": "ada@example.com", "password": "not the password" }),
        )
        .await;
        let (status_no_user, body_no_user) = post_json(
            &app,
            "/login",
            json!({ "email": "nobody@example.com", "password": "analytical-engine" }),
        )
        .await;

        assert_eq!(status_wrong_pwd, StatusCode::UNAUTHORIZED);
        assert_eq!(status_no_user, StatusCode::UNAUTHORIZED);
        assert_eq!(body_wrong_pwd, body_no_user);
        assert_eq!(body_wrong_pwd["error"], "Invalid email or password");
    }

    #[tokio::test]
    async fn login_requires_both_fields() {
        let (app, _ctx) = test_app().await;

        let (status, body) =
            post_json(&app, "/login", json!({ "email": "ada@example.com" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email and password required");
    }

    #[tokio::test]
    async fn stored_password_is_not_plaintext() {
        let (app, ctx) = test_app().await;

        post_json(&app, "/register", register_body()).await;

        let stored = sqlx::query_scalar::<_, String>("SELECT password FROM users")
            .fetch_one(&ctx.db)
            .await
            .unwrap();
        assert_ne!(stored, "analytical-engine");
        assert!(stored.starts_with("$argon2"));
    }
}
