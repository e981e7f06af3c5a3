use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError, models::user::User, repositories::user_repository::UserRepository,
        services::password_service::PasswordHasher,
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

// Request

/// json for register request
///
/// Fields default to empty when absent so a missing field reports as a
/// field validation error instead of a deserialization rejection
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// Response

/// json for register response
#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub msg: String,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            avatar: user.avatar().to_string(),
        }
    }
}

/// json error body, `{"errors": [{"msg": ..} | {"field": .., "msg": ..}]}`
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorItem>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub msg: String,
}

impl ErrorResponse {
    fn message(msg: &str) -> Self {
        Self {
            errors: vec![ErrorItem {
                field: None,
                msg: msg.to_string(),
            }],
        }
    }
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router under `/api`

pub fn create_user_router<
    R: UserRepository + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
>(
    register_service: RegisterUserUsecase<R, P>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/users", post(register::<R, P>))
        .with_state(state)
}

pub struct AppState<R: UserRepository, P: PasswordHasher> {
    pub register_service: Arc<RegisterUserUsecase<R, P>>,
}

impl<R: UserRepository, P: PasswordHasher> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
        }
    }
}

// handler function

/// handler function for register
async fn register<R: UserRepository + Send + Sync, P: PasswordHasher + Send + Sync>(
    State(state): State<AppState<R, P>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    match state
        .register_service
        .register(payload.name, payload.email, payload.password)
        .await
    {
        Ok(user) => {
            let response = RegisterResponse {
                msg: "User registered".to_string(),
                user: user.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(DomainError::Validation(errors)) => {
            let body = ErrorResponse {
                errors: errors
                    .into_iter()
                    .map(|e| ErrorItem {
                        field: Some(e.field),
                        msg: e.msg,
                    })
                    .collect(),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Err(DomainError::EmailTaken) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message("User already exists")),
        )
            .into_response(),
        Err(err) => {
            // Internal detail stays in the log, never in the response
            tracing::error!("registration failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::message("Server error")),
            )
                .into_response()
        }
    }
}
