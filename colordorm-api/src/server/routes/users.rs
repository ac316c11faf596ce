use crate::server::{
    Result, ServerError, ServerRouter,
    json::{Json, Validate, Validated},
    query::Query,
};
use axum::{Router, extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use colordorm_common::model::{
    Id,
    user::{CreateUser, User, UserMarker},
};
use colordorm_db::client::DbClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub fn routes() -> ServerRouter {
    Router::new().typed_post(create_user).typed_get(get_user)
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
struct CreateUserBody {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl Validate for CreateUserBody {
    type Output = CreateUser;

    const REQUIRED_FIELDS: &'static str = "Username, email, and password";

    fn validate(self) -> Option<CreateUser> {
        Some(CreateUser {
            username: self.username?,
            email: self.email?,
            password: self.password?,
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct CreateUserResponse {
    message: &'static str,
    user_id: Id<UserMarker>,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/users")]
struct CreateUserPath;

async fn create_user(
    CreateUserPath: CreateUserPath,
    State(db): State<Arc<DbClient>>,
    Validated(user): Validated<CreateUserBody>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    debug!(username = %user.username, email = %user.email, "Creating user");

    let user_id = db.create_user(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully",
            user_id,
        }),
    ))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/users/{identifier}", rejection(ServerError))]
struct GetUserPath {
    identifier: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
struct PasswordQuery {
    password: Option<String>,
}

/// Looks a user up by id, username or email. The password is compared as plain
/// text; a miss and a mismatch are indistinguishable to the caller.
async fn get_user(
    GetUserPath { identifier }: GetUserPath,
    State(db): State<Arc<DbClient>>,
    Query(PasswordQuery { password }): Query<PasswordQuery>,
) -> Result<Json<User>> {
    let password = password
        .filter(|password| !password.is_empty())
        .ok_or(ServerError::MissingPassword)?;

    let user = db
        .read_user(&identifier)
        .await?
        .filter(|user| user.password_matches(&password))
        .ok_or(ServerError::UserNotFoundOrIncorrectPassword)?;

    Ok(Json(user))
}
