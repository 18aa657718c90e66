//! User handlers.
//!
//! Form pages render a named view; form posts redirect. Validation failures
//! send the browser back to the form, every other error renders its error view.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    response::Redirect,
    routing::get,
    Form, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{VIEW_CHANGE_LOGIN, VIEW_CREATE_USER, VIEW_DELETE_USER, VIEW_USER_INFO};
use crate::domain::{User, UserForm};
use crate::errors::{AppError, AppResult};
use crate::types::View;

const CREATE_PATH: &str = "/user/create";
const CHANGE_LOGIN_PATH: &str = "/user/change-login";
const DELETE_PATH: &str = "/user/delete";

/// Query of the user info page
#[derive(Debug, Deserialize)]
pub struct GetUserQuery {
    pub id: i32,
}

/// Delete form
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteForm {
    /// User ID to delete
    #[schema(example = 1)]
    pub id: Option<i32>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/create", get(create_user_form).post(create_user))
        .route("/get", get(get_user))
        .route("/change-login", get(change_login_form).post(change_login))
        .route("/delete", get(delete_user_form).post(delete_user))
}

fn user_info_path(id: i32) -> String {
    format!("/user/get?id={}", id)
}

/// Pre-fill a form page from whatever query parameters parse.
fn prefill(query: Option<Query<UserForm>>) -> UserForm {
    query.map(|Query(form)| form).unwrap_or_default()
}

/// Display the user creation form
#[utoipa::path(
    get,
    path = "/user/create",
    tag = "Users",
    responses((status = 200, description = "View `create_user`", body = UserForm))
)]
pub async fn create_user_form(query: Option<Query<UserForm>>) -> View<UserForm> {
    View::new(VIEW_CREATE_USER, prefill(query))
}

/// Create a user from the posted form
#[utoipa::path(
    post,
    path = "/user/create",
    tag = "Users",
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created: redirect to `/user/get?id=X`; invalid form: redirect to `/user/create`"),
        (status = 409, description = "User with this id already exists"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    form: Result<Form<UserForm>, FormRejection>,
) -> AppResult<Redirect> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!("Unreadable create form: {}", rejection.body_text());
            return Ok(Redirect::to(CREATE_PATH));
        }
    };

    match state.user_service.create_user(form).await {
        Ok(user) => Ok(Redirect::to(&user_info_path(user.id))),
        Err(AppError::Validation(msg)) => {
            tracing::warn!("Rejected create form: {}", msg);
            Ok(Redirect::to(CREATE_PATH))
        }
        Err(e) => Err(e),
    }
}

/// Display user information
#[utoipa::path(
    get,
    path = "/user/get",
    tag = "Users",
    params(("id" = i32, Query, description = "User ID")),
    responses(
        (status = 200, description = "View `user_info`", body = User),
        (status = 400, description = "Missing or malformed id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    query: Result<Query<GetUserQuery>, QueryRejection>,
) -> AppResult<View<User>> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;
    let user = state.user_service.get_user(query.id).await?;
    Ok(View::new(VIEW_USER_INFO, user))
}

/// Display the login change form
#[utoipa::path(
    get,
    path = "/user/change-login",
    tag = "Users",
    responses((status = 200, description = "View `change_user_login`", body = UserForm))
)]
pub async fn change_login_form(query: Option<Query<UserForm>>) -> View<UserForm> {
    View::new(VIEW_CHANGE_LOGIN, prefill(query))
}

/// Change the login of the user matching id and email
#[utoipa::path(
    post,
    path = "/user/change-login",
    tag = "Users",
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Applied: redirect to `/user/get?id=X`; invalid form: redirect to `/user/change-login`"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn change_login(
    State(state): State<AppState>,
    form: Result<Form<UserForm>, FormRejection>,
) -> AppResult<Redirect> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!("Unreadable change-login form: {}", rejection.body_text());
            return Ok(Redirect::to(CHANGE_LOGIN_PATH));
        }
    };

    let Some(id) = form.id else {
        tracing::warn!("Change-login form posted without an id");
        return Ok(Redirect::to(CHANGE_LOGIN_PATH));
    };

    match state.user_service.update_user(form).await {
        Ok(_) => Ok(Redirect::to(&user_info_path(id))),
        Err(AppError::Validation(msg)) => {
            tracing::warn!("Rejected change-login form: {}", msg);
            Ok(Redirect::to(CHANGE_LOGIN_PATH))
        }
        Err(e) => Err(e),
    }
}

/// Display the delete form
#[utoipa::path(
    get,
    path = "/user/delete",
    tag = "Users",
    params(("id" = Option<i32>, Query, description = "User ID to pre-fill")),
    responses((status = 200, description = "View `delete_user`", body = DeleteForm))
)]
pub async fn delete_user_form(query: Option<Query<DeleteForm>>) -> View<DeleteForm> {
    let form = query.map(|Query(form)| form).unwrap_or_default();
    View::new(VIEW_DELETE_USER, form)
}

/// Delete a user by id
#[utoipa::path(
    post,
    path = "/user/delete",
    tag = "Users",
    request_body(content = DeleteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to `/user/delete`, whether or not a user was removed"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> AppResult<Redirect> {
    let id = form.ok().and_then(|Form(form)| form.id);

    match id {
        Some(id) => state.user_service.delete_user(id).await?,
        None => tracing::warn!("Delete form posted without an id"),
    }

    Ok(Redirect::to(DELETE_PATH))
}
