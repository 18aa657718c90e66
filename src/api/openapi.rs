//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for exploring the user routes.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{User, UserForm};

/// OpenAPI documentation for the user CRUD service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD",
        version = "0.1.0",
        description = "Create, read, update and delete user records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user_form,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::change_login_form,
        user_handler::change_login,
        user_handler::delete_user_form,
        user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            UserForm,
            user_handler::DeleteForm,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
