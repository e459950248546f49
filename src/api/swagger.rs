use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AdoptiPaws API",
        version = "1.0.0",
        description = "REST backend for the AdoptiPaws pet-adoption marketplace. \n\nExposes CRUD routes over the marketplace collections: pet listings, users, donations, adoption requests, and orders. Success responses mirror the document store's native result shapes.",
        contact(
            name = "AdoptiPaws Team",
            email = "support@adoptipaws.com"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::list_users,
        crate::api::users::get_user_by_email,
        crate::api::users::create_user,
        crate::api::users::update_user_role,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::users::RolePatch,
            crate::models::responses::InsertOneResponse,
            crate::models::responses::UpdateResponse,
            crate::models::responses::DeleteResponse,
            crate::models::responses::DuplicateUserResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and health endpoints for monitoring service status."),
        (name = "Users", description = "User account documents. Creation is idempotent per email: a duplicate answers with a no-op sentinel.")
    )
)]
pub struct ApiDoc;
