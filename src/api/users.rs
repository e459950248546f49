use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, Document};
use serde::Deserialize;

use crate::database::{self, MongoDB};
use crate::models::{DeleteResponse, DuplicateUserResponse, InsertOneResponse, UpdateResponse};
use crate::utils::query;

/// PATCH body for a user: `role` is the only settable field.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RolePatch {
    pub role: Option<String>,
}

/// GET /users - Lists every registered user
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All user documents"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list_users(db: web::Data<MongoDB>) -> impl Responder {
    match db.find_all(database::USERS, doc! {}).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch users: {}", e)
            }))
        }
    }
}

/// GET /users/{email} - Single user looked up by email
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User document"),
        (status = 404, description = "No user with that email"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_user_by_email(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    let email = path.into_inner();
    log::info!("👤 GET /users/{} - fetching user by email", email);

    let collection = db.collection::<Document>(database::USERS);

    match collection.find_one(doc! { "email": &email }).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().json(serde_json::Value::Null),
        Err(e) => {
            log::error!("❌ Failed to fetch user {}: {}", email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch user: {}", e)
            }))
        }
    }
}

/// POST /users - Creates a user unless the email is already registered.
/// A duplicate email answers with the no-op sentinel instead of inserting.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Insert acknowledgement, or the duplicate sentinel", body = InsertOneResponse),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn create_user(
    body: web::Json<serde_json::Value>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user = body.into_inner();
    let email = user.get("email").and_then(|v| v.as_str()).map(str::to_owned);
    log::info!("👤 POST /users - attempting to create user {:?}", email);

    let collection = db.collection::<Document>(database::USERS);

    match collection.find_one(query::user_email_probe(email.as_deref())).await {
        Ok(Some(_)) => {
            log::info!("👤 User already exists: {:?}", email);
            return HttpResponse::Ok().json(DuplicateUserResponse::already_exists());
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("❌ Failed to check for existing user: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to create user: {}", e)
            }));
        }
    }

    let document = match query::body_document(&user) {
        Ok(document) => document,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }));
        }
    };

    match collection.insert_one(document).await {
        Ok(result) => {
            log::info!("✅ User created successfully: {:?}", email);
            HttpResponse::Ok().json(InsertOneResponse::from(result))
        }
        Err(e) => {
            log::error!("❌ Failed to insert user: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to create user: {}", e)
            }))
        }
    }
}

/// PATCH /users/{id} - Sets the user's role
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User document id")),
    request_body = RolePatch,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResponse),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn update_user_role(
    path: web::Path<String>,
    body: web::Json<RolePatch>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let id = path.into_inner();

    let filter = match query::id_filter(&id) {
        Ok(filter) => filter,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }));
        }
    };

    // An absent role writes null, same as the historic wire behavior
    let update = query::single_field_update("role", body.into_inner().role);

    let collection = db.collection::<Document>(database::USERS);

    match collection.update_one(filter, update).await {
        Ok(result) => HttpResponse::Ok().json(UpdateResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to update role for user {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to update user: {}", e)
            }))
        }
    }
}

/// DELETE /users/{id} - Removes one user by id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteResponse),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn delete_user(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    let id = path.into_inner();

    let filter = match query::id_filter(&id) {
        Ok(filter) => filter,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }));
        }
    };

    let collection = db.collection::<Document>(database::USERS);

    match collection.delete_one(filter).await {
        Ok(result) => HttpResponse::Ok().json(DeleteResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to delete user {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to delete user: {}", e)
            }))
        }
    }
}
