use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::Document;
use serde::Deserialize;

use crate::database::{self, MongoDB};
use crate::models::{InsertOneResponse, UpdateResponse};
use crate::utils::query::{self, EmailQuery};

/// PATCH body for an adoption request: `status` is the only settable field.
/// Status is free text; the marketplace frontends agree on the values.
#[derive(Debug, Deserialize)]
pub struct StatusPatch {
    pub status: Option<String>,
}

/// GET /adoption-requests - Requests filtered by the listing owner's email
pub async fn list_adoption_requests(
    params: web::Query<EmailQuery>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    // ?email= names the owner who listed the pet, not the requester
    let filter = query::email_filter("ownerEmail", params.email.as_deref());

    match db.find_all(database::ADOPTION_REQUESTS, filter).await {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => {
            log::error!("❌ Failed to list adoption requests: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch adoption requests: {}", e)
            }))
        }
    }
}

/// POST /adoption-requests - Inserts the request document verbatim
pub async fn create_adoption_request(
    body: web::Json<serde_json::Value>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let document = match query::body_document(&body) {
        Ok(document) => document,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }));
        }
    };

    let collection = db.collection::<Document>(database::ADOPTION_REQUESTS);

    match collection.insert_one(document).await {
        Ok(result) => HttpResponse::Ok().json(InsertOneResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to insert adoption request: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to create adoption request: {}", e)
            }))
        }
    }
}

/// PATCH /adoption-requests/{id} - Sets the request status, nothing else
pub async fn update_adoption_request_status(
    path: web::Path<String>,
    body: web::Json<StatusPatch>,
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

    let update = query::single_field_update("status", body.into_inner().status);

    let collection = db.collection::<Document>(database::ADOPTION_REQUESTS);

    match collection.update_one(filter, update).await {
        Ok(result) => HttpResponse::Ok().json(UpdateResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to update adoption request {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to update adoption request: {}", e)
            }))
        }
    }
}
