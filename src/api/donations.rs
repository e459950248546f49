use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, Document};

use crate::database::{self, MongoDB};
use crate::models::{DeleteResponse, InsertOneResponse, UpdateResponse};
use crate::utils::query::{self, EmailQuery};

/// GET /donations - All donations, optionally filtered by donor email
pub async fn list_donations(
    params: web::Query<EmailQuery>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let filter = query::email_filter("email", params.email.as_deref());

    match db.find_all(database::DONATIONS, filter).await {
        Ok(donations) => HttpResponse::Ok().json(donations),
        Err(e) => {
            log::error!("❌ Failed to list donations: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch donations: {}", e)
            }))
        }
    }
}

/// POST /donations - Inserts the donation document verbatim
pub async fn create_donation(
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

    let collection = db.collection::<Document>(database::DONATIONS);

    match collection.insert_one(document).await {
        Ok(result) => HttpResponse::Ok().json(InsertOneResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to insert donation: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to create donation: {}", e)
            }))
        }
    }
}

/// PATCH /donations/{id} - Applies the entire caller body as the field patch
pub async fn update_donation(
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
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

    let patch = match query::body_document(&body) {
        Ok(patch) => patch,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }));
        }
    };

    let collection = db.collection::<Document>(database::DONATIONS);

    match collection.update_one(filter, doc! { "$set": patch }).await {
        Ok(result) => HttpResponse::Ok().json(UpdateResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to update donation {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to update donation: {}", e)
            }))
        }
    }
}

/// DELETE /donations/{id} - Removes one donation by id
pub async fn delete_donation(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
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

    let collection = db.collection::<Document>(database::DONATIONS);

    match collection.delete_one(filter).await {
        Ok(result) => HttpResponse::Ok().json(DeleteResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to delete donation {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to delete donation: {}", e)
            }))
        }
    }
}
