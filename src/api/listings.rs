use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, Document};

use crate::database::{self, MongoDB};
use crate::models::{listing, DeleteResponse, InsertOneResponse, UpdateResponse};
use crate::utils::query::{self, EmailQuery};

/// GET /latest-pets - The newest listings by date, newest first
pub async fn latest_listings(db: web::Data<MongoDB>) -> impl Responder {
    match db
        .find_latest(database::LISTINGS, listing::latest_sort(), listing::LATEST_LIMIT)
        .await
    {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(e) => {
            log::error!("❌ Failed to fetch latest listings: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch latest pets: {}", e)
            }))
        }
    }
}

/// GET /pets - All listings, optionally filtered by the lister's email
pub async fn list_listings(
    params: web::Query<EmailQuery>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let filter = query::email_filter("email", params.email.as_deref());

    match db.find_all(database::LISTINGS, filter).await {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(e) => {
            log::error!("❌ Failed to list pets: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch pets: {}", e)
            }))
        }
    }
}

/// GET /pets/{id} - Single listing by id
pub async fn get_listing(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
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

    let collection = db.collection::<Document>(database::LISTINGS);

    match collection.find_one(filter).await {
        Ok(Some(listing)) => HttpResponse::Ok().json(listing),
        Ok(None) => HttpResponse::NotFound().json(serde_json::Value::Null),
        Err(e) => {
            log::error!("❌ Failed to fetch pet {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch pet: {}", e)
            }))
        }
    }
}

/// POST /pets - Inserts the listing document verbatim
pub async fn create_listing(
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

    let collection = db.collection::<Document>(database::LISTINGS);

    match collection.insert_one(document).await {
        Ok(result) => HttpResponse::Ok().json(InsertOneResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to insert pet listing: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to create pet: {}", e)
            }))
        }
    }
}

/// PATCH /pets/{id} - Writes the recognized listing fields from the payload
pub async fn update_listing(
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

    let set = listing::patch_document(&body);
    if set.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "No recognized listing fields in payload"
        }));
    }

    let collection = db.collection::<Document>(database::LISTINGS);

    match collection.update_one(filter, doc! { "$set": set }).await {
        Ok(result) => HttpResponse::Ok().json(UpdateResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to update pet {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to update pet: {}", e)
            }))
        }
    }
}

/// DELETE /pets/{id} - Removes one listing; adoption requests for it remain
pub async fn delete_listing(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
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

    let collection = db.collection::<Document>(database::LISTINGS);

    match collection.delete_one(filter).await {
        Ok(result) => HttpResponse::Ok().json(DeleteResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to delete pet {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to delete pet: {}", e)
            }))
        }
    }
}
