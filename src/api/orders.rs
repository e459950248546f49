use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::Document;

use crate::database::{self, MongoDB};
use crate::models::InsertOneResponse;
use crate::utils::query::{self, EmailQuery};

/// GET /orders - All orders, optionally filtered by the buyer's email
pub async fn list_orders(params: web::Query<EmailQuery>, db: web::Data<MongoDB>) -> impl Responder {
    let filter = query::email_filter("buyer_email", params.email.as_deref());

    match db.find_all(database::ORDERS, filter).await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => {
            log::error!("❌ Failed to list orders: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch orders: {}", e)
            }))
        }
    }
}

/// POST /orders - Inserts the order document verbatim
pub async fn create_order(
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

    let collection = db.collection::<Document>(database::ORDERS);

    match collection.insert_one(document).await {
        Ok(result) => HttpResponse::Ok().json(InsertOneResponse::from(result)),
        Err(e) => {
            log::error!("❌ Failed to insert order: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to create order: {}", e)
            }))
        }
    }
}
