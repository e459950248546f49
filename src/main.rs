mod api;
mod database;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            let username = env::var("DB_USERNAME").expect("DB_USERNAME must be set");
            let password = env::var("DB_PASS").expect("DB_PASS must be set");
            let cluster =
                env::var("DB_CLUSTER").unwrap_or_else(|_| "adoptipaws.mongodb.net".to_string());
            format!(
                "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=adoptipaws-service",
                username, password, cluster
            )
        }
    };
    let db_name = env::var("DB_NAME").unwrap_or_else(|_| "adoptipaws".to_string());

    log::info!("🚀 Starting AdoptiPaws Service...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url, &db_name)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // The marketplace frontend is hosted elsewhere, so CORS stays open
        let cors = Cors::permissive();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness & health
            .route("/", web::get().to(api::health::index))
            .route("/health", web::get().to(api::health::health_check))
            // Users
            .route("/users", web::get().to(api::users::list_users))
            .route("/users", web::post().to(api::users::create_user))
            .route("/users/{email}", web::get().to(api::users::get_user_by_email))
            .route("/users/{id}", web::patch().to(api::users::update_user_role))
            .route("/users/{id}", web::delete().to(api::users::delete_user))
            // Donations
            .route("/donations", web::get().to(api::donations::list_donations))
            .route("/donations", web::post().to(api::donations::create_donation))
            .route("/donations/{id}", web::patch().to(api::donations::update_donation))
            .route("/donations/{id}", web::delete().to(api::donations::delete_donation))
            // Adoption requests
            .route(
                "/adoption-requests",
                web::get().to(api::adoption_requests::list_adoption_requests),
            )
            .route(
                "/adoption-requests",
                web::post().to(api::adoption_requests::create_adoption_request),
            )
            .route(
                "/adoption-requests/{id}",
                web::patch().to(api::adoption_requests::update_adoption_request_status),
            )
            // Pet listings
            .route("/latest-pets", web::get().to(api::listings::latest_listings))
            .route("/pets", web::get().to(api::listings::list_listings))
            .route("/pets", web::post().to(api::listings::create_listing))
            .route("/pets/{id}", web::get().to(api::listings::get_listing))
            .route("/pets/{id}", web::patch().to(api::listings::update_listing))
            .route("/pets/{id}", web::delete().to(api::listings::delete_listing))
            // Orders
            .route("/orders", web::get().to(api::orders::list_orders))
            .route("/orders", web::post().to(api::orders::create_order))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
