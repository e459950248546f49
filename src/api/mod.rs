pub mod adoption_requests;
pub mod donations;
pub mod health;
pub mod listings;
pub mod orders;
pub mod swagger;
pub mod users;
