use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    InvalidId(String),
    InvalidRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::InvalidId(id) => write!(f, "Invalid id: {}", id),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
