use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::Deserialize;

use crate::utils::error::AppError;

/// Query-string shape shared by every filterable list endpoint.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Equality filter on a single field. No email means no constraint, which
/// lists the whole collection.
pub fn email_filter(field: &str, email: Option<&str>) -> Document {
    let mut filter = Document::new();
    if let Some(email) = email {
        filter.insert(field, email);
    }
    filter
}

/// Probe for an already-registered user with the same email. A body without
/// an email matches documents whose stored email is null, which is how
/// omitted emails have always deduplicated; it never matches the whole
/// collection.
pub fn user_email_probe(email: Option<&str>) -> Document {
    match email {
        Some(email) => doc! { "email": email },
        None => doc! { "email": Bson::Null },
    }
}

/// `$set` update touching exactly one field. An absent value writes null.
pub fn single_field_update(field: &str, value: Option<String>) -> Document {
    let mut set = Document::new();
    set.insert(field, value.map_or(Bson::Null, Bson::String));
    doc! { "$set": set }
}

/// `_id` filter from a path segment. Malformed ids are rejected here instead
/// of surfacing as a driver fault mid-operation.
pub fn id_filter(id: &str) -> Result<Document, AppError> {
    let object_id = ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))?;
    Ok(doc! { "_id": object_id })
}

/// Caller-supplied JSON body as a BSON document. Non-object payloads are
/// invalid for every create/patch route.
pub fn body_document(payload: &serde_json::Value) -> Result<Document, AppError> {
    mongodb::bson::to_document(payload)
        .map_err(|e| AppError::InvalidRequest(format!("payload must be a JSON object: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_filter_with_value() {
        let filter = email_filter("ownerEmail", Some("jane@example.com"));
        assert_eq!(filter, doc! { "ownerEmail": "jane@example.com" });
    }

    #[test]
    fn test_email_filter_without_value_is_unconstrained() {
        let filter = email_filter("email", None);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_user_probe_with_email() {
        let probe = user_email_probe(Some("jane@example.com"));
        assert_eq!(probe, doc! { "email": "jane@example.com" });
    }

    #[test]
    fn test_user_probe_without_email_matches_null_not_everything() {
        let probe = user_email_probe(None);
        assert_eq!(probe, doc! { "email": Bson::Null });
        assert!(!probe.is_empty());
    }

    #[test]
    fn test_single_field_update_touches_only_that_field() {
        let update = single_field_update("status", Some("approved".to_string()));
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("status").unwrap(), "approved");
    }

    #[test]
    fn test_single_field_update_absent_value_writes_null() {
        let update = single_field_update("role", None);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get("role"), Some(&Bson::Null));
    }

    #[test]
    fn test_id_filter_valid_hex() {
        let filter = id_filter("507f1f77bcf86cd799439011").unwrap();
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(filter.get("_id"), Some(&Bson::ObjectId(oid)));
    }

    #[test]
    fn test_id_filter_rejects_malformed_id() {
        let err = id_filter("not-an-object-id").unwrap_err();
        assert!(matches!(err, AppError::InvalidId(_)));
    }

    #[test]
    fn test_body_document_object() {
        let payload = serde_json::json!({ "email": "jane@example.com", "amount": 25 });
        let doc = body_document(&payload).unwrap();
        assert_eq!(doc.get_str("email").unwrap(), "jane@example.com");
        assert_eq!(doc.get_i64("amount").unwrap(), 25);
    }

    #[test]
    fn test_body_document_rejects_non_object() {
        let err = body_document(&serde_json::json!("just a string")).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }
}
