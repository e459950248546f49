use mongodb::bson::{doc, Bson, Document};

/// How many listings the latest-pets feed returns at most.
pub const LATEST_LIMIT: i64 = 6;

/// Sort for the latest-pets feed: `date` descending, newest first.
pub fn latest_sort() -> Document {
    doc! { "date": -1 }
}

/// Fields a listing PATCH is allowed to touch. Anything else in the payload
/// is ignored rather than written through.
pub const PATCH_FIELDS: [&str; 8] = [
    "name",
    "category",
    "price",
    "location",
    "description",
    "image",
    "email",
    "date",
];

/// Projects the caller-supplied payload onto the recognized listing fields.
/// Omitted fields are left untouched; fields explicitly present as `null`
/// overwrite with BSON null.
pub fn patch_document(payload: &serde_json::Value) -> Document {
    let mut set = Document::new();

    if let Some(map) = payload.as_object() {
        for field in PATCH_FIELDS {
            if let Some(value) = map.get(field) {
                let bson = mongodb::bson::to_bson(value).unwrap_or(Bson::Null);
                set.insert(field, bson);
            }
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_feed_is_capped_at_six() {
        assert_eq!(LATEST_LIMIT, 6);
    }

    #[test]
    fn test_latest_sort_is_date_descending() {
        assert_eq!(latest_sort(), doc! { "date": -1 });
    }

    #[test]
    fn test_full_field_set_is_projected() {
        let payload = serde_json::json!({
            "name": "Biscuit",
            "category": "dog",
            "price": 120,
            "location": "Dhaka",
            "description": "Golden retriever, 2 years old",
            "image": "https://example.com/biscuit.jpg",
            "email": "owner@example.com",
            "date": "2024-06-01T10:00:00Z",
        });

        let set = patch_document(&payload);
        assert_eq!(set.len(), 8);
        assert_eq!(set.get_str("name").unwrap(), "Biscuit");
        assert_eq!(set.get_i64("price").unwrap(), 120);
    }

    #[test]
    fn test_omitted_fields_are_not_set() {
        let payload = serde_json::json!({ "name": "Biscuit", "price": 90 });

        let set = patch_document(&payload);
        assert_eq!(set.len(), 2);
        assert!(!set.contains_key("image"));
        assert!(!set.contains_key("date"));
    }

    #[test]
    fn test_explicit_null_overwrites() {
        let payload = serde_json::json!({ "name": "Biscuit", "image": null });

        let set = patch_document(&payload);
        assert_eq!(set.get("image"), Some(&Bson::Null));
    }

    #[test]
    fn test_unrecognized_fields_are_ignored() {
        let payload = serde_json::json!({
            "name": "Biscuit",
            "status": "adopted",
            "_id": "507f1f77bcf86cd799439011",
        });

        let set = patch_document(&payload);
        assert_eq!(set.len(), 1);
        assert!(!set.contains_key("status"));
        assert!(!set.contains_key("_id"));
    }

    #[test]
    fn test_unrecognized_only_payload_yields_empty_patch() {
        // The PATCH handler rejects an empty projection up front instead of
        // sending an empty $set to the server
        let payload = serde_json::json!({ "status": "adopted", "likes": 3 });
        assert!(patch_document(&payload).is_empty());
    }

    #[test]
    fn test_non_object_payload_yields_empty_patch() {
        let set = patch_document(&serde_json::json!(42));
        assert!(set.is_empty());
    }
}
