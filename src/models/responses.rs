use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;
use utoipa::ToSchema;

/// Mirror of the driver's insert acknowledgement in the wire shape clients
/// already consume.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResponse {
    pub acknowledged: bool,
    pub inserted_id: Option<String>,
}

impl From<InsertOneResult> for InsertOneResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: result.inserted_id.as_object_id().map(|id| id.to_hex()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result
                .upserted_id
                .and_then(|id| id.as_object_id().map(|oid| oid.to_hex())),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

/// Sentinel for a duplicate-email user create: nothing was inserted and the
/// caller is told so without an error status.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateUserResponse {
    pub message: String,
    pub inserted_id: Option<String>,
}

impl DuplicateUserResponse {
    pub fn already_exists() -> Self {
        Self {
            message: "User already exists".to_string(),
            inserted_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_sentinel_wire_shape() {
        let json = serde_json::to_value(DuplicateUserResponse::already_exists()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "User already exists", "insertedId": null })
        );
    }

    #[test]
    fn test_update_response_uses_camel_case() {
        let response = UpdateResponse {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
            upserted_id: None,
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 1,
                "upsertedId": null,
            })
        );
    }

    #[test]
    fn test_delete_response_wire_shape() {
        let json = serde_json::to_value(DeleteResponse {
            acknowledged: true,
            deleted_count: 0,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "acknowledged": true, "deletedCount": 0 })
        );
    }

    #[test]
    fn test_insert_response_carries_generated_id() {
        let json = serde_json::to_value(InsertOneResponse {
            acknowledged: true,
            inserted_id: Some("507f1f77bcf86cd799439011".to_string()),
        })
        .unwrap();
        assert_eq!(json["insertedId"], "507f1f77bcf86cd799439011");
    }
}
