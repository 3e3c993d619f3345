use serde::Serialize;

pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const SUCCESS_MESSAGE: &str = "Success";

pub const FILE_PATH_ATTRIBUTE: &str = "filePath";
pub const CREATED_AT_ATTRIBUTE: &str = "createdAt";

/// Row written to the metadata table; `file_path` is the partition key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub file_path: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody {
    pub message: String,
    pub file_path: String,
}

impl SuccessBody {
    pub fn for_path(file_path: impl Into<String>) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            file_path: file_path.into(),
        }
    }
}

/// Proxy-style result: `body` holds the JSON-encoded [`SuccessBody`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn success(body: &SuccessBody) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: SUCCESS_STATUS_CODE,
            body: serde_json::to_string(body)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn metadata_record_uses_table_attribute_names() {
        let record = MetadataRecord {
            file_path: "uploads/2024-03-05 12:30:45 - test file.txt".to_string(),
            created_at: "2024-03-05 12:30:45".to_string(),
        };

        let value = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(
            value,
            json!({
                "filePath": "uploads/2024-03-05 12:30:45 - test file.txt",
                "createdAt": "2024-03-05 12:30:45",
            })
        );
        assert_eq!(value[FILE_PATH_ATTRIBUTE], json!(record.file_path));
        assert_eq!(value[CREATED_AT_ATTRIBUTE], json!(record.created_at));
    }

    #[test]
    fn success_response_wraps_json_encoded_body() {
        let response =
            InvocationResponse::success(&SuccessBody::for_path("uploads/a.txt")).expect("encode");

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).expect("body should be json");
        assert_eq!(body, json!({"message": "Success", "filePath": "uploads/a.txt"}));
    }

    #[test]
    fn response_serializes_status_code_in_camel_case() {
        let response =
            InvocationResponse::success(&SuccessBody::for_path("uploads/a.txt")).expect("encode");

        let value = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(value["statusCode"], json!(200));
        assert!(value.get("status_code").is_none());
    }
}
