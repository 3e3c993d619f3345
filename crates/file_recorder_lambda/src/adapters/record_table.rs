use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use file_recorder_core::contract::{MetadataRecord, CREATED_AT_ATTRIBUTE, FILE_PATH_ATTRIBUTE};

/// Unconditional upsert keyed by `record.file_path`.
pub trait RecordTable {
    fn put_record(&self, table: &str, record: &MetadataRecord) -> Result<(), String>;
}

/// PutItem attributes for one record; both values are string (`S`) typed.
pub fn dynamo_item(record: &MetadataRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            FILE_PATH_ATTRIBUTE.to_string(),
            AttributeValue::S(record.file_path.clone()),
        ),
        (
            CREATED_AT_ATTRIBUTE.to_string(),
            AttributeValue::S(record.created_at.clone()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamo_item_carries_exactly_path_key_and_timestamp() {
        let record = MetadataRecord {
            file_path: "uploads/2024-03-05 12:30:45 - test file.txt".to_string(),
            created_at: "2024-03-05 12:30:45".to_string(),
        };

        let item = dynamo_item(&record);

        let expected = HashMap::from([
            (
                "filePath".to_string(),
                AttributeValue::S("uploads/2024-03-05 12:30:45 - test file.txt".to_string()),
            ),
            (
                "createdAt".to_string(),
                AttributeValue::S("2024-03-05 12:30:45".to_string()),
            ),
        ]);
        assert_eq!(item, expected);
    }
}
