use chrono::{DateTime, Utc};

use crate::contract::MetadataRecord;

/// Second-precision, space separated, no zone suffix. Sub-second digits are
/// dropped, never rounded.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const FILE_NAME_SUFFIX: &str = " - test file.txt";
pub const OBJECT_BODY_PREFIX: &str = "This file was created at ";

pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

pub fn file_name(formatted_timestamp: &str) -> String {
    format!("{formatted_timestamp}{FILE_NAME_SUFFIX}")
}

pub fn file_path(bucket: &str, file_name: &str) -> String {
    format!("{bucket}/{file_name}")
}

pub fn object_body(formatted_timestamp: &str) -> String {
    format!("{OBJECT_BODY_PREFIX}{formatted_timestamp}")
}

/// Everything one invocation derives from its wall-clock time.
///
/// Names carry no random component, so two invocations within the same
/// second resolve to the same object key and the same record key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFile {
    pub formatted_timestamp: String,
    pub file_name: String,
    pub file_path: String,
    pub body: String,
}

impl RecordedFile {
    pub fn at(bucket: &str, now: DateTime<Utc>) -> Self {
        let formatted_timestamp = format_timestamp(now);
        let file_name = file_name(&formatted_timestamp);
        Self {
            file_path: file_path(bucket, &file_name),
            body: object_body(&formatted_timestamp),
            file_name,
            formatted_timestamp,
        }
    }

    pub fn metadata_record(&self) -> MetadataRecord {
        MetadataRecord {
            file_path: self.file_path.clone(),
            created_at: self.formatted_timestamp.clone(),
        }
    }
}
