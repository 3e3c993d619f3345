use chrono::{DateTime, Utc};
use file_recorder_core::contract::{InvocationResponse, SuccessBody};
use file_recorder_core::error::RecorderError;
use file_recorder_core::naming::RecordedFile;
use serde_json::Value;

use crate::adapters::object_store::ObjectStore;
use crate::adapters::record_table::RecordTable;
use crate::config::RecorderConfig;

/// Writes one timestamped object, then its metadata record.
///
/// The record write is only attempted once the object write has returned.
/// A failed record write leaves the object in place.
pub fn handle_invocation(
    now: DateTime<Utc>,
    config: &RecorderConfig,
    object_store: &impl ObjectStore,
    record_table: &impl RecordTable,
) -> Result<InvocationResponse, RecorderError> {
    let file = RecordedFile::at(&config.bucket_name, now);

    if let Err(message) =
        object_store.put_object(&config.bucket_name, &file.file_name, file.body.as_bytes())
    {
        tracing::error!(
            bucket = %config.bucket_name,
            key = %file.file_name,
            error = %message,
            "object write failed"
        );
        return Err(RecorderError::ObjectWrite {
            bucket: config.bucket_name.clone(),
            key: file.file_name,
            message,
        });
    }

    if let Err(message) = record_table.put_record(&config.table_name, &file.metadata_record()) {
        tracing::error!(
            table = %config.table_name,
            file_path = %file.file_path,
            error = %message,
            "record write failed"
        );
        return Err(RecorderError::RecordWrite {
            table: config.table_name.clone(),
            file_path: file.file_path,
            message,
        });
    }

    tracing::info!(
        file_name = %file.file_name,
        file_path = %file.file_path,
        "created file and recorded metadata"
    );

    InvocationResponse::success(&SuccessBody::for_path(file.file_path))
        .map_err(RecorderError::from)
}

/// Runtime entry point. The event payload carries nothing the recorder uses.
pub fn handle_event(
    _payload: &Value,
    now: DateTime<Utc>,
    config: &RecorderConfig,
    object_store: &impl ObjectStore,
    record_table: &impl RecordTable,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    handle_invocation(now, config, object_store, record_table)
        .map_err(lambda_runtime::Error::from)
}
