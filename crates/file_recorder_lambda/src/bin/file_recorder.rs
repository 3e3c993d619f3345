use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use chrono::Utc;
use file_recorder_core::contract::{InvocationResponse, MetadataRecord};
use file_recorder_lambda::adapters::object_store::ObjectStore;
use file_recorder_lambda::adapters::record_table::{dynamo_item, RecordTable};
use file_recorder_lambda::config::{
    RecorderConfig, EMULATOR_ACCESS_KEY_ID, EMULATOR_REGION, EMULATOR_SECRET_ACCESS_KEY,
};
use file_recorder_lambda::handlers::recorder::handle_event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

struct S3ObjectStore {
    s3_client: aws_sdk_s3::Client,
}

impl ObjectStore for S3ObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| aws_sdk_s3::error::DisplayErrorContext(error).to_string())
            })
        })
    }
}

struct DynamoRecordTable {
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl RecordTable for DynamoRecordTable {
    fn put_record(&self, table: &str, record: &MetadataRecord) -> Result<(), String> {
        let table_name = table.to_string();
        let item = dynamo_item(record);
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        aws_sdk_dynamodb::error::DisplayErrorContext(error).to_string()
                    })
            })
        })
    }
}

/// Built once per process and shared by every invocation.
struct RuntimeDependencies {
    config: RecorderConfig,
    object_store: S3ObjectStore,
    record_table: DynamoRecordTable,
}

impl RuntimeDependencies {
    async fn connect(config: RecorderConfig) -> Self {
        let credentials = Credentials::new(
            EMULATOR_ACCESS_KEY_ID,
            EMULATOR_SECRET_ACCESS_KEY,
            None,
            None,
            "localstack",
        );
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(EMULATOR_REGION))
            .credentials_provider(credentials)
            .endpoint_url(config.endpoint.url())
            .load()
            .await;

        // The emulator does not resolve virtual-hosted bucket names.
        let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(true)
            .build();

        Self {
            object_store: S3ObjectStore {
                s3_client: aws_sdk_s3::Client::from_conf(s3_config),
            },
            record_table: DynamoRecordTable {
                dynamodb_client: aws_sdk_dynamodb::Client::new(&aws_config),
            },
            config,
        }
    }
}

fn handle_request(
    deps: &RuntimeDependencies,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "invocation received");

    handle_event(
        &event.payload,
        Utc::now(),
        &deps.config,
        &deps.object_store,
        &deps.record_table,
    )
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_current_span(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = RecorderConfig::from_env().inspect_err(|error| {
        tracing::error!(error = %error, "invalid configuration");
    })?;
    tracing::info!(
        bucket = %config.bucket_name,
        table = %config.table_name,
        endpoint = %config.endpoint.url(),
        "file recorder starting"
    );

    let deps = RuntimeDependencies::connect(config).await;
    let deps = &deps;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(deps, event)
    }))
    .await
}
