//! Integration tests for the export handler
//!
//! These tests drive the handler end to end against the in-memory adapters
//! and check what reaches object storage and the output queue.

use dbexport::config::{DbExportConfig, LocationFormat};
use dbexport::core::export::{ExportHandler, QueueMessage};
use dbexport::domain::{CompletionRecord, DbExportError};
use dbexport::testing::{MemoryArtifactStore, RecordingPublisher, StaticExportSource};
use std::sync::Arc;

const VALID_MESSAGE: &str =
    r#"{"snapshot_id":"abc123","surveyperiods":[{"survey":"rsi","period":"201501"}]}"#;

struct Harness {
    handler: ExportHandler,
    source: Arc<StaticExportSource>,
    store: Arc<MemoryArtifactStore>,
    publisher: Arc<RecordingPublisher>,
}

fn config(location_format: LocationFormat) -> DbExportConfig {
    DbExportConfig {
        region: "eu-west-2".to_string(),
        bucket: "exports".to_string(),
        graphql_endpoint: "https://bl.example.com/graphql".to_string(),
        output_queue: "db-export-output".to_string(),
        http_timeout_seconds: 30,
        location_format,
        log_level: "info".to_string(),
    }
}

fn harness_with(
    location_format: LocationFormat,
    source: StaticExportSource,
    store: MemoryArtifactStore,
) -> Harness {
    let source = Arc::new(source);
    let store = Arc::new(store);
    let publisher = Arc::new(RecordingPublisher::new());
    let handler = ExportHandler::new(
        &config(location_format),
        source.clone(),
        store.clone(),
        publisher.clone(),
    );
    Harness {
        handler,
        source,
        store,
        publisher,
    }
}

fn harness(source: StaticExportSource) -> Harness {
    harness_with(LocationFormat::S3Uri, source, MemoryArtifactStore::new())
}

#[tokio::test]
async fn test_successful_export_with_s3_locator() {
    let h = harness(StaticExportSource::payload("DATA"));

    let outcome = h.handler.handle_message(VALID_MESSAGE).await.unwrap();

    assert_eq!(outcome.snapshot_id, "abc123");
    assert_eq!(outcome.key.as_str(), "snapshot-rsi_201501-abc123");
    assert!(outcome.stored);

    assert_eq!(h.source.requests(), vec![VALID_MESSAGE.to_string()]);
    assert_eq!(
        h.store.objects(),
        vec![("snapshot-rsi_201501-abc123".to_string(), b"DATA".to_vec())]
    );
    assert_eq!(
        h.publisher.records(),
        vec![CompletionRecord::success(
            "abc123",
            "s3://exports/snapshot-rsi_201501-abc123"
        )]
    );
}

#[tokio::test]
async fn test_successful_export_with_bare_key() {
    let h = harness_with(
        LocationFormat::Key,
        StaticExportSource::payload("DATA"),
        MemoryArtifactStore::new(),
    );

    h.handler.handle_message(VALID_MESSAGE).await.unwrap();

    let published = h.publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(
        published[0].1,
        r#"{"snapshot_id":"abc123","location":"snapshot-rsi_201501-abc123","successful":true}"#
    );
}

#[tokio::test]
async fn test_decode_failure_notifies_once_with_empty_snapshot() {
    let h = harness(StaticExportSource::payload("DATA"));

    let result = h.handler.handle_message("{not json").await;

    assert!(matches!(result, Err(DbExportError::Decode(_))));
    assert_eq!(h.publisher.records(), vec![CompletionRecord::failure("")]);
    assert!(h.source.requests().is_empty());
    assert!(h.store.objects().is_empty());
}

#[tokio::test]
async fn test_validation_failures_notify_with_partial_data() {
    let cases = [
        (
            r#"{"snapshot_id":"","surveyperiods":[{"survey":"rsi","period":"201501"}]}"#,
            "",
        ),
        (r#"{"snapshot_id":"abc123","surveyperiods":[]}"#, "abc123"),
        (r#"{"snapshot_id":"","surveyperiods":[]}"#, ""),
        (r#"{}"#, ""),
    ];

    for (body, expected_snapshot) in cases {
        let h = harness(StaticExportSource::payload("DATA"));

        let result = h.handler.handle_message(body).await;

        assert!(
            matches!(result, Err(DbExportError::Validation(_))),
            "body {body} should fail validation"
        );
        assert_eq!(
            h.publisher.records(),
            vec![CompletionRecord::failure(expected_snapshot)]
        );
        assert!(h.source.requests().is_empty());
    }
}

#[tokio::test]
async fn test_unreachable_business_layer_skips_storage() {
    let h = harness(StaticExportSource::unreachable());

    let result = h.handler.handle_message(VALID_MESSAGE).await;

    assert!(matches!(
        result,
        Err(DbExportError::BusinessLayerUnreachable(_))
    ));
    assert_eq!(h.publisher.records(), vec![CompletionRecord::failure("abc123")]);
    assert!(h.store.objects().is_empty());
}

#[tokio::test]
async fn test_business_layer_error_never_reports_success() {
    let h = harness(StaticExportSource::business_error());

    let result = h.handler.handle_message(VALID_MESSAGE).await;

    assert!(matches!(result, Err(DbExportError::BusinessLayer(_))));
    let records = h.publisher.records();
    assert!(records.iter().all(|r| !r.successful));
    assert_eq!(records, vec![CompletionRecord::failure("abc123")]);
    assert!(h.store.objects().is_empty());
}

#[tokio::test]
async fn test_storage_failure_keeps_single_success_record() {
    let h = harness_with(
        LocationFormat::S3Uri,
        StaticExportSource::payload("DATA"),
        MemoryArtifactStore::failing(),
    );

    let outcome = h.handler.handle_message(VALID_MESSAGE).await.unwrap();

    assert!(!outcome.stored);
    assert_eq!(
        h.publisher.records(),
        vec![CompletionRecord::success(
            "abc123",
            "s3://exports/snapshot-rsi_201501-abc123"
        )]
    );
}

#[tokio::test]
async fn test_notification_failure_does_not_abort_export() {
    let source = Arc::new(StaticExportSource::payload("DATA"));
    let store = Arc::new(MemoryArtifactStore::new());
    let handler = ExportHandler::new(
        &config(LocationFormat::S3Uri),
        source,
        store.clone(),
        Arc::new(RecordingPublisher::failing_resolution()),
    );

    let outcome = handler.handle_message(VALID_MESSAGE).await.unwrap();

    assert!(outcome.stored);
    assert_eq!(store.objects().len(), 1);
}

#[tokio::test]
async fn test_batch_processes_messages_in_order() {
    let h = harness(StaticExportSource::payload("DATA"));
    let second =
        r#"{"snapshot_id":"def456","surveyperiods":[{"survey":"mbs","period":"201502"},{"survey":"rsi","period":"201502"}]}"#;

    let summary = h
        .handler
        .handle_batch(vec![
            QueueMessage::new("msg-1", VALID_MESSAGE),
            QueueMessage::new("msg-2", second),
        ])
        .await
        .unwrap();

    assert_eq!(summary.messages_received, 2);
    assert_eq!(summary.messages_processed, 2);
    assert_eq!(summary.artifacts_stored, 2);
    assert!(summary.is_fully_stored());

    let keys: Vec<String> = h.store.objects().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![
            "snapshot-rsi_201501-abc123".to_string(),
            "snapshot-mbs_201502-rsi_201502-def456".to_string()
        ]
    );

    let snapshots: Vec<String> = h
        .publisher
        .records()
        .into_iter()
        .map(|r| r.snapshot_id)
        .collect();
    assert_eq!(snapshots, vec!["abc123".to_string(), "def456".to_string()]);
}

#[tokio::test]
async fn test_batch_stops_at_first_failure() {
    let h = harness(StaticExportSource::payload("DATA"));

    let result = h
        .handler
        .handle_batch(vec![
            QueueMessage::new("msg-1", VALID_MESSAGE),
            QueueMessage::new("msg-2", "garbage"),
            QueueMessage::new("msg-3", VALID_MESSAGE),
        ])
        .await;

    assert!(matches!(result, Err(DbExportError::Decode(_))));
    assert_eq!(h.store.objects().len(), 1);
    assert_eq!(
        h.publisher.records(),
        vec![
            CompletionRecord::success("abc123", "s3://exports/snapshot-rsi_201501-abc123"),
            CompletionRecord::failure(""),
        ]
    );
}

#[tokio::test]
async fn test_batch_continues_after_storage_failure() {
    let h = harness_with(
        LocationFormat::S3Uri,
        StaticExportSource::payload("DATA"),
        MemoryArtifactStore::failing(),
    );

    let summary = h
        .handler
        .handle_batch(vec![
            QueueMessage::new("msg-1", VALID_MESSAGE),
            QueueMessage::new("msg-2", VALID_MESSAGE),
        ])
        .await
        .unwrap();

    assert_eq!(summary.messages_processed, 2);
    assert_eq!(summary.storage_failures, 2);
    assert_eq!(h.publisher.records().len(), 2);
}

#[tokio::test]
async fn test_empty_batch_is_an_error() {
    let h = harness(StaticExportSource::payload("DATA"));

    let result = h.handler.handle_batch(Vec::new()).await;

    assert!(matches!(result, Err(DbExportError::EmptyBatch)));
    assert!(h.publisher.published().is_empty());
}

#[tokio::test]
async fn test_handle_sqs_event() {
    let h = harness(StaticExportSource::payload("DATA"));

    let event: aws_lambda_events::event::sqs::SqsEvent = serde_json::from_value(serde_json::json!({
        "Records": [{
            "messageId": "059f36b4-87a3-44ab-83d2-661975830a7d",
            "receiptHandle": "AQEBwJnKyrHigUMZj6rYigCgxlaS3SLy0a",
            "body": VALID_MESSAGE,
            "attributes": {},
            "messageAttributes": {},
            "md5OfBody": "e4e68fb7bd0e697a0ae8f1bb342846b3",
            "eventSource": "aws:sqs",
            "eventSourceARN": "arn:aws:sqs:eu-west-2:000000000000:db-export-input",
            "awsRegion": "eu-west-2"
        }]
    }))
    .unwrap();

    let summary = h.handler.handle_event(event).await.unwrap();

    assert_eq!(summary.artifacts_stored, 1);
    assert_eq!(h.store.objects()[0].0, "snapshot-rsi_201501-abc123");
}
