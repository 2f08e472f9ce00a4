// DbExport - Snapshot export Lambda
// Copyright (c) 2025 DbExport Contributors
// Licensed under the MIT License

use aws_config::{BehaviorVersion, Region};
use aws_lambda_events::event::sqs::SqsEvent;
use dbexport::adapters::{BusinessLayerClient, S3ArtifactStore, SqsCompletionPublisher};
use dbexport::config::load_config;
use dbexport::core::export::ExportHandler;
use dbexport::logging::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Only used for local runs; Lambda provides the environment directly
    let _ = dotenvy::dotenv();

    let config = load_config()?;
    init_logging(&config.log_level)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        region = %config.region,
        bucket = %config.bucket,
        "Starting the application"
    );

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let handler = Arc::new(ExportHandler::new(
        &config,
        Arc::new(BusinessLayerClient::new(&config)?),
        Arc::new(S3ArtifactStore::new(
            aws_sdk_s3::Client::new(&sdk_config),
            &config,
        )),
        Arc::new(SqsCompletionPublisher::new(aws_sdk_sqs::Client::new(
            &sdk_config,
        ))),
    ));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SqsEvent>| {
        let handler = handler.clone();
        async move {
            handler
                .handle_event(event.payload)
                .await
                .map(|_| ())
                .map_err(Error::from)
        }
    }))
    .await
}
