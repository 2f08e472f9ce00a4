//! External system integrations.
//!
//! - [`business_layer`] - HTTP client for the export endpoint
//! - [`s3`] - S3 artifact store
//! - [`sqs`] - SQS completion publisher
//!
//! # Design Pattern
//!
//! Each managed service sits behind a trait from [`traits`] so the export
//! handler can run against in-memory implementations in tests:
//!
//! ```rust,no_run
//! use dbexport::adapters::{BusinessLayerClient, S3ArtifactStore, SqsCompletionPublisher};
//! use dbexport::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
//!     .region(aws_config::Region::new(config.region.clone()))
//!     .load()
//!     .await;
//!
//! let source = BusinessLayerClient::new(&config)?;
//! let store = S3ArtifactStore::new(aws_sdk_s3::Client::new(&sdk_config), &config);
//! let publisher = SqsCompletionPublisher::new(aws_sdk_sqs::Client::new(&sdk_config));
//! # Ok(())
//! # }
//! ```

pub mod business_layer;
pub mod s3;
pub mod sqs;
pub mod traits;

pub use business_layer::BusinessLayerClient;
pub use s3::S3ArtifactStore;
pub use sqs::SqsCompletionPublisher;
pub use traits::{ArtifactStore, CompletionPublisher, ExportSource};
