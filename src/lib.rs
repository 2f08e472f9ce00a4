// DbExport - Snapshot export Lambda
// Copyright (c) 2025 DbExport Contributors
// Licensed under the MIT License

//! # DbExport - Snapshot export Lambda
//!
//! An SQS-triggered AWS Lambda that turns export requests into stored
//! snapshot artifacts.
//!
//! ## Overview
//!
//! For each message on the input queue the function:
//! - **Decodes** the request (`snapshot_id` plus survey/period pairs)
//! - **Relays** the raw message to the business layer endpoint
//! - **Stores** the returned export in S3 under a deterministic key
//! - **Reports** the outcome on the output queue
//!
//! ## Architecture
//!
//! - [`core`] - Message orchestration and completion notification
//! - [`adapters`] - Business layer, S3 and SQS integrations
//! - [`domain`] - Requests, storage keys, completion records, errors
//! - [`config`] - Environment-based configuration
//! - [`logging`] - Structured JSON logging
//! - [`testing`] - In-memory adapters
//!
//! ## Storage keys
//!
//! ```rust
//! use dbexport::domain::{StorageKey, SurveyPeriod};
//!
//! let key = StorageKey::build(
//!     "abc123",
//!     &[SurveyPeriod::new("rsi", "201501"), SurveyPeriod::new("mbs", "201502")],
//! ).unwrap();
//! assert_eq!(key.as_str(), "snapshot-rsi_201501-mbs_201502-abc123");
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`]. Decode, validation and
//! business layer errors end the invocation; storage and notification errors
//! are logged and do not.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod testing;
