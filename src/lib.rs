//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ods.
//! The Ods project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Ods Core Library
//!
//! Ods computes OpenData-style summary statistics for a remote tabular
//! dataset exposed through a typed field schema and a server-side
//! aggregation query endpoint: min/max/avg/sum/count for numeric fields,
//! min/max/count for temporal fields, and distinct-value/count tables for
//! categorical fields.
//!
//! ## Module Overview
//!
//! - **errors**: Error types and the crate-wide `Result` alias
//! - **client**: Rate-limited JSON HTTP transport and the `OdsJsonFetch`
//!   collaborator seam
//! - **schema**: Field descriptors and the schema source
//! - **stats**: The aggregation engine itself — classification, batch
//!   planning, the aggregate query runner, the categorical aggregator, and
//!   the orchestrating statistics engine
//!
//! ## Quick Start
//!
//! ```rust
//! use odsx::{OdsHttpClient, OdsStatisticsEngine};
//!
//! let client = OdsHttpClient::new();
//! let engine = OdsStatisticsEngine::new(&client);
//! let stats = engine.compute("https://services.example.com/OpenData/FeatureServer/0")?;
//!
//! for (field, record) in &stats.numeric {
//!     println!("{}: min={:?} max={:?}", field, record.min, record.max);
//! }
//! ```
//!
//! ## Architecture
//!
//! A statistics run is a fixed sequence:
//! 1. **Schema fetch**: read the dataset's field list
//! 2. **Classification**: map each raw type tag to a statistic category
//! 3. **Batched aggregation**: plan fixed-size batches over the numeric,
//!    temporal, and row-identifier fields and merge each response into the
//!    typed per-field records
//! 4. **Categorical aggregation**: one grouped-count query per string field
//!
//! All requests run strictly sequentially, each preceded by a fixed
//! rate-limit pause (default 500 ms). Any remote failure aborts the run;
//! there is no partial result.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, OdsError>`. A non-success HTTP status
//! surfaces as `OdsError::Transport` carrying the failing URL and status;
//! zero-row responses are valid results, never errors.

pub mod client;
pub mod errors;
pub mod schema;
pub mod stats;

pub use client::{OdsHttpClient, OdsJsonFetch, OdsRateLimit, DEFAULT_REQUEST_INTERVAL};
pub use errors::{OdsError, Result};
pub use schema::{fetch_schema, OdsFieldDescriptor};
pub use stats::{
    classify_fields, OdsAggregateQueryRunner, OdsBatch, OdsBatchPlanner,
    OdsCategoricalAggregator, OdsCategoricalStats, OdsClassifiedField, OdsEngineConfig,
    OdsFieldCategory, OdsNumericStats, OdsOpenDataStatistics, OdsStatDirective, OdsStatistic,
    OdsStatisticsEngine, OdsTemporalStats, OdsValueCount, DEFAULT_BATCH_SIZE,
};
