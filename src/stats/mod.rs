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

pub mod categorical;
pub mod classify;
pub mod engine;
pub mod plan;
pub mod records;
pub mod runner;

pub use categorical::OdsCategoricalAggregator;
pub use classify::{classify_fields, OdsClassifiedField, OdsFieldCategory};
pub use engine::{OdsEngineConfig, OdsStatisticsEngine};
pub use plan::{
    OdsBatch, OdsBatchPlanner, OdsStatDirective, OdsStatistic, DEFAULT_BATCH_SIZE,
};
pub use records::{
    OdsCategoricalStats, OdsNumericStats, OdsOpenDataStatistics, OdsTemporalStats, OdsValueCount,
};
pub use runner::OdsAggregateQueryRunner;
