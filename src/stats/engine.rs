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

//! # Ods Statistics Engine
//!
//! Orchestrates a full statistics run: fetch schema, classify every field,
//! run the batched aggregation pass over numeric/temporal/row-identifier
//! fields, then the grouped-count pass over categorical fields, and return
//! the assembled output root.
//!
//! Processing is strictly sequential with one outstanding request at a
//! time; a later batch's request is never built until the previous response
//! has been fully merged. The output root is the only mutable state and is
//! owned by the engine for the duration of the run. Any remote failure
//! aborts the run with no partial result.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::categorical::OdsCategoricalAggregator;
use super::classify::{classify_fields, OdsFieldCategory};
use super::plan::{OdsBatchPlanner, DEFAULT_BATCH_SIZE};
use super::records::{OdsNumericStats, OdsOpenDataStatistics, OdsTemporalStats};
use super::runner::OdsAggregateQueryRunner;
use crate::client::OdsJsonFetch;
use crate::errors::Result;
use crate::schema::fetch_schema;

/// Tunable parameters for a statistics run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdsEngineConfig {
    /// Fields per aggregation request. Larger values reduce request count
    /// at the cost of larger, possibly-rejected query expressions.
    pub batch_size: usize,
}

impl Default for OdsEngineConfig {
    fn default() -> Self {
        OdsEngineConfig {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Computes OpenData summary statistics for one remote dataset layer.
pub struct OdsStatisticsEngine<'a, C: OdsJsonFetch> {
    client: &'a C,
    config: OdsEngineConfig,
}

impl<'a, C: OdsJsonFetch> OdsStatisticsEngine<'a, C> {
    /// Creates an engine with the default configuration (batch size 1).
    pub fn new(client: &'a C) -> Self {
        Self::with_config(client, OdsEngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(client: &'a C, config: OdsEngineConfig) -> Self {
        OdsStatisticsEngine { client, config }
    }

    /// Runs a full statistics computation against a dataset layer.
    ///
    /// Every classified field is processed exactly once, in schema order;
    /// unsupported fields are silently omitted from every output bucket.
    pub fn compute(&self, dataset_url: &str) -> Result<OdsOpenDataStatistics> {
        let fields = fetch_schema(self.client, dataset_url)?;
        log::info!("fetched schema with {} fields from {}", fields.len(), dataset_url);

        let classified = classify_fields(&fields);
        let categories: HashMap<String, OdsFieldCategory> = classified
            .iter()
            .map(|field| (field.name().to_string(), field.category))
            .collect();

        // One empty record per batched field, created exactly once; batch
        // responses fill them in place.
        let mut output = OdsOpenDataStatistics::default();
        for field in &classified {
            match field.category {
                OdsFieldCategory::Numeric => {
                    output
                        .numeric
                        .insert(field.name().to_string(), OdsNumericStats::default());
                }
                OdsFieldCategory::RowIdentifier => {
                    output
                        .row_identifier
                        .insert(field.name().to_string(), OdsNumericStats::default());
                }
                OdsFieldCategory::Temporal => {
                    output
                        .temporal
                        .insert(field.name().to_string(), OdsTemporalStats::default());
                }
                OdsFieldCategory::Categorical | OdsFieldCategory::Unsupported => {}
            }
        }

        let planner = OdsBatchPlanner::new(self.config.batch_size)?;
        let batches = planner.plan(&classified);
        log::info!(
            "running {} aggregation batches of up to {} fields",
            batches.len(),
            planner.batch_size()
        );

        let runner = OdsAggregateQueryRunner::new(self.client, dataset_url);
        for batch in &batches {
            runner.run(batch, &categories, &mut output)?;
        }

        let aggregator = OdsCategoricalAggregator::new(self.client, dataset_url);
        for field in classified
            .iter()
            .filter(|field| field.category == OdsFieldCategory::Categorical)
        {
            let stats = aggregator.aggregate(&field.descriptor)?;
            output.categorical.insert(field.name().to_string(), stats);
        }

        log::info!("assembled statistics for {} fields", output.field_count());
        Ok(output)
    }
}
