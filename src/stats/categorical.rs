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

//! # Ods Categorical Aggregator
//!
//! Distinct-value tables for categorical (string) fields. Each field gets
//! one grouped-count query: the predicate selects the entire dataset, the
//! grouping key is the field itself, and the sole statistic directive is a
//! count aggregate under a fixed internal alias. The response rows are
//! reduced in order into the value table; a null group value represents
//! rows where the field is missing.

use serde_json::Value;

use super::plan::{OdsStatDirective, OdsStatistic};
use super::records::OdsCategoricalStats;
use super::runner::query_url;
use crate::client::OdsJsonFetch;
use crate::errors::Result;
use crate::schema::OdsFieldDescriptor;

/// Internal alias for the per-group count, distinct from any field name.
pub(crate) const GROUP_COUNT_ALIAS: &str = "ods_value_count";

/// Runs one grouped-count query per categorical field.
pub struct OdsCategoricalAggregator<'a, C: OdsJsonFetch> {
    client: &'a C,
    dataset_url: &'a str,
}

impl<'a, C: OdsJsonFetch> OdsCategoricalAggregator<'a, C> {
    /// Creates an aggregator bound to one dataset layer.
    pub fn new(client: &'a C, dataset_url: &'a str) -> Self {
        OdsCategoricalAggregator {
            client,
            dataset_url,
        }
    }

    /// Computes the distinct-value table for one field.
    ///
    /// No rows in the response yields an empty table with zero counts.
    pub fn aggregate(&self, field: &OdsFieldDescriptor) -> Result<OdsCategoricalStats> {
        let directive = OdsStatDirective {
            statistic: OdsStatistic::Count,
            source_field: field.name.clone(),
            output_alias: GROUP_COUNT_ALIAS.to_string(),
        };
        let out_statistics = serde_json::to_string(&[directive])?;
        let url = query_url(
            self.dataset_url,
            &[
                ("where", "1=1"),
                ("returnGeometry", "false"),
                ("groupByFieldsForStatistics", &field.name),
                ("outStatistics", &out_statistics),
                ("f", "json"),
            ],
        )?;

        let response = self.client.get_json(&url)?;
        let stats = reduce_grouped_response(&response, &field.name);
        log::debug!(
            "field '{}' has {} distinct values over {} rows",
            field.name,
            stats.unique_count,
            stats.total_count
        );
        Ok(stats)
    }
}

/// Reduces a grouped-count response into a distinct-value table, keeping
/// the server's row order.
pub(crate) fn reduce_grouped_response(response: &Value, field_name: &str) -> OdsCategoricalStats {
    let mut stats = OdsCategoricalStats::default();

    let Some(rows) = response.get("features").and_then(Value::as_array) else {
        return stats;
    };

    for row in rows {
        let Some(attributes) = row.get("attributes").and_then(Value::as_object) else {
            continue;
        };
        let value = match attributes.get(field_name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            // String fields should only group on strings, but a degenerate
            // server value still counts as a distinct group.
            Some(other) => Some(other.to_string()),
        };
        let count = attributes
            .get(GROUP_COUNT_ALIAS)
            .and_then(Value::as_u64)
            .unwrap_or(0);
        stats.push(value, count);
    }

    stats
}
