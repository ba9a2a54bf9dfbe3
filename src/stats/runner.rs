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

//! # Ods Aggregate Query Runner
//!
//! Dispatches one aggregation request per batch and merges the flat,
//! textually-keyed attribute map of the response into the typed per-field
//! records. The request selects the entire dataset (`where=1=1`), suppresses
//! geometry, and carries the batch's concatenated statistic directives in
//! the `outStatistics` parameter.
//!
//! A response with no rows is a valid "zero matching rows" result, not an
//! error: the attribute map is treated as empty and every record stays in
//! its initialized-empty state.

use std::collections::HashMap;

use reqwest::Url;
use serde_json::{Map, Value};

use super::classify::OdsFieldCategory;
use super::plan::{OdsBatch, OdsStatDirective, OdsStatistic};
use super::records::OdsOpenDataStatistics;
use crate::client::OdsJsonFetch;
use crate::errors::{OdsError, Result};

/// Builds a `{dataset_url}/query` URL with the given query parameters.
pub(crate) fn query_url(dataset_url: &str, params: &[(&str, &str)]) -> Result<String> {
    let base = format!("{}/query", dataset_url.trim_end_matches('/'));
    let url = Url::parse_with_params(&base, params)
        .map_err(|e| OdsError::validation(format!("invalid dataset url '{}': {}", dataset_url, e)))?;
    Ok(url.into())
}

/// Builds the aggregation query URL for one batch's directives.
fn aggregate_query_url(dataset_url: &str, directives: &[OdsStatDirective]) -> Result<String> {
    let out_statistics = serde_json::to_string(directives)?;
    query_url(
        dataset_url,
        &[
            ("where", "1=1"),
            ("returnGeometry", "false"),
            ("outStatistics", &out_statistics),
            ("f", "json"),
        ],
    )
}

/// Extracts the single result row's attribute map from a query response.
///
/// Absent or empty `features` yields an empty map.
pub(crate) fn first_row_attributes(response: &Value) -> Map<String, Value> {
    response
        .get("features")
        .and_then(Value::as_array)
        .and_then(|rows| rows.first())
        .and_then(|row| row.get("attributes"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Merges an aliased attribute map into the typed output records.
///
/// Each key is parsed as `<field>_<statistic>` by splitting on the last
/// underscore; the category table built at classification time routes the
/// write directly to the field's record. Keys with an unknown statistic
/// suffix or an unclassified field name are skipped. A schema that contains
/// both a field `x` and a field `x_min` makes the parse ambiguous; that
/// limitation lives in the alias convention itself and is not guessed
/// around here.
pub(crate) fn merge_attributes(
    attributes: &Map<String, Value>,
    categories: &HashMap<String, OdsFieldCategory>,
    output: &mut OdsOpenDataStatistics,
) {
    for (alias, value) in attributes {
        let Some((field, suffix)) = alias.rsplit_once('_') else {
            log::debug!("skipping aggregate key without statistic suffix: {}", alias);
            continue;
        };
        let Some(statistic) = OdsStatistic::parse(suffix) else {
            log::debug!("skipping aggregate key with unknown statistic: {}", alias);
            continue;
        };

        match categories.get(field) {
            Some(OdsFieldCategory::Numeric) => {
                output.numeric.entry(field.to_string()).or_default().set(statistic, value);
            }
            Some(OdsFieldCategory::RowIdentifier) => {
                output
                    .row_identifier
                    .entry(field.to_string())
                    .or_default()
                    .set(statistic, value);
            }
            Some(OdsFieldCategory::Temporal) => {
                output.temporal.entry(field.to_string()).or_default().set(statistic, value);
            }
            _ => {
                log::debug!("aggregate key '{}' matches no batched field", alias);
            }
        }
    }
}

/// Runs aggregation queries batch by batch, merging into the output root.
pub struct OdsAggregateQueryRunner<'a, C: OdsJsonFetch> {
    client: &'a C,
    dataset_url: &'a str,
}

impl<'a, C: OdsJsonFetch> OdsAggregateQueryRunner<'a, C> {
    /// Creates a runner bound to one dataset layer.
    pub fn new(client: &'a C, dataset_url: &'a str) -> Self {
        OdsAggregateQueryRunner {
            client,
            dataset_url,
        }
    }

    /// Dispatches one batch and merges its response into `output`.
    pub fn run(
        &self,
        batch: &OdsBatch,
        categories: &HashMap<String, OdsFieldCategory>,
        output: &mut OdsOpenDataStatistics,
    ) -> Result<()> {
        let directives = batch.directives();
        if directives.is_empty() {
            return Ok(());
        }

        let url = aggregate_query_url(self.dataset_url, &directives)?;
        let response = self.client.get_json(&url)?;
        let attributes = first_row_attributes(&response);
        log::debug!(
            "batch of {} fields returned {} aggregate values",
            batch.fields.len(),
            attributes.len()
        );
        merge_attributes(&attributes, categories, output);
        Ok(())
    }
}
