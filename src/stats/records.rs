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

//! # Ods Statistics Records
//!
//! Per-field accumulator records and the aggregate output root. Records are
//! created empty when a field is classified and filled in place as batch
//! responses arrive; temporal values are epoch-millisecond integers as
//! returned by the server. Once the engine returns the output root, nothing
//! mutates it further.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::plan::OdsStatistic;

/// Summary statistics for a numeric (or row-identifier) field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OdsNumericStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub sum: Option<f64>,
    pub count: Option<u64>,
}

impl OdsNumericStats {
    /// Writes one statistic value from an aggregation response in place.
    pub fn set(&mut self, statistic: OdsStatistic, value: &Value) {
        match statistic {
            OdsStatistic::Min => self.min = value.as_f64(),
            OdsStatistic::Max => self.max = value.as_f64(),
            OdsStatistic::Avg => self.avg = value.as_f64(),
            OdsStatistic::Sum => self.sum = value.as_f64(),
            OdsStatistic::Count => self.count = value.as_u64(),
        }
    }
}

/// Summary statistics for a temporal field, in epoch milliseconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OdsTemporalStats {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub count: Option<u64>,
}

impl OdsTemporalStats {
    /// Writes one statistic value from an aggregation response in place.
    ///
    /// Temporal fields only request min/max/count; avg and sum are ignored
    /// if a server volunteers them.
    pub fn set(&mut self, statistic: OdsStatistic, value: &Value) {
        match statistic {
            OdsStatistic::Min => self.min = value.as_i64(),
            OdsStatistic::Max => self.max = value.as_i64(),
            OdsStatistic::Count => self.count = value.as_u64(),
            OdsStatistic::Avg | OdsStatistic::Sum => {}
        }
    }

    /// Earliest value as a UTC datetime, when present and in range.
    pub fn min_datetime(&self) -> Option<DateTime<Utc>> {
        self.min.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// Latest value as a UTC datetime, when present and in range.
    pub fn max_datetime(&self) -> Option<DateTime<Utc>> {
        self.max.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

/// One distinct value of a categorical field together with its row count.
///
/// `value` is `None` for the null group, i.e. rows where the field is
/// missing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdsValueCount {
    pub value: Option<String>,
    pub count: u64,
}

/// Distinct-value table for a categorical field.
///
/// `values` keeps the server's response order; `total_count` always equals
/// the sum of the per-value counts and `unique_count` the number of
/// distinct values observed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OdsCategoricalStats {
    pub values: Vec<OdsValueCount>,
    pub total_count: u64,
    pub unique_count: usize,
}

impl OdsCategoricalStats {
    /// Appends one grouped-count row, maintaining the count invariants.
    pub fn push(&mut self, value: Option<String>, count: u64) {
        self.values.push(OdsValueCount { value, count });
        self.total_count += count;
        self.unique_count = self.values.len();
    }
}

/// Aggregate root holding every per-field record, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OdsOpenDataStatistics {
    pub numeric: HashMap<String, OdsNumericStats>,
    pub temporal: HashMap<String, OdsTemporalStats>,
    pub row_identifier: HashMap<String, OdsNumericStats>,
    pub categorical: HashMap<String, OdsCategoricalStats>,
}

impl OdsOpenDataStatistics {
    /// True when no field produced any record.
    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty()
            && self.temporal.is_empty()
            && self.row_identifier.is_empty()
            && self.categorical.is_empty()
    }

    /// Total number of per-field records across all buckets.
    pub fn field_count(&self) -> usize {
        self.numeric.len() + self.temporal.len() + self.row_identifier.len() + self.categorical.len()
    }

    /// Serializes the full output root as a JSON value.
    pub fn as_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Null)
    }
}
