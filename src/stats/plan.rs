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

//! # Ods Batch Planner
//!
//! Statistic directives and batch planning for the aggregation pass. The
//! planner partitions batchable fields into contiguous, order-preserving
//! groups of at most `batch_size` fields; each field contributes a fixed
//! directive set (five statistics for numeric and row-identifier fields,
//! three for temporal fields).
//!
//! Batch size trades request count against query-expression size. The
//! planner assumes no server-side expression limit; tuning is left to the
//! caller and the default stays at one field per remote query.

use serde::{Deserialize, Serialize};

use super::classify::{OdsClassifiedField, OdsFieldCategory};
use crate::errors::{OdsError, Result};

/// Default number of fields per aggregation request.
pub const DEFAULT_BATCH_SIZE: usize = 1;

/// One of the five aggregate statistics the query endpoint computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OdsStatistic {
    Min,
    Max,
    Avg,
    Sum,
    Count,
}

impl OdsStatistic {
    /// Every statistic, in directive order.
    pub const ALL: [OdsStatistic; 5] = [
        OdsStatistic::Min,
        OdsStatistic::Max,
        OdsStatistic::Avg,
        OdsStatistic::Sum,
        OdsStatistic::Count,
    ];

    /// Wire name of the statistic.
    pub fn as_str(&self) -> &'static str {
        match self {
            OdsStatistic::Min => "min",
            OdsStatistic::Max => "max",
            OdsStatistic::Avg => "avg",
            OdsStatistic::Sum => "sum",
            OdsStatistic::Count => "count",
        }
    }

    /// Parses a statistic name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|statistic| statistic.as_str().eq_ignore_ascii_case(name))
    }
}

/// A request to compute one statistic over one field.
///
/// Serializes to the query endpoint's directive shape. The output alias is
/// always `"<field>_<statistic>"`; the merge step recovers the field and
/// statistic by parsing that alias, so the convention is load-bearing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdsStatDirective {
    #[serde(rename = "statisticType")]
    pub statistic: OdsStatistic,

    #[serde(rename = "onStatisticField")]
    pub source_field: String,

    #[serde(rename = "outStatisticFieldName")]
    pub output_alias: String,
}

impl OdsStatDirective {
    /// Builds a directive with the canonical `<field>_<statistic>` alias.
    pub fn new(statistic: OdsStatistic, source_field: impl Into<String>) -> Self {
        let source_field = source_field.into();
        let output_alias = format!("{}_{}", source_field, statistic.as_str());
        OdsStatDirective {
            statistic,
            source_field,
            output_alias,
        }
    }
}

/// A non-empty, contiguous group of classified fields requested together in
/// one remote call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdsBatch {
    pub fields: Vec<OdsClassifiedField>,
}

impl OdsBatch {
    /// Concatenated statistic directives for every field in the batch.
    pub fn directives(&self) -> Vec<OdsStatDirective> {
        self.fields
            .iter()
            .flat_map(|field| OdsBatchPlanner::directives_for(field))
            .collect()
    }
}

/// Partitions classified fields into fixed-size aggregation batches.
#[derive(Clone, Debug)]
pub struct OdsBatchPlanner {
    batch_size: usize,
}

impl OdsBatchPlanner {
    /// Creates a planner; `batch_size` must be at least 1.
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(OdsError::validation("batch size must be at least 1"));
        }
        Ok(OdsBatchPlanner { batch_size })
    }

    /// Configured batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Plans batches over the batchable fields of a classified schema.
    ///
    /// Categorical fields never enter the planner; they take the separate
    /// grouped-count pass. Unsupported fields are dropped. The surviving
    /// fields are chunked in schema order; every batch holds at most
    /// `batch_size` fields and only the final batch may be smaller.
    pub fn plan(&self, fields: &[OdsClassifiedField]) -> Vec<OdsBatch> {
        let batchable: Vec<OdsClassifiedField> = fields
            .iter()
            .filter(|field| field.category.is_batchable())
            .cloned()
            .collect();

        batchable
            .chunks(self.batch_size)
            .map(|chunk| OdsBatch {
                fields: chunk.to_vec(),
            })
            .collect()
    }

    /// Statistic directives for one classified field.
    ///
    /// Numeric and row-identifier fields request all five statistics;
    /// temporal fields request min/max/count only.
    pub fn directives_for(field: &OdsClassifiedField) -> Vec<OdsStatDirective> {
        let statistics: &[OdsStatistic] = match field.category {
            OdsFieldCategory::Numeric | OdsFieldCategory::RowIdentifier => &OdsStatistic::ALL,
            OdsFieldCategory::Temporal => {
                &[OdsStatistic::Min, OdsStatistic::Max, OdsStatistic::Count]
            }
            OdsFieldCategory::Categorical | OdsFieldCategory::Unsupported => &[],
        };

        statistics
            .iter()
            .map(|statistic| OdsStatDirective::new(*statistic, field.name()))
            .collect()
    }
}
