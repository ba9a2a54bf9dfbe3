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

//! # Ods Field Classification
//!
//! Maps raw schema type tags to statistic categories. Classification is a
//! pure, total function: every tag maps to exactly one category and
//! unrecognized tags map to [`OdsFieldCategory::Unsupported`]. The result
//! is carried through planning, querying, and merging as an explicit
//! tagged pair rather than re-derived downstream.

use serde::{Deserialize, Serialize};

use crate::schema::OdsFieldDescriptor;

/// Statistic category derived from a field's raw type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OdsFieldCategory {
    /// Integer and floating-point fields: min/max/avg/sum/count.
    Numeric,
    /// Date/time fields: min/max/count over epoch milliseconds.
    Temporal,
    /// The dataset's unique per-row identity column, numeric-like for
    /// aggregation purposes.
    RowIdentifier,
    /// String fields: distinct-value/count tables via grouped queries.
    Categorical,
    /// Everything else (geometry, blobs, ...); excluded from all output.
    Unsupported,
}

impl OdsFieldCategory {
    /// Classifies a raw schema type tag.
    pub fn from_raw_type(raw_type: &str) -> Self {
        match raw_type {
            "esriFieldTypeInteger"
            | "esriFieldTypeSmallInteger"
            | "esriFieldTypeDouble"
            | "esriFieldTypeSingle" => OdsFieldCategory::Numeric,
            "esriFieldTypeDate" => OdsFieldCategory::Temporal,
            "esriFieldTypeOID" => OdsFieldCategory::RowIdentifier,
            "esriFieldTypeString" => OdsFieldCategory::Categorical,
            _ => OdsFieldCategory::Unsupported,
        }
    }

    /// Whether fields of this category enter the batched aggregation pass.
    ///
    /// Categorical fields take the separate grouped-count pass and
    /// unsupported fields are omitted entirely.
    pub fn is_batchable(&self) -> bool {
        matches!(
            self,
            OdsFieldCategory::Numeric | OdsFieldCategory::Temporal | OdsFieldCategory::RowIdentifier
        )
    }
}

/// A field descriptor paired with its statistic category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdsClassifiedField {
    pub descriptor: OdsFieldDescriptor,
    pub category: OdsFieldCategory,
}

impl OdsClassifiedField {
    /// Classifies a single descriptor.
    pub fn new(descriptor: OdsFieldDescriptor) -> Self {
        let category = OdsFieldCategory::from_raw_type(&descriptor.raw_type);
        OdsClassifiedField {
            descriptor,
            category,
        }
    }

    /// Field name shorthand.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Classifies every field of a schema, preserving schema order.
pub fn classify_fields(fields: &[OdsFieldDescriptor]) -> Vec<OdsClassifiedField> {
    fields
        .iter()
        .cloned()
        .map(OdsClassifiedField::new)
        .collect()
}
