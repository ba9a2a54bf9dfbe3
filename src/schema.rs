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

//! # Ods Schema Module
//!
//! Field descriptors and the schema source collaborator. The engine only
//! needs the dataset's field list; fetching is a single metadata request
//! (`{dataset_url}?f=json`) whose `fields` array describes every column.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::OdsJsonFetch;
use crate::errors::{OdsError, Result};

/// A named, typed column in the remote dataset's schema.
///
/// Supplied by the remote schema endpoint and never mutated afterwards.
/// `raw_type` carries the server's type tag verbatim (for example
/// `esriFieldTypeInteger`); classification into statistic categories
/// happens downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdsFieldDescriptor {
    /// Field name as reported by the schema.
    pub name: String,

    /// Raw type tag as reported by the schema.
    #[serde(rename = "type")]
    pub raw_type: String,
}

impl OdsFieldDescriptor {
    /// Creates a descriptor from a name and raw type tag.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        OdsFieldDescriptor {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}

/// Builds the metadata URL for a dataset layer.
pub fn schema_url(dataset_url: &str) -> Result<String> {
    let base = dataset_url.trim_end_matches('/');
    let url = Url::parse_with_params(base, &[("f", "json")])
        .map_err(|e| OdsError::validation(format!("invalid dataset url '{}': {}", dataset_url, e)))?;
    Ok(url.into())
}

/// Fetches the dataset's field list from its metadata endpoint.
///
/// A response without a `fields` array, or with field entries missing the
/// `name`/`type` keys, is a schema error. Transport failures propagate from
/// the client untouched.
pub fn fetch_schema<C: OdsJsonFetch>(client: &C, dataset_url: &str) -> Result<Vec<OdsFieldDescriptor>> {
    let url = schema_url(dataset_url)?;
    let json = client.get_json(&url)?;

    let fields = json
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| OdsError::schema(format!("response from {} has no 'fields' array", url)))?;

    fields
        .iter()
        .map(|entry| {
            serde_json::from_value(entry.clone())
                .map_err(|e| OdsError::schema(format!("malformed field entry in {}: {}", url, e)))
        })
        .collect()
}
