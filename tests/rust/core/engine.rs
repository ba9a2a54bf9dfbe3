//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ods.
//! The Ods project belongs to the Dunimd Team.

use std::cell::RefCell;

use odsx::{OdsError, OdsJsonFetch, OdsStatisticsEngine, Result};
use serde_json::{json, Value};

const DATASET_URL: &str = "https://host.example/OpenData/FeatureServer/0";

/// In-memory OpenData endpoint with one numeric, one temporal, one
/// row-identifier, and one categorical field.
struct FakeOpenData {
    requests: RefCell<Vec<String>>,
}

impl FakeOpenData {
    fn new() -> Self {
        FakeOpenData {
            requests: RefCell::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl OdsJsonFetch for FakeOpenData {
    fn get_json(&self, url: &str) -> Result<Value> {
        self.requests.borrow_mut().push(url.to_string());

        if !url.contains("/query") {
            return Ok(json!({
                "fields": [
                    { "name": "AGE", "type": "esriFieldTypeInteger" },
                    { "name": "UPDATED", "type": "esriFieldTypeDate" },
                    { "name": "OBJECTID", "type": "esriFieldTypeOID" },
                    { "name": "STATE", "type": "esriFieldTypeString" },
                    { "name": "SHAPE", "type": "esriFieldTypeGeometry" },
                ]
            }));
        }

        if url.contains("groupByFieldsForStatistics=STATE") {
            return Ok(json!({
                "features": [
                    { "attributes": { "STATE": "CA", "ods_value_count": 3 } },
                    { "attributes": { "STATE": "NY", "ods_value_count": 2 } },
                    { "attributes": { "STATE": null, "ods_value_count": 1 } },
                ]
            }));
        }

        if url.contains("AGE") {
            return Ok(json!({
                "features": [{
                    "attributes": {
                        "AGE_min": 18, "AGE_max": 95, "AGE_avg": 44.5,
                        "AGE_sum": 267, "AGE_count": 6,
                    }
                }]
            }));
        }

        if url.contains("UPDATED") {
            return Ok(json!({
                "features": [{
                    "attributes": {
                        "UPDATED_min": 1_546_300_800_000_i64,
                        "UPDATED_max": 1_609_459_199_000_i64,
                        "UPDATED_count": 6,
                    }
                }]
            }));
        }

        if url.contains("OBJECTID") {
            return Ok(json!({
                "features": [{
                    "attributes": {
                        "OBJECTID_min": 1, "OBJECTID_max": 6, "OBJECTID_avg": 3.5,
                        "OBJECTID_sum": 21, "OBJECTID_count": 6,
                    }
                }]
            }));
        }

        Ok(json!({ "features": [] }))
    }
}

/// Endpoint whose schema call fails with a non-success status.
struct BrokenEndpoint;

impl OdsJsonFetch for BrokenEndpoint {
    fn get_json(&self, url: &str) -> Result<Value> {
        Err(OdsError::transport(503, url))
    }
}

#[test]
fn test_end_to_end_statistics_run() {
    let endpoint = FakeOpenData::new();
    let engine = OdsStatisticsEngine::new(&endpoint);

    let stats = engine.compute(DATASET_URL).unwrap();

    // 1 schema call + 3 non-categorical batches (batch size 1) + 1 grouped
    // query for STATE.
    assert_eq!(endpoint.request_count(), 5);

    let age = stats.numeric.get("AGE").unwrap();
    assert_eq!(age.min, Some(18.0));
    assert_eq!(age.max, Some(95.0));
    assert_eq!(age.avg, Some(44.5));
    assert_eq!(age.sum, Some(267.0));
    assert_eq!(age.count, Some(6));

    let updated = stats.temporal.get("UPDATED").unwrap();
    assert_eq!(updated.min, Some(1_546_300_800_000));
    assert_eq!(updated.max, Some(1_609_459_199_000));
    assert_eq!(updated.count, Some(6));

    let oid = stats.row_identifier.get("OBJECTID").unwrap();
    assert_eq!(oid.min, Some(1.0));
    assert_eq!(oid.count, Some(6));

    let state = stats.categorical.get("STATE").unwrap();
    assert_eq!(state.total_count, 6);
    assert_eq!(state.unique_count, 3);

    // The geometry field is silently omitted from every bucket.
    assert_eq!(stats.field_count(), 4);
}

#[test]
fn test_runs_are_idempotent_against_an_unchanged_dataset() {
    let endpoint = FakeOpenData::new();
    let engine = OdsStatisticsEngine::new(&endpoint);

    let first = engine.compute(DATASET_URL).unwrap();
    let second = engine.compute(DATASET_URL).unwrap();

    assert_eq!(first, second);
    assert_eq!(endpoint.request_count(), 10);
}

#[test]
fn test_schema_failure_aborts_with_transport_error() {
    let engine = OdsStatisticsEngine::new(&BrokenEndpoint);

    let err = engine.compute(DATASET_URL).unwrap_err();
    match err {
        OdsError::Transport { status, url } => {
            assert_eq!(status, 503);
            assert!(url.starts_with(DATASET_URL));
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}
