//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ods.
//! The Ods project belongs to the Dunimd Team.

use odsx::{
    OdsBatchPlanner, OdsClassifiedField, OdsFieldDescriptor, OdsStatDirective, OdsStatistic,
};
use proptest::prelude::*;

fn numeric_field(name: impl Into<String>) -> OdsClassifiedField {
    OdsClassifiedField::new(OdsFieldDescriptor::new(name, "esriFieldTypeInteger"))
}

#[test]
fn test_directive_sets_per_category() {
    let numeric = numeric_field("POP");
    let oid = OdsClassifiedField::new(OdsFieldDescriptor::new("OBJECTID", "esriFieldTypeOID"));
    let temporal = OdsClassifiedField::new(OdsFieldDescriptor::new("UPDATED", "esriFieldTypeDate"));

    let directives = OdsBatchPlanner::directives_for(&numeric);
    let aliases: Vec<&str> = directives.iter().map(|d| d.output_alias.as_str()).collect();
    assert_eq!(
        aliases,
        vec!["POP_min", "POP_max", "POP_avg", "POP_sum", "POP_count"]
    );

    assert_eq!(OdsBatchPlanner::directives_for(&oid).len(), 5);

    let directives = OdsBatchPlanner::directives_for(&temporal);
    let aliases: Vec<&str> = directives.iter().map(|d| d.output_alias.as_str()).collect();
    assert_eq!(aliases, vec!["UPDATED_min", "UPDATED_max", "UPDATED_count"]);
}

#[test]
fn test_directive_alias_convention() {
    let directive = OdsStatDirective::new(OdsStatistic::Sum, "INCOME");
    assert_eq!(directive.output_alias, "INCOME_sum");
}

#[test]
fn test_zero_batch_size_is_rejected() {
    assert!(OdsBatchPlanner::new(0).is_err());
    assert!(OdsBatchPlanner::new(1).is_ok());
}

#[test]
fn test_categorical_fields_never_enter_batches() {
    let fields = vec![
        numeric_field("A"),
        OdsClassifiedField::new(OdsFieldDescriptor::new("STATE", "esriFieldTypeString")),
        numeric_field("B"),
    ];
    let planner = OdsBatchPlanner::new(10).unwrap();
    let batches = planner.plan(&fields);
    assert_eq!(batches.len(), 1);
    let names: Vec<&str> = batches[0].fields.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

proptest! {
    #[test]
    fn batches_partition_the_input_exactly(
        count in 1usize..40,
        batch_size in 1usize..10,
    ) {
        let fields: Vec<OdsClassifiedField> =
            (0..count).map(|i| numeric_field(format!("F{}", i))).collect();
        let planner = OdsBatchPlanner::new(batch_size).unwrap();
        let batches = planner.plan(&fields);

        // Concatenation equals the input sequence exactly.
        let flattened: Vec<OdsClassifiedField> = batches
            .iter()
            .flat_map(|batch| batch.fields.iter().cloned())
            .collect();
        prop_assert_eq!(&flattened, &fields);

        // Every batch is non-empty and within the limit; only the final
        // batch may be smaller.
        for (index, batch) in batches.iter().enumerate() {
            prop_assert!(!batch.fields.is_empty());
            prop_assert!(batch.fields.len() <= batch_size);
            if index + 1 < batches.len() {
                prop_assert_eq!(batch.fields.len(), batch_size);
            }
        }
    }
}
