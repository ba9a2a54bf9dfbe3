//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ods.
//! The Ods project belongs to the Dunimd Team.

use odsx::{classify_fields, OdsFieldCategory, OdsFieldDescriptor};

#[test]
fn test_recognized_type_tags() {
    assert_eq!(
        OdsFieldCategory::from_raw_type("esriFieldTypeInteger"),
        OdsFieldCategory::Numeric
    );
    assert_eq!(
        OdsFieldCategory::from_raw_type("esriFieldTypeSmallInteger"),
        OdsFieldCategory::Numeric
    );
    assert_eq!(
        OdsFieldCategory::from_raw_type("esriFieldTypeDouble"),
        OdsFieldCategory::Numeric
    );
    assert_eq!(
        OdsFieldCategory::from_raw_type("esriFieldTypeSingle"),
        OdsFieldCategory::Numeric
    );
    assert_eq!(
        OdsFieldCategory::from_raw_type("esriFieldTypeDate"),
        OdsFieldCategory::Temporal
    );
    assert_eq!(
        OdsFieldCategory::from_raw_type("esriFieldTypeOID"),
        OdsFieldCategory::RowIdentifier
    );
    assert_eq!(
        OdsFieldCategory::from_raw_type("esriFieldTypeString"),
        OdsFieldCategory::Categorical
    );
}

#[test]
fn test_unrecognized_type_tags_are_unsupported() {
    for tag in [
        "esriFieldTypeGeometry",
        "esriFieldTypeBlob",
        "esriFieldTypeRaster",
        "esriFieldTypeGUID",
        "varchar",
        "",
    ] {
        assert_eq!(
            OdsFieldCategory::from_raw_type(tag),
            OdsFieldCategory::Unsupported,
            "tag {:?}",
            tag
        );
    }
}

#[test]
fn test_every_field_lands_in_exactly_one_category() {
    let fields = vec![
        OdsFieldDescriptor::new("OBJECTID", "esriFieldTypeOID"),
        OdsFieldDescriptor::new("AGE", "esriFieldTypeInteger"),
        OdsFieldDescriptor::new("UPDATED", "esriFieldTypeDate"),
        OdsFieldDescriptor::new("STATE", "esriFieldTypeString"),
        OdsFieldDescriptor::new("SHAPE", "esriFieldTypeGeometry"),
    ];
    let classified = classify_fields(&fields);
    assert_eq!(classified.len(), fields.len());
    for (descriptor, field) in fields.iter().zip(&classified) {
        assert_eq!(&field.descriptor, descriptor);
        assert_eq!(
            field.category,
            OdsFieldCategory::from_raw_type(&descriptor.raw_type)
        );
    }
}
