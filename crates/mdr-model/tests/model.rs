//! Tests for mdr-model types.

use mdr_model::columns::{REPORT_COLUMNS, REPOSITORY_REQUIRED};
use mdr_model::{BuildItem, CompareConfig, MissingField, MissingKind, RequiredPair};

#[test]
fn mandatory_description_matches_report_wording() {
    let field = MissingField::new(RequiredPair {
        form_id: "AE001_1".to_string(),
        item_name: "AESTDAT".to_string(),
        guidance: Some("Collect start date".to_string()),
        conditionally_required: false,
    });
    assert_eq!(field.form_name, "AE001_1");
    assert_eq!(field.item_name, "AESTDAT");
    assert_eq!(field.kind, MissingKind::Mandatory);
    assert_eq!(
        field.description,
        "AESTDAT is marked as Mandatory in the MDR Repository; however, it is not being collected in AE001_1."
    );
    assert_eq!(field.context.as_deref(), Some("Collect start date"));
}

#[test]
fn required_pairs_order_by_form_then_item() {
    let pair = |form: &str, item: &str| RequiredPair {
        form_id: form.to_string(),
        item_name: item.to_string(),
        guidance: None,
        conditionally_required: false,
    };
    let mut pairs = vec![pair("DM001_1", "SEX"), pair("DM001", "SEX"), pair("DM001", "AGE")];
    pairs.sort();
    let keys: Vec<_> = pairs.iter().map(RequiredPair::key).collect();
    assert_eq!(
        keys,
        vec![("DM001", "AGE"), ("DM001", "SEX"), ("DM001_1", "SEX")]
    );
}

#[test]
fn build_item_resolution() {
    let mut item = BuildItem {
        form_path: "AE001_1 >> Adverse Events".to_string(),
        form_id: "AE001_1".to_string(),
        variable_name: "AETERM".to_string(),
        matched_form_name: Some("AE001".to_string()),
        matched_item_name: None,
    };
    assert!(!item.is_resolved());
    item.matched_item_name = Some("AETERM".to_string());
    assert!(item.is_resolved());
}

#[test]
fn column_sets() {
    assert_eq!(
        REPORT_COLUMNS,
        ["Form Name", "Item", "Type", "Description", "Context"]
    );
    assert!(REPOSITORY_REQUIRED.contains(&"mde_is_cond_reqd"));
}

#[test]
fn config_serializes() {
    let config = CompareConfig::new()
        .with_volume_marker("Volume 2")
        .with_libraries(["Core"])
        .with_path_delimiter("/");
    let json = serde_json::to_string(&config).expect("serialize config");
    let round: CompareConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(round, config);
}
