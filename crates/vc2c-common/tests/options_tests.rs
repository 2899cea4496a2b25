//! Tests for converter options and import aggregation

use vc2c_common::{ConvertOptions, ImportRequest, ImportSet};

#[test]
fn test_default_options() {
    let options = ConvertOptions::default();
    assert_eq!(options.setup_props_key, "props");
    assert_eq!(options.setup_context_key, "context");
    assert!(!options.compatible);
    assert_eq!(options.reactive_module(), "vue");
}

#[test]
fn test_options_from_partial_json() {
    let options = ConvertOptions::from_json(r#"{ "compatible": true }"#)
        .expect("partial options should parse");
    assert!(options.compatible);
    assert_eq!(options.setup_props_key, "props");
    assert_eq!(options.reactive_module(), "@vue/composition-api");
}

#[test]
fn test_options_camel_case_keys() {
    let options =
        ConvertOptions::from_json(r#"{ "setupPropsKey": "p", "setupContextKey": "ctx" }"#)
            .expect("options should parse");
    assert_eq!(options.setup_props_key, "p");
    assert_eq!(options.setup_context_key, "ctx");
}

#[test]
fn test_options_reject_invalid_identifier() {
    let err = ConvertOptions::from_json(r#"{ "setupPropsKey": "1props" }"#)
        .expect_err("non-identifier key must be rejected");
    assert!(err.to_string().contains("setupPropsKey"), "{err}");
}

#[test]
fn test_options_reject_same_receivers() {
    let err = ConvertOptions::from_json(r#"{ "setupPropsKey": "x", "setupContextKey": "x" }"#)
        .expect_err("identical receivers must be rejected");
    assert!(err.to_string().contains("must differ"), "{err}");
}

#[test]
fn test_options_reject_malformed_json() {
    let err = ConvertOptions::from_json("{ compatible: ").expect_err("malformed json");
    assert!(err.to_string().contains("failed to parse converter options"));
}

#[test]
fn test_import_set_dedupes_per_module() {
    let mut imports = ImportSet::new();
    imports.add(&ImportRequest::single("computed", "vue"));
    imports.add(&ImportRequest::new(["watch", "computed"], "vue"));
    imports.add(&ImportRequest::single("ref", "@vue/composition-api"));

    assert!(imports.contains("vue", "watch"));
    let decls = imports.into_decls();
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].module, "vue");
    assert_eq!(decls[0].named, vec!["computed", "watch"]);
    assert_eq!(decls[1].named, vec!["ref"]);
}

#[test]
fn test_import_set_ignores_empty_requests() {
    let mut imports = ImportSet::new();
    imports.add(&ImportRequest::new(Vec::<String>::new(), "vue"));
    assert!(imports.is_empty());
    assert!(imports.into_decls().is_empty());
}
