use findmod::{Collation, FindOneAndUpdateOptions, Order, ReturnDocument, SortSpec};

#[test]
fn defaults_are_all_unset() {
    let opts = FindOneAndUpdateOptions::new();
    assert!(opts.sort.is_none());
    assert!(opts.projection.is_none());
    assert!(opts.collation.is_none());
    assert_eq!(opts.return_document, ReturnDocument::Before);
    assert!(!opts.upsert);
    assert_eq!(opts, FindOneAndUpdateOptions::default());
}

#[test]
fn builder_chain_sets_each_field() {
    let opts = FindOneAndUpdateOptions::new()
        .with_sort(vec![SortSpec { field: "age".into(), order: Order::Desc }])
        .with_projection(vec!["name".into(), "age".into()])
        .with_collation(Collation::new("en"))
        .with_return_document(ReturnDocument::After)
        .with_upsert(true);
    assert_eq!(opts.sort.as_ref().unwrap().len(), 1);
    assert_eq!(opts.sort.as_ref().unwrap()[0].order, Order::Desc);
    assert_eq!(opts.projection.as_deref(), Some(&["name".to_string(), "age".to_string()][..]));
    assert_eq!(opts.collation.as_ref().unwrap().locale, "en");
    assert_eq!(opts.return_document, ReturnDocument::After);
    assert!(opts.upsert);
}

#[test]
fn collation_toggles_default_off() {
    let collation = Collation::new("fr");
    assert_eq!(collation.locale, "fr");
    assert!(!collation.case_insensitive);
    assert!(!collation.numeric_ordering);
}

#[test]
fn partial_json_fills_defaults() {
    let opts: FindOneAndUpdateOptions = serde_json::from_str(r#"{"upsert": true}"#).unwrap();
    assert!(opts.upsert);
    assert_eq!(opts.return_document, ReturnDocument::Before);
    assert!(opts.sort.is_none());
    assert!(opts.projection.is_none());
    assert!(opts.collation.is_none());
}

#[test]
fn sort_and_return_document_from_json() {
    let opts: FindOneAndUpdateOptions = serde_json::from_str(
        r#"{"sort": [{"field": "age", "order": "Asc"}], "return_document": "After"}"#,
    )
    .unwrap();
    assert_eq!(
        opts.sort.as_deref(),
        Some(&[SortSpec { field: "age".into(), order: Order::Asc }][..])
    );
    assert_eq!(opts.return_document, ReturnDocument::After);
}
