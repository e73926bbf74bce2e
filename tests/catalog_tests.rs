use snippetrun::catalog::{Catalog, CatalogError, Snippet};

fn writes(id: &str, text: &'static str) -> Snippet {
    Snippet::new(id, move |out| {
        out.line(text);
        Ok(None)
    })
}

#[test]
fn test_register_preserves_insertion_order() {
    let ids = ["zeta", "alpha", "scoping/var-leak", "mid", "beta"];
    let mut builder = Catalog::builder();
    for id in ids {
        builder.register(writes(id, "x")).expect("unique id");
    }

    let catalog = builder.freeze();
    let listed: Vec<&str> = catalog.all().iter().map(|s| s.id()).collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_duplicate_id_rejected_without_mutation() {
    let mut builder = Catalog::builder();
    builder.register(writes("a", "first")).unwrap();
    builder.register(writes("b", "second")).unwrap();

    let err = builder.register(writes("a", "again")).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
    assert_eq!(err.to_string(), "duplicate snippet id: a");
    assert_eq!(builder.len(), 2);

    let catalog = builder.freeze();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_registration_continues_after_duplicate() {
    let mut builder = Catalog::builder();
    builder.register(writes("a", "1")).unwrap();
    assert!(builder.register(writes("a", "2")).is_err());
    builder.register(writes("c", "3")).unwrap();

    let catalog = builder.freeze();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn test_frozen_catalog_clone_shares_content() {
    let mut builder = Catalog::builder();
    builder.register(writes("only", "x")).unwrap();
    let catalog = builder.freeze();
    let copy = catalog.clone();

    assert_eq!(catalog.len(), copy.len());
    assert_eq!(copy.all()[0].id(), "only");
}

#[test]
fn test_builtin_lessons_have_unique_ids() {
    let catalog = snippetrun::lessons::catalog().expect("built-in catalog");
    let mut ids: Vec<&str> = catalog.ids().collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_empty_id_rejected() {
    let mut builder = Catalog::builder();
    assert_eq!(
        builder.register(writes("", "x")).unwrap_err(),
        CatalogError::EmptyId
    );
    assert!(builder.is_empty());
}

#[test]
fn test_filtered_and_get() {
    let mut builder = Catalog::builder();
    for id in ["spread/concat", "scoping/shadow", "spread/clone"] {
        builder.register(writes(id, "x")).unwrap();
    }
    let catalog = builder.freeze();

    let spread = catalog.filtered("spread/");
    assert_eq!(
        spread.ids().collect::<Vec<_>>(),
        vec!["spread/concat", "spread/clone"]
    );
    assert!(catalog.get("scoping/shadow").is_some());
    assert!(catalog.get("missing").is_none());
    assert!(catalog.filtered("nothing").is_empty());
}

#[test]
fn test_control_characters_in_id_rejected() {
    let mut builder = Catalog::builder();
    builder.register(writes("A", "x")).unwrap();

    for id in ["B\nforged", "tab\there", "bell\u{7}"] {
        let err = builder.register(writes(id, "x")).unwrap_err();
        assert_eq!(err, CatalogError::ControlCharacters(id.to_string()));
    }

    assert_eq!(builder.len(), 1);
    assert_eq!(
        CatalogError::ControlCharacters("B\nforged".into()).to_string(),
        "snippet id contains control characters: \"B\\nforged\""
    );
}
