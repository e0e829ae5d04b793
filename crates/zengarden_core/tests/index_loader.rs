use zengarden_core::{load_index_from_json, LoaderError};

const EXPORT: &str = r#"[
    {
        "excerpt": "We favor what we already believe",
        "fields": {
            "slug": "/confirmation-bias",
            "title": "Confirmation Bias",
            "date": "2021-03-14",
            "visibility": "public"
        },
        "frontmatter": {
            "tags": ["cbias-notice-confirmation", "psychology"]
        }
    },
    {
        "excerpt": "A private draft",
        "fields": {
            "slug": "/draft",
            "title": "Draft",
            "date": "2021-03-15",
            "visibility": "private"
        },
        "frontmatter": {
            "tags": ["psychology"]
        }
    },
    {
        "excerpt": "No frontmatter at all",
        "fields": {
            "slug": "/plain",
            "title": "Plain",
            "date": "2021-03-16"
        }
    }
]"#;

#[test]
fn loads_the_nested_pipeline_export_shape() {
    let index = load_index_from_json(EXPORT).expect("export should load");
    let notes = index.notes();

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].slug, "/confirmation-bias");
    assert_eq!(notes[0].title, "Confirmation Bias");
    assert_eq!(notes[0].date, "2021-03-14");
    assert_eq!(notes[0].excerpt, "We favor what we already believe");
    assert_eq!(
        notes[0].tags.as_deref(),
        Some(&["cbias-notice-confirmation".to_string(), "psychology".to_string()][..])
    );
}

#[test]
fn non_public_records_never_reach_the_index() {
    let index = load_index_from_json(EXPORT).expect("export should load");
    assert!(index.notes().iter().all(|note| note.slug != "/draft"));
    // A record without the visibility field is trusted as pre-filtered.
    assert!(index.notes().iter().any(|note| note.slug == "/plain"));
}

#[test]
fn absent_frontmatter_loads_as_no_tags() {
    let index = load_index_from_json(EXPORT).expect("export should load");
    let plain = index
        .notes()
        .iter()
        .find(|note| note.slug == "/plain")
        .expect("plain note should load");

    assert_eq!(plain.tags, None);
    assert!(index.filter_by_tag("psychology").iter().all(|n| n.slug != "/plain"));
}

#[test]
fn missing_excerpt_is_derived_from_the_raw_body() {
    let export = r##"[
        {
            "rawMarkdownBody": "# Anchoring\n\nThe **first** number we see sticks.",
            "fields": {
                "slug": "/anchoring",
                "title": "Anchoring",
                "date": "2021-04-01",
                "visibility": "public"
            },
            "frontmatter": { "tags": ["cbias-meaning-from-little-data"] }
        }
    ]"##;

    let index = load_index_from_json(export).expect("export should load");
    let excerpt = index.notes()[0].excerpt.as_str();
    assert!(excerpt.contains("Anchoring"));
    assert!(excerpt.contains("first number we see sticks"));
    assert!(!excerpt.contains('#'));
    assert!(!excerpt.contains('*'));
}

#[test]
fn record_without_excerpt_or_body_loads_with_empty_excerpt() {
    let export = r#"[
        {
            "fields": {
                "slug": "/bare",
                "title": "Bare",
                "date": "2021-04-02"
            }
        }
    ]"#;

    let index = load_index_from_json(export).expect("export should load");
    assert_eq!(index.notes()[0].excerpt, "");
}

#[test]
fn invalid_records_fail_the_load_with_their_position() {
    let export = r#"[
        {
            "excerpt": "ok",
            "fields": { "slug": "/ok", "title": "Ok", "date": "2021-05-01" }
        },
        {
            "excerpt": "broken",
            "fields": { "slug": "relative-slug", "title": "Broken", "date": "2021-05-02" }
        }
    ]"#;

    let err = load_index_from_json(export).expect_err("relative slug should fail");
    match err {
        LoaderError::InvalidRecord { position, .. } => assert_eq!(position, 1),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_a_load_error() {
    assert!(matches!(
        load_index_from_json("{not json"),
        Err(LoaderError::Json(_))
    ));
    assert!(matches!(
        load_index_from_json(r#"[{"fields": {}}]"#),
        Err(LoaderError::Json(_))
    ));
}

#[test]
fn empty_export_loads_an_empty_index() {
    let index = load_index_from_json("[]").expect("empty export should load");
    assert!(index.is_empty());
}
