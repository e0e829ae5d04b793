use zengarden_core::{filter_by_tag, Note, NoteIndex};

fn note(title: &str, tags: Option<&[&str]>) -> Note {
    Note::new(
        format!("/{}", title.to_lowercase()),
        title,
        "2021-06-01",
        format!("{title} excerpt"),
        tags.map(|tags| tags.iter().map(|tag| tag.to_string()).collect()),
    )
}

#[test]
fn filter_uses_set_membership_over_tag_lists() {
    let notes = vec![
        note("A", Some(&["x"])),
        note("B", Some(&["y"])),
        note("C", Some(&["x", "y"])),
    ];

    let x: Vec<&str> = filter_by_tag(&notes, "x")
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(x, vec!["A", "C"]);

    let y: Vec<&str> = filter_by_tag(&notes, "y")
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(y, vec!["B", "C"]);

    assert!(filter_by_tag(&notes, "z").is_empty());
}

#[test]
fn filter_preserves_relative_input_order() {
    let notes = vec![
        note("Newest", Some(&["x"])),
        note("Middle", Some(&["y"])),
        note("Oldest", Some(&["x"])),
    ];

    let titles: Vec<&str> = filter_by_tag(&notes, "x")
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Newest", "Oldest"]);
}

#[test]
fn notes_without_tags_are_excluded_from_every_result() {
    let notes = vec![
        note("Untagged", None),
        note("Empty", Some(&[])),
        note("Tagged", Some(&["x"])),
    ];

    let x: Vec<&str> = filter_by_tag(&notes, "x")
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(x, vec!["Tagged"]);
    // Tags the untagged note might "conceptually" carry still match nothing.
    assert!(filter_by_tag(&notes, "untagged").is_empty());
}

#[test]
fn filter_requires_exact_equality_not_prefix_or_substring() {
    let notes = vec![note("A", Some(&["cbias-notice-change"]))];
    assert_eq!(filter_by_tag(&notes, "cbias-notice-change").len(), 1);
    assert!(filter_by_tag(&notes, "cbias-notice").is_empty());
    assert!(filter_by_tag(&notes, "notice-change").is_empty());
    assert!(filter_by_tag(&notes, "CBIAS-NOTICE-CHANGE").is_empty());
}

#[test]
fn filter_is_pure_and_idempotent() {
    let notes = vec![note("A", Some(&["x"])), note("B", Some(&["y"]))];
    let snapshot = notes.clone();

    let first: Vec<String> = filter_by_tag(&notes, "x")
        .iter()
        .map(|n| n.title.clone())
        .collect();
    let second: Vec<String> = filter_by_tag(&notes, "x")
        .iter()
        .map(|n| n.title.clone())
        .collect();

    assert_eq!(first, second);
    assert_eq!(notes, snapshot);
}

#[test]
fn empty_index_yields_empty_output_for_every_tag() {
    let index = NoteIndex::new(Vec::new());
    for tag in ["x", "y", "cbias-memory-edit", ""] {
        assert!(index.filter_by_tag(tag).is_empty());
    }
}
