use xml_compare::{assert_equal, assert_equal_str, parse_str, AssertionError, CompareOptions};

#[test]
fn equivalent_documents_pass() {
    let result = assert_equal_str(
        "<person><name>Sir Galahad</name></person>",
        "<person><name>\n    Sir Galahad\n</name></person>",
        &CompareOptions::default(),
    );
    assert!(result.is_ok());
}

#[test]
fn mismatch_carries_the_joined_diff_as_its_message() {
    let err = assert_equal_str("<x/>", "<y/>", &CompareOptions::default())
        .expect_err("documents should differ");

    let AssertionError::Mismatch(report) = &err else {
        panic!("expected a mismatch, got {err:?}");
    };
    assert_eq!(report.lines, vec!["<x (- y)></x (- y)>"]);

    let message = err.to_string();
    assert!(message.starts_with("XML documents differ:"));
    assert!(message.contains("<x (- y)>"));
}

#[test]
fn parse_failures_propagate_unmodified() {
    let err = assert_equal_str("<a>", "<a/>", &CompareOptions::default())
        .expect_err("left input is malformed");
    assert!(matches!(err, AssertionError::Parse(_)));
}

#[test]
fn tree_entry_point_honors_wildcard_mode() {
    let x = parse_str("<section>...</section>").expect("parse");
    let y = parse_str("<section>intro<p>one</p></section>").expect("parse");

    let wildcard = CompareOptions {
        wildcard: true,
        ..CompareOptions::default()
    };
    assert!(assert_equal(&x, &y, &wildcard).is_ok());
    assert!(assert_equal(&x, &y, &CompareOptions::default()).is_err());
}

#[test]
fn report_serializes_to_json() {
    let err = assert_equal_str(
        r#"<x k="1"/>"#,
        r#"<x k="2"/>"#,
        &CompareOptions::default(),
    )
    .expect_err("documents should differ");

    let AssertionError::Mismatch(report) = err else {
        panic!("expected a mismatch");
    };
    let json = report.to_json();
    assert!(json.contains("\"left\""));
    assert!(json.contains("\"right\""));
    assert!(json.contains("\"lines\""));
    assert!(json.contains("k=\\\"1 (- 2)\\\""));
}
