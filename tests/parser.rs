use xml_compare::{parse, parse_file, parse_str, ParseError, TagName};

#[test]
fn parses_attributes_empty_and_nested_elements() {
    let xml = br#"<config version="2"><settings><enabled>true</enabled></settings><item id="1"/></config>"#;
    let node = parse(xml).expect("parse should succeed");
    assert_eq!(node.tag, TagName::Element("config".to_string()));
    assert_eq!(node.attributes.get("version"), Some(&"2".to_string()));

    let settings = node.get_child("settings").expect("settings should exist");
    let enabled = settings.get_child("enabled").expect("enabled should exist");
    assert_eq!(enabled.text.as_deref(), Some("true"));

    let item = node.get_child("item").expect("item should exist");
    assert_eq!(item.attributes.get("id"), Some(&"1".to_string()));
}

#[test]
fn captures_text_and_tails_in_document_order() {
    let node = parse_str("<a>start<b/>middle<c/>end</a>").expect("parse should succeed");
    assert_eq!(node.text.as_deref(), Some("start"));
    assert_eq!(node.children[0].tail.as_deref(), Some("middle"));
    assert_eq!(node.children[1].tail.as_deref(), Some("end"));
    assert_eq!(node.tail, None);
}

#[test]
fn blank_text_runs_are_dropped() {
    let node = parse_str("<a>\n    <b/>\n</a>").expect("parse should succeed");
    assert_eq!(node.text, None);
    assert_eq!(node.children[0].tail, None);
}

#[test]
fn captures_comment_nodes_in_child_order() {
    let node = parse_str("<a><!-- a note --><b/></a>").expect("parse should succeed");
    assert!(node.children[0].is_comment());
    assert_eq!(node.children[0].text.as_deref(), Some(" a note "));
    assert_eq!(node.children[1].tag, TagName::Element("b".to_string()));
}

#[test]
fn decodes_entities_and_cdata() {
    let node = parse_str("<a>1 &lt; 2</a>").expect("parse should succeed");
    assert_eq!(node.text.as_deref(), Some("1 < 2"));

    let node = parse_str("<a><![CDATA[raw <markup> kept]]></a>").expect("parse should succeed");
    assert_eq!(node.text.as_deref(), Some("raw <markup> kept"));
}

#[test]
fn rejects_multiple_top_level_elements() {
    let err = parse_str("<a/><b/>").expect_err("parse should fail");
    assert!(matches!(err, ParseError::Malformed(_)));
}

#[test]
fn rejects_empty_and_unclosed_documents() {
    assert!(parse_str("").is_err());
    assert!(parse_str("<a><b>").is_err());
    assert!(parse_str("<a><b></a>").is_err());
}

#[test]
fn parse_file_reads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("doc.xml");
    std::fs::write(&path, "<root><child>value</child></root>").expect("write should succeed");

    let node = parse_file(&path).expect("parse_file should succeed");
    assert_eq!(node.tag, TagName::Element("root".to_string()));
    assert_eq!(
        node.get_child("child").and_then(|c| c.text.as_deref()),
        Some("value")
    );
}
