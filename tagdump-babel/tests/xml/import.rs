//! XML → flattened value.

use crate::common::{dump, fixture, xml, yaml};
use tagdump_babel::formats::XmlFormat;
use tagdump_babel::{Format, FormatError, TokenStyle};

#[test]
fn test_feed_shorthand() {
    let root = xml(&fixture("feed.xml"));
    let value = dump(&root, TokenStyle::Shorthand);

    let expected = yaml(
        r#"
- rss:
    attribs: {version: "2.0"}
    subs:
    - channel:
        subs:
        - title: {text: Releases}
        - item:
            attribs: {id: "1"}
            subs:
            - title: {text: First}
            - link: {text: "https://example.org/1"}
        - item:
            attribs: {id: "2"}
            subs:
            - title: {text: Second}
"#,
    );
    assert_eq!(value, expected);
}

#[test]
fn test_feed_explicit_subs_counts() {
    let root = xml(&fixture("feed.xml"));
    let value = dump(&root, TokenStyle::Explicit);

    let channel = &value[0]["subs"][0];
    assert_eq!(channel["_name"], yaml("channel"));
    assert_eq!(channel["subs"].as_sequence().unwrap().len(), 3);
}

#[test]
fn test_cdata_is_text() {
    let root = xml("<script><![CDATA[ a < b ]]></script>");
    assert_eq!(
        dump(&root, TokenStyle::Shorthand),
        yaml("[{script: {text: a < b}}]")
    );
}

#[test]
fn test_namespaced_attribute_does_not_collide_with_local_one() {
    let root = xml(
        r#"<a xmlns:xlink="http://www.w3.org/1999/xlink" href="local" xlink:href="remote"/>"#,
    );
    assert_eq!(
        dump(&root, TokenStyle::Shorthand),
        yaml("[{a: {attribs: {href: local, 'xlink:href': remote}}}]")
    );
}

#[test]
fn test_malformed_xml_fails_before_the_walk() {
    let result = XmlFormat.parse("<a><b></a>");
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}
