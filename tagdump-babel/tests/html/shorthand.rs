//! Shorthand dumps of HTML input (the default strategy).

use crate::common::{dump, fixture, html, to_json, yaml};
use insta::assert_snapshot;
use tagdump_babel::formats::HtmlMode;
use tagdump_babel::TokenStyle;

#[test]
fn test_kitchensink_structure() {
    let root = html(&fixture("kitchensink.html"), HtmlMode::Document);
    let value = dump(&root, TokenStyle::Shorthand);

    let expected = yaml(
        r#"
- html:
    attribs: {lang: en}
    subs:
    - head:
        subs:
        - title: {text: Sample}
    - body:
        subs:
        - ul:
            attribs: {class: nav}
            subs:
            - li:
                subs:
                - a: {text: Home, attribs: {href: /}}
            - li:
                subs:
                - a: {text: About, attribs: {href: /about, title: About us}}
        - p:
            text: last
            subs:
            - em: {text: emphasis}
        - img:
            attribs: {src: x.png, alt: logo}
"#,
    );
    assert_eq!(value, expected);
}

#[test]
fn test_key_order() {
    let root = html(
        r#"<a href="/" class="home">Home <b>page</b></a>"#,
        HtmlMode::Fragment,
    );
    let json = to_json(&dump(&root, TokenStyle::Shorthand));

    assert_snapshot!(json, @r#"
    [
      {
        "a": {
          "text": "Home",
          "attribs": {
            "href": "/",
            "class": "home"
          },
          "subs": [
            {
              "b": {
                "text": "page"
              }
            }
          ]
        }
      }
    ]
    "#);
}

#[test]
fn test_top_level_siblings_form_a_sequence() {
    let root = html("<a/><b/>", HtmlMode::Source);
    assert_eq!(dump(&root, TokenStyle::Shorthand), yaml("[{a: {}}, {b: {}}]"));
}

#[test]
fn test_last_text_wins() {
    let root = html("<p>A<b/>B</p>", HtmlMode::Source);
    assert_eq!(
        dump(&root, TokenStyle::Shorthand),
        yaml("[{p: {text: B, subs: [{b: {}}]}}]")
    );
}

#[test]
fn test_source_mode_adds_no_wrappers() {
    let root = html("<p>x</p>", HtmlMode::Source);
    assert_eq!(dump(&root, TokenStyle::Shorthand), yaml("[{p: {text: x}}]"));
}

#[test]
fn test_source_mode_keeps_misnesting() {
    let root = html("<ul><li>one<li>two</ul>", HtmlMode::Source);
    assert_eq!(
        dump(&root, TokenStyle::Shorthand),
        yaml("[{ul: {subs: [{li: {text: one, subs: [{li: {text: two}}]}}]}}]")
    );
}

#[test]
fn test_document_mode_follows_browser_nesting() {
    let root = html("<a/><b/>", HtmlMode::Document);
    assert_eq!(
        dump(&root, TokenStyle::Shorthand),
        yaml("[{html: {subs: [{head: {}}, {body: {subs: [{a: {subs: [{b: {}}]}}]}}]}}]")
    );
}

#[test]
fn test_whitespace_only_text_is_dropped() {
    let root = html("<div>\n   \n</div>", HtmlMode::Fragment);
    assert_eq!(dump(&root, TokenStyle::Shorthand), yaml("[{div: {}}]"));
}

#[test]
fn test_comments_do_not_appear() {
    let root = html("<div><!-- hidden -->shown</div>", HtmlMode::Fragment);
    assert_eq!(
        dump(&root, TokenStyle::Shorthand),
        yaml("[{div: {text: shown}}]")
    );
}

#[test]
fn test_tree_builder_recovers_malformed_markup() {
    let root = html("<ul><li>one<li>two</ul>", HtmlMode::Fragment);
    assert_eq!(
        dump(&root, TokenStyle::Shorthand),
        yaml("[{ul: {subs: [{li: {text: one}}, {li: {text: two}}]}}]")
    );
}

#[test]
fn test_empty_document_in_fragment_mode() {
    let root = html("", HtmlMode::Fragment);
    assert_eq!(dump(&root, TokenStyle::Shorthand), yaml("[]"));
}
