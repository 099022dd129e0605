//! Explicit dumps of HTML input.

use crate::common::{dump, fixture, html, to_json, yaml};
use insta::assert_snapshot;
use tagdump_babel::formats::HtmlMode;
use tagdump_babel::TokenStyle;

#[test]
fn test_kitchensink() {
    let root = html(&fixture("kitchensink.html"), HtmlMode::Document);
    let json = to_json(&dump(&root, TokenStyle::Explicit));

    assert_snapshot!(json, @r#"
    [
      {
        "_name": "html",
        "attribs": {
          "lang": "en"
        },
        "subs": [
          {
            "_name": "head",
            "subs": [
              {
                "_name": "title"
              }
            ]
          },
          {
            "_name": "body",
            "subs": [
              {
                "_name": "ul",
                "attribs": {
                  "class": "nav"
                },
                "subs": [
                  {
                    "_name": "li",
                    "subs": [
                      {
                        "_name": "a",
                        "attribs": {
                          "href": "/"
                        }
                      }
                    ]
                  },
                  {
                    "_name": "li",
                    "subs": [
                      {
                        "_name": "a",
                        "attribs": {
                          "href": "/about",
                          "title": "About us"
                        }
                      }
                    ]
                  }
                ]
              },
              {
                "_name": "p",
                "subs": [
                  {
                    "_name": "em"
                  }
                ]
              },
              {
                "_name": "img",
                "attribs": {
                  "src": "x.png",
                  "alt": "logo"
                }
              }
            ]
          }
        ]
      }
    ]
    "#);
}

#[test]
fn test_text_is_not_emitted() {
    let root = html("<h1>Title</h1>", HtmlMode::Fragment);
    assert_eq!(dump(&root, TokenStyle::Explicit), yaml("[{_name: h1}]"));
}

#[test]
fn test_attribute_order_matches_shorthand() {
    let root = html(r#"<img src="x" alt="y"/>"#, HtmlMode::Source);

    let explicit = dump(&root, TokenStyle::Explicit);
    let shorthand = dump(&root, TokenStyle::Shorthand);
    let explicit_attribs = to_json(&explicit[0]["attribs"]);
    let shorthand_attribs = to_json(&shorthand[0]["img"]["attribs"]);

    assert_eq!(explicit_attribs, shorthand_attribs);
    assert!(explicit_attribs.find("src").unwrap() < explicit_attribs.find("alt").unwrap());
}
