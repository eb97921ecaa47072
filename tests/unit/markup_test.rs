//! Unit tests for the markup dialect resolver

use mcansi::markup::{self, Node, ParseError, Precision, Resolution, StyleChange};
use mcansi::markup::{Decoration, MarkupColor};
use mcansi::{NamedColor, RgbColor};

fn legacy(text: &str) -> String {
    match markup::resolve(text, Precision::ExactRgb) {
        Resolution::Rewritten(text) => text,
        Resolution::Unresolved(text) => panic!("unexpected fallback for {:?}", text),
    }
}

#[test]
fn resolve_rewrites_tags_into_legacy_codes() {
    insta::assert_snapshot!(
        legacy("<dark_aqua>sea <u>deep</u></dark_aqua> <st>old</st>"),
        @"§3sea §ndeep§r §mold"
    );
}

#[test]
fn resolve_keeps_exact_colors_in_rich_mode() {
    insta::assert_snapshot!(
        legacy("<color:'#C0FFEE'>mint<b>!</b>"),
        @"§x§c§0§f§f§e§emint§l!"
    );
}

#[test]
fn resolve_reports_unresolved_with_original_text() {
    let text = "<color:chartreuse>x";
    let resolution = markup::resolve(text, Precision::ExactRgb);
    assert!(resolution.needs_retry());
    assert_eq!(resolution.text(), text);
}

#[test]
fn newline_and_reset_tags() {
    assert_eq!(legacy("<red>a<br>b<reset>c"), "§ca\nb§rc");
}

#[test]
fn grey_spellings_are_equivalent() {
    assert_eq!(legacy("<gray>x"), legacy("<grey>x"));
    assert_eq!(legacy("<dark_gray>x"), legacy("<dark_grey>x"));
}

#[test]
fn parse_builds_nested_tree() {
    let doc = markup::parse("<red>a<bold>b</bold></red>c").unwrap();
    assert_eq!(
        doc.nodes,
        vec![
            Node::Styled {
                change: StyleChange::Color(MarkupColor::Named(NamedColor::Red)),
                children: vec![
                    Node::Text("a".to_string()),
                    Node::Styled {
                        change: StyleChange::Decoration(Decoration::Bold, true),
                        children: vec![Node::Text("b".to_string())],
                    },
                ],
            },
            Node::Text("c".to_string()),
        ]
    );
}

#[test]
fn parse_errors_name_the_problem() {
    assert!(matches!(
        markup::parse("<color>x"),
        Err(ParseError::MissingColor { .. })
    ));
    assert!(matches!(
        markup::parse("<c:nope>x"),
        Err(ParseError::UnknownColor { .. })
    ));
    assert!(matches!(
        markup::parse("<#12345>x"),
        Err(ParseError::InvalidHexColor { .. })
    ));
    assert!(matches!(
        markup::parse("<i:sometimes>x"),
        Err(ParseError::InvalidFlag { .. })
    ));
}

#[test]
fn palette_mode_maps_to_nearest_named_color() {
    let doc = markup::parse("<#202020>x").unwrap();
    assert_eq!(markup::serialize(&doc, Precision::PaletteNearest), "§0x");
    assert_eq!(
        NamedColor::nearest_to(RgbColor::new(0x20, 0x20, 0x20)),
        NamedColor::Black
    );
}
