//! Unit tests for the transcoder through the public API

use mcansi::markup::Precision;
use mcansi::{to_ansi, StyleCode, TranscodeError, Transcoder};
use proptest::prelude::*;

use crate::helpers::{parse_ansi, sgr_params, visible_text, Segment};

const RESET: &str = "\x1b[0m";

#[test]
fn gold_then_bold_parses_into_expected_segments() {
    let out = to_ansi("§6Gold §lBold", false).unwrap();
    assert_eq!(
        parse_ansi(&out),
        vec![
            Segment::Sgr(vec![33]),
            Segment::Text("Gold ".to_string()),
            Segment::Sgr(vec![1]),
            Segment::Text("Bold".to_string()),
            Segment::Sgr(vec![0]),
        ]
    );
}

#[test]
fn every_code_maps_to_its_directive_in_both_cases() {
    for code in StyleCode::ALL {
        let expected = format!("{}x{}", code.directive(), RESET);
        let lower = format!("§{}x", code.discriminator());
        let upper = format!("§{}x", code.discriminator().to_ascii_uppercase());
        assert_eq!(to_ansi(&lower, false).unwrap(), expected, "{}", lower);
        assert_eq!(to_ansi(&upper, false).unwrap(), expected, "{}", upper);
    }
}

#[test]
fn full_table_directive_values() {
    let text: String = StyleCode::ALL.iter().map(|c| c.token()).collect();
    let params = sgr_params(&to_ansi(&text, false).unwrap());
    assert_eq!(
        params,
        vec![
            vec![30],
            vec![34],
            vec![32],
            vec![36],
            vec![31],
            vec![35],
            vec![33],
            vec![90],
            vec![90],
            vec![94],
            vec![92],
            vec![96],
            vec![91],
            vec![35],
            vec![93],
            vec![37],
            vec![7],
            vec![1],
            vec![9],
            vec![4],
            vec![3],
            vec![0],
            vec![0],
        ]
    );
}

#[test]
fn non_ascii_lookalike_discriminator_is_kept() {
    let text = "\u{00A7}\u{212A}elvin";
    assert_eq!(to_ansi(text, false).unwrap(), format!("{}{}", text, RESET));
    assert!(!mcansi::contains_legacy_codes(text));
}

#[test]
fn hex_escape_is_replaced_in_place() {
    let out = to_ansi("before §x§f§f§0§0§0§0red after", false).unwrap();
    assert_eq!(out, "before \x1b[38;2;255;0;0mred after\x1b[0m");
}

#[test]
fn short_hex_form_degrades_to_reset_code() {
    // Twelve characters are required after §x; "ff8800orange" has only six hex digits
    let out = to_ansi("§xff8800orange", false).unwrap();
    assert_eq!(out, "\x1b[0mff8800orange\x1b[0m");
}

#[test]
fn adjacent_escapes_do_not_interfere() {
    let out = to_ansi("§a§l§x§0§0§f§f§0§0x", false).unwrap();
    assert_eq!(
        sgr_params(&out),
        vec![vec![92], vec![1], vec![38, 2, 0, 255, 0], vec![0]]
    );
    assert_eq!(visible_text(&out), "x");
}

#[test]
fn nested_markup_is_transcoded() {
    let out = to_ansi("<gold>Title <bold>loud</bold> quiet</gold> plain", false).unwrap();
    assert_eq!(
        out,
        "\x1b[33mTitle \x1b[1mloud\x1b[33m quiet\x1b[0m plain\x1b[0m"
    );
}

#[test]
fn markup_and_legacy_codes_mix() {
    let out = to_ansi("<red>alert</red> §7(info)", false).unwrap();
    assert_eq!(out, "\x1b[91malert\x1b[0m \x1b[90m(info)\x1b[0m");
}

#[test]
fn escaped_bracket_stays_literal() {
    let out = to_ansi(r"\<red> is a tag", false).unwrap();
    assert_eq!(out, "<red> is a tag\x1b[0m");
}

#[test]
fn unknown_tag_stays_literal() {
    let out = to_ansi("<sparkle>hi</sparkle>", false).unwrap();
    assert_eq!(out, "<sparkle>hi</sparkle>\x1b[0m");
}

#[test]
fn legacy_mode_collapses_hex_tag() {
    let out = Transcoder::new(Precision::PaletteNearest)
        .transcode("<#ff5555>warm")
        .unwrap();
    assert_eq!(out, "\x1b[91mwarm\x1b[0m");
}

#[test]
fn malformed_markup_falls_back_and_terminates() {
    let out = to_ansi("<bold:maybe>§cx", false).unwrap();
    assert_eq!(out, "<bold:maybe>\x1b[91mx\x1b[0m");
}

#[test]
fn extra_retries_do_not_change_fallback_output() {
    let text = "<c>§9blue";
    let once = Transcoder::default().transcode(text).unwrap();
    let many = Transcoder::default().with_max_retries(5).transcode(text).unwrap();
    assert_eq!(once, many);
    assert!(once.ends_with("blue\x1b[0m"));
}

#[test]
fn malformed_hex_escape_reports_token() {
    let err = to_ansi("§x§f§f§0§0§0§§", false).unwrap_err();
    assert_eq!(
        err,
        TranscodeError::MalformedColorEscape {
            escape: "§x§f§f§0§0§0§§".to_string()
        }
    );
}

#[test]
fn transcoder_is_shareable_across_threads() {
    let transcoder = Transcoder::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || transcoder.transcode(&format!("§{}n", i)).unwrap())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert!(out.ends_with("n\x1b[0m"), "thread {}", i);
    }
}

proptest! {
    #[test]
    fn plain_text_gets_exactly_one_reset(text in "[A-Za-z0-9 .,!?:;()'\"-]{0,64}") {
        let out = to_ansi(&text, false).unwrap();
        prop_assert_eq!(out, format!("{}{}", text, RESET));
    }

    #[test]
    fn any_rgb_hex_escape_round_trips(red: u8, green: u8, blue: u8) {
        let digits = format!("{:02x}{:02x}{:02x}", red, green, blue);
        let escape: String = std::iter::once("§x".to_string())
            .chain(digits.chars().map(|c| format!("§{}", c)))
            .collect();
        let out = to_ansi(&format!("{}z", escape), false).unwrap();
        let params = sgr_params(&out);
        prop_assert_eq!(
            params,
            vec![
                vec![38, 2, u16::from(red), u16::from(green), u16::from(blue)],
                vec![0],
            ]
        );
        prop_assert_eq!(visible_text(&out), "z");
    }

    #[test]
    fn any_rgb_markup_tag_round_trips(red: u8, green: u8, blue: u8) {
        let text = format!("<#{:02X}{:02X}{:02X}>z", red, green, blue);
        let out = to_ansi(&text, false).unwrap();
        prop_assert_eq!(
            sgr_params(&out)[0].clone(),
            vec![38, 2, u16::from(red), u16::from(green), u16::from(blue)]
        );
    }

    #[test]
    fn retranscoding_only_appends_one_reset(
        codes in proptest::collection::vec(0usize..22, 0..8),
        word in "[a-z]{1,8}",
    ) {
        let text: String = codes
            .iter()
            .map(|&i| format!("{}{}", StyleCode::ALL[i].token(), word))
            .collect();
        let once = to_ansi(&text, false).unwrap();
        let twice = to_ansi(&once, false).unwrap();
        prop_assert_eq!(twice, format!("{}{}", once, RESET));
    }

    #[test]
    fn output_always_ends_with_reset(text in "\\PC{0,48}") {
        if let Ok(out) = to_ansi(&text, false) {
            prop_assert!(out.ends_with(RESET));
        }
    }
}
