//! CLI behaviour tests

use predicates::prelude::*;
use std::fs;

use crate::helpers::TestHome;

#[test]
fn render_args_are_transcoded() {
    TestHome::new()
        .cmd()
        .args(["render", "§6Gold", "§lBold"])
        .assert()
        .success()
        .stdout("\x1b[33mGold \x1b[1mBold\x1b[0m\n");
}

#[test]
fn render_no_newline() {
    TestHome::new()
        .cmd()
        .args(["render", "-n", "plain"])
        .assert()
        .success()
        .stdout("plain\x1b[0m");
}

#[test]
fn render_reads_stdin() {
    TestHome::new()
        .cmd()
        .arg("render")
        .write_stdin("§cred\n")
        .assert()
        .success()
        .stdout("\x1b[91mred\x1b[0m\n");
}

#[test]
fn render_reads_file() {
    let home = TestHome::new();
    let input = home.path().join("motd.txt");
    fs::write(&input, "<#00ff00>ok</#00ff00>").unwrap();

    home.cmd()
        .args(["render", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout("\x1b[38;2;0;255;0mok\x1b[0m\n");
}

#[test]
fn render_legacy_flag_collapses_colors() {
    TestHome::new()
        .cmd()
        .args(["render", "--legacy", "<#ff5555>x"])
        .assert()
        .success()
        .stdout("\x1b[91mx\x1b[0m\n");
}

#[test]
fn render_uses_configured_mode() {
    let home = TestHome::new();
    home.write_config("[render]\nmode = \"legacy\"\n");

    home.cmd()
        .args(["render", "<#ff5555>x"])
        .assert()
        .success()
        .stdout("\x1b[91mx\x1b[0m\n");

    home.cmd()
        .args(["render", "--rich", "<#ff5555>x"])
        .assert()
        .success()
        .stdout("\x1b[38;2;255;85;85mx\x1b[0m\n");
}

#[test]
fn render_malformed_escape_fails() {
    TestHome::new()
        .cmd()
        .args(["render", "§xFF0000ABCDEF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed color escape"));
}

#[test]
fn unparsable_markup_renders_quietly() {
    TestHome::new()
        .cmd()
        .args(["render", "<color:nope>§6Gold"])
        .assert()
        .success()
        .stdout("<color:nope>\x1b[33mGold\x1b[0m\n")
        .stderr("");
}

#[test]
fn invalid_config_is_reported() {
    let home = TestHome::new();
    home.write_config("[chroma]\nsaturation = 3.0\n");

    home.cmd()
        .args(["render", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn check_exit_codes() {
    let home = TestHome::new();
    home.cmd().args(["check", "§aHi"]).assert().code(0);
    home.cmd().args(["check", "Hi"]).assert().code(1);
}

#[test]
fn codes_json_is_valid() {
    let output = TestHome::new()
        .cmd()
        .args(["codes", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 22);
    assert_eq!(entries[6]["label"], "gold");
    assert_eq!(entries[6]["ansi"], "\x1b[33m");
}

#[test]
fn average_prints_hex() {
    let home = TestHome::new();
    let image = home.path().join("tile.rgb");
    fs::write(&image, [255, 0, 0, 0, 0, 255]).unwrap();

    home.cmd()
        .arg("average")
        .arg(&image)
        .args(["--width", "2", "--height", "1"])
        .assert()
        .success()
        .stdout("#7f007f\n");
}

#[test]
fn average_wrong_size_fails() {
    let home = TestHome::new();
    let image = home.path().join("tile.rgb");
    fs::write(&image, [1, 2, 3]).unwrap();

    home.cmd()
        .arg("average")
        .arg(&image)
        .args(["--width", "4", "--height", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read 4x4 RGB data"));
}

#[test]
fn average_huge_dimensions_fail_cleanly() {
    let home = TestHome::new();
    let image = home.path().join("tile.rgb");
    fs::write(&image, [1, 2, 3]).unwrap();

    for size in ["200000", "4294967295"] {
        home.cmd()
            .arg("average")
            .arg(&image)
            .args(["--width", size, "--height", size])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read"))
            .stderr(predicate::str::contains("panicked").not());
    }
}

#[test]
fn nearest_prints_sample_name() {
    TestHome::new()
        .cmd()
        .args([
            "nearest",
            "#000000",
            "--sample",
            "minecraft:black_wool=#141519",
            "--sample",
            "minecraft:white_wool=#e9ecec",
        ])
        .assert()
        .success()
        .stdout("minecraft:white_wool\n");
}

#[test]
fn nearest_without_samples_fails() {
    TestHome::new()
        .cmd()
        .args(["nearest", "#000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No samples given"));
}

#[test]
fn chroma_without_text_prints_a_color() {
    TestHome::new()
        .cmd()
        .arg("chroma")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^#[0-9a-f]{6}\n$").unwrap());
}

#[test]
fn chroma_with_text_wraps_in_rgb_directive() {
    TestHome::new()
        .cmd()
        .args(["chroma", "--x", "3", "rainbow"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[38;2;"))
        .stdout(predicate::str::ends_with("rainbow\x1b[0m\n"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    TestHome::new()
        .cmd()
        .args(["-vv", "render", "x"])
        .assert()
        .success()
        .stdout("x\x1b[0m\n")
        .stderr(predicate::str::contains("starting"));
}

#[test]
fn completions_for_bash() {
    TestHome::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mcansi"));
}
