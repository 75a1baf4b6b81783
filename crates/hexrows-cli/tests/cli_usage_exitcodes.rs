use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn missing_argument_exits_2_with_usage() {
    let mut cmd = cargo_bin_cmd!("hexrows");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn width_zero_exits_2() {
    let mut cmd = cargo_bin_cmd!("hexrows");
    cmd.args(["--width", "0", "0001020304050607"]);

    cmd.assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn strict_odd_length_exits_2_and_prints_nothing() {
    let mut cmd = cargo_bin_cmd!("hexrows");
    cmd.args(["--strict", "abc"]);

    cmd.assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("odd length"));
}

#[test]
fn strict_non_hex_character_exits_2() {
    let mut cmd = cargo_bin_cmd!("hexrows");
    cmd.args(["--strict", "00zz000000000000"]);

    cmd.assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid hex character 'z' at index 2"));
}

#[test]
fn strict_well_formed_input_formats_normally() {
    let mut cmd = cargo_bin_cmd!("hexrows");
    cmd.args(["--strict", "0001020304050607"]);

    cmd.assert()
        .success()
        .code(0)
        .stdout("0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n");
}

#[test]
fn without_strict_malformed_input_passes_through() {
    let mut cmd = cargo_bin_cmd!("hexrows");
    cmd.arg("zz01020304050607");

    cmd.assert()
        .success()
        .stdout("0xzz, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n");
}
