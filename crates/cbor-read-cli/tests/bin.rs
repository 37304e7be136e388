//! Exit status and output streams of the `cbor-read` binary.

use assert_cmd::Command;
use predicates::prelude::*;

const OWNER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
const OTHER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

fn cbor_read() -> Command {
    let mut cmd = Command::cargo_bin("cbor-read").expect("cbor-read binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn success_prints_receipt_on_stdout_and_exits_zero() {
    cbor_read()
        .args(["--owner", OWNER, "0x421312"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"event\":\"ParsedBytes32\""))
        .stdout(predicate::str::contains("\"offset\":1"))
        .stdout(predicate::str::contains("\"length\":2"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn revert_goes_to_stderr_and_exits_one() {
    cbor_read()
        .args(["--owner", OWNER, "0x4213"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "revert: Must read within bounds of cbor",
        ));
}

#[test]
fn mixed_calls_split_streams_and_exit_one() {
    cbor_read()
        .args(["--owner", OWNER, "0x421312", "0x42131200"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ParsedBytes32"))
        .stderr(predicate::str::contains("revert: Must read entire cbor"));
}

#[test]
fn non_owner_caller_reverts() {
    cbor_read()
        .args(["--owner", OWNER, "--caller", OTHER, "0x421312"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("revert: You aren't the owner"));
}

#[test]
fn missing_owner_exits_two() {
    cbor_read()
        .arg("0x421312")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn bad_hex_exits_two() {
    cbor_read()
        .args(["--owner", OWNER, "zz"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_config_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    cbor_read()
        .args(["--config", path.to_str().unwrap(), "0x421312"])
        .assert()
        .code(2);
}

#[test]
fn config_file_sets_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reader.toml");
    std::fs::write(&path, format!("owner = \"{OWNER}\"\nlabel = \"TestFixture\"\n")).unwrap();
    cbor_read()
        .args(["--config", path.to_str().unwrap(), "0x4213"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "revert: TestFixture Must read within bounds of cbor",
        ));
}
