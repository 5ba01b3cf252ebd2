use assert_cmd::Command;
use predicates::prelude::*;
use saltline::EncodedHash;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("saltline"))
}

fn run() -> String {
    let output = bin().env_remove("RUST_LOG").output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_three_labelled_lines() {
    bin()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0000: "))
        .stdout(predicate::str::contains("\n1111: "))
        .stdout(predicate::str::contains("\n2222: "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn every_line_is_a_well_formed_hash() {
    let stdout = run();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);

    for (line, label) in lines.iter().zip(["0000", "1111", "2222"]) {
        let (got_label, encoded) = line.split_once(": ").unwrap();
        assert_eq!(got_label, label);

        let hash: EncodedHash = encoded.parse().unwrap();
        assert_eq!(hash.to_string(), encoded);
    }
}

#[test]
fn each_run_uses_fresh_salts() {
    let first = run();
    let second = run();

    assert_ne!(first, second);

    let salts: Vec<String> = first
        .lines()
        .map(|l| {
            let (_, encoded) = l.split_once(": ").unwrap();
            encoded.parse::<EncodedHash>().unwrap().salt_b64()
        })
        .collect();
    assert_ne!(salts[0], salts[1]);
    assert_ne!(salts[1], salts[2]);
}

#[test]
fn ignores_extra_arguments() {
    bin()
        .env_remove("RUST_LOG")
        .arg("unused")
        .assert()
        .success()
        .stdout(predicate::str::contains("2222: "));
}

#[test]
fn debug_logging_goes_to_stderr() {
    bin()
        .env("RUST_LOG", "saltline=debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("derived pbkdf2-hmac-sha256 key"))
        .stdout(predicate::str::contains("derived").not());
}
