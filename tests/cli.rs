use std::path::Path;
use std::process::{Command, Output};

fn pem_roundtrip(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pem-roundtrip"))
        .args(args)
        .env_remove("PEM_ROUNDTRIP_PATH")
        .env_remove("PEM_ROUNDTRIP_CONFIG")
        .env("PEM_ROUNDTRIP_LOG", "off")
        .output()
        .expect("binary should start")
}

#[test]
fn prints_checkpoints_for_sample_key() {
    let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/sample_key.pem");
    let output = pem_roundtrip(&["roundtrip", sample.to_str().expect("utf-8 path")]);

    assert!(output.status.success());
    let pem = "-----BEGIN KEY-----\nABCD\n-----END KEY-----\n";
    let expected = format!(
        "CheckPt 1\n{pem}\nCheckPt 2\nLS0tLS1CRUdJTiBLRVktLS0tLQpBQkNECi0tLS0tRU5EIEtFWS0tLS0tCg==\nCheckPt 3\n{pem}\n"
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn prints_version() {
    for flag in ["version", "--version", "-version"] {
        let output = pem_roundtrip(&[flag]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            format!("v{}\n", env!("CARGO_PKG_VERSION"))
        );
    }
}

#[test]
fn exits_with_status_two_on_usage_errors() {
    for args in [&["frobnicate"][..], &["decode"], &["encode", "a", "b"]] {
        let output = pem_roundtrip(args);
        assert_eq!(output.status.code(), Some(2), "{args:?}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Commands:"));
    }
}

#[test]
fn exits_with_status_two_on_fatal_errors() {
    let output = pem_roundtrip(&["roundtrip", "/definitely/not/here.pem"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("source file not found"));

    let output = pem_roundtrip(&["decode", "A!B="]);
    assert_eq!(output.status.code(), Some(2));
}
