//! Argument parsing and output rendering for the `pem-roundtrip` binary.

use crate::roundtrip::RoundTrip;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Exit status for usage errors and every fatal failure.
pub const FAILURE_STATUS: u8 = 2;

pub const USAGE: &str = "Commands:\n  roundtrip [path]\n  encode <path>\n  decode <base64>\n  encode-secret <path>\n  decode-secret <json-document>\n  version";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RoundTrip(Option<String>),
    Encode(String),
    Decode(String),
    EncodeSecret(String),
    DecodeSecret(String),
    Version,
}

/// Parses the full argument list, program name included. `None` means the
/// arguments do not form a command and usage should be shown.
pub fn parse_args(args: &[String]) -> Option<Command> {
    let Some(command) = args.get(1) else {
        return Some(Command::RoundTrip(None));
    };
    let operand = || match args.len() {
        3 => Some(args[2].clone()),
        _ => None,
    };

    match command.as_str() {
        "roundtrip" => match args.len() {
            2 => Some(Command::RoundTrip(None)),
            3 => Some(Command::RoundTrip(Some(args[2].clone()))),
            _ => None,
        },
        "encode" => operand().map(Command::Encode),
        "decode" => operand().map(Command::Decode),
        "encode-secret" => operand().map(Command::EncodeSecret),
        "decode-secret" => operand().map(Command::DecodeSecret),
        "version" | "--version" | "-version" if args.len() == 2 => Some(Command::Version),
        _ => None,
    }
}

/// Formats the three checkpoints the way the `roundtrip` command prints them.
pub fn render_checkpoints(result: &RoundTrip) -> String {
    format!(
        "CheckPt 1\n{}\nCheckPt 2\n{}\nCheckPt 3\n{}\n",
        result.source, result.encoded, result.recovered
    )
}

pub fn version_line() -> String {
    format!("v{VERSION}")
}

#[cfg(test)]
mod tests {
    use super::{parse_args, render_checkpoints, version_line, Command};
    use crate::roundtrip::RoundTrip;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("pem-roundtrip")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn defaults_to_roundtrip() {
        assert_eq!(parse_args(&args(&[])), Some(Command::RoundTrip(None)));
        assert_eq!(parse_args(&args(&["roundtrip"])), Some(Command::RoundTrip(None)));
        assert_eq!(
            parse_args(&args(&["roundtrip", "key.pem"])),
            Some(Command::RoundTrip(Some("key.pem".to_string())))
        );
    }

    #[test]
    fn parses_single_operand_commands() {
        assert_eq!(
            parse_args(&args(&["decode", "YWJj"])),
            Some(Command::Decode("YWJj".to_string()))
        );
        assert_eq!(
            parse_args(&args(&["encode-secret", "key.pem"])),
            Some(Command::EncodeSecret("key.pem".to_string()))
        );
    }

    #[test]
    fn accepts_every_version_spelling() {
        for flag in ["version", "--version", "-version"] {
            assert_eq!(parse_args(&args(&[flag])), Some(Command::Version));
        }
        assert_eq!(version_line(), format!("v{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_commands_and_wrong_arity() {
        for bad in [
            &["frobnicate"][..],
            &["encode"],
            &["decode", "YQ==", "extra"],
            &["roundtrip", "a.pem", "b.pem"],
            &["version", "now"],
        ] {
            assert_eq!(parse_args(&args(bad)), None, "{bad:?}");
        }
    }

    #[test]
    fn renders_checkpoint_headers() {
        let result = RoundTrip::from_text("abc".to_string()).expect("valid text");
        assert_eq!(
            render_checkpoints(&result),
            "CheckPt 1\nabc\nCheckPt 2\nYWJj\nCheckPt 3\nabc\n"
        );
    }
}
