//! Command line front end. Every failure is fatal: it is reported on stderr
//! and the process exits with status 2.

use std::env;
use std::fmt::Display;
use std::process::ExitCode;

use pem_roundtrip::cli::{self, parse_args, render_checkpoints, Command, FAILURE_STATUS};
use pem_roundtrip::codec::secret::{encode_pem_secret, pem_from_secret_json};
use pem_roundtrip::codec::text::{decode, encode};
use pem_roundtrip::config::RoundTripConfig;
use pem_roundtrip::logging::setup_logger;
use pem_roundtrip::roundtrip::run;
use pem_roundtrip::source::read_text;

fn print_usage() -> ExitCode {
    eprintln!("{}", cli::USAGE);
    ExitCode::from(FAILURE_STATUS)
}

fn fail(context: &str, err: impl Display) -> ExitCode {
    log::error!("{context}: {err}");
    eprintln!("ERROR: {context}: {err}");
    ExitCode::from(FAILURE_STATUS)
}

fn roundtrip(explicit: Option<&str>) -> ExitCode {
    let config = match RoundTripConfig::resolve(explicit) {
        Ok(cfg) => cfg,
        Err(err) => return fail("cannot resolve input path", err),
    };
    match run(&config.path) {
        Ok(result) => {
            print!("{}", render_checkpoints(&result));
            ExitCode::SUCCESS
        }
        Err(err) => fail("round trip failed", err),
    }
}

fn main() -> ExitCode {
    setup_logger();
    let args: Vec<String> = env::args().collect();
    let Some(command) = parse_args(&args) else {
        return print_usage();
    };

    match command {
        Command::RoundTrip(path) => roundtrip(path.as_deref()),
        Command::Encode(path) => match read_text(&path) {
            Ok(text) => {
                println!("{}", encode(&text));
                ExitCode::SUCCESS
            }
            Err(err) => fail("cannot read input", err),
        },
        Command::Decode(encoded) => match decode(encoded.trim()) {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(err) => fail("cannot decode input", err),
        },
        Command::EncodeSecret(path) => {
            let pem = match read_text(&path) {
                Ok(text) => text,
                Err(err) => return fail("cannot read input", err),
            };
            match encode_pem_secret(&pem) {
                Ok(document) => {
                    println!("{document}");
                    ExitCode::SUCCESS
                }
                Err(err) => fail("cannot build secret document", err),
            }
        }
        Command::DecodeSecret(document) => match pem_from_secret_json(&document) {
            Ok(pem) => {
                print!("{pem}");
                ExitCode::SUCCESS
            }
            Err(err) => fail("cannot get secret value", err),
        },
        Command::Version => {
            println!("{}", cli::version_line());
            ExitCode::SUCCESS
        }
    }
}
