//! ased-report: summarize the shape enumeration debug trace
//!
//! Reads the output of an AFK build with `AFK_SHAPE_ENUM_DEBUG` from the
//! named files (or standard input when none are given) and prints a
//! two-section report of entity and shape-cell enqueue activity.
//!
//! Run with: cargo run --bin ased-report -- trace.log
//!       or: some-engine-run | cargo run --bin ased-report

use std::fs::File;
use std::io::{self, BufReader};

use afk_trace::{summarize, TraceError, TraceLog};

const USAGE: &str = "\
Usage: ased-report [--json] [FILE]...

Reads an AFK shape enumeration debug trace from the named files, or from
standard input when no files are given, and prints a report of entity
and shape-cell enqueue activity per frame.

Options:
    --json    emit the report summary as JSON instead of text
    --help    print this message";

#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("failed to encode summary as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct Options {
    json: bool,
    help: bool,
    inputs: Vec<String>,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut options = Options::default();
        for arg in args {
            match arg.as_str() {
                "--json" => options.json = true,
                "--help" | "-h" => options.help = true,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(format!("unknown option: {}", flag));
                }
                // Positional argument: an input file ("-" for stdin).
                _ => options.inputs.push(arg),
            }
        }
        Ok(options)
    }
}

fn run(options: &Options) -> Result<(), ToolError> {
    let mut log = TraceLog::new();

    if options.inputs.is_empty() {
        let stdin = io::stdin();
        log.read_from("<stdin>", stdin.lock())?;
    } else {
        for path in &options.inputs {
            if path == "-" {
                let stdin = io::stdin();
                log.read_from("<stdin>", stdin.lock())?;
                continue;
            }
            let file = File::open(path).map_err(|e| TraceError::Input {
                path: path.clone(),
                source: e,
            })?;
            log.read_from(path, BufReader::new(file))?;
        }
    }

    let summary = summarize(&log);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if options.help {
        println!("{}", USAGE);
        return;
    }

    if let Err(e) = run(&options) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
