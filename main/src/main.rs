use std::{path::PathBuf, process::ExitCode};

use clap::Parser as _;
use flat_json::{Document, Error, Pairing, ParseOptions, ParserErr, load_file};
use tracing_subscriber::EnvFilter;

/// Reads a flat object file and prints its fields.
#[derive(clap::Parser, Debug)]
#[command(name = "flatjson", version)]
struct Cli {
    /// File holding a single flat object
    path: PathBuf,

    /// Fail when field names and values cannot all be paired
    #[arg(long)]
    strict: bool,

    /// Log more detail to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> ParseOptions {
        let pairing = if self.strict {
            Pairing::Strict
        } else {
            Pairing::Truncate
        };

        ParseOptions { pairing }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over the -v flags when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_document(document: &Document) {
    let mut entries: Vec<_> = document.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (name, value) in entries {
        println!("{name}: {value}");
    }
}

fn diagnostic(err: &ParserErr) -> String {
    format!(
        "Invalid document at byte offset {} (line {}): {}",
        err.offset, err.line, err.kind
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.options();
    tracing::debug!(path = %cli.path.display(), ?options, "loading document");

    match load_file(&cli.path, options) {
        Ok(document) => {
            print_document(&document);
            ExitCode::SUCCESS
        }
        Err(Error::Parse(err)) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("  caused by: {source}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_strict_flag() {
        let cli = Cli::try_parse_from(["flatjson", "--strict", "doc.json"]).unwrap();
        assert_eq!(Pairing::Strict, cli.options().pairing);

        let cli = Cli::try_parse_from(["flatjson", "-vv", "doc.json"]).unwrap();
        assert_eq!(Pairing::Truncate, cli.options().pairing);
        assert_eq!(2, cli.verbose);
    }

    #[test]
    fn test_diagnostic() {
        let err = flat_json::Parser::parse("{\"a\": 1,\n\"flag\": true}").unwrap_err();
        assert_eq!(
            "Invalid document at byte offset 17 (line 2): unrecognized value start",
            diagnostic(&err)
        );
    }

    #[test]
    fn test_missing_path() {
        let err = Cli::try_parse_from(["flatjson"]).unwrap_err();
        assert_eq!(clap::error::ErrorKind::MissingRequiredArgument, err.kind());
    }
}
