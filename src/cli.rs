use crate::error::InfoError;
use crate::field::TruncationPolicy;
use crate::loader::load;
use crate::record::{decode, Record};
use crate::report::{write_report, OutputFormat};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ReaderArgs {
    /// Input file (defaults to the record's standard file name)
    pub path: Option<PathBuf>,

    /// Fail on a truncated record instead of reading missing bytes as zero
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub policy: TruncationPolicy,
    pub format: OutputFormat,
}

impl Config {
    pub fn for_record<R: Record>() -> Self {
        Self {
            path: PathBuf::from(R::DEFAULT_FILE),
            policy: TruncationPolicy::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn from_args<R: Record>(args: &ReaderArgs) -> Self {
        Self {
            path: args
                .path
                .clone()
                .unwrap_or_else(|| PathBuf::from(R::DEFAULT_FILE)),
            policy: if args.strict {
                TruncationPolicy::Reject
            } else {
                TruncationPolicy::ZeroPad
            },
            format: args.format,
        }
    }
}

/// Load, decode and report one record. Nothing reaches `out` unless every
/// field decoded.
pub fn run<R: Record, W: Write>(config: &Config, out: &mut W) -> Result<R, InfoError> {
    let data = load(&config.path)?;
    let record = decode::<R>(&data, config.policy)?;
    write_report(out, &record, config.format)?;
    Ok(record)
}

fn parse_args<R: Record>() -> ReaderArgs {
    let matches = ReaderArgs::command()
        .about(format!(
            "Print the fields of a {} file (default: {})",
            R::KIND,
            R::DEFAULT_FILE
        ))
        .get_matches();
    ReaderArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

pub fn main_for<R: Record>() -> ExitCode {
    let args = parse_args::<R>();
    init_logging(args.verbose);

    let config = Config::from_args::<R>(&args);
    tracing::debug!(?config, record = R::KIND, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run::<R, _>(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CrashInfo, EventInfo};

    #[test]
    fn test_default_paths() {
        let args = ReaderArgs::parse_from(["readcrashinfo"]);
        assert_eq!(Config::from_args::<CrashInfo>(&args), Config::for_record::<CrashInfo>());
        assert_eq!(Config::for_record::<CrashInfo>().path, PathBuf::from("crashinfo.dat"));
        assert_eq!(Config::from_args::<EventInfo>(&args).path, PathBuf::from("eventinfo.dat"));
    }

    #[test]
    fn test_flags() {
        let args = ReaderArgs::parse_from(["readeventinfo", "--strict", "-f", "json", "x.dat"]);
        let config = Config::from_args::<EventInfo>(&args);
        assert_eq!(config.path, PathBuf::from("x.dat"));
        assert_eq!(config.policy, TruncationPolicy::Reject);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eventinfo.dat");
        std::fs::write(&path, [0x0A, 0, 0, 0xFF, 0x20, 0, 0, 0xFF, 0x03, 0, 0, 0]).unwrap();

        let config = Config { path, ..Config::for_record::<EventInfo>() };
        let mut out = Vec::new();
        let info: EventInfo = run(&config, &mut out).unwrap();
        assert_eq!(info, EventInfo { records: 10, rsize: 32, rtype: 3 });
        assert_eq!(out, b"10 32 3\n");
    }

    #[test]
    fn test_run_missing_file_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            path: dir.path().join("crashinfo.dat"),
            ..Config::for_record::<CrashInfo>()
        };
        let mut out = Vec::new();
        let err = run::<CrashInfo, _>(&config, &mut out).unwrap_err();
        assert!(matches!(err, InfoError::Open { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_strict_truncated_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crashinfo.dat");
        std::fs::write(&path, [0x64, 0x00, 0x00, 0x00, 0x02]).unwrap();

        let config = Config {
            path,
            policy: TruncationPolicy::Reject,
            format: OutputFormat::Plain,
        };
        let mut out = Vec::new();
        let err = run::<CrashInfo, _>(&config, &mut out).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
    }
}
